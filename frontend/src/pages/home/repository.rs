use crate::api::{ApiClient, ApiError, NewEnquiry};
use std::rc::Rc;

#[derive(Clone)]
pub struct EnquiryRepository {
    client: Rc<ApiClient>,
}

impl EnquiryRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, enquiry: &NewEnquiry) -> Result<(), ApiError> {
        self.client.submit_enquiry(enquiry).await
    }
}
