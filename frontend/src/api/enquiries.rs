use super::{
    client::ApiClient,
    types::{ApiError, EnquiryPage, NewEnquiry},
};

impl ApiClient {
    pub async fn submit_enquiry(&self, enquiry: &NewEnquiry) -> Result<(), ApiError> {
        self.post_json_discard("/enquiries/", enquiry).await
    }

    pub async fn list_enquiries(&self, page: u32) -> Result<EnquiryPage, ApiError> {
        self.get_json("/admin/enquiries/", &[("page", page.to_string())])
            .await
    }

    pub async fn export_excel(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes("/admin/enquiries/export/excel/").await
    }

    pub async fn export_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes("/admin/enquiries/export/pdf/").await
    }
}
