use super::export::ExportKind;
use crate::api::{ApiClient, ApiError, EnquiryPage};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_page(&self, page: u32) -> Result<EnquiryPage, ApiError> {
        self.client.list_enquiries(page).await
    }

    pub async fn export(&self, kind: ExportKind) -> Result<Vec<u8>, ApiError> {
        match kind {
            ExportKind::Excel => self.client.export_excel().await,
            ExportKind::Pdf => self.client.export_pdf().await,
        }
    }
}
