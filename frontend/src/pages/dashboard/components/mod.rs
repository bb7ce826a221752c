pub mod pagination;
pub mod table;
pub mod toolbar;

pub use pagination::PaginationControls;
pub use table::EnquiryTable;
pub use toolbar::DashboardToolbar;
