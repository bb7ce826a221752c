pub mod download;
pub mod navigation;
pub mod storage;

pub use download::trigger_blob_download;
pub use navigation::{alert, redirect_to};
