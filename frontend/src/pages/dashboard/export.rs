use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Excel,
    Pdf,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Excel => "xlsx",
            ExportKind::Pdf => "pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportKind::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportKind::Pdf => "application/pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Excel => "Export Excel",
            ExportKind::Pdf => "Export PDF",
        }
    }
}

/// `Enquiries_<YYYY-MM-DD>.<ext>`; the date is the local calendar day of the click.
pub fn export_filename(kind: ExportKind, day: NaiveDate) -> String {
    format!("Enquiries_{}.{}", day.format("%Y-%m-%d"), kind.extension())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A downloaded export ready to be saved by the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn new(kind: ExportKind, day: NaiveDate, bytes: Vec<u8>) -> Self {
        Self {
            filename: export_filename(kind, day),
            mime_type: kind.mime_type(),
            bytes,
        }
    }
}
