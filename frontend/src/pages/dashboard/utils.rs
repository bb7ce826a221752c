use crate::api::Enquiry;

/// Page-local search over the rows already loaded. Matches the trimmed query,
/// ignoring case, against name, mobile, email and the decimal id.
pub fn filter_enquiries(items: &[Enquiry], query: &str) -> Vec<Enquiry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|e| matches_query(e, &needle))
        .cloned()
        .collect()
}

fn matches_query(enquiry: &Enquiry, needle: &str) -> bool {
    [
        enquiry.name.as_str(),
        enquiry.mobile.as_str(),
        enquiry.email.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
        || enquiry.id.to_string().contains(needle)
}

pub fn format_created_at(enquiry: &Enquiry) -> String {
    enquiry
        .created_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn showing_summary(visible: usize, loaded: usize) -> String {
    format!("Showing {} of {} on this page", visible, loaded)
}
