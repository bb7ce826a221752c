#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Enquiry};
    use crate::state::session::{MemorySlot, Session};
    use chrono::{TimeZone, Utc};
    use leptos::*;
    use std::rc::Rc;

    pub fn enquiry(id: i64, name: &str, mobile: &str, email: &str) -> Enquiry {
        Enquiry {
            id,
            name: name.into(),
            mobile: mobile.into(),
            email: email.into(),
            created_at: Utc
                .with_ymd_and_hms(2025, 2, 10, 8, 15, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    pub fn sample_enquiries() -> Vec<Enquiry> {
        vec![
            enquiry(7, "Asha Rao", "9000000001", "asha@example.com"),
            enquiry(42, "Bala Iyer", "9000000002", "bala@example.com"),
            enquiry(108, "Chitra", "9842000003", "chitra@mail.test"),
        ]
    }

    /// Provides an `ApiClient` plus a session backed by memory storage, sharing
    /// the client's credential holder.
    pub fn provide_memory_session_with_client(
        api: ApiClient,
        token: Option<&str>,
    ) -> (MemorySlot, Session) {
        let slot = token.map(MemorySlot::with_token).unwrap_or_default();
        let session = Session::new(Rc::new(slot.clone()), api.credentials().clone());
        provide_context(api);
        provide_context(session.clone());
        (slot, session)
    }

    pub fn provide_memory_session(token: Option<&str>) -> (MemorySlot, Session) {
        provide_memory_session_with_client(ApiClient::new_with_base_url("http://unused.test/api"), token)
    }
}
