use super::state::{FetchTicket, PageState, Settled};
use crate::{
    api::{ApiError, EnquiryPage},
    router::AppRoute,
    state::session::Session,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Ignored,
    /// The session was dropped; the view must move to this route.
    Evicted(AppRoute),
}

/// Settles a page fetch. Any failure of the listing call ends the session.
pub fn settle_fetch(
    state: &mut PageState,
    session: &Session,
    ticket: FetchTicket,
    result: Result<EnquiryPage, ApiError>,
) -> FetchOutcome {
    let failure = result.as_ref().err().map(|err| (err.code.clone(), err.status));
    match state.settle(ticket, result) {
        Settled::Loaded => {
            log::info!(
                "Loaded enquiries page {} of {}",
                state.current_page,
                state.total_pages()
            );
            FetchOutcome::Loaded
        }
        Settled::Stale => FetchOutcome::Ignored,
        Settled::Failed => {
            if let Some((code, status)) = failure {
                log::warn!(
                    "Listing page {} failed ({}, status {:?}); ending admin session",
                    ticket.page,
                    code,
                    status
                );
            }
            session.evict();
            FetchOutcome::Evicted(AppRoute::Login)
        }
    }
}

pub fn logout(session: &Session) -> AppRoute {
    session.evict();
    log::info!("Admin logged out");
    AppRoute::Login
}
