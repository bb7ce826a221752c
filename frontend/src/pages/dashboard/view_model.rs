use super::{
    controller::{self, FetchOutcome},
    export::{today, ExportFile, ExportKind},
    repository::DashboardRepository,
    state::{FetchTicket, PageState},
    utils::filter_enquiries,
};
use crate::{
    api::{ApiClient, ApiError, Enquiry},
    state::session::{use_session, Session},
    utils::{alert, navigation, trigger_blob_download},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub page: RwSignal<PageState>,
    pub search: RwSignal<String>,
    pub visible: Memo<Vec<Enquiry>>,
    pub fetch_action: Action<FetchTicket, FetchOutcome>,
    pub export_action: Action<ExportKind, Result<ExportFile, ApiError>>,
    session: StoredValue<Session>,
}

impl DashboardViewModel {
    /// Mount step: loads page 1 with whatever token the session holds.
    pub fn start(&self) -> bool {
        self.request_page(1)
    }

    /// Requests page `n`. Returns false when the request was not issued.
    pub fn request_page(&self, n: u32) -> bool {
        match self.page.try_update(|state| state.begin_fetch(n)).flatten() {
            Some(ticket) => {
                self.fetch_action.dispatch(ticket);
                true
            }
            None => false,
        }
    }

    pub fn next_page(&self) -> bool {
        let current = self.page.with_untracked(|s| s.current_page);
        self.request_page(current.saturating_add(1))
    }

    pub fn previous_page(&self) -> bool {
        let current = self.page.with_untracked(|s| s.current_page);
        self.request_page(current.saturating_sub(1))
    }

    pub fn refresh(&self) -> bool {
        let current = self.page.with_untracked(|s| s.current_page);
        self.request_page(current)
    }

    pub fn is_loading(&self) -> bool {
        self.page.with(|s| s.is_loading())
    }

    pub fn is_exporting(&self) -> bool {
        self.export_action.pending().get()
    }

    pub fn export(&self, kind: ExportKind) -> bool {
        if self.page.with_untracked(|s| s.is_loading())
            || self.export_action.pending().get_untracked()
        {
            return false;
        }
        self.export_action.dispatch(kind);
        true
    }

    pub fn logout(&self) {
        let route = self.session.with_value(controller::logout);
        navigation::redirect_to(route);
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = DashboardRepository::new_with_client(Rc::new(api));
    let session = store_value(use_session());

    let page = create_rw_signal(PageState::default());
    let search = create_rw_signal(String::new());
    let visible = create_memo(move |_| {
        let query = search.get();
        page.with(|state| filter_enquiries(&state.items, &query))
    });

    let repo_fetch = repo.clone();
    let fetch_action = create_action(move |ticket: &FetchTicket| {
        let repo = repo_fetch.clone();
        let ticket = *ticket;
        async move {
            let result = repo.list_page(ticket.page).await;
            page.try_update(|state| {
                session.with_value(|session| controller::settle_fetch(state, session, ticket, result))
            })
            .unwrap_or(FetchOutcome::Ignored)
        }
    });

    let repo_export = repo.clone();
    let export_action = create_action(move |kind: &ExportKind| {
        let repo = repo_export.clone();
        let kind = *kind;
        let day = today();
        async move {
            repo.export(kind)
                .await
                .map(|bytes| ExportFile::new(kind, day, bytes))
        }
    });

    create_effect(move |_| {
        if let Some(FetchOutcome::Evicted(route)) = fetch_action.value().get() {
            navigation::redirect_to(route);
        }
    });

    create_effect(move |_| match export_action.value().get() {
        Some(Ok(file)) => {
            if let Err(err) = trigger_blob_download(&file.filename, &file.bytes, file.mime_type) {
                log::warn!("Saving {} failed: {}", file.filename, err);
                alert(&format!("Export failed: {}", err));
            }
        }
        Some(Err(err)) => {
            log::warn!("Export failed: {} ({})", err, err.code);
            alert(&format!("Export failed: {}", err));
        }
        None => {}
    });

    let vm = DashboardViewModel {
        page,
        search,
        visible,
        fetch_action,
        export_action,
        session,
    };

    vm.start();
    vm
}
