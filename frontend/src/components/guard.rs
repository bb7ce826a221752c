use crate::{
    state::session::{use_session, GuardOutcome},
    utils::navigation,
};
use leptos::*;

/// Renders children only when a token is persisted; otherwise declares a
/// redirect to the login view without issuing any protected call.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let outcome = use_session().admit();
    create_effect(move |_| {
        if let GuardOutcome::Redirect(route) = outcome {
            navigation::redirect_to(route);
        }
    });
    view! {
        <Show when=move || should_render_children(outcome) fallback=|| ()>
            {children()}
        </Show>
    }
}

fn should_render_children(outcome: GuardOutcome) -> bool {
    outcome == GuardOutcome::Admit
}
