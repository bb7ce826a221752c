use super::{components::LoginForm, view_model::use_login_view_model};
use crate::{router::AppRoute, state::session::use_session, utils::navigation};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let session = use_session();
    create_effect(move |_| {
        if session.is_authorized() {
            navigation::redirect_to(AppRoute::Dashboard);
        }
    });

    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <Title text="Admin sign in"/>
        <LoginForm
            identifier=vm.identifier
            password=vm.password
            error=vm.error
            pending=pending
            on_submit=on_submit
        />
    }
}
