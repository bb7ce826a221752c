use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Redirect, Route, Router, Routes};

use crate::{
    components::guard::RequireAuth,
    pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage},
    state::session::SessionProvider,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Dashboard,
}

impl AppRoute {
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/admin/login",
            AppRoute::Dashboard => "/admin/dashboard",
        }
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path=AppRoute::Home.path() view=HomePage/>
                    <Route path=AppRoute::Login.path() view=LoginPage/>
                    <Route path=AppRoute::Dashboard.path() view=ProtectedDashboard/>
                    <Route path="/*any" view=UnknownRoute/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn UnknownRoute() -> impl IntoView {
    view! { <Redirect path=AppRoute::Home.path()/> }
}
