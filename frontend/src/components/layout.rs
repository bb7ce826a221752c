use crate::router::AppRoute;
use leptos::*;

#[component]
pub fn AdminHeader(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Enquiry Admin"</h1>
                    <nav class="flex items-center space-x-4">
                        <a
                            href=AppRoute::Home.path()
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Enquiry form"
                        </a>
                        <button
                            type="button"
                            on:click=move |_| on_logout.call(())
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn AdminLayout(#[prop(into)] on_logout: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <AdminHeader on_logout=on_logout/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col">
            <main class="flex-1 w-full max-w-xl mx-auto py-10 px-4">{children()}</main>
            <footer class="py-4 text-center text-xs text-fg-muted">
                <a href=AppRoute::Login.path() class="hover:text-fg">"Admin sign in"</a>
            </footer>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-busy="true">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            role="status"
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}
