use super::{
    components::{DashboardToolbar, EnquiryTable, PaginationControls},
    utils::showing_summary,
    view_model::use_dashboard_view_model,
};
use crate::components::layout::{AdminLayout, LoadingSpinner};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    let busy = Signal::derive(move || vm.is_loading());
    let exporting = Signal::derive(move || vm.is_exporting());
    let loaded = Signal::derive(move || vm.page.with(|s| s.items.len()));
    let total_count = Signal::derive(move || vm.page.with(|s| s.total_count));

    view! {
        <Title text="Enquiries"/>
        <AdminLayout on_logout=move |_| vm.logout()>
            <div class="space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Enquiries"</h2>
                    <p class="mt-1 text-sm text-fg-muted">
                        {move || format!("{} total", total_count.get())}
                    </p>
                </div>

                <div class="bg-surface-elevated p-4 rounded-lg shadow space-y-4">
                    <DashboardToolbar
                        search=vm.search
                        busy=busy
                        exporting=exporting
                        on_refresh=move |_| {
                            vm.refresh();
                        }
                        on_export=move |kind| {
                            vm.export(kind);
                        }
                    />
                    <p class="text-xs text-fg-muted">
                        {move || showing_summary(vm.visible.with(Vec::len), loaded.get())}
                    </p>
                    <Show when=move || busy.get()>
                        <LoadingSpinner/>
                    </Show>
                    <EnquiryTable rows=vm.visible loaded=loaded/>
                    <PaginationControls
                        current_page=Signal::derive(move || vm.page.with(|s| s.current_page))
                        total_pages=Signal::derive(move || vm.page.with(|s| s.total_pages()))
                        can_previous=Signal::derive(move || vm.page.with(|s| s.can_go_previous()))
                        can_next=Signal::derive(move || vm.page.with(|s| s.can_go_next()))
                        on_previous=move |_| {
                            vm.previous_page();
                        }
                        on_next=move |_| {
                            vm.next_page();
                        }
                    />
                </div>
            </div>
        </AdminLayout>
    }
}
