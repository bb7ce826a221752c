use crate::{
    components::common::{Button, ButtonVariant},
    pages::dashboard::export::ExportKind,
};
use leptos::*;

#[component]
pub fn DashboardToolbar(
    search: RwSignal<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] exporting: Signal<bool>,
    #[prop(into)] on_refresh: Callback<()>,
    #[prop(into)] on_export: Callback<ExportKind>,
) -> impl IntoView {
    let export_disabled = Signal::derive(move || busy.get() || exporting.get());

    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-end md:justify-between">
            <div class="flex-1 max-w-md">
                <label for="enquiry-search" class="block text-sm font-medium text-fg">
                    "Search"
                </label>
                <input
                    id="enquiry-search"
                    type="search"
                    class="mt-1 w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    placeholder="Name, mobile, email or ID"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <p class="mt-1 text-xs text-fg-muted">"Search applies to the current page only."</p>
            </div>
            <div class="flex gap-2">
                <Button
                    variant=ButtonVariant::Ghost
                    disabled=busy
                    on:click=move |_| on_refresh.call(())
                >
                    "Refresh"
                </Button>
                {[ExportKind::Excel, ExportKind::Pdf]
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                disabled=export_disabled
                                loading=exporting
                                on:click=move |_| on_export.call(kind)
                            >
                                {kind.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toolbar_offers_both_exports_and_page_scope_hint() {
        let html = render_to_string(|| {
            let search = create_rw_signal(String::new());
            view! {
                <DashboardToolbar
                    search=search
                    busy=Signal::derive(|| false)
                    exporting=Signal::derive(|| false)
                    on_refresh=|_| ()
                    on_export=|_| ()
                />
            }
        });
        assert!(html.contains("Export Excel"));
        assert!(html.contains("Export PDF"));
        assert!(html.contains("Refresh"));
        assert!(html.contains("current page only"));
    }
}
