use crate::{
    api::Enquiry, components::empty_state::EmptyState, pages::dashboard::utils::format_created_at,
};
use leptos::*;

#[component]
pub fn EnquiryTable(
    #[prop(into)] rows: Signal<Vec<Enquiry>>,
    /// Number of rows on the current page before search is applied.
    #[prop(into)]
    loaded: Signal<usize>,
) -> impl IntoView {
    let empty_title = move || {
        if loaded.get() == 0 {
            "No enquiries yet"
        } else {
            "No matches on this page"
        }
    };

    view! {
        <Show
            when=move || !rows.with(|r| r.is_empty())
            fallback=move || view! { <EmptyState title=empty_title() /> }
        >
            <div class="overflow-x-auto rounded-lg border border-border">
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left font-medium text-fg-muted">"ID"</th>
                            <th class="px-4 py-2 text-left font-medium text-fg-muted">"Name"</th>
                            <th class="px-4 py-2 text-left font-medium text-fg-muted">"Mobile"</th>
                            <th class="px-4 py-2 text-left font-medium text-fg-muted">"Email"</th>
                            <th class="px-4 py-2 text-left font-medium text-fg-muted">"Received"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border bg-surface-elevated">
                        <For
                            each=move || rows.get()
                            key=|enquiry| enquiry.id
                            children=move |enquiry: Enquiry| {
                                let received = format_created_at(&enquiry);
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-fg-muted">{enquiry.id}</td>
                                        <td class="px-4 py-2 text-fg">{enquiry.name}</td>
                                        <td class="px-4 py-2 text-fg">{enquiry.mobile}</td>
                                        <td class="px-4 py-2 text-fg">{enquiry.email}</td>
                                        <td class="px-4 py-2 text-fg-muted">{received}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
