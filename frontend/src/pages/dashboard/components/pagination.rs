use crate::components::common::{Button, ButtonVariant};
use leptos::*;

#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] can_previous: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between pt-4">
            <Button
                variant=ButtonVariant::Secondary
                disabled=Signal::derive(move || !can_previous.get())
                on:click=move |_| on_previous.call(())
            >
                "Previous"
            </Button>
            <span class="text-sm text-fg-muted">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
            </span>
            <Button
                variant=ButtonVariant::Secondary
                disabled=Signal::derive(move || !can_next.get())
                on:click=move |_| on_next.call(())
            >
                "Next"
            </Button>
        </div>
    }
}
