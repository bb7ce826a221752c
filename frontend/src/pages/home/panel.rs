use super::view_model::use_enquiry_form_view_model;
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    layout::{PublicLayout, SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg";

#[component]
pub fn HomePage() -> impl IntoView {
    let vm = use_enquiry_form_view_model();
    let pending = vm.submit_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Title text="Send us an enquiry"/>
        <PublicLayout>
            <div class="text-center mb-8">
                <h1 class="text-3xl font-extrabold text-fg">"Send us an enquiry"</h1>
                <p class="mt-2 text-sm text-fg-muted">"Leave your details and we will get back to you."</p>
            </div>
            <Show when=move || vm.submitted.get()>
                <SuccessMessage message="Thank you! Your enquiry has been received."/>
            </Show>
            <form class="space-y-4 bg-surface-elevated p-6 rounded-lg shadow" on:submit=on_submit>
                <div>
                    <label for="enquiry-name" class="block text-sm font-medium text-fg">"Name"</label>
                    <input
                        id="enquiry-name"
                        type="text"
                        autocomplete="name"
                        class=FIELD_CLASS
                        prop:value=move || vm.name.get()
                        on:input=move |ev| vm.name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="enquiry-mobile" class="block text-sm font-medium text-fg">"Mobile"</label>
                    <input
                        id="enquiry-mobile"
                        type="tel"
                        autocomplete="tel"
                        class=FIELD_CLASS
                        prop:value=move || vm.mobile.get()
                        on:input=move |ev| vm.mobile.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="enquiry-email" class="block text-sm font-medium text-fg">"Email"</label>
                    <input
                        id="enquiry-email"
                        type="email"
                        autocomplete="email"
                        class=FIELD_CLASS
                        prop:value=move || vm.email.get()
                        on:input=move |ev| vm.email.set(event_target_value(&ev))
                    />
                </div>
                <InlineErrorMessage error=vm.error/>
                <Button class="w-full" loading=pending>"Submit enquiry"</Button>
            </form>
        </PublicLayout>
    }
}
