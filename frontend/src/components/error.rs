use crate::api::ApiError;
use leptos::*;

fn field_errors(error: &ApiError) -> Vec<String> {
    if !error.is_validation() {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|v| v.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-semibold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| field_errors(&e))
                        .filter(|errors| !errors.is_empty())
                        .map(|errors| {
                            view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                                </ul>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
