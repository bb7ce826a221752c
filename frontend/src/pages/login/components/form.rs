use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    identifier: RwSignal<String>,
    password: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Admin sign in"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Enquiry management console"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username_or_email" class="block text-sm font-medium text-fg">
                            "Username or email"
                        </label>
                        <input
                            id="username_or_email"
                            name="username_or_email"
                            type="text"
                            autocomplete="username"
                            class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p role="alert" class="text-sm text-status-error-text">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full inline-flex justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
