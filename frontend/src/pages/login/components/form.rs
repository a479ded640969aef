use crate::{
    api::ApiError,
    components::error::InlineErrorMessage,
    pages::login::utils::{LoginFormState, LoginMode},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border rounded-md bg-surface text-fg placeholder-fg-muted focus:outline-none focus:ring-action-primary-bg sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    mode: Signal<LoginMode>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
    on_toggle_mode: Callback<()>,
) -> impl IntoView {
    let is_register = move || mode.get() == LoginMode::Register;

    view! {
        <div class="flex items-center justify-center py-12">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">
                    {move || if is_register() { "Create an account" } else { "Sign in to Devlog" }}
                </h2>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <Show when=is_register>
                        <div>
                            <label for="username" class="block text-sm font-medium text-fg">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                class=INPUT_CLASS
                                prop:value=form.username
                                on:input=move |ev| {
                                    form.username.set(event_target::<HtmlInputElement>(&ev).value());
                                }
                            />
                        </div>
                    </Show>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class=INPUT_CLASS
                            placeholder="you@example.com"
                            prop:value=form.email
                            on:input=move |ev| {
                                form.email.set(event_target::<HtmlInputElement>(&ev).value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required
                            class=INPUT_CLASS
                            prop:value=form.password
                            on:input=move |ev| {
                                form.password.set(event_target::<HtmlInputElement>(&ev).value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || match (pending.get(), is_register()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Create account",
                            (false, false) => "Sign in",
                        }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    <button
                        type="button"
                        class="underline hover:text-fg"
                        on:click=move |_| on_toggle_mode.call(())
                    >
                        {move || if is_register() { "Already have an account? Sign in" } else { "New here? Create an account" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
