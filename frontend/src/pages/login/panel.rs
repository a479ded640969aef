use crate::{
    api::{ApiError, LoginRequest, RegisterRequest},
    pages::login::{
        components::form::LoginForm,
        utils::{self, LoginMode},
        view_model::use_login_view_model,
    },
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = vm.form.email.get_untracked().trim().to_string();
        let password = vm.form.password.get_untracked();

        match vm.mode.get_untracked() {
            LoginMode::SignIn => {
                if let Err(msg) = utils::validate_credentials(&email, &password) {
                    vm.error.set(Some(ApiError::unknown(msg)));
                    return;
                }
                vm.error.set(None);
                vm.login_action.dispatch(LoginRequest { email, password });
            }
            LoginMode::Register => {
                let username = vm.form.username.get_untracked().trim().to_string();
                if let Err(msg) = utils::validate_registration(&username, &email, &password) {
                    vm.error.set(Some(ApiError::unknown(msg)));
                    return;
                }
                vm.error.set(None);
                vm.register_action.dispatch(RegisterRequest {
                    username,
                    email,
                    password,
                });
            }
        }
    });

    let toggle_mode = Callback::new(move |_: ()| {
        vm.error.set(None);
        vm.mode.update(|mode| *mode = mode.toggled());
    });

    view! {
        <LoginForm
            form=vm.form
            mode=vm.mode.into()
            error=vm.error.into()
            pending=pending
            on_submit=handle_submit
            on_toggle_mode=toggle_mode
        />
    }
}
