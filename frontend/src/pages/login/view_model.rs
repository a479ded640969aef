use super::utils::{LoginFormState, LoginMode};
use crate::{
    api::{ApiError, LoginRequest, RegisterRequest},
    state::auth::{self, use_auth},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub mode: RwSignal<LoginMode>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        let login = self.login_action.pending();
        let register = self.register_action.pending();
        Signal::derive(move || login.get() || register.get())
    }
}

/// Admins land in the admin area, everyone else on the home page.
pub fn landing_path(is_admin: bool) -> &'static str {
    if is_admin {
        "/admin"
    } else {
        "/"
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let mode = create_rw_signal(LoginMode::SignIn);
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let register_action = auth::use_register_action();
    let (auth_state, _) = use_auth();

    let on_result = move |result: Option<Result<(), ApiError>>| match result {
        Some(Ok(())) => {
            error.set(None);
            form.password.set(String::new());
            let is_admin = auth_state.get_untracked().is_admin();
            navigation::redirect_to(landing_path(is_admin));
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    };
    create_effect(move |_| on_result(login_action.value().get()));
    create_effect(move |_| on_result(register_action.value().get()));

    LoginViewModel {
        form,
        mode,
        error,
        login_action,
        register_action,
    }
}
