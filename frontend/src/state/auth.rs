use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest, UserResponse},
    pages::login::repository::LoginRepository,
    utils::storage,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        is_admin_user(self.user.as_ref())
    }
}

pub fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(|u| u.is_superuser && u.is_active).unwrap_or(false)
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // Without a stored token there is nothing to verify.
    if storage::access_token().is_none() {
        return (auth_state, set_auth_state);
    }

    set_auth_state.update(|state| state.loading = true);
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        match api_client.get_me().await {
            Ok(user) => set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(err) => {
                log::debug!("stored session rejected: {err}");
                set_auth_state.update(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                    state.loading = false;
                });
            }
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(user) => {
            set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn register_request(
    request: RegisterRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    repo.register(&request).await?;
    login_request(
        LoginRequest {
            email: request.email,
            password: request.password,
        },
        repo,
        set_auth_state,
    )
    .await
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn failed_login_leaves_state_signed_out() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
        let repo = LoginRepository::new_with_client(Rc::new(api));

        let error = login_request(
            LoginRequest {
                email: "admin@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.code, crate::api::NETWORK_ERROR);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_clears_state_even_when_server_is_unreachable() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState {
            user: Some(crate::test_support::helpers::admin_user()),
            is_authenticated: true,
            loading: false,
        });
        storage::store_tokens("access", "refresh").unwrap();
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
        let repo = LoginRepository::new_with_client(Rc::new(api));

        assert!(logout(&repo, set_state).await.is_err());
        assert!(!state.get().is_authenticated);
        assert!(storage::access_token().is_none());
        runtime.dispose();
    }
}
