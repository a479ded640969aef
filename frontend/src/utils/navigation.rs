//! Full-page navigation through `window.location`, plus route parameters.

use leptos::{create_memo, Memo, SignalWith};
use leptos_router::use_params_map;

pub const LOGIN_PATH: &str = "/login";

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            log::warn!("redirect to {path} failed");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("redirect to {path} skipped outside the browser");
}

/// Sends the visitor to the login page unless they are already on it.
pub fn redirect_to_login_if_needed() {
    if should_redirect_to_login(current_path().as_deref()) {
        redirect_to(LOGIN_PATH);
    }
}

pub fn should_redirect_to_login(path: Option<&str>) -> bool {
    path != Some(LOGIN_PATH)
}

/// Positive numeric ids only; anything else renders the in-page not-found.
pub fn parse_route_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

/// The `:id` segment of the current route.
pub fn use_route_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    create_memo(move |_| params.with(|p| parse_route_id(p.get("id").map(String::as_str))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_positive_numeric_ids_parse() {
        assert_eq!(parse_route_id(Some("3")), Some(3));
        assert_eq!(parse_route_id(Some("abc")), None);
        assert_eq!(parse_route_id(Some("-1")), None);
        assert_eq!(parse_route_id(Some("0")), None);
        assert_eq!(parse_route_id(None), None);
    }

    #[test]
    fn login_page_does_not_redirect_to_itself() {
        assert!(!should_redirect_to_login(Some("/login")));
        assert!(should_redirect_to_login(Some("/admin/posts")));
        assert!(should_redirect_to_login(None));
    }
}
