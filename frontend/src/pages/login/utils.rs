use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            LoginMode::SignIn => LoginMode::Register,
            LoginMode::Register => LoginMode::SignIn,
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), String> {
    let username = username.trim();
    if username.is_empty() || username.len() > 50 {
        return Err("Username must be 1 to 50 characters".into());
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("Username may only use letters, digits and underscores".into());
    }
    validate_credentials(email, password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_email_and_password() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("admin", "secret").is_err());
        assert!(validate_credentials("admin@example.com", "").is_err());
        assert!(validate_credentials(" admin@example.com ", "secret").is_ok());
    }

    #[test]
    fn registration_checks_username_and_password_length() {
        assert!(validate_registration("no spaces", "a@b.c", "longenough").is_err());
        assert!(validate_registration("writer", "a@b.c", "short").is_err());
        assert!(validate_registration("writer_01", "a@b.c", "longenough").is_ok());
    }

    #[test]
    fn mode_toggles_between_forms() {
        assert_eq!(LoginMode::default().toggled(), LoginMode::Register);
        assert_eq!(LoginMode::Register.toggled(), LoginMode::SignIn);
    }
}
