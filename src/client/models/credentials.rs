use crate::common::models::SignupRequest;

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// First required field left empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.username.is_empty() {
            Some("Username")
        } else if self.password.is_empty() {
            Some("Password")
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.missing_field().is_none()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials { username: self.username.clone(), password: self.password.clone() }
    }
}

/// Signup form state.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub message: Option<String>,
}

impl SignupForm {
    pub fn missing_field(&self) -> Option<&'static str> {
        [("Username", &self.username), ("Email", &self.email), ("Password", &self.password)]
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.missing_field().is_none()
    }

    pub fn registration(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_is_the_only_check() {
        let mut form = SignupForm::default();
        assert_eq!(form.missing_field(), Some("Username"));
        form.username = "x".into();
        assert_eq!(form.missing_field(), Some("Email"));
        // no format validation on email
        form.email = "not-an-email".into();
        form.password = "1".into();
        assert!(form.can_submit());
        form.submitting = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn login_requires_both_fields() {
        let mut form = LoginForm { username: "ada".into(), ..Default::default() };
        assert_eq!(form.missing_field(), Some("Password"));
        form.password = "pw".into();
        assert!(form.can_submit());
        assert_eq!(form.credentials(), Credentials { username: "ada".into(), password: "pw".into() });
    }
}
