//! Admin allow-list role policy.

use orderhub_entity::user::UserRole;

/// Computes the role for a logging-in email from the static admin
/// allow-list.
///
/// Evaluated on every login, so allow-list changes take effect at the
/// user's next login; already-issued credentials keep their embedded role
/// until expiry. Comparison is case-insensitive because email local parts
/// arrive in whatever casing the provider stored.
pub fn role_for_email(email: &str, admin_emails: &[String]) -> UserRole {
    if admin_emails
        .iter()
        .any(|admin| admin.eq_ignore_ascii_case(email))
    {
        UserRole::Admin
    } else {
        UserRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_listed_email_is_admin() {
        let admins = vec!["boss@example.com".to_string()];
        assert_eq!(role_for_email("boss@example.com", &admins), UserRole::Admin);
        assert_eq!(role_for_email("Boss@Example.com", &admins), UserRole::Admin);
    }

    #[test]
    fn test_other_email_is_user() {
        let admins = vec!["boss@example.com".to_string()];
        assert_eq!(role_for_email("someone@example.com", &admins), UserRole::User);
    }

    #[test]
    fn test_empty_allow_list() {
        assert_eq!(role_for_email("boss@example.com", &[]), UserRole::User);
    }
}
