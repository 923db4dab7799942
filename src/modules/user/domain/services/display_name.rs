/// Resolve the display name stored for a user.
///
/// A missing or blank name falls back to the login. This is a normalization
/// step applied by the user service on create and update, not a validation
/// failure.
pub fn resolve_display_name(login: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => login.to_string(),
    }
}
