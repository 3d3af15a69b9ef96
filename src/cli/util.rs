/// Short secrets are masked entirely; longer ones keep a two-character hint.
pub(crate) fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(2).collect();
    format!("{prefix}***")
}
