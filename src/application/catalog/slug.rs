/// Derives the URL identifier from a category name: lower-case, every run of
/// characters outside `[a-z0-9]` collapses to a single `-`, no leading or
/// trailing `-`. Total and deterministic; an empty name yields an empty slug
/// (empty names are rejected upstream).
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
