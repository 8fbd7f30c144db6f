/// Derive a URL-safe identifier from an idea title.
///
/// Lowercases ASCII alphanumerics and collapses every run of other
/// characters into a single interior hyphen, with no hyphens at either end.
/// Pure function of the title: the same input always yields the same slug.
/// Two titles may map to the same slug; nothing here enforces uniqueness.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
