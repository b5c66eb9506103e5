//! URL slugs for generated pages.
//!
//! Event names and photo ids become path segments in the generated site:
//! - `"Cyber Knight Founding Ceremony"` → `cyber-knight-founding-ceremony`
//! - `"CTF Night: Round #2"` → `ctf-night-round-2`
//! - `"Ünïcode"` → `ünïcode` (non-ASCII letters are kept, lowercased)
//!
//! Slugs are only ever compared for equality, never parsed back.

/// Lowercase, collapse every run of non-alphanumeric characters into a single
/// dash, trim dashes from both ends. Falls back to `"untitled"` when nothing
/// is left.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Slugs for a list of names, disambiguated with `-2`, `-3`, ... in order of
/// appearance when two names collapse to the same slug.
pub fn unique_slugs<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken: Vec<String> = Vec::new();
    for name in names {
        let base = slugify(name);
        let mut slug = base.clone();
        let mut n = 2;
        while taken.contains(&slug) {
            slug = format!("{base}-{n}");
            n += 1;
        }
        taken.push(slug);
    }
    taken
}
