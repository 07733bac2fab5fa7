//! Slug derivation - pure functions, kept out of the record mutation path.
//!
//! A slug is computed exactly once, when a cheese is first persisted;
//! `unique_slug` takes the set of already-stored slugs so the caller decides
//! when (and whether) disambiguation happens.

use std::collections::HashSet;

/// Fallback used when a name contains no usable characters at all.
const FALLBACK_SLUG: &str = "cheese";

/// Normalize a name into a URL-safe slug.
///
/// ASCII alphanumerics are lowercased and kept; every other run of
/// characters collapses into a single `-`. Leading and trailing dashes are
/// trimmed. Names with nothing usable fall back to `"cheese"` so the result
/// is never empty.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Derive a slug from `name` that does not collide with `existing`.
///
/// Returns `slugify(name)` when it is free; otherwise appends `-2`, `-3`, …
/// until an unused value is found.
#[must_use]
pub fn unique_slug(name: &str, existing: &HashSet<String>) -> String {
    let base = slugify(name);
    if !existing.contains(&base) {
        return base;
    }

    let mut suffix = 2u64;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
