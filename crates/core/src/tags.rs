//! Project tag handling.
//!
//! Tags are stored as a single comma-delimited string. Splitting on commas
//! is the only structure imposed: no trimming, no deduplication.

/// Split a stored tag string into its parts.
///
/// A missing or empty string yields no tags rather than `[""]`.
///
/// ```
/// use folio_core::tags::split_tags;
///
/// assert_eq!(split_tags(Some("React,AI")), vec!["React", "AI"]);
/// assert!(split_tags(Some("")).is_empty());
/// assert!(split_tags(None).is_empty());
/// ```
pub fn split_tags(tags: Option<&str>) -> Vec<String> {
    match tags {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
