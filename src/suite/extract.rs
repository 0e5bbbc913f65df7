use super::id::SuiteId;
use crate::issue::Issue;

/// Suite id announced by an issue title.
///
/// The title must start with `title_prefix`; the id is then the first
/// `u-[a-z0-9]{5}` match anywhere in the title.
#[must_use]
pub fn extract_suite_id(title: &str, title_prefix: &str) -> Option<SuiteId> {
    if !title.starts_with(title_prefix) {
        return None;
    }
    SuiteId::find_in(title)
}

/// Lazily yield the suite id of every matching issue, in issue order.
///
/// Duplicates are passed through; callers decide what a repeat means.
pub fn suite_ids<'a>(
    issues: &'a [Issue],
    title_prefix: &'a str,
) -> impl Iterator<Item = SuiteId> + 'a {
    issues
        .iter()
        .filter_map(move |issue| extract_suite_id(&issue.title, title_prefix))
}
