//! Helpers for treating flat asset names as a directory tree.

use std::borrow::Cow;
use std::collections::BTreeSet;

pub const SEPARATOR: char = '/';

/// Rewrites Windows style separators to `/`.
pub fn normalize(prefix: &str) -> Cow<'_, str> {
    if prefix.contains('\\') {
        Cow::Owned(prefix.replace('\\', "/"))
    } else {
        Cow::Borrowed(prefix)
    }
}

/// The distinct first path segments below `prefix`, sorted.
///
/// `prefix` is matched as a plain string prefix, so `"repo1/"` lists the
/// contents of `repo1` while `"repo1"` yields the segment that follows the
/// bare string (usually `""`). Names do not need to be sorted.
pub fn children<'a, I>(names: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let entries: BTreeSet<&str> = names
        .into_iter()
        .filter_map(|name| name.strip_prefix(prefix))
        .map(first_segment)
        .collect();

    entries.into_iter().map(str::to_string).collect()
}

fn first_segment(rest: &str) -> &str {
    rest.split_once(SEPARATOR).map_or(rest, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 6] = [
        "repo1/file1",
        "repo1/file2",
        "repo1/file3",
        "repo1/repo2/test",
        "repo1/repo2/test/repo3",
        "repo1/repo3",
    ];

    #[test]
    fn normalize_replaces_backslashes() {
        assert_eq!(normalize(r"repo1\repo2\"), "repo1/repo2/");
        assert!(matches!(normalize("repo1/"), Cow::Borrowed(_)));
    }

    #[test]
    fn children_are_one_segment_deep_and_unique() {
        let result = children(NAMES, "repo1/");
        assert_eq!(result, vec!["file1", "file2", "file3", "repo2", "repo3"]);
    }

    #[test]
    fn children_of_nested_prefix() {
        assert_eq!(children(NAMES, "repo1/repo2/"), vec!["test"]);
        assert_eq!(children(NAMES, "repo1/repo2/test/"), vec!["repo3"]);
    }

    #[test]
    fn empty_prefix_lists_top_level() {
        let names = ["b/x", "a", "a/y", "c"];
        assert_eq!(children(names, ""), vec!["a", "b", "c"]);
    }

    #[test]
    fn prefix_without_trailing_separator_matches_raw_string() {
        assert_eq!(children(NAMES, "repo1"), vec![""]);
        assert_eq!(children(NAMES, "repo1/fi"), vec!["le1", "le2", "le3"]);
    }

    #[test]
    fn unmatched_prefix_is_empty() {
        assert!(children(NAMES, "nope/").is_empty());
        assert!(children(std::iter::empty(), "repo1/").is_empty());
    }
}
