//! Changed-path normalization

use std::collections::BTreeSet;

/// Canonical form of the folder argument: `/` separators, no trailing `/`.
pub fn normalize_folder(folder: &str) -> String {
    folder.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Keep the first `depth` `/`-separated segments of `path`.
///
/// Paths with fewer than `depth` segments are dropped.
///
/// ```
/// use changeset_core::paths::trim_to_depth;
///
/// assert_eq!(trim_to_depth("industries/foo/bar/baz.txt", 3).as_deref(), Some("industries/foo/bar"));
/// assert_eq!(trim_to_depth("industries/readme.md", 3), None);
/// ```
pub fn trim_to_depth(path: &str, depth: usize) -> Option<String> {
    let segments: Vec<&str> = path.splitn(depth + 1, '/').take(depth).collect();
    (segments.len() == depth).then(|| segments.join("/"))
}

/// Trim every path to `depth` segments, deduplicate, and sort ascending.
pub fn normalize_paths<I, S>(paths: I, depth: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| trim_to_depth(path.as_ref(), depth))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Drop a leading `<folder>/` from `path`, if present.
pub fn strip_folder_prefix<'a>(path: &'a str, folder: &str) -> &'a str {
    path.strip_prefix(folder)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}
