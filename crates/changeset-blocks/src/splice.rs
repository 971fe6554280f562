//! Remove-and-append splicing of a top-level key block.

use crate::flags::normalize_manifest_only;

/// Scanner state while walking the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Lines are kept
    Outside,
    /// Lines belong to the key's block and are dropped
    InBlock,
}

/// Whether `line` is exactly `<key>:` followed only by whitespace.
pub fn is_key_header(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|rest| rest.chars().all(char::is_whitespace))
}

fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

/// Remove every block headed by `key` from `text`.
///
/// A header line always (re-)enters the block, so a key repeated later in the
/// document is removed too. Inside a block, indented and empty lines are
/// dropped; the first non-empty unindented line ends the block and is kept.
///
/// The result ends with a newline unless it is empty.
pub fn remove_block(text: &str, key: &str) -> String {
    let mut state = ScanState::Outside;
    let mut kept: Vec<&str> = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        if is_key_header(line, key) {
            tracing::trace!(line = index + 1, key, ?state, "Key header, entering block");
            state = ScanState::InBlock;
            continue;
        }

        if state == ScanState::InBlock {
            if line.is_empty() || is_indented(line) {
                continue;
            }
            tracing::trace!(line = index + 1, key, "Block ended");
            state = ScanState::Outside;
        }

        kept.push(line);
    }

    let mut result = kept.join("\n");
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Render `<key>:` followed by one `  - <entry>` line per entry.
pub fn render_block<S: AsRef<str>>(key: &str, entries: &[S]) -> String {
    let mut block = format!("{key}:\n");
    for entry in entries {
        block.push_str("  - ");
        block.push_str(entry.as_ref());
        block.push('\n');
    }
    block
}

/// Replace the block for `key` in `original` with a block listing `entries`.
///
/// Steps, in order:
/// 1. rewrite `manifestOnly: false` to `manifestOnly: true` everywhere
/// 2. drop the existing block(s) for `key`, keeping everything else in order
/// 3. append `<key>:` and the entries at the end of the document
///
/// Entries are written verbatim; strip any folder prefix beforehand.
///
/// # Example
/// ```
/// use changeset_blocks::splice_block;
///
/// let doc = "foo: 1\nmanifest:\n  - a\n  - b\nbar: 2\n";
/// let result = splice_block(doc, "manifest", &["x", "y"]);
/// assert_eq!(result, "foo: 1\nbar: 2\nmanifest:\n  - x\n  - y\n");
/// ```
pub fn splice_block<S: AsRef<str>>(original: &str, key: &str, entries: &[S]) -> String {
    let normalized = normalize_manifest_only(original);
    let mut document = remove_block(&normalized, key);
    document.push_str(&render_block(key, entries));
    tracing::debug!(key, entries = entries.len(), "Spliced block");
    document
}
