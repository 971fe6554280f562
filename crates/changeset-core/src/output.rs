//! Output targets and planned file writes

use changeset_fs::NormalizedPath;
use serde::{Serialize, Serializer};

/// Where a run writes its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Plain-text path lists named after the folder, written into `dir`.
    /// An empty `dir` means the current working directory.
    TextFiles { dir: NormalizedPath },
    /// Splice the lists into `yml_file` and its destructive-changes sibling.
    Manifest { yml_file: NormalizedPath },
}

impl OutputTarget {
    /// Text files in the current working directory.
    pub fn text_in_cwd() -> Self {
        Self::TextFiles {
            dir: NormalizedPath::new(""),
        }
    }
}

/// What a planned file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    PathList,
    DestructivePathList,
    Manifest,
    DestructiveManifest,
}

impl OutputKind {
    /// Console message for a completed (or, in dry-run, pending) write.
    pub fn describe(self, path: &NormalizedPath) -> String {
        match self {
            OutputKind::PathList => {
                format!("Unique trimmed added/modified paths saved to {path}")
            }
            OutputKind::DestructivePathList => {
                format!("Unique trimmed deleted paths saved to {path}")
            }
            OutputKind::Manifest => format!("Updated {path} with manifest entries"),
            OutputKind::DestructiveManifest => {
                format!("Updated {path} with destructive changes entries")
            }
        }
    }
}

/// A file the run overwrites wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedWrite {
    #[serde(serialize_with = "serialize_path")]
    pub path: NormalizedPath,
    pub kind: OutputKind,
    /// Entries as written (after any prefix stripping)
    pub entries: Vec<String>,
    #[serde(skip)]
    pub content: String,
}

fn serialize_path<S: Serializer>(path: &NormalizedPath, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(path.as_str())
}

/// One path per line, each newline-terminated.
pub fn render_path_list<S: AsRef<str>>(paths: &[S]) -> String {
    paths.iter().fold(String::new(), |mut out, path| {
        out.push_str(path.as_ref());
        out.push('\n');
        out
    })
}
