//! Change records and name-status parsing

/// Status letter of a single diff entry, as printed by `git diff --name-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    /// Any other status letter (`U`, `X`, ...)
    Other(char),
}

impl ChangeStatus {
    /// Parse the leading letter of a name-status field (`R100` -> `Renamed`).
    pub fn from_letter(letter: char) -> Self {
        match letter {
            'A' => Self::Added,
            'M' => Self::Modified,
            'D' => Self::Deleted,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'T' => Self::TypeChanged,
            other => Self::Other(other),
        }
    }

    pub fn is_deletion(self) -> bool {
        self == Self::Deleted
    }
}

/// One changed file between two revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub status: ChangeStatus,
    /// Repository-relative path with `/` separators. Destination path for
    /// renames and copies.
    pub path: String,
}

impl FileChange {
    pub fn new(status: ChangeStatus, path: impl Into<String>) -> Self {
        Self {
            status,
            path: path.into(),
        }
    }
}

/// Raw diff paths split into the two output lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Every non-deleted path (added, modified, renamed, ...)
    pub added_modified: Vec<String>,
    /// Paths deleted on the new side
    pub deleted: Vec<String>,
}

impl ChangeSet {
    /// Partition changes: deletions on one side, everything else on the other.
    pub fn from_changes(changes: impl IntoIterator<Item = FileChange>) -> Self {
        let mut set = Self::default();
        for change in changes {
            if change.status.is_deletion() {
                set.deleted.push(change.path);
            } else {
                set.added_modified.push(change.path);
            }
        }
        set
    }
}

/// Parse `git diff --name-status -z` output.
///
/// Records are NUL-separated: a status field, then one path, or two paths
/// (source, destination) for renames and copies. Paths are taken verbatim,
/// so tabs, newlines and quotes in file names survive. The status is the
/// first letter of its field; a truncated trailing record is dropped.
pub fn parse_name_status(output: &str) -> Vec<FileChange> {
    let mut fields = output.split('\0').filter(|field| !field.is_empty());
    let mut changes = Vec::new();

    while let Some(field) = fields.next() {
        let Some(letter) = field.trim().chars().next() else {
            continue;
        };
        let status = ChangeStatus::from_letter(letter);
        let source = fields.next();
        let path = match status {
            ChangeStatus::Renamed | ChangeStatus::Copied => fields.next(),
            _ => source,
        };
        let Some(path) = path else {
            break;
        };
        changes.push(FileChange::new(status, path));
    }
    changes
}
