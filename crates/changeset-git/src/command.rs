//! Diff provider that shells out to the `git` executable

use std::path::PathBuf;
use std::process::Command;

use changeset_fs::NormalizedPath;

use crate::change::{FileChange, parse_name_status};
use crate::provider::DiffProvider;
use crate::{Error, Result};

/// Runs `git diff --name-status -z` in a working directory.
///
/// Renames are reported as a deletion plus an addition (`--no-renames`) so
/// the result matches [`crate::Git2Provider`].
#[derive(Debug, Clone)]
pub struct CommandProvider {
    workdir: NormalizedPath,
    program: PathBuf,
}

impl CommandProvider {
    /// Use the `git` found on `PATH`.
    pub fn new(workdir: NormalizedPath) -> Self {
        Self {
            workdir,
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn args<'a>(old_ref: &'a str, new_ref: &'a str, folder: &'a str) -> [&'a str; 10] {
        [
            "-c",
            "core.quotepath=off",
            "diff",
            "--name-status",
            "-z",
            "--no-renames",
            old_ref,
            new_ref,
            "--",
            folder,
        ]
    }
}

impl DiffProvider for CommandProvider {
    fn name_status(&self, old_ref: &str, new_ref: &str, folder: &str) -> Result<Vec<FileChange>> {
        let args = Self::args(old_ref, new_ref, folder);
        tracing::debug!(workdir = %self.workdir, ?args, "Running git");

        let output = Command::new(&self.program)
            .current_dir(self.workdir.to_native())
            .args(args)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            let code = output.status.code().unwrap_or(-1);
            return Err(Error::CommandFailed { code, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let changes = parse_name_status(&stdout);
        tracing::debug!(count = changes.len(), "Parsed name-status output");
        Ok(changes)
    }
}
