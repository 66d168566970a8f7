//! External diff tool used by the git external-diff mode.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

pub trait DiffRunner {
    /// Diff two text files, returning whatever the tool printed.
    fn diff(&self, old: &Path, new: &Path) -> Result<String>;
}

/// `git diff --no-index <old> <new>`
#[derive(Debug, Clone)]
pub struct GitDiff {
    pub program: String,
}

impl Default for GitDiff {
    fn default() -> Self {
        Self { program: "git".to_string() }
    }
}

impl DiffRunner for GitDiff {
    fn diff(&self, old: &Path, new: &Path) -> Result<String> {
        tracing::debug!(old = %old.display(), new = %new.display(), "running {} diff", self.program);
        let output = Command::new(&self.program)
            .arg("diff")
            .arg("--no-index")
            .arg(old)
            .arg(new)
            .output()
            .map_err(|e| Error::DiffTool(format!("cannot run {}: {}", self.program, e)))?;

        // exit status 1 only means the files differ
        match output.status.code() {
            Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            _ => Err(Error::DiffTool(String::from_utf8_lossy(&output.stderr).trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_diff_error() {
        let runner = GitDiff { program: "definitely-not-a-diff-tool-4b1e".into() };
        let err = runner.diff(Path::new("a.txt"), Path::new("b.txt")).unwrap_err();
        assert!(matches!(err, Error::DiffTool(_)));
    }
}
