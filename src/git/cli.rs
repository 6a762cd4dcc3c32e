use crate::error::{ChangelogError, Result};
use crate::git::decoration::Decoration;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Repository access through the `git` executable
pub struct GitCliRepository {
    dir: PathBuf,
    program: String,
}

impl GitCliRepository {
    /// Run `git` inside `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        GitCliRepository {
            dir: dir.into(),
            program: "git".to_string(),
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git with `args` and return its stdout.
    ///
    /// A failure to spawn or a non-zero exit status is reported as
    /// [ChangelogError::VcsUnavailable] carrying git's stderr.
    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(program = %self.program, ?args, "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|e| {
                ChangelogError::vcs(format!("Cannot run '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChangelogError::vcs(format!(
                "'{} {}' failed ({}): {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn non_empty_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Rewrite the `%D` field of a record so release tags lead, matching the
/// libgit2 backend. Lines without a divisor are left alone.
fn tags_first(record: &str, divisor: &str) -> String {
    match record.split_once(divisor) {
        Some((refs, rest)) => {
            format!("{}{}{}", Decoration::parse(refs).render(), divisor, rest)
        }
        None => record.to_string(),
    }
}

impl super::Repository for GitCliRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let output = self.run(&["tag"])?;
        Ok(non_empty_lines(&output))
    }

    fn log_records(&self, start: &str, divisor: &str, limit: usize) -> Result<Vec<String>> {
        let pretty = format!("--pretty=format:%D{d}%s{d}%as", d = divisor);
        let limit = limit.to_string();
        let output = self.run(&["log", start, &pretty, "-n", &limit, "--"])?;
        Ok(non_empty_lines(&output)
            .iter()
            .map(|record| tags_first(record, divisor))
            .collect())
    }

    fn workdir(&self) -> Option<PathBuf> {
        let output = self.run(&["rev-parse", "--show-toplevel"]).ok()?;
        let top = output.trim();
        if top.is_empty() {
            None
        } else {
            Some(Path::new(top).to_path_buf())
        }
    }
}
