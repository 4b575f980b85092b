use std::path::PathBuf;
use std::process::Command;

use log::debug;
use thiserror::Error;

use crate::profile;

#[derive(Error, Debug)]
pub enum VcsError {
  #[error("Failed to run git {command}: {source}")]
  Spawn {
    command: String,
    source:  std::io::Error
  },

  #[error("git {command} exited with {status}: {stderr}")]
  CommandFailed {
    command: String,
    status:  std::process::ExitStatus,
    stderr:  String
  },

  #[error("git {command} returned an empty path")]
  EmptyPath { command: String },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error)
}

pub type Result<T, E = VcsError> = std::result::Result<T, E>;

trait Utf8String {
  fn to_utf8(&self) -> String;
}

impl Utf8String for [u8] {
  fn to_utf8(&self) -> String {
    String::from_utf8(self.to_vec()).unwrap_or_default()
  }
}

/// The three version-control queries the program needs. Kept narrow so
/// tests can substitute fakes for the `git` binary.
pub trait Vcs {
  /// Unstaged working-tree diff. An empty diff is not an error.
  fn diff(&self) -> Result<String>;

  /// Name of the currently checked-out branch.
  fn branch_name(&self) -> Result<String>;

  /// Path of the user-configured commit template, from `commit.template`.
  fn template_path(&self) -> Result<PathBuf>;
}

/// Runs the `git` executable found on PATH.
pub struct GitCli {
  workdir: Option<PathBuf>
}

impl GitCli {
  pub fn new() -> Self {
    Self { workdir: None }
  }

  pub fn new_with_path(path: impl Into<PathBuf>) -> Self {
    Self { workdir: Some(path.into()) }
  }

  fn run(&self, args: &[&str]) -> Result<String> {
    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = &self.workdir {
      command.current_dir(dir);
    }

    let output = command.output().map_err(|source| {
      VcsError::Spawn {
        command: args.join(" "),
        source
      }
    })?;

    if !output.status.success() {
      return Err(VcsError::CommandFailed {
        command: args.join(" "),
        status:  output.status,
        stderr:  output.stderr.to_utf8().trim().to_string()
      });
    }

    Ok(output.stdout.to_utf8())
  }
}

impl Default for GitCli {
  fn default() -> Self {
    Self::new()
  }
}

impl Vcs for GitCli {
  fn diff(&self) -> Result<String> {
    profile!("Resolve diff");

    let diff = self.run(&["diff"])?;
    debug!("[diff] {} bytes of diff output", diff.len());
    Ok(diff)
  }

  fn branch_name(&self) -> Result<String> {
    profile!("Resolve branch name");

    let branch = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
    debug!("[branch] {}", branch.trim());
    Ok(branch.trim().to_string())
  }

  fn template_path(&self) -> Result<PathBuf> {
    profile!("Resolve template path");

    let path = self.run(&["config", "commit.template"])?;
    let path = path.trim();
    if path.is_empty() {
      return Err(VcsError::EmptyPath { command: "config commit.template".to_string() });
    }

    debug!("[template] configured at {}", path);
    Ok(PathBuf::from(path))
  }
}
