use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::warn;

use crate::template::DEFAULT_TEMPLATE;

const DEFAULT_BRANCH: &str = "main";
const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Per-run record: start time, derived log path, and the branch name and
/// commit template the prompt will be built from. Branch and template hold
/// their defaults until the version-control queries succeed, so both are
/// always non-empty by prompt-assembly time.
#[derive(Debug, Clone)]
pub struct Session {
  pub started_at: DateTime<Local>,
  pub log_path:   PathBuf,
  pub branch:     String,
  pub template:   String
}

impl Session {
  /// Captures the start time, derives the log path from it, and ensures the
  /// log directory exists. Directory creation is create-if-absent: running
  /// twice within the same second is fine, the runs append to one file.
  pub fn new(log_dir: &Path) -> Self {
    let started_at = Local::now();
    let log_path = log_dir.join(format!("{}.log", started_at.format(LOG_TIMESTAMP_FORMAT)));

    if let Err(err) = fs::create_dir_all(log_dir) {
      warn!("Failed to create log directory at {}: {err}", log_dir.display());
    }

    Self {
      started_at,
      log_path,
      branch: DEFAULT_BRANCH.to_string(),
      template: DEFAULT_TEMPLATE.to_string()
    }
  }

  /// Appends the prompt to this run's log file. Callers treat failure as
  /// non-fatal and report it.
  pub fn log_prompt(&self, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
      .append(true)
      .create(true)
      .open(&self.log_path)
      .with_context(|| format!("Failed to open log file at {}", self.log_path.display()))?;

    file
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write to log file at {}", self.log_path.display()))
  }
}
