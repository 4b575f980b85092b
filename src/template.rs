use std::{env, fs};

use anyhow::{Context, Result};
use log::warn;

use crate::vcs::Vcs;

/// Template used when no `commit.template` is configured or the configured
/// file cannot be read.
pub const DEFAULT_TEMPLATE: &str = "<type>[optional scope]: <subject>

What: <explain what changed here>
Why: <explain why was it changed>

<ticket>";

/// Resolves the commit template, falling back to [`DEFAULT_TEMPLATE`] on any
/// failure. Template trouble never aborts a run.
pub fn resolve(vcs: &dyn Vcs) -> String {
  match configured(vcs) {
    Ok(template) => template,
    Err(err) => {
      warn!("Using default commit template: {err:#}");
      DEFAULT_TEMPLATE.to_string()
    }
  }
}

fn configured(vcs: &dyn Vcs) -> Result<String> {
  let path = vcs.template_path()?;
  let current_dir = env::current_dir().context("Failed to get working directory")?;
  let path = current_dir.join(path);

  fs::read_to_string(&path).with_context(|| format!("Failed to read commit template at {}", path.display()))
}
