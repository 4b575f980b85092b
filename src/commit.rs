use anyhow::{Context, Result};
use log::warn;

use crate::ollama::Generator;
use crate::session::Session;
use crate::vcs::Vcs;
use crate::{prompt, template};

/// Runs one suggestion pass: gather the diff, branch name, and template,
/// build and log the prompt, and ask the model for a commit message.
///
/// The diff and the model call are fatal on failure; everything else falls
/// back to the session defaults.
pub async fn suggest(session: &mut Session, vcs: &dyn Vcs, generator: &dyn Generator) -> Result<String> {
  let diff = vcs.diff().context("Failed to run git diff")?;

  match vcs.branch_name() {
    Ok(branch) if !branch.is_empty() => session.branch = branch,
    Ok(_) => warn!("Branch name was empty, keeping {:?}", session.branch),
    Err(err) => warn!("Keeping default branch name: {err}")
  }

  session.template = template::resolve(vcs);

  let prompt = prompt::build(&diff, &session.branch, &session.template);

  if let Err(err) = session.log_prompt(&prompt) {
    warn!("Failed to log prompt: {err:#}");
  }

  generator
    .generate(&prompt)
    .await
    .context("Failed to generate commit message")
}
