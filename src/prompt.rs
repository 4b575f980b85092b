/// Instruction block placed at the top of every prompt. The ticket line asks
/// the model to derive the ticket from the branch name; the branch is passed
/// through unmodified and the extraction is left to the model.
const INSTRUCTIONS: &str = "# Instructions

1. Given a git diff output write a commit message for the changes.
2. Follow the commit template
3. Craft a title based on the content of the diff
4. For the ticket section extract it from the branch name, just the first 2 sections of the branch name.
5. Your response should be following the template.";

/// Assembles the prompt sent to the model: instructions, diff, branch name,
/// and commit template, in that fixed order.
pub fn build(diff: &str, branch: &str, template: &str) -> String {
  format!(
    "{INSTRUCTIONS}

# Git diff
{diff}

# Branch name
{branch}

# Commit template
{template}
---
Response:"
  )
}
