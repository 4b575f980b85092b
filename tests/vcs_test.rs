use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use tempfile::TempDir;

use suggest::vcs::{GitCli, Vcs};

struct GitHelpers {
  dir: TempDir
}

impl GitHelpers {
  pub fn new() -> (Self, GitCli) {
    let helper = GitHelpers {
      dir: TempDir::new().expect("Could not create temp dir")
    };

    helper.git(&["init"]).expect("Could not init repo");
    helper.git(&["config", "user.name", "Test User"]).unwrap();
    helper.git(&["config", "user.email", "test@example.com"]).unwrap();

    let vcs = GitCli::new_with_path(helper.path());

    (helper, vcs)
  }

  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  pub fn write_file(&self, file_name: &str, content: &str) {
    let file_path = self.path().join(file_name);
    fs::write(&file_path, content).expect("Could not write file");
  }

  pub fn commit_all(&self) -> Result<String> {
    self.git(&["add", "--all"])?;
    self.git(&["commit", "-m", "Test commit"])
  }

  fn git(&self, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
      .args(args)
      .current_dir(self.path())
      .output()
      .context("Could not run git command")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      bail!("Git command failed: {}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
  }
}

#[test]
fn unstaged_changes_appear_in_the_diff() {
  let (helpers, vcs) = GitHelpers::new();

  helpers.write_file("test.txt", "original content\n");
  helpers.commit_all().unwrap();
  helpers.write_file("test.txt", "replaced content\n");

  let diff = vcs.diff().unwrap();
  assert!(diff.contains("-original content"));
  assert!(diff.contains("+replaced content"));
}

#[test]
fn clean_working_tree_yields_an_empty_diff() {
  let (helpers, vcs) = GitHelpers::new();

  helpers.write_file("test.txt", "content\n");
  helpers.commit_all().unwrap();

  let diff = vcs.diff().unwrap();
  assert!(diff.trim().is_empty());
}

#[test]
fn diff_fails_outside_a_repository() {
  let dir = TempDir::new().unwrap();
  let vcs = GitCli::new_with_path(dir.path());

  assert!(vcs.diff().is_err());
}

#[test]
fn branch_name_matches_the_checked_out_branch() {
  let (helpers, vcs) = GitHelpers::new();

  helpers.write_file("test.txt", "content\n");
  helpers.commit_all().unwrap();
  helpers.git(&["checkout", "-b", "feature/ABC-123-foo"]).unwrap();

  assert_eq!(vcs.branch_name().unwrap(), "feature/ABC-123-foo");
}

#[test]
fn template_path_comes_from_git_config() {
  let (helpers, vcs) = GitHelpers::new();

  helpers.git(&["config", "commit.template", ".gitmessage"]).unwrap();

  assert_eq!(vcs.template_path().unwrap(), PathBuf::from(".gitmessage"));
}

#[test]
fn template_path_fails_when_unconfigured() {
  let (_helpers, vcs) = GitHelpers::new();

  assert!(vcs.template_path().is_err());
}
