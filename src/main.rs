use anyhow::Result;
use clap::Command;
use dotenv::dotenv;
use env_logger::Env;

use suggest::commit;
use suggest::config;
use suggest::ollama::OllamaClient;
use suggest::session::Session;
use suggest::vcs::GitCli;

fn cli() -> Command {
  Command::new("git-suggest")
    .about("Suggests a commit message for your unstaged changes using a local LLM")
    .version(env!("CARGO_PKG_VERSION"))
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenv().ok();
  env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
  cli().get_matches();

  let mut session = Session::new(&config::APP.log_dir());
  let vcs = GitCli::new();
  let generator = OllamaClient::new();

  let response = commit::suggest(&mut session, &vcs, &generator).await?;
  println!("Response: {response}");

  Ok(())
}
