use std::path::PathBuf;
use std::fs::File;

use serde::Deserialize;
use config::{Config, FileFormat};
use anyhow::{Context, Result};
use lazy_static::lazy_static;

// Constants
const DEFAULT_MODEL: &str = "llama3.2";
const DEFAULT_OLLAMA_HOST: &str = "http://localhost";
const DEFAULT_OLLAMA_PORT: i64 = 11434;
const DEFAULT_LOG_DIR: &str = ".logs";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct App {
  pub model:       Option<String>,
  pub ollama_host: Option<String>,
  pub ollama_port: Option<u16>,
  pub log_dir:     Option<String>
}

#[derive(Debug)]
pub struct ConfigPaths {
  pub dir:  PathBuf,
  pub file: PathBuf
}

lazy_static! {
  static ref PATHS: ConfigPaths = ConfigPaths::new();
  pub static ref APP: App = App::new().expect("Failed to load config");
}

impl ConfigPaths {
  fn new() -> Self {
    let dir = home::home_dir()
      .expect("Failed to determine home directory")
      .join(".config/git-suggest");
    let file = dir.join("config.ini");
    Self { dir, file }
  }

  fn ensure_exists(&self) -> Result<()> {
    if !self.dir.exists() {
      std::fs::create_dir_all(&self.dir).with_context(|| format!("Failed to create config directory at {:?}", self.dir))?;
    }
    if !self.file.exists() {
      File::create(&self.file).with_context(|| format!("Failed to create config file at {:?}", self.file))?;
    }
    Ok(())
  }
}

impl App {
  pub fn new() -> Result<Self> {
    dotenv::dotenv().ok();
    PATHS.ensure_exists()?;

    let config = Config::builder()
      .add_source(config::Environment::with_prefix("APP").try_parsing(true))
      .add_source(config::File::new(PATHS.file.to_string_lossy().as_ref(), FileFormat::Ini))
      .set_default("model", DEFAULT_MODEL)?
      .set_default("ollama_host", DEFAULT_OLLAMA_HOST)?
      .set_default("ollama_port", DEFAULT_OLLAMA_PORT)?
      .set_default("log_dir", DEFAULT_LOG_DIR)?
      .build()?;

    config
      .try_deserialize()
      .context("Failed to deserialize existing config. Please remove ~/.config/git-suggest/config.ini and try again")
  }

  pub fn model(&self) -> String {
    self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
  }

  pub fn ollama_host(&self) -> String {
    self
      .ollama_host
      .clone()
      .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string())
  }

  pub fn ollama_port(&self) -> u16 {
    self.ollama_port.unwrap_or(DEFAULT_OLLAMA_PORT as u16)
  }

  pub fn log_dir(&self) -> PathBuf {
    PathBuf::from(self.log_dir.clone().unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()))
  }
}
