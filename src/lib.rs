#[macro_export]
macro_rules! profile {
  ($name:expr) => {{
    let _span = tracing::span!(tracing::Level::DEBUG, $name);
    let _enter = _span.enter();
  }};
}

pub mod commit;
pub mod config;
pub mod ollama;
pub mod profiling;
pub mod prompt;
pub mod session;
pub mod template;
pub mod vcs;

// Re-exports
pub use profiling::Profile;
