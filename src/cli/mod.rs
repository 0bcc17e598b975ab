//! CLI argument parsing, user prompts and headless mode.

mod args;
mod headless;
mod prompts;

pub use args::{parse_args, CliConfig};
pub use headless::run_headless;
