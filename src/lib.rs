//! # folder2md Library
//!
//! Collects the source files under a set of folders into a single Markdown
//! document. Each file becomes its path followed by a fenced code block
//! tagged with the file's extension.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folder2md::{Config, run_folder2md};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config {
//!         folders: Some(vec!["src".to_string(), "tests".to_string()]),
//!         output_name: None,
//!         output_dir: std::env::current_dir()?,
//!         prompt: false,
//!         verbosity: 0,
//!     };
//!
//!     let summary = run_folder2md(config).await?;
//!     println!("wrote {}", summary.output.file_name);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod console;
pub mod extensions;
pub mod filewalker;
pub mod output;
pub mod session;
pub mod source;
pub mod utils;
pub mod writer;

pub use cli::Config;
pub use console::Console;
pub use extensions::ExtensionSet;
pub use filewalker::{ScanOutcome, scan_directories};
pub use output::{OutputTarget, resolve_output_target};
pub use session::{RunSummary, Session, Stage};
pub use source::SourceFile;
pub use writer::MarkdownWriter;

use anyhow::Result;
use tokio::io::{self, BufReader};

/// Runs one aggregation, prompting on stdin/stdout for anything `config` leaves open.
pub async fn run_folder2md(config: Config) -> Result<RunSummary> {
    let console = Console::new(BufReader::new(io::stdin()), io::stdout());
    let mut session = Session::new(config, console);
    session.run().await
}
