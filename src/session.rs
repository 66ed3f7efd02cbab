//! The interactive run: ask for folders, scan them, ask for an output name,
//! write the document.

use crate::cli::Config;
use crate::console::{Console, FOLDERS_PROMPT, OUTPUT_PROMPT};
use crate::extensions::ExtensionSet;
use crate::filewalker::scan_directories;
use crate::output::{OutputTarget, resolve_output_target};
use crate::utils::parse_folder_list;
use crate::writer::MarkdownWriter;
use anyhow::Result;
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Where a [`Session`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AwaitingFolders,
    Scanning,
    AwaitingOutputName,
    Writing,
    Done,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: OutputTarget,
    pub files_written: usize,
    pub skipped_roots: usize,
}

pub struct Session<R, W> {
    config: Config,
    console: Console<R, W>,
    stage: Stage,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(config: Config, console: Console<R, W>) -> Self {
        Self {
            config,
            console,
            stage: Stage::AwaitingFolders,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn advance(&mut self, next: Stage) {
        debug!("{:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    /// Runs every stage to completion. Values present in the config are not prompted for.
    pub async fn run(&mut self) -> Result<RunSummary> {
        let roots = match &self.config.folders {
            Some(folders) => folders.clone(),
            None if self.config.prompt => {
                parse_folder_list(&self.console.ask(FOLDERS_PROMPT).await?)
            }
            None => Vec::new(),
        };

        self.advance(Stage::Scanning);
        let scan = scan_directories(&roots, ExtensionSet::source()).await?;
        for skipped in &scan.skipped {
            self.console.say(&skipped.to_string()).await?;
        }

        self.advance(Stage::AwaitingOutputName);
        let requested = match &self.config.output_name {
            Some(name) => name.clone(),
            None if self.config.prompt => self.console.ask(OUTPUT_PROMPT).await?,
            None => String::new(),
        };

        self.advance(Stage::Writing);
        let output = resolve_output_target(&requested, &self.config.output_dir).await?;
        let mut writer = MarkdownWriter::create(&output.final_path).await?;
        for file in &scan.files {
            writer.write_entry(file).await?;
        }
        let files_written = writer.entries();
        writer.finish().await?;

        info!(
            "Wrote {} files to {}",
            files_written,
            output.final_path.display()
        );
        self.console
            .say(&format!(
                "Scanning complete. Check the {} file for results.",
                output.file_name
            ))
            .await?;

        self.advance(Stage::Done);
        Ok(RunSummary {
            output,
            files_written,
            skipped_roots: scan.skipped.len(),
        })
    }
}
