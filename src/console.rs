use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const FOLDERS_PROMPT: &str = "Enter folder names to scan (comma separated): ";
pub const OUTPUT_PROMPT: &str = "Enter output file name (default: output.md): ";

/// Line-oriented prompt channel: questions and diagnostics go to `output`,
/// answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `question` and reads one line of answer without its line ending.
    /// End of input reads as an empty answer.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        self.output
            .write_all(question.as_bytes())
            .await
            .context("Failed to write prompt")?;
        self.output.flush().await.context("Failed to write prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .await
            .context("Failed to read answer")?;

        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(answer.to_string())
    }

    pub async fn say(&mut self, message: &str) -> Result<()> {
        self.output
            .write_all(format!("{message}\n").as_bytes())
            .await
            .context("Failed to write message")?;
        self.output.flush().await.context("Failed to write message")
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
