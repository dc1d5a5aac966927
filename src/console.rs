//! Line-oriented console I/O boundary.
//!
//! Game logic never touches stdin/stdout directly; it talks to the
//! [`Console`] trait, which keeps the coordinator and the engines
//! testable against a scripted double.

use anyhow::{Result, bail};
use std::fmt;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::debug;

/// Blocking-style line console.
///
/// `write` emits text verbatim (no newline appended); `read_line` suspends
/// until one line arrives and returns it with surrounding whitespace
/// trimmed. At most one read is ever pending at a time.
#[async_trait::async_trait]
pub trait Console: Send {
    /// Writes text verbatim and flushes.
    async fn write(&mut self, text: &str) -> Result<()>;

    /// Reads one line, trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Fails if the input stream is closed or unreadable. Stream failure
    /// is fatal to the session; there is no retry at this level.
    async fn read_line(&mut self) -> Result<String>;

    /// Writes one line terminated by a newline.
    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{text}\n")).await
    }

    /// Issues a value prompt and awaits the response.
    ///
    /// Emits a leading blank line, the prompt text, then a `> ` cursor
    /// with no trailing newline before reading.
    async fn prompt(&mut self, text: &str) -> Result<String> {
        self.write(&format!("\n{text}\n> ")).await?;
        self.read_line().await
    }
}

/// Console backed by the process stdin/stdout streams.
pub struct StdConsole {
    input: BufReader<Stdin>,
    output: Stdout,
}

impl StdConsole {
    /// Creates a console over buffered stdin and stdout.
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()),
            output: tokio::io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Console for StdConsole {
    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        if read == 0 {
            bail!("console input stream closed");
        }
        Ok(line.trim().to_string())
    }
}

/// Prompts for one value of a closed enumeration.
///
/// Lists every variant on its own line (prefixed `- `) and re-prompts
/// until the trimmed input exactly matches a variant's display string.
/// Unrecognized input re-issues the same prompt; this loop only
/// terminates on a value drawn from the enumeration.
pub async fn select_from<T>(console: &mut dyn Console, text: &str) -> Result<T>
where
    T: IntoEnumIterator + fmt::Display + Copy,
{
    let mut listing = String::from(text);
    for choice in T::iter() {
        listing.push_str(&format!("\n- {choice}"));
    }

    loop {
        let input = console.prompt(&listing).await?;
        match T::iter().find(|choice| choice.to_string() == input) {
            Some(choice) => {
                debug!(choice = %choice, "selection accepted");
                return Ok(choice);
            }
            None => {
                debug!(input = %input, "unrecognized selection, re-prompting");
            }
        }
    }
}
