//! Scripted console double shared by the integration tests.

use anyhow::{Result, bail};
use hit_and_blow::{Console, Secret};
use std::collections::VecDeque;

/// Console fed from a fixed input script, recording everything written.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    /// Creates a console that will serve `inputs` in order.
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            transcript: String::new(),
        }
    }

    /// Everything written so far, verbatim.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

#[async_trait::async_trait]
impl Console for ScriptedConsole {
    async fn write(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String> {
        match self.inputs.pop_front() {
            Some(line) => {
                // The Enter that submits a line ends the prompt's output
                // line, so the transcript stays line-addressable.
                self.transcript.push('\n');
                Ok(line.trim().to_string())
            }
            None => bail!("input script exhausted"),
        }
    }
}

/// Comma-joins the secret's digits into a winning guess line.
#[allow(dead_code)]
pub fn winning_line(secret: &Secret) -> String {
    secret
        .digits()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// A valid guess that cannot win: the secret's digits rotated one place.
#[allow(dead_code)]
pub fn rotated_line(secret: &Secret) -> String {
    let mut digits = secret.digits().to_vec();
    digits.rotate_left(1);
    digits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
