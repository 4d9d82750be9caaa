use std::collections::VecDeque;

use dialoguer::Input;

use crate::error::{EstimatorError, Result};

/// Where prompt answers come from and where validation messages go.
pub trait InputSource {
    /// Show `prompt` and read one line of text.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Report a validation message to the user.
    fn notify(&mut self, message: &str);
}

/// Interactive terminal input.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Pre-recorded answers, for driving prompts in tests.
///
/// Prompts and messages are recorded so tests can assert on the dialogue.
/// Running out of answers is an error rather than a hang.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Validation messages emitted so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(EstimatorError::InputExhausted)
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
