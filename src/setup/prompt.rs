//! Terminal prompting
//!
//! Everything that asks the user a question goes through [`Prompter`], so
//! the same code runs against a terminal, a `--no-input` run, or a script in
//! tests.

use std::io::{self, BufRead, Write};

use crate::error::{ExportError, ExportResult};

/// Source of answers and sink for user-facing messages
pub trait Prompter {
    /// Ask a question and return the trimmed answer
    fn ask(&mut self, prompt: &str) -> ExportResult<String>;

    /// Ask for a secret without echoing it
    fn ask_secret(&mut self, prompt: &str) -> ExportResult<String>;

    /// Show a line to the user
    fn say(&mut self, message: &str);
}

/// Prompts on stdout, reads stdin
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> ExportResult<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            // stdin closed (Ctrl+D or piped input ran out)
            return Err(ExportError::Interrupted);
        }

        Ok(input.trim().to_string())
    }

    fn ask_secret(&mut self, prompt: &str) -> ExportResult<String> {
        rpassword::prompt_password(prompt)
            .map(|s| s.trim().to_string())
            .map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => {
                    ExportError::Interrupted
                }
                _ => ExportError::Io(format!("Failed to read API key: {}", e)),
            })
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Refuses every question; used for `--no-input`
#[derive(Debug, Default)]
pub struct NoInputPrompter;

impl NoInputPrompter {
    fn refuse(prompt: &str) -> ExportError {
        let what = prompt.trim().trim_end_matches(':').trim();
        ExportError::Validation(format!("no value configured for \"{}\" and --no-input is set", what))
    }
}

impl Prompter for NoInputPrompter {
    fn ask(&mut self, prompt: &str) -> ExportResult<String> {
        Err(Self::refuse(prompt))
    }

    fn ask_secret(&mut self, prompt: &str) -> ExportResult<String> {
        Err(Self::refuse(prompt))
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Ask for a non-negative integer; blank gives `None`
///
/// Negative answers are clamped to 0. Re-asks until the answer parses.
pub fn ask_optional_u64(prompter: &mut dyn Prompter, prompt: &str) -> ExportResult<Option<u64>> {
    loop {
        let answer = prompter.ask(prompt)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<i64>() {
            Ok(n) => return Ok(Some(n.max(0) as u64)),
            Err(_) => prompter.say("Enter integer or leave blank."),
        }
    }
}

/// Ask a yes/no question; blank gives `default`
pub fn ask_yes_no(prompter: &mut dyn Prompter, prompt: &str, default: bool) -> ExportResult<bool> {
    loop {
        let answer = prompter.ask(prompt)?.to_lowercase();
        match answer.as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => prompter.say(&format!(
                "Enter y or n, or press Enter for default {}.",
                if default { "Y" } else { "N" }
            )),
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted prompter for tests

    use std::collections::VecDeque;

    use super::Prompter;
    use crate::error::{ExportError, ExportResult};

    /// Replays canned answers and records everything shown
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
        pub messages: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Default::default()
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        pub fn output(&self) -> String {
            self.messages.join("\n")
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str) -> ExportResult<String> {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .map(|a| a.trim().to_string())
                .ok_or(ExportError::Interrupted)
        }

        fn ask_secret(&mut self, prompt: &str) -> ExportResult<String> {
            self.ask(prompt)
        }

        fn say(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }
}
