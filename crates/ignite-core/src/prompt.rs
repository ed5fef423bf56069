//! Prompt collaborator contract
//!
//! The resolver only knows these question descriptors and the [`Prompter`]
//! trait; the cliclack implementation lives in the `tui` module.

use crate::config::Choice;
use crate::error::{IgniteError, Outcome};
use std::io;

/// Pick one value out of a list
#[derive(Debug, Clone)]
pub struct SelectQuestion<T: Choice> {
    pub message: String,
    pub choices: Vec<T>,
    /// Index of the pre-selected choice
    pub initial: usize,
}

impl<T: Choice> SelectQuestion<T> {
    pub fn new(message: impl Into<String>, choices: impl IntoIterator<Item = T>) -> Self {
        Self {
            message: message.into(),
            choices: choices.into_iter().collect(),
            initial: 0,
        }
    }
}

/// Yes / no question
#[derive(Debug, Clone)]
pub struct ConfirmQuestion {
    pub message: String,
    pub initial: bool,
}

impl ConfirmQuestion {
    pub fn new(message: impl Into<String>, initial: bool) -> Self {
        Self {
            message: message.into(),
            initial,
        }
    }
}

pub type Validator = fn(&str) -> Result<(), &'static str>;

/// Free-text question
#[derive(Debug, Clone)]
pub struct InputQuestion {
    pub message: String,
    pub placeholder: Option<String>,
    pub validator: Option<Validator>,
}

impl InputQuestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            placeholder: None,
            validator: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The user aborted the prompt (Esc / Ctrl-C)
    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Answer<T> = Result<T, PromptError>;

/// Lift an answer into an [`Outcome`], keeping cancellation as a value
pub fn outcome<T>(answer: Answer<T>) -> crate::error::Result<Outcome<T>> {
    match answer {
        Ok(value) => Ok(Outcome::Completed(value)),
        Err(PromptError::Cancelled) => Ok(Outcome::Cancelled),
        Err(PromptError::Io(e)) => Err(IgniteError::Prompt(e)),
    }
}

/// Unwrap an answer or return `Ok(Outcome::Cancelled)` from the caller
macro_rules! try_answer {
    ($answer:expr) => {
        match $crate::prompt::outcome($answer)? {
            $crate::error::Outcome::Completed(value) => value,
            $crate::error::Outcome::Cancelled => {
                return Ok($crate::error::Outcome::Cancelled)
            }
        }
    };
}

pub(crate) use try_answer;

/// Something that can ask the user questions
pub trait Prompter {
    fn select<T: Choice>(&mut self, question: &SelectQuestion<T>) -> Answer<T>;

    fn confirm(&mut self, question: &ConfirmQuestion) -> Answer<bool>;

    fn input(&mut self, question: &InputQuestion) -> Answer<String>;

    /// Show a block of information without asking anything
    fn note(&mut self, title: &str, lines: &[String]) -> io::Result<()>;

    /// Report a non-fatal problem
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

#[cfg(test)]
pub(crate) mod scripted {
    //! A [`Prompter`] that replays canned answers and records every question

    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    pub enum Scripted {
        Pick(&'static str),
        Yes,
        No,
        Text(&'static str),
        Cancel,
    }

    #[derive(Debug, Clone)]
    pub struct Asked {
        pub message: String,
        pub choices: Vec<&'static str>,
    }

    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Scripted>,
        pub asked: Vec<Asked>,
        pub notes: Vec<String>,
        pub warnings: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Scripted>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                ..Default::default()
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        /// Choices offered for the first question whose message contains `needle`
        pub fn offered(&self, needle: &str) -> Option<&[&'static str]> {
            self.asked
                .iter()
                .find(|a| a.message.contains(needle))
                .map(|a| a.choices.as_slice())
        }

        fn next(&mut self, message: &str, choices: Vec<&'static str>) -> Scripted {
            self.asked.push(Asked {
                message: message.to_string(),
                choices,
            });
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected prompt: {message}"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select<T: Choice>(&mut self, question: &SelectQuestion<T>) -> Answer<T> {
            let ids = question.choices.iter().map(|c| c.id()).collect::<Vec<_>>();
            match self.next(&question.message, ids.clone()) {
                Scripted::Pick(id) => {
                    match question.choices.iter().copied().find(|c| c.id() == id) {
                        Some(choice) => Ok(choice),
                        None => panic!("'{id}' not offered for '{}': {ids:?}", question.message),
                    }
                }
                Scripted::Cancel => Err(PromptError::Cancelled),
                other => panic!("expected a pick for '{}', got {other:?}", question.message),
            }
        }

        fn confirm(&mut self, question: &ConfirmQuestion) -> Answer<bool> {
            match self.next(&question.message, Vec::new()) {
                Scripted::Yes => Ok(true),
                Scripted::No => Ok(false),
                Scripted::Cancel => Err(PromptError::Cancelled),
                other => panic!("expected yes/no for '{}', got {other:?}", question.message),
            }
        }

        fn input(&mut self, question: &InputQuestion) -> Answer<String> {
            match self.next(&question.message, Vec::new()) {
                Scripted::Text(text) => Ok(text.to_string()),
                Scripted::Cancel => Err(PromptError::Cancelled),
                other => panic!("expected text for '{}', got {other:?}", question.message),
            }
        }

        fn note(&mut self, title: &str, lines: &[String]) -> io::Result<()> {
            self.notes.push(format!("{title}\n{}", lines.join("\n")));
            Ok(())
        }

        fn warn(&mut self, message: &str) -> io::Result<()> {
            self.warnings.push(message.to_string());
            Ok(())
        }
    }
}
