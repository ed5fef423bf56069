//! [`Prompter`] backed by cliclack

use crate::config::Choice;
use crate::prompt::{
    Answer, ConfirmQuestion, InputQuestion, PromptError, Prompter, SelectQuestion,
};
use std::io;

/// Asks questions on the terminal with cliclack widgets
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompter;

impl ClackPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// cliclack reports Esc / Ctrl-C as an interrupted read
fn answer<T>(result: io::Result<T>) -> Answer<T> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::Interrupted => PromptError::Cancelled,
        _ => PromptError::Io(e),
    })
}

impl Prompter for ClackPrompter {
    fn select<T: Choice>(&mut self, question: &SelectQuestion<T>) -> Answer<T> {
        let mut select = cliclack::select(&question.message);
        for choice in &question.choices {
            select = select.item(*choice, choice.label(), choice.hint());
        }
        if let Some(initial) = question.choices.get(question.initial) {
            select = select.initial_value(*initial);
        }
        answer(select.interact())
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> Answer<bool> {
        answer(
            cliclack::confirm(&question.message)
                .initial_value(question.initial)
                .interact(),
        )
    }

    fn input(&mut self, question: &InputQuestion) -> Answer<String> {
        let mut input = cliclack::input(&question.message);
        if let Some(placeholder) = &question.placeholder {
            input = input.placeholder(placeholder);
        }
        if let Some(validator) = question.validator {
            input = input.validate(move |value: &String| validator(value.trim()));
        }
        answer(input.interact::<String>()).map(|value| value.trim().to_string())
    }

    fn note(&mut self, title: &str, lines: &[String]) -> io::Result<()> {
        cliclack::note(title, lines.join("\n"))
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }
}
