use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::ScaffoldError;

/// The four kinds of question a run asks.
///
/// Every method either returns the answer or an error; backing out of a
/// question surfaces as [`ScaffoldError::Cancelled`].
pub trait Prompter {
    /// Free text, falling back to `default` on an empty answer.
    fn input(&self, prompt: &str, default: &str) -> Result<String, ScaffoldError>;

    /// Index of one entry of `items`.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, ScaffoldError>;

    /// Indices of the checked entries of `items`, in the order returned by
    /// the front end.
    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>, ScaffoldError>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, ScaffoldError>;
}

/// [`Prompter`] on the user's terminal, via `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String, ScaffoldError> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(answer)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, ScaffoldError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or(ScaffoldError::Cancelled)
    }

    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>, ScaffoldError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(format!("{prompt} (space to toggle, enter to confirm)"))
            .items(items)
            .interact_opt()?
            .ok_or(ScaffoldError::Cancelled)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, ScaffoldError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or(ScaffoldError::Cancelled)
    }
}
