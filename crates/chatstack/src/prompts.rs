//! dialoguer-backed answer collector

use anyhow::{Context, Result};
use chatstack_wizard::plan::Validator;
use chatstack_wizard::Collector;
use dialoguer::{Confirm, Input, MultiSelect, Select};

pub struct TerminalCollector;

impl TerminalCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Collector for TerminalCollector {
    fn text(
        &mut self,
        message: &str,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validator {
            input = input.validate_with(move |value: &String| validate(value));
        }
        input.interact_text().context("Text prompt failed")
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .context("Confirm prompt failed")
    }

    fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<String> {
        let index = Select::new()
            .with_prompt(message)
            .items(choices)
            .default(default)
            .interact()
            .context("Select prompt failed")?;
        Ok(choices[index].clone())
    }

    fn multi_select(
        &mut self,
        message: &str,
        choices: &[String],
        defaults: &[bool],
    ) -> Result<Vec<String>> {
        let indexes = MultiSelect::new()
            .with_prompt(message)
            .items_checked(checked_items(choices, defaults))
            .interact()
            .context("Multi-select prompt failed")?;
        Ok(indexes.into_iter().map(|i| choices[i].clone()).collect())
    }

    fn report_invalid(&mut self, reason: &str) -> Result<()> {
        eprintln!("{reason}");
        Ok(())
    }
}

/// Pair each choice with its pre-checked flag; missing flags read as
/// unchecked.
fn checked_items<'a>(choices: &'a [String], defaults: &[bool]) -> Vec<(&'a String, bool)> {
    choices
        .iter()
        .zip(defaults.iter().copied().chain(std::iter::repeat(false)))
        .collect()
}
