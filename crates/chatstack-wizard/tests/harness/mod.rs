// Scripted answer collector for exercising wizard flows without a
// terminal. Invalid text answers are consumed and the next step is
// offered, mirroring an inline re-prompt.

use anyhow::{bail, Context, Result};
use chatstack_wizard::plan::Validator;
use chatstack_wizard::Collector;
use std::collections::VecDeque;

#[derive(Clone, Copy)]
pub enum Step {
    Text(&'static str),
    Flag(bool),
    Choice(&'static str),
    Choices(&'static [&'static str]),
}

pub struct ScriptedCollector {
    steps: VecDeque<Step>,
    /// Default offered at each text prompt, in order shown.
    pub text_defaults: Vec<String>,
    /// Reasons given for rejected answers.
    pub rejections: Vec<String>,
}

impl ScriptedCollector {
    pub fn new(steps: &[Step]) -> Self {
        Self {
            steps: steps.iter().copied().collect(),
            text_defaults: Vec::new(),
            rejections: Vec::new(),
        }
    }

    pub fn assert_exhausted(&self) {
        assert!(
            self.steps.is_empty(),
            "{} unconsumed script steps remain",
            self.steps.len()
        );
    }

    fn next(&mut self, message: &str) -> Result<Step> {
        self.steps
            .pop_front()
            .with_context(|| format!("script exhausted at prompt '{message}'"))
    }
}

impl Collector for ScriptedCollector {
    fn text(
        &mut self,
        message: &str,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String> {
        self.text_defaults.push(default.to_string());
        loop {
            let Step::Text(value) = self.next(message)? else {
                bail!("expected a text step for '{message}'");
            };
            match validator {
                Some(validate) => match validate(value) {
                    Ok(()) => return Ok(value.to_string()),
                    Err(reason) => self.rejections.push(reason),
                },
                None => return Ok(value.to_string()),
            }
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        let Step::Flag(value) = self.next(message)? else {
            bail!("expected a confirm step for '{message}'");
        };
        Ok(value)
    }

    fn select(&mut self, message: &str, choices: &[String], _default: usize) -> Result<String> {
        let Step::Choice(value) = self.next(message)? else {
            bail!("expected a select step for '{message}'");
        };
        if !choices.iter().any(|c| c == value) {
            bail!("scripted choice '{value}' not offered at '{message}'");
        }
        Ok(value.to_string())
    }

    fn multi_select(
        &mut self,
        message: &str,
        choices: &[String],
        _defaults: &[bool],
    ) -> Result<Vec<String>> {
        let Step::Choices(values) = self.next(message)? else {
            bail!("expected a multi-select step for '{message}'");
        };
        for value in values {
            if !choices.iter().any(|c| c == value) {
                bail!("scripted choice '{value}' not offered at '{message}'");
            }
        }
        Ok(values.iter().map(|v| v.to_string()).collect())
    }

    fn report_invalid(&mut self, reason: &str) -> Result<()> {
        self.rejections.push(reason.to_string());
        Ok(())
    }
}
