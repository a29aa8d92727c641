// The Answer Collector seam and the sequential engine.
//
// One question is resolved before the next predicate is evaluated; the
// collector owns the terminal (or a script, in tests) and is expected to
// re-prompt inline on a failed text validator.

use crate::answers::{Answer, AnswerSet};
use crate::plan::{Question, QuestionKind, Validator};
use anyhow::Result;
use tracing::debug;

/// Resolves one prompt at a time. Implementations block until the user
/// answers; an abort surfaces as an error.
pub trait Collector {
    /// Free-form text. The validator, when present, gates acceptance and
    /// its Err reason is shown inline before re-prompting.
    fn text(&mut self, message: &str, default: &str, validator: Option<Validator>)
        -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Exactly one of `choices`; returns the selected value.
    fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<String>;

    /// Zero or more of `choices`; `defaults` marks pre-checked entries.
    fn multi_select(
        &mut self,
        message: &str,
        choices: &[String],
        defaults: &[bool],
    ) -> Result<Vec<String>>;

    /// Inform the user why the last answer was rejected, for prompt kinds
    /// without an inline validator.
    fn report_invalid(&mut self, reason: &str) -> Result<()>;
}

/// Evaluate the plan sequentially. Each `when` predicate runs immediately
/// before its question would be shown, against the answers collected so
/// far; skipped questions store nothing.
pub fn run_questions(
    collector: &mut dyn Collector,
    questions: &[Question],
    answers: &mut AnswerSet,
) -> Result<()> {
    for question in questions {
        if !(question.when)(answers) {
            debug!(question = question.name, "skipped");
            continue;
        }
        let answer = match &question.kind {
            QuestionKind::Text { default, validator } => {
                Answer::Text(collector.text(question.message, default, *validator)?)
            }
            QuestionKind::Confirm { default } => {
                Answer::Flag(collector.confirm(question.message, *default)?)
            }
            QuestionKind::Select { choices, default } => {
                Answer::Choice(collector.select(question.message, choices, *default)?)
            }
            QuestionKind::MultiSelect { choices, defaults } => {
                // An active multi-select requires at least one choice.
                let selected = loop {
                    let selected = collector.multi_select(question.message, choices, defaults)?;
                    if !selected.is_empty() {
                        break selected;
                    }
                    collector.report_invalid("Select at least one option")?;
                };
                Answer::Choices(selected)
            }
        };
        answers.insert(question.name, answer);
    }
    Ok(())
}
