// chatstack-wizard - Interactive deployment wizard core
//
// Collects deployment parameters through a dependency-ordered question
// plan, runs the repeatable Kendra source sub-wizard, and assembles the
// flat answer set into the final configuration document.
//
// The crate never touches a terminal or the filesystem: prompting goes
// through the `Collector` trait and the caller decides whether (and
// where) to persist the assembled document.

use anyhow::Result;
use chatstack_config::SystemConfig;
use tracing::debug;

pub mod answers;
pub mod assemble;
pub mod collect;
pub mod defaults;
pub mod kendra;
pub mod plan;

pub use answers::{Answer, AnswerSet};
pub use collect::Collector;
pub use defaults::WizardDefaults;

/// Run the full wizard against a collector: main question plan, Kendra
/// sub-wizard when opted into, the default-embedding prompt, then
/// assembly.
///
/// Any collector error (including a user abort mid-prompt) propagates
/// before anything observable is produced; a partial answer set is never
/// assembled.
pub fn run_wizard(
    collector: &mut dyn Collector,
    defaults: &WizardDefaults,
) -> Result<SystemConfig> {
    let questions = plan::question_plan(defaults);
    plan::verify_order(&questions)?;

    let mut answers = AnswerSet::new();
    collect::run_questions(collector, &questions, &mut answers)?;

    let external = if answers.flag(plan::Q_RAG_ENABLE) && answers.flag(plan::Q_ADD_EXTERNAL) {
        kendra::collect_external(collector, defaults.kendra_external.clone())?
    } else {
        Vec::new()
    };
    debug!(count = external.len(), "collected external Kendra sources");

    let tail = [plan::default_embedding_question(defaults)];
    collect::run_questions(collector, &tail, &mut answers)?;

    let config = assemble::assemble(&answers, external)?;
    Ok(config)
}
