// The question plan: a static, dependency-ordered list of prompt
// declarations.
//
// Visibility is a pure predicate over the answers collected so far, and
// a question may only depend on questions declared strictly before it.
// `verify_order` asserts that at start time instead of trusting the
// declaration order by hand.

use crate::answers::AnswerSet;
use crate::defaults::WizardDefaults;
use anyhow::{bail, Result};
use chatstack_config::{catalog, validation};

pub const Q_PREFIX: &str = "prefix";
pub const Q_PRIVATE_WEBSITE: &str = "private_website";
pub const Q_CERTIFICATE: &str = "certificate";
pub const Q_DOMAIN: &str = "domain";
pub const Q_BEDROCK_ENABLE: &str = "bedrock_enable";
pub const Q_BEDROCK_REGION: &str = "bedrock_region";
pub const Q_BEDROCK_ROLE_ARN: &str = "bedrock_role_arn";
pub const Q_SAGEMAKER_ENABLE: &str = "sagemaker_enable";
pub const Q_SAGEMAKER_MODELS: &str = "sagemaker_models";
pub const Q_RAG_ENABLE: &str = "rag_enable";
pub const Q_RAG_ENGINES: &str = "rag_engines";
pub const Q_KENDRA_ENTERPRISE: &str = "kendra_enterprise";
pub const Q_ADD_EXTERNAL: &str = "kendra_add_external";
pub const Q_DEFAULT_EMBEDDING: &str = "default_embedding";

/// Inline validator for a text answer: Err carries the re-prompt reason.
pub type Validator = fn(&str) -> Result<(), String>;

/// Visibility predicate over the answers collected so far.
pub type Predicate = fn(&AnswerSet) -> bool;

pub struct Question {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    /// Names of earlier questions the `when` predicate reads.
    pub depends_on: &'static [&'static str],
    pub when: Predicate,
}

pub enum QuestionKind {
    Text {
        default: String,
        validator: Option<Validator>,
    },
    Confirm {
        default: bool,
    },
    Select {
        choices: Vec<String>,
        default: usize,
    },
    MultiSelect {
        choices: Vec<String>,
        /// Pre-checked entries, aligned with `choices`. Saved selections
        /// referencing removed catalog entries drop out here by
        /// construction.
        defaults: Vec<bool>,
    },
}

fn always(_: &AnswerSet) -> bool {
    true
}

fn when_private_website(answers: &AnswerSet) -> bool {
    answers.flag(Q_PRIVATE_WEBSITE)
}

fn when_bedrock(answers: &AnswerSet) -> bool {
    answers.flag(Q_BEDROCK_ENABLE)
}

fn when_sagemaker(answers: &AnswerSet) -> bool {
    answers.flag(Q_SAGEMAKER_ENABLE)
}

fn when_rag(answers: &AnswerSet) -> bool {
    answers.flag(Q_RAG_ENABLE)
}

fn when_kendra_engine(answers: &AnswerSet) -> bool {
    answers
        .choices(Q_RAG_ENGINES)
        .iter()
        .any(|engine| engine == catalog::ENGINE_KENDRA)
}

fn select_default(choices: &[&str], value: &str) -> usize {
    choices.iter().position(|c| *c == value).unwrap_or(0)
}

fn multi_select_defaults(choices: &[&str], selected: &[String]) -> Vec<bool> {
    choices
        .iter()
        .map(|choice| selected.iter().any(|s| s == choice))
        .collect()
}

fn owned(choices: &[&str]) -> Vec<String> {
    choices.iter().map(|c| c.to_string()).collect()
}

/// Build the main question plan, seeded from a prior config's defaults.
pub fn question_plan(defaults: &WizardDefaults) -> Vec<Question> {
    vec![
        Question {
            name: Q_PREFIX,
            message: "Prefix to differentiate this deployment",
            kind: QuestionKind::Text {
                default: defaults.prefix.clone(),
                validator: Some(validation::validate_prefix),
            },
            depends_on: &[],
            when: always,
        },
        Question {
            name: Q_PRIVATE_WEBSITE,
            message: "Deploy the website privately, reachable only inside the VPC",
            kind: QuestionKind::Confirm {
                default: defaults.private_website,
            },
            depends_on: &[],
            when: always,
        },
        Question {
            name: Q_CERTIFICATE,
            message: "ACM certificate ARN for the private website",
            kind: QuestionKind::Text {
                default: defaults.certificate.clone(),
                validator: None,
            },
            depends_on: &[Q_PRIVATE_WEBSITE],
            when: when_private_website,
        },
        Question {
            name: Q_DOMAIN,
            message: "Domain for the private website",
            kind: QuestionKind::Text {
                default: defaults.domain.clone(),
                validator: None,
            },
            depends_on: &[Q_PRIVATE_WEBSITE],
            when: when_private_website,
        },
        Question {
            name: Q_BEDROCK_ENABLE,
            message: "Enable Bedrock models",
            kind: QuestionKind::Confirm {
                default: defaults.bedrock_enable,
            },
            depends_on: &[],
            when: always,
        },
        Question {
            name: Q_BEDROCK_REGION,
            message: "Region where Bedrock is available",
            kind: QuestionKind::Select {
                choices: owned(catalog::BEDROCK_REGIONS),
                default: select_default(catalog::BEDROCK_REGIONS, &defaults.bedrock_region),
            },
            depends_on: &[Q_BEDROCK_ENABLE],
            when: when_bedrock,
        },
        Question {
            name: Q_BEDROCK_ROLE_ARN,
            message: "Cross-account role ARN to invoke Bedrock, empty if same account",
            kind: QuestionKind::Text {
                default: defaults.bedrock_role_arn.clone(),
                validator: Some(validation::validate_role_arn),
            },
            depends_on: &[Q_BEDROCK_ENABLE],
            when: when_bedrock,
        },
        Question {
            name: Q_SAGEMAKER_ENABLE,
            message: "Host models on SageMaker",
            kind: QuestionKind::Confirm {
                default: defaults.sagemaker_enable,
            },
            depends_on: &[],
            when: always,
        },
        Question {
            name: Q_SAGEMAKER_MODELS,
            message: "SageMaker models to deploy",
            kind: QuestionKind::MultiSelect {
                choices: owned(catalog::SAGEMAKER_MODELS),
                defaults: multi_select_defaults(
                    catalog::SAGEMAKER_MODELS,
                    &defaults.sagemaker_models,
                ),
            },
            depends_on: &[Q_SAGEMAKER_ENABLE],
            when: when_sagemaker,
        },
        Question {
            name: Q_RAG_ENABLE,
            message: "Enable retrieval-augmented generation (RAG)",
            kind: QuestionKind::Confirm {
                default: defaults.rag_enable,
            },
            depends_on: &[],
            when: always,
        },
        Question {
            name: Q_RAG_ENGINES,
            message: "Retrieval engines to enable",
            kind: QuestionKind::MultiSelect {
                choices: owned(catalog::RAG_ENGINES),
                defaults: multi_select_defaults(catalog::RAG_ENGINES, &defaults.rag_engines),
            },
            depends_on: &[Q_RAG_ENABLE],
            when: when_rag,
        },
        Question {
            name: Q_KENDRA_ENTERPRISE,
            message: "Use the Kendra enterprise edition",
            kind: QuestionKind::Confirm {
                default: defaults.kendra_enterprise,
            },
            depends_on: &[Q_RAG_ENGINES],
            when: when_kendra_engine,
        },
        Question {
            name: Q_ADD_EXTERNAL,
            message: "Add existing Kendra indexes",
            kind: QuestionKind::Confirm {
                default: defaults.add_external,
            },
            depends_on: &[Q_RAG_ENABLE],
            when: when_rag,
        },
    ]
}

/// The default-embedding prompt. Asked after the Kendra sub-wizard, so it
/// is not part of `question_plan`; it still reads only earlier answers.
pub fn default_embedding_question(defaults: &WizardDefaults) -> Question {
    let names: Vec<String> = catalog::embedding_models()
        .into_iter()
        .map(|m| m.name)
        .collect();
    let default = defaults
        .default_embedding
        .as_deref()
        .and_then(|name| names.iter().position(|n| n == name))
        .unwrap_or(0);
    Question {
        name: Q_DEFAULT_EMBEDDING,
        message: "Default embedding model",
        kind: QuestionKind::Select {
            choices: names,
            default,
        },
        depends_on: &[Q_RAG_ENABLE],
        when: when_rag,
    }
}

/// Assert that every question's dependencies are declared strictly before
/// it and that names are unique. Violations are defects in the plan, not
/// user errors.
pub fn verify_order(questions: &[Question]) -> Result<()> {
    let mut seen: Vec<&str> = Vec::with_capacity(questions.len());
    for question in questions {
        if seen.contains(&question.name) {
            bail!("duplicate question name '{}' in plan", question.name);
        }
        for dep in question.depends_on {
            if !seen.contains(dep) {
                bail!(
                    "question '{}' depends on '{}', which is not declared before it",
                    question.name,
                    dep
                );
            }
        }
        seen.push(question.name);
    }
    Ok(())
}
