// Pure construction of the final configuration document.
//
// The document is built fully-formed in one step from the answer set,
// the sub-wizard output, and the fixed catalogs; no partially-built
// intermediate is ever observable.

use crate::answers::AnswerSet;
use crate::plan::*;
use chatstack_config::{
    catalog, BedrockConfig, EngineConfig, KendraConfig, KendraExternal, LlmsConfig, RagConfig,
    RagEngines, SystemConfig,
};
use thiserror::Error;

/// Contract violations between the question plan and assembly. These are
/// defects, not user input errors; the run aborts without writing output.
#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("required answer '{0}' was not collected")]
    MissingAnswer(&'static str),

    #[error("retrieval is enabled but no default embedding model was selected")]
    MissingEmbedding,

    #[error("default embedding model '{0}' is not in the embeddings catalog")]
    UnknownEmbedding(String),
}

pub fn assemble(
    answers: &AnswerSet,
    external: Vec<KendraExternal>,
) -> Result<SystemConfig, AssembleError> {
    let prefix = answers
        .text(Q_PREFIX)
        .ok_or(AssembleError::MissingAnswer(Q_PREFIX))?
        .to_string();

    let private_website = answers.flag(Q_PRIVATE_WEBSITE);
    let certificate = private_website
        .then(|| answers.text(Q_CERTIFICATE).map(str::to_string))
        .flatten();
    let domain = private_website
        .then(|| answers.text(Q_DOMAIN).map(str::to_string))
        .flatten();

    let bedrock = if answers.flag(Q_BEDROCK_ENABLE) {
        Some(BedrockConfig {
            enabled: true,
            region: answers
                .choice(Q_BEDROCK_REGION)
                .ok_or(AssembleError::MissingAnswer(Q_BEDROCK_REGION))?
                .to_string(),
            role_arn: answers
                .text(Q_BEDROCK_ROLE_ARN)
                .filter(|arn| !arn.is_empty())
                .map(str::to_string),
        })
    } else {
        None
    };

    let llms = LlmsConfig {
        sagemaker: answers.choices(Q_SAGEMAKER_MODELS).to_vec(),
    };

    let rag_enabled = answers.flag(Q_RAG_ENABLE);
    // RAG disabled forces every engine off and drops any external list.
    let external = if rag_enabled { external } else { Vec::new() };
    let engines = answers.choices(Q_RAG_ENGINES);
    let engine_selected =
        |name: &str| rag_enabled && engines.iter().any(|engine| engine == name);

    let create_index = engine_selected(catalog::ENGINE_KENDRA);
    let kendra = KendraConfig {
        enabled: create_index || !external.is_empty(),
        create_index,
        external,
        enterprise: answers.flag(Q_KENDRA_ENTERPRISE),
    };

    let mut embeddings_models = catalog::embedding_models();
    if rag_enabled {
        let chosen = answers
            .choice(Q_DEFAULT_EMBEDDING)
            .ok_or(AssembleError::MissingEmbedding)?;
        let model = embeddings_models
            .iter_mut()
            .find(|m| m.name == chosen)
            .ok_or_else(|| AssembleError::UnknownEmbedding(chosen.to_string()))?;
        model.default = true;
    } else {
        // No selection prompt was shown; the catalog's first entry is the
        // default.
        embeddings_models[0].default = true;
    }

    let mut cross_encoder_models = catalog::cross_encoder_models();
    cross_encoder_models[0].default = true;

    Ok(SystemConfig {
        prefix,
        private_website,
        certificate,
        domain,
        bedrock,
        llms,
        rag: RagConfig {
            enabled: rag_enabled,
            engines: RagEngines {
                aurora: EngineConfig {
                    enabled: engine_selected(catalog::ENGINE_AURORA),
                },
                opensearch: EngineConfig {
                    enabled: engine_selected(catalog::ENGINE_OPENSEARCH),
                },
                kendra,
            },
            embeddings_models,
            cross_encoder_models,
        },
    })
}
