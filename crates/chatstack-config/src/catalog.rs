// Fixed enumerations surfaced by the wizard prompts.

use crate::{CrossEncoderModel, EmbeddingModel, ModelProvider};

/// Regions a Kendra index may live in.
pub const SUPPORTED_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-northeast-1",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
];

/// Regions with Bedrock availability.
pub const BEDROCK_REGIONS: &[&str] = &[
    "us-east-1",
    "us-west-2",
    "ap-southeast-1",
    "ap-northeast-1",
    "eu-central-1",
];

/// SageMaker-hosted model identifiers offered for self-hosted inference.
pub const SAGEMAKER_MODELS: &[&str] = &[
    "FalconLite",
    "Idefics_9b",
    "Idefics_80b",
    "Mistral7b_Instruct",
];

pub const ENGINE_AURORA: &str = "aurora";
pub const ENGINE_OPENSEARCH: &str = "opensearch";
pub const ENGINE_KENDRA: &str = "kendra";

/// Retrieval engine names, in selection order.
pub const RAG_ENGINES: &[&str] = &[ENGINE_AURORA, ENGINE_OPENSEARCH, ENGINE_KENDRA];

/// The embedding model catalog. No entry is flagged default here; the
/// assembler flags exactly one.
pub fn embedding_models() -> Vec<EmbeddingModel> {
    vec![
        EmbeddingModel {
            provider: ModelProvider::Sagemaker,
            name: "intfloat/multilingual-e5-large".to_string(),
            dimensions: 1024,
            default: false,
        },
        EmbeddingModel {
            provider: ModelProvider::Sagemaker,
            name: "sentence-transformers/all-MiniLM-L6-v2".to_string(),
            dimensions: 384,
            default: false,
        },
        EmbeddingModel {
            provider: ModelProvider::Bedrock,
            name: "amazon.titan-embed-text-v1".to_string(),
            dimensions: 1536,
            default: false,
        },
        EmbeddingModel {
            provider: ModelProvider::Openai,
            name: "text-embedding-ada-002".to_string(),
            dimensions: 1536,
            default: false,
        },
    ]
}

/// The cross-encoder catalog. Single entry, always flagged default by the
/// assembler.
pub fn cross_encoder_models() -> Vec<CrossEncoderModel> {
    vec![CrossEncoderModel {
        provider: ModelProvider::Sagemaker,
        name: "cross-encoder/ms-marco-MiniLM-L-12-v2".to_string(),
        default: false,
    }]
}
