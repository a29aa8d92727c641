// chatstack-config - Deployment configuration document model
//
// The wizard emits a single JSON document describing a chatbot stack
// deployment. Prior documents are read back only to seed prompt defaults;
// a new document always replaces the old file in full.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod catalog;
pub mod validation;

/// Default location of the configuration document, relative to the
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Top-level deployment configuration document.
///
/// Field order here is the key order of the emitted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub prefix: String,

    #[serde(default)]
    pub private_website: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrock: Option<BedrockConfig>,

    #[serde(default)]
    pub llms: LlmsConfig,

    #[serde(default)]
    pub rag: RagConfig,
}

/// Bedrock settings. Absent from the document when Bedrock is not enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedrockConfig {
    pub enabled: bool,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

/// Selected inference models, per hosting provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmsConfig {
    #[serde(default)]
    pub sagemaker: Vec<String>,
}

/// Retrieval-augmented generation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub engines: RagEngines,

    #[serde(default)]
    pub embeddings_models: Vec<EmbeddingModel>,

    #[serde(default)]
    pub cross_encoder_models: Vec<CrossEncoderModel>,
}

/// Per-engine enablement. When `rag.enabled` is false every engine here
/// is disabled and the kendra external list is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagEngines {
    #[serde(default)]
    pub aurora: EngineConfig,
    #[serde(default)]
    pub opensearch: EngineConfig,
    #[serde(default)]
    pub kendra: KendraConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub enabled: bool,
}

/// Kendra engine settings. `enabled` is true iff the deployment creates
/// its own index (`create_index`) or references at least one external one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KendraConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub create_index: bool,
    #[serde(default)]
    pub external: Vec<KendraExternal>,
    #[serde(default)]
    pub enterprise: bool,
}

/// Reference to a pre-existing Kendra index outside this deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KendraExternal {
    pub name: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    pub kendra_id: String,
    pub enabled: bool,
}

impl Default for KendraExternal {
    fn default() -> Self {
        Self {
            name: String::new(),
            region: String::new(),
            role_arn: None,
            kendra_id: String::new(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Sagemaker,
    Bedrock,
    Openai,
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelProvider::Sagemaker => write!(f, "sagemaker"),
            ModelProvider::Bedrock => write!(f, "bedrock"),
            ModelProvider::Openai => write!(f, "openai"),
        }
    }
}

/// Catalog entry for an embedding model. Exactly one entry in the emitted
/// document carries `default: true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingModel {
    pub provider: ModelProvider,
    pub name: String,
    pub dimensions: u32,
    #[serde(default)]
    pub default: bool,
}

/// Catalog entry for a re-ranking cross-encoder model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossEncoderModel {
    pub provider: ModelProvider,
    pub name: String,
    #[serde(default)]
    pub default: bool,
}

impl SystemConfig {
    /// Load a prior configuration document to seed wizard defaults.
    ///
    /// A missing file is `Ok(None)`; an unreadable or malformed file is an
    /// error and aborts the run before any prompt is shown.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: SystemConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Serialize with 2-space indentation and stable key order.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        json.push('\n');
        Ok(json)
    }

    /// Persist the document, replacing any file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
