// Flattening of a prior configuration document into prompt defaults.
//
// A loaded document is read-only input; nothing here mutates it.

use chatstack_config::{catalog, KendraExternal, SystemConfig};

/// The defaults bag the question plan is parameterized by. All empty and
/// false when no prior document exists.
#[derive(Debug, Clone, Default)]
pub struct WizardDefaults {
    pub prefix: String,
    pub private_website: bool,
    pub certificate: String,
    pub domain: String,
    pub bedrock_enable: bool,
    pub bedrock_region: String,
    pub bedrock_role_arn: String,
    pub sagemaker_enable: bool,
    pub sagemaker_models: Vec<String>,
    pub rag_enable: bool,
    pub rag_engines: Vec<String>,
    pub kendra_enterprise: bool,
    pub add_external: bool,
    /// Consumed from the end by the sub-wizard: last loaded, first
    /// offered.
    pub kendra_external: Vec<KendraExternal>,
    pub default_embedding: Option<String>,
}

impl WizardDefaults {
    pub fn from_config(config: &SystemConfig) -> Self {
        let engines = &config.rag.engines;

        let mut rag_engines = Vec::new();
        if engines.aurora.enabled {
            rag_engines.push(catalog::ENGINE_AURORA.to_string());
        }
        if engines.opensearch.enabled {
            rag_engines.push(catalog::ENGINE_OPENSEARCH.to_string());
        }
        if engines.kendra.create_index {
            rag_engines.push(catalog::ENGINE_KENDRA.to_string());
        }

        Self {
            prefix: config.prefix.clone(),
            private_website: config.private_website,
            certificate: config.certificate.clone().unwrap_or_default(),
            domain: config.domain.clone().unwrap_or_default(),
            bedrock_enable: config.bedrock.is_some(),
            bedrock_region: config
                .bedrock
                .as_ref()
                .map(|b| b.region.clone())
                .unwrap_or_default(),
            bedrock_role_arn: config
                .bedrock
                .as_ref()
                .and_then(|b| b.role_arn.clone())
                .unwrap_or_default(),
            sagemaker_enable: !config.llms.sagemaker.is_empty(),
            sagemaker_models: config.llms.sagemaker.clone(),
            rag_enable: config.rag.enabled,
            rag_engines,
            kendra_enterprise: engines.kendra.enterprise,
            add_external: !engines.kendra.external.is_empty(),
            kendra_external: engines.kendra.external.clone(),
            default_embedding: config
                .rag
                .embeddings_models
                .iter()
                .find(|m| m.default)
                .map(|m| m.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatstack_config::{
        BedrockConfig, EngineConfig, KendraConfig, LlmsConfig, RagConfig, RagEngines,
    };

    fn prior_config() -> SystemConfig {
        let mut embeddings = catalog::embedding_models();
        embeddings[2].default = true;
        SystemConfig {
            prefix: "prod".to_string(),
            private_website: true,
            certificate: Some("arn:acm:cert".to_string()),
            domain: Some("chat.example.com".to_string()),
            bedrock: Some(BedrockConfig {
                enabled: true,
                region: "us-west-2".to_string(),
                role_arn: Some("arn:aws:iam::123456789012:role/Bedrock".to_string()),
            }),
            llms: LlmsConfig {
                sagemaker: vec!["FalconLite".to_string()],
            },
            rag: RagConfig {
                enabled: true,
                engines: RagEngines {
                    aurora: EngineConfig { enabled: false },
                    opensearch: EngineConfig { enabled: true },
                    kendra: KendraConfig {
                        enabled: true,
                        create_index: true,
                        external: vec![
                            KendraExternal {
                                name: "first".to_string(),
                                region: "us-east-1".to_string(),
                                kendra_id: "11111111-1111-1111-1111-111111111111".to_string(),
                                ..Default::default()
                            },
                            KendraExternal {
                                name: "second".to_string(),
                                region: "eu-west-1".to_string(),
                                kendra_id: "22222222-2222-2222-2222-222222222222".to_string(),
                                ..Default::default()
                            },
                        ],
                        enterprise: true,
                    },
                },
                embeddings_models: embeddings,
                cross_encoder_models: catalog::cross_encoder_models(),
            },
        }
    }

    #[test]
    fn test_from_config_flattens_fields() {
        let defaults = WizardDefaults::from_config(&prior_config());
        assert_eq!(defaults.prefix, "prod");
        assert!(defaults.private_website);
        assert_eq!(defaults.certificate, "arn:acm:cert");
        assert!(defaults.bedrock_enable);
        assert_eq!(defaults.bedrock_region, "us-west-2");
        assert!(defaults.sagemaker_enable);
        assert!(defaults.rag_enable);
        assert_eq!(defaults.rag_engines, vec!["opensearch", "kendra"]);
        assert!(defaults.kendra_enterprise);
        assert!(defaults.add_external);
        assert_eq!(defaults.kendra_external.len(), 2);
        assert_eq!(
            defaults.default_embedding.as_deref(),
            Some("amazon.titan-embed-text-v1")
        );
    }

    #[test]
    fn test_empty_defaults() {
        let defaults = WizardDefaults::default();
        assert!(defaults.prefix.is_empty());
        assert!(!defaults.rag_enable);
        assert!(defaults.kendra_external.is_empty());
        assert!(defaults.default_embedding.is_none());
    }
}
