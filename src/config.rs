//! Renderer configuration.

use alloc::string::{String, ToString};

use serde::{Deserialize, Serialize};

use crate::host::SVG_NAMESPACE;

/// Settings shared by every render call of a [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    namespace: String,
    id_attribute: String,
}

impl RenderConfig {
    /// Starts a builder from the defaults.
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Namespace new elements are created in, and that handle targets must belong to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Attribute carrying a node's identifier.
    #[must_use]
    pub fn id_attribute(&self) -> &str {
        &self.id_attribute
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            namespace: SVG_NAMESPACE.to_string(),
            id_attribute: "id".to_string(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug, Default, Clone)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    /// Creates a builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Sets the identifier attribute.
    #[must_use]
    pub fn with_id_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.config.id_attribute = attribute.into();
        self
    }

    /// Finalises the builder.
    #[must_use]
    pub fn build(self) -> RenderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_svg_ids() {
        let config = RenderConfig::default();
        assert_eq!(config.namespace(), SVG_NAMESPACE);
        assert_eq!(config.id_attribute(), "id");
    }

    #[test]
    fn builder_overrides_fields() {
        let config = RenderConfig::builder()
            .with_id_attribute("data-key")
            .build();
        assert_eq!(config.id_attribute(), "data-key");
        assert_eq!(config.namespace(), SVG_NAMESPACE);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "id_attribute": "data-id" }"#).expect("valid config");
        assert_eq!(config.id_attribute(), "data-id");
        assert_eq!(config.namespace(), SVG_NAMESPACE);
    }
}
