use serde::Deserialize;
use svgpatch::{Description, RenderConfig, RenderStats, Renderer, Target};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::{dom::WebHost, error::WebError};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Description<Event>),
    Many(Vec<Description<Event>>),
}

/// Parses one description object or an array of them.
///
/// # Errors
///
/// Returns [`WebError::InvalidDescriptions`] for malformed JSON.
pub fn parse_descriptions(json: &str) -> Result<Vec<Description<Event>>, WebError> {
    Ok(match serde_json::from_str(json)? {
        OneOrMany::One(description) => vec![description],
        OneOrMany::Many(descriptions) => descriptions,
    })
}

/// Builder for [`WebRenderer`].
#[derive(Debug, Clone)]
pub struct WebRendererBuilder {
    config: RenderConfig,
    install_logging: bool,
}

impl WebRendererBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
            install_logging: true,
        }
    }

    /// Replaces the render configuration.
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Controls whether building installs the panic hook and console logging.
    #[must_use]
    pub const fn install_logging(mut self, install: bool) -> Self {
        self.install_logging = install;
        self
    }

    /// Finalises the builder.
    ///
    /// # Errors
    ///
    /// Returns an error when no browser document is available.
    pub fn build(self) -> Result<WebRenderer, WebError> {
        if self.install_logging {
            crate::logging::install();
        }
        let host = WebHost::new()?;
        Ok(WebRenderer {
            renderer: Renderer::with_config(host, self.config),
        })
    }
}

impl Default for WebRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders descriptions into the current browser document.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebRenderer {
    renderer: Renderer<WebHost>,
}

impl WebRenderer {
    /// The underlying renderer.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer<WebHost> {
        &self.renderer
    }

    /// Renders into the container with id `target`.
    pub fn render(&self, target: &str, descriptions: Vec<Description<Event>>) {
        self.renderer.render(target, descriptions);
    }

    /// Renders into a container element.
    pub fn render_into(&self, container: &Element, descriptions: Vec<Description<Event>>) {
        self.renderer
            .render(Target::Node(container.clone()), descriptions);
    }

    /// Renders and reports change counts.
    ///
    /// # Errors
    ///
    /// Fails when `target` cannot be resolved.
    pub fn try_render(
        &self,
        target: &str,
        descriptions: Vec<Description<Event>>,
    ) -> Result<RenderStats, svgpatch::RenderError> {
        self.renderer.try_render(target, descriptions)
    }
}

#[wasm_bindgen]
impl WebRenderer {
    /// Creates a renderer for the current document with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error when no browser document is available.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Self, WebError> {
        WebRendererBuilder::new().build()
    }

    /// Renders a JSON description (object or array) into the element with id `target`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON. Render failures are logged instead.
    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self, target: &str, json: &str) -> Result<(), WebError> {
        self.render(target, parse_descriptions(json)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgpatch::ElementKind;

    #[test]
    fn parses_single_objects_and_arrays() {
        let one = parse_descriptions(r#"{ "type": "g", "id": "layer" }"#).expect("object");
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].kind, Some(ElementKind::Other("g".into())));

        let many = parse_descriptions(
            r#"[{ "type": "circle", "attrs": { "cx": 1, "cy": 1, "r": 1 } }, { "type": "path" }]"#,
        )
        .expect("array");
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].kind, Some(ElementKind::Path));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_descriptions("[{"),
            Err(WebError::InvalidDescriptions(_))
        ));
    }
}
