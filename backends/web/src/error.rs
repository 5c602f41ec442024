use core::fmt;

use svgpatch::HostError;
use wasm_bindgen::{JsCast, JsValue};

/// Error type produced by the web backend.
#[derive(Debug, Clone)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    DomUnavailable,
    /// Descriptions handed over as JSON could not be parsed.
    InvalidDescriptions(String),
    /// Wrapper around JavaScript exceptions.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "DOM is not available"),
            Self::InvalidDescriptions(msg) => write!(f, "invalid descriptions: {msg}"),
            Self::Js(msg) => write!(f, "JavaScript error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            let name = String::from(error.name());
            let message = String::from(error.message());
            return Self::Js(format!("{name}: {message}"));
        }
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<serde_json::Error> for WebError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidDescriptions(value.to_string())
    }
}

impl From<WebError> for JsValue {
    fn from(value: WebError) -> Self {
        Self::from(value.to_string())
    }
}

/// Wraps a JavaScript exception raised by `operation`.
pub(crate) fn host_error(operation: &'static str, value: JsValue) -> HostError {
    HostError::new(operation, WebError::from(value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_read_as_invalid_descriptions() {
        let error = serde_json::from_str::<u32>("not json").expect_err("invalid json");
        let message = WebError::from(error).to_string();
        assert!(message.starts_with("invalid descriptions: "));
    }

    #[test]
    fn display_matches_variants() {
        assert_eq!(WebError::DomUnavailable.to_string(), "DOM is not available");
        assert_eq!(
            WebError::Js("TypeError: x".into()).to_string(),
            "JavaScript error: TypeError: x"
        );
    }
}
