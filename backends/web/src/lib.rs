#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser backend for `svgpatch`.
//!
//! [`WebHost`] implements [`svgpatch::Host`] over `web-sys`, so the regular
//! [`svgpatch::render`] entry point works against the page's document:
//!
//! ```ignore
//! use svgpatch::shapes::circle;
//!
//! let host = svgpatch_web::WebHost::new()?;
//! svgpatch::render(&host, "canvas", circle(50.0, 50.0, 40.0, "red").with_id("sun"));
//! ```
//!
//! [`WebRenderer`] bundles a host with its configuration and is exported to
//! JavaScript, accepting descriptions as JSON.

mod dom;
mod error;
pub mod logging;
mod renderer;

pub use dom::WebHost;
pub use error::WebError;
pub use logging::install;
pub use renderer::{WebRenderer, WebRendererBuilder, parse_descriptions};
