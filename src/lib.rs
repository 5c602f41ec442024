#![doc = include_str!("../README.md")]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

mod builder;
pub mod config;
pub mod description;
pub mod error;
pub mod host;
pub mod kind;
pub mod listener;
pub mod logging;
pub mod memory;
mod reconcile;
mod render;
pub mod shapes;
pub mod transform;
mod validate;

pub use builder::build;
pub use config::{RenderConfig, RenderConfigBuilder};
pub use description::{AttrValue, Description, IntoDescriptions, with_stroke};
pub use error::{HostError, RenderError, ResolveError, ValidationError};
pub use host::{Host, SVG_NAMESPACE};
pub use kind::ElementKind;
pub use listener::{Callback, Listener, ListenerOptions};
pub use reconcile::reconcile;
pub use render::{RenderStats, Renderer, Target, render, try_render};
pub use transform::{TransformKind, transform};
pub use validate::{check, validate};

pub mod prelude {
    //! Everything needed to describe and render a scene.
    //!
    //! ```rust
    //! use svgpatch::prelude::*;
    //!
    //! let document = Document::new();
    //! document.mount_svg("canvas");
    //! render(&document, "canvas", circle(10.0, 10.0, 5.0, "green").with_id("dot"));
    //! ```
    pub use crate::memory::Document;
    pub use crate::shapes::*;
    pub use crate::{
        Description, ElementKind, Host, Listener, ListenerOptions, Renderer, Target,
        TransformKind, render, transform, with_stroke,
    };
}
