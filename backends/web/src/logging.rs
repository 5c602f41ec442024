//! Forwards `tracing` events to the browser console.

use std::sync::Once;

use tracing::{Level, field::Field, level_filters::LevelFilter};
use tracing_subscriber::{Layer, layer::Context, prelude::*};
use wasm_bindgen::JsValue;

static INSTALLED: Once = Once::new();

/// Installs the panic hook and console logging at `info` (idempotent).
pub fn install() {
    install_with_level(LevelFilter::INFO);
}

/// Installs the panic hook and console logging at `level` (idempotent).
///
/// Only the first installation in a page takes effect.
pub fn install_with_level(level: LevelFilter) {
    INSTALLED.call_once(|| {
        console_error_panic_hook::set_once();
        if tracing_subscriber::registry()
            .with(ConsoleLayer.with_filter(level))
            .try_init()
            .is_err()
        {
            web_sys::console::warn_1(&JsValue::from_str(
                "svgpatch: a global tracing subscriber is already installed",
            ));
        }
    });
}

struct ConsoleLayer;

impl<S: tracing::Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = JsValue::from_str(&visitor.format(metadata.target()));
        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::log_1(&line),
            Level::TRACE => web_sys::console::debug_1(&line),
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn format(&self, target: &str) -> String {
        let mut line = format!("{target}: {}", self.message.as_deref().unwrap_or_default());
        for field in &self.fields {
            line.push(' ');
            line.push_str(field);
        }
        line
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}
