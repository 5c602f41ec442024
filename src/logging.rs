//! Console logging for renderer diagnostics.
//!
//! The renderer reports failures through `tracing` under the `svgpatch` target.
//! Applications that do not install a subscriber of their own can call
//! [`install_tracing`] once at startup.

use std::io::{self, Write};
use std::sync::Once;

use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const TRACING_PREFIX: &str = "[svgpatch] ";
const DEFAULT_FILTER: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG` (idempotent).
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable.
pub fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install_with_filter(filter);
}

/// Install a stderr subscriber with an explicit filter directive (idempotent).
///
/// Only the first installation in a process takes effect.
pub fn install_tracing_with(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install_with_filter(filter);
}

fn install_with_filter(filter: EnvFilter) {
    TRACING_INSTALLED.call_once(|| {
        let console = fmt::layer()
            .with_writer(PrefixedWriter)
            .with_ansi(false)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("svgpatch: a global tracing subscriber is already installed");
        }
    });
}

#[derive(Clone, Copy, Default)]
struct PrefixedWriter;

impl<'a> MakeWriter<'a> for PrefixedWriter {
    type Writer = PrefixedWriterInner<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        PrefixedWriterInner {
            inner: io::stderr(),
            wrote_prefix: false,
        }
    }
}

struct PrefixedWriterInner<W> {
    inner: W,
    wrote_prefix: bool,
}

impl<W: Write> Write for PrefixedWriterInner<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_prefix {
            self.inner.write_all(TRACING_PREFIX.as_bytes())?;
            self.wrote_prefix = true;
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_written_once_per_event() {
        let mut writer = PrefixedWriterInner {
            inner: Vec::new(),
            wrote_prefix: false,
        };
        writer.write_all(b"first ").expect("write");
        writer.write_all(b"second").expect("write");
        assert_eq!(
            String::from_utf8(writer.inner).expect("utf8"),
            "[svgpatch] first second"
        );
    }

    #[test]
    fn repeated_installation_is_harmless() {
        install_tracing_with("svgpatch=debug");
        install_tracing();
    }
}
