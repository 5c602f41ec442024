//! Event listener specifications attached to descriptions.

use alloc::rc::Rc;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Shared callback invoked with the host's event type.
pub type Callback<E> = Rc<dyn Fn(&E)>;

/// Registration flags passed to the host alongside a callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    /// Fire during the capture phase.
    pub capture: bool,
    /// Remove the listener after its first invocation.
    pub once: bool,
    /// The callback promises not to cancel the event.
    pub passive: bool,
}

impl ListenerOptions {
    /// Options with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capture: false,
            once: false,
            passive: false,
        }
    }

    /// Sets the capture flag.
    #[must_use]
    pub const fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    /// Sets the once flag.
    #[must_use]
    pub const fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Sets the passive flag.
    #[must_use]
    pub const fn passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }
}

/// A callback together with its registration options.
///
/// Cloning a listener shares the callback, so hosts that suppress duplicate
/// registrations recognize the clone as the same listener.
pub struct Listener<E> {
    callback: Callback<E>,
    options: ListenerOptions,
}

impl<E> Listener<E> {
    /// Creates a listener with default options.
    pub fn new(callback: impl Fn(&E) + 'static) -> Self {
        Self::with_options(callback, ListenerOptions::new())
    }

    /// Creates a listener with explicit options.
    pub fn with_options(callback: impl Fn(&E) + 'static, options: ListenerOptions) -> Self {
        Self {
            callback: Rc::new(callback),
            options,
        }
    }

    /// Wraps an already shared callback.
    #[must_use]
    pub const fn from_shared(callback: Callback<E>, options: ListenerOptions) -> Self {
        Self { callback, options }
    }

    /// The shared callback.
    #[must_use]
    pub const fn callback(&self) -> &Callback<E> {
        &self.callback
    }

    /// The registration options.
    #[must_use]
    pub const fn options(&self) -> ListenerOptions {
        self.options
    }

    /// Invokes the callback.
    pub fn call(&self, event: &E) {
        (self.callback)(event);
    }

    /// Whether both listeners share one callback and would register identically.
    #[must_use]
    pub fn same_registration(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback) && self.options.capture == other.options.capture
    }
}

impl<E> Clone for Listener<E> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
            options: self.options,
        }
    }
}

impl<E> fmt::Debug for Listener<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Rc::as_ptr(&self.callback).cast::<()>())
            .field("options", &self.options)
            .finish()
    }
}

impl<E, F> From<F> for Listener<E>
where
    F: Fn(&E) + 'static,
{
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}
