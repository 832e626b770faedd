use std::future::Future;

#[cfg(feature = "tracing")]
use tracing::{Instrument, Level};

/// Wraps a future in a DEBUG span carrying the library name when `tracing` is on.
pub trait MaybeInstrument: Future + Sized {
    #[cfg(feature = "tracing")]
    fn maybe_instrument(
        self,
        name: &'static str,
        lib_name: &str,
    ) -> impl Future<Output = Self::Output> {
        let span = tracing::span!(Level::DEBUG, "lib_op", op = name, lib = lib_name);
        self.instrument(span)
    }

    #[cfg(not(feature = "tracing"))]
    fn maybe_instrument(self, _name: &'static str, _lib_name: &str) -> Self {
        self
    }
}

impl<F: Future> MaybeInstrument for F {}
