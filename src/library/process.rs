use std::fmt::Debug;

use crate::{
    helper::tracing::MaybeInstrument,
    library::{facade::LobeLib, validator::DataValue},
};

impl LobeLib {
    /// Returns `data` unchanged after the effective timeout elapses.
    ///
    /// When the config has `debug` set, one `Processing data: ..` event is
    /// emitted at INFO level right before completion. Text is logged verbatim,
    /// other values through `Debug`. The delay is a single
    /// `tokio::time::sleep`; there is no failure path.
    ///
    /// # Examples
    /// ```rust
    /// use lobe_lib_template::library::{config::LibOptions, facade::LobeLib};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let lib = LobeLib::with_options(LibOptions::new().timeout_ms(10));
    ///     assert_eq!(lib.process_data("test data").await, "test data");
    /// }
    /// ```
    pub async fn process_data<T: DataValue + Debug>(&self, data: T) -> T {
        let delay = self.effective_timeout();
        let name = self.config_ref().name.clone();
        async move {
            tokio::time::sleep(delay).await;
            #[cfg(feature = "tracing")]
            if self.config_ref().debug {
                match data.as_text() {
                    Some(text) => {
                        tracing::info!(target: "lobe_lib_template::process", "Processing data: {}", text)
                    }
                    None => {
                        tracing::info!(target: "lobe_lib_template::process", "Processing data: {:?}", data)
                    }
                }
            }
            data
        }
        .maybe_instrument("process_data", &name)
        .await
    }
}
