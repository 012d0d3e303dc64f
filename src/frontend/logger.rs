use crate::diagnostics;
use tracing_wasm::WASMLayerConfigBuilder;

/// Routes panics and `tracing` events to the browser console.
pub fn init() {
    console_error_panic_hook::set_once();

    let level = super::dom::location_href()
        .map(|href| diagnostics::console_level(&href))
        .unwrap_or(tracing::Level::INFO);

    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .set_report_logs_in_timings(false)
            .build(),
    );
}
