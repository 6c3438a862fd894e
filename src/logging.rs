//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Reads per-target levels from
/// `INVOICE_ROI_LOG` (e.g. `INVOICE_ROI_LOG=invoice_roi=debug`), falling back
/// to `invoice_roi=warn`. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("INVOICE_ROI_LOG")
            .unwrap_or_else(|_| EnvFilter::new("invoice_roi=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
