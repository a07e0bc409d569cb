//! Browser console logging

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events to the browser console; call once from `main`
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init()
        .is_err()
    {
        tracing::warn!("logging already initialised");
    }
}
