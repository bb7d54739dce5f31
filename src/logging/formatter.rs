use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::Layer,
    registry::LookupSpan,
};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Console `fmt` layer for the configured format.
///
/// The concrete layer type differs per format, so it is boxed.
pub fn build_layer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .with_line_number(config.with_line_numbers);

    match config.format {
        LogFormat::Pretty => Box::new(layer.pretty()),
        LogFormat::Compact => Box::new(layer.compact()),
        LogFormat::Json => Box::new(layer.json().with_current_span(true)),
    }
}
