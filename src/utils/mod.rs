mod telemetry;
mod timestamp;

pub use telemetry::init_tracing;
pub use timestamp::parse_timestamp_nanos;
