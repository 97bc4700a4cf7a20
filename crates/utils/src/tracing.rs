// Copyright 2023 Ulvetanna Inc.
// Copyright 2025 ULDE Team

use tracing_subscriber::{
	fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
	EnvFilter,
};

use crate::env::boolean_env_flag_set;

/// Environment flag that makes the subscriber report the duration of every closed span.
pub const SPAN_TIMINGS_FLAG: &str = "ULDE_SPAN_TIMINGS";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. When `ULDE_SPAN_TIMINGS` is set,
/// instrumented evaluation spans are logged with their timings when they close.
pub fn init_tracing() -> Result<(), TryInitError> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let span_events = if boolean_env_flag_set(SPAN_TIMINGS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init()
}
