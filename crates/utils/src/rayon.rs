// Copyright 2024 Irreducible Inc.
// Copyright 2025 ULDE Team

use std::{env, sync::OnceLock};

/// Pins rayon to the calling thread when `RAYON_NUM_THREADS=1`.
///
/// Batch evaluation then runs with almost no scheduling overhead, and traces stay readable.
///
/// NOTE: rayon doesn't allow initializing the global thread pool several times, so if it was
/// initialized before this call the function returns an error. Call it at the beginning of `main`.
/// The function returns a reference because `ThreadPoolBuildError` doesn't implement `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would force the global pool to initialize.
		match env::var("RAYON_NUM_THREADS") {
			Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			_ => Ok(()),
		}
	})
}
