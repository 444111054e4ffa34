//! Opt-in `tracing` setup for hosts embedding `chart-transform`.
//!
//! The library itself only emits events: layout passes and data replacement
//! at `debug`, viewport commits at `trace`, dropped samples at `warn`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chart_transform=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback filter such as
/// `"chart_transform=trace"` for debugging viewport clamping.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
