//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by every binary built on this crate.
//!
//! ## Configuration
//!
//! The format is compact and hides the crate/module prefix (`with_target(false)`): every
//! runtime log line already carries an `actor` field naming the actor it came from.
//! Verbosity is controlled by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle** (`info`): `Actor started`, `Shutdown`
//! - **Messages** (`debug`): one `Handle` line per message with its `Debug` payload
//! - **Failures** (`error`): the hook error that stopped an actor
//! - **Timers and collectors** (`trace`): deliveries dropped because the target stopped
//!
//! ```bash
//! RUST_LOG=info cargo run     # progress lines only
//! RUST_LOG=debug cargo run    # every message
//! ```

/// Initializes the global `tracing` subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
