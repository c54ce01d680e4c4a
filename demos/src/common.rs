use std::sync::Arc;
use std::time::Duration;

use gather_core::{DataSource, GatherError, SimulationConfig, UserId};
use gather_mock::SimulatedSource;

/// Set to skip the simulated latencies (used by CI).
pub const FAST_ENV: &str = "GATHER_DEMOS_FAST";
/// Set to a `u64` to make injected failures reproducible.
pub const SEED_ENV: &str = "GATHER_DEMOS_SEED";

/// User the demos fetch for.
pub const DEMO_USER: &str = "demoUser";

/// Simulation settings for demos, read from the environment.
///
/// # Errors
/// Returns `InvalidArg` if `GATHER_DEMOS_SEED` is not a `u64`.
pub fn simulation_config() -> Result<SimulationConfig, GatherError> {
    let mut cfg = SimulationConfig::default();
    if std::env::var_os(FAST_ENV).is_some() {
        cfg.profile_latency = Duration::ZERO;
        cfg.posts_latency = Duration::ZERO;
        cfg.comments_latency = Duration::ZERO;
    }
    if let Ok(raw) = std::env::var(SEED_ENV) {
        let seed = raw
            .parse::<u64>()
            .map_err(|e| GatherError::InvalidArg(format!("{SEED_ENV}={raw}: {e}")))?;
        cfg.seed = Some(seed);
    }
    Ok(cfg)
}

/// Return the simulated data source for demos.
///
/// # Errors
/// Returns `InvalidArg` if the environment holds an invalid seed.
pub fn get_source() -> Result<Arc<dyn DataSource>, GatherError> {
    let cfg = simulation_config()?;
    tracing::debug!(?cfg, "simulated source configured");
    if std::env::var_os(FAST_ENV).is_some() {
        println!("--- (Using zero-latency simulated source) ---");
    }
    Ok(Arc::new(SimulatedSource::new(cfg)?))
}

/// The demo user id.
///
/// # Errors
/// Never in practice; the constant is a valid id.
pub fn demo_user() -> Result<UserId, GatherError> {
    UserId::new(DEMO_USER)
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
