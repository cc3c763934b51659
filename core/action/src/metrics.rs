//! Telemetry related to protected action dispatch.
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use anyhow::Result;
use once_cell::sync::Lazy;
use prometheus::CounterVec;
use prometheus::Opts;

/// Total number of action dispatches by access verdict.
pub static DISPATCH_COUNT: Lazy<CounterVec> = Lazy::new(|| {
    CounterVec::new(
        Opts::new(
            "dashgate_action_dispatch_count",
            "Total number of action dispatches by access verdict",
        ),
        &["action", "verdict"],
    )
    .expect("failed to initialise DISPATCH_COUNT counter")
});

/// Number of allowed action dispatches that resulted in error.
pub static DISPATCH_ERR: Lazy<CounterVec> = Lazy::new(|| {
    CounterVec::new(
        Opts::new(
            "dashgate_action_dispatch_error",
            "Number of allowed action dispatches that resulted in error",
        ),
        &["action"],
    )
    .expect("failed to initialise DISPATCH_ERR counter")
});

/// Ensure metrics are registered only once.
static METRICS_REGISTERED: AtomicBool = AtomicBool::new(false);

/// The first time this method is called it will register the action dispatch metrics.
pub fn register_metrics(reg: &prometheus::Registry) -> Result<()> {
    // Skip registration if already done before.
    if METRICS_REGISTERED.swap(true, Ordering::AcqRel) {
        return Ok(());
    }

    let collectors: [Box<dyn prometheus::core::Collector>; 2] = [
        Box::new(DISPATCH_COUNT.clone()),
        Box::new(DISPATCH_ERR.clone()),
    ];
    for collector in collectors {
        reg.register(collector)?;
    }
    Ok(())
}
