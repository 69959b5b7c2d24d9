// Host-side tests for isolated feature startup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod bootstrap {
    include!("../src/core/bootstrap.rs");
}

use bootstrap::*;
use std::cell::Cell;

type Init<'a> = Box<dyn FnOnce() -> anyhow::Result<FeatureStatus> + 'a>;

#[test]
fn failing_feature_does_not_skip_siblings() {
    let ran = Cell::new(0u32);
    let inits: [(&'static str, Init<'_>); 3] = [
        (
            "particles",
            Box::new(|| -> anyhow::Result<FeatureStatus> {
                ran.set(ran.get() + 1);
                anyhow::bail!("particlesJS is not loaded")
            }),
        ),
        (
            "scene",
            Box::new(|| -> anyhow::Result<FeatureStatus> {
                ran.set(ran.get() + 1);
                Ok(FeatureStatus::Started)
            }),
        ),
        (
            "reveal",
            Box::new(|| -> anyhow::Result<FeatureStatus> {
                ran.set(ran.get() + 1);
                Ok(FeatureStatus::Started)
            }),
        ),
    ];

    let reports = run_all(inits);
    assert_eq!(ran.get(), 3);
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].name, "particles");
    assert!(!reports[0].is_running());
    assert!(reports[0]
        .outcome
        .as_ref()
        .unwrap_err()
        .contains("not loaded"));
    assert!(reports[1].is_running());
    assert!(reports[2].is_running());
}

#[test]
fn missing_container_is_a_quiet_skip() {
    let report = run_isolated("scene", || {
        Ok(FeatureStatus::Skipped("missing #three-container"))
    });
    assert!(!report.is_running());
    assert_eq!(
        report.outcome,
        Ok(FeatureStatus::Skipped("missing #three-container"))
    );
}

#[test]
fn error_context_is_kept_in_the_report() {
    let report = FeatureReport::from_result(
        "scene",
        Err(anyhow::anyhow!("No WebGPU adapter").context("WebGPU init")),
    );
    assert_eq!(report.outcome, Err("WebGPU init: No WebGPU adapter".to_string()));
}
