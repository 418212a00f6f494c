//! Counters for locale routing decisions.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-gateway routing counters, shared between requests through the app state.
#[derive(Debug, Default)]
pub struct RoutingMetrics {
    /// Requests passed through without locale handling (API, assets)
    bypassed: AtomicUsize,

    /// Requests that already carried a locale prefix
    localized: AtomicUsize,

    /// Requests redirected to a locale-prefixed path
    redirected: AtomicUsize,

    /// Requests let through after a routing failure
    failed_open: AtomicUsize,
}

impl RoutingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_bypassed(&self) {
        self.bypassed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_localized(&self) {
        self.localized.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirected(&self) {
        self.redirected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed_open(&self) {
        self.failed_open.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of the current counters.
    pub fn report(&self) -> MetricsReport {
        let bypassed = self.bypassed.load(Ordering::Relaxed);
        let localized = self.localized.load(Ordering::Relaxed);
        let redirected = self.redirected.load(Ordering::Relaxed);
        let failed_open = self.failed_open.load(Ordering::Relaxed);

        let routed = localized + redirected;
        let redirect_rate = if routed > 0 {
            (redirected as f64 / routed as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            bypassed,
            localized,
            redirected,
            failed_open,
            redirect_rate,
        }
    }
}

/// Routing statistics as served by `/api/metrics`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub bypassed: usize,
    pub localized: usize,
    pub redirected: usize,
    pub failed_open: usize,

    /// Share of page requests (localized + redirected) that needed a redirect, 0-100
    pub redirect_rate: f64,
}
