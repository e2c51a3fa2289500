//! Cost and usage accounting for a document extraction run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::llm_client::Usage;

// claude-sonnet-4-5 list pricing, USD per million tokens.
const INPUT_PRICE_PER_MTOK: f64 = 3.0;
const OUTPUT_PRICE_PER_MTOK: f64 = 15.0;

/// Thread-safe usage accumulator shared by all page workers of one run.
/// Workers only ever increment; the pipeline snapshots it once at the end.
#[derive(Debug, Default)]
pub struct UsageMeter {
    api_calls: AtomicU64,
    input_tokens: AtomicU64,
    output_tokens: AtomicU64,
    failed_pages: AtomicU64,
}

impl UsageMeter {
    /// Records one successful inference call.
    pub fn record_call(&self, usage: &Usage) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
        self.input_tokens
            .fetch_add(u64::from(usage.input_tokens), Ordering::Relaxed);
        self.output_tokens
            .fetch_add(u64::from(usage.output_tokens), Ordering::Relaxed);
    }

    /// Records a page whose extraction call did not produce a usable record.
    pub fn record_failure(&self) {
        self.failed_pages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            api_calls: self.api_calls.load(Ordering::Relaxed),
            input_tokens: self.input_tokens.load(Ordering::Relaxed),
            output_tokens: self.output_tokens.load(Ordering::Relaxed),
            failed_pages: self.failed_pages.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UsageSnapshot {
    pub api_calls: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub failed_pages: u64,
}

/// Final per-run metrics handed to the caller alongside the merged record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionMetrics {
    pub total_pages: usize,
    pub workers: usize,
    pub api_calls: u64,
    pub failed_pages: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub elapsed_seconds: f64,
    pub cost_estimate: f64,
}

impl ExtractionMetrics {
    pub fn finalize(
        total_pages: usize,
        workers: usize,
        elapsed: Duration,
        snapshot: UsageSnapshot,
    ) -> Self {
        Self {
            total_pages,
            workers,
            api_calls: snapshot.api_calls,
            failed_pages: snapshot.failed_pages,
            input_tokens: snapshot.input_tokens,
            output_tokens: snapshot.output_tokens,
            elapsed_seconds: elapsed.as_secs_f64(),
            cost_estimate: estimate_cost(snapshot.input_tokens, snapshot.output_tokens),
        }
    }
}

/// Estimated USD cost for a token count under the fixed price table.
pub(crate) fn estimate_cost(input_tokens: u64, output_tokens: u64) -> f64 {
    let input = input_tokens as f64 / 1_000_000.0 * INPUT_PRICE_PER_MTOK;
    let output = output_tokens as f64 / 1_000_000.0 * OUTPUT_PRICE_PER_MTOK;
    input + output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_accumulates_calls_and_tokens() {
        let meter = UsageMeter::default();
        meter.record_call(&Usage {
            input_tokens: 1000,
            output_tokens: 200,
        });
        meter.record_call(&Usage {
            input_tokens: 500,
            output_tokens: 100,
        });
        meter.record_failure();

        let snap = meter.snapshot();
        assert_eq!(snap.api_calls, 2);
        assert_eq!(snap.input_tokens, 1500);
        assert_eq!(snap.output_tokens, 300);
        assert_eq!(snap.failed_pages, 1);
    }

    #[test]
    fn test_meter_is_safe_across_threads() {
        use std::sync::Arc;

        let meter = Arc::new(UsageMeter::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let meter = Arc::clone(&meter);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        meter.record_call(&Usage {
                            input_tokens: 1,
                            output_tokens: 1,
                        });
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let snap = meter.snapshot();
        assert_eq!(snap.api_calls, 800);
        assert_eq!(snap.input_tokens, 800);
    }

    #[test]
    fn test_cost_estimate_uses_price_table() {
        // 1M input + 1M output at 3.0 + 15.0 USD per Mtok
        let cost = estimate_cost(1_000_000, 1_000_000);
        assert!((cost - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_usage_costs_nothing() {
        assert_eq!(estimate_cost(0, 0), 0.0);
    }

    #[test]
    fn test_finalize_carries_snapshot_through() {
        let metrics = ExtractionMetrics::finalize(
            3,
            2,
            Duration::from_millis(1500),
            UsageSnapshot {
                api_calls: 3,
                input_tokens: 9000,
                output_tokens: 1500,
                failed_pages: 1,
            },
        );
        assert_eq!(metrics.total_pages, 3);
        assert_eq!(metrics.workers, 2);
        assert_eq!(metrics.api_calls, 3);
        assert_eq!(metrics.failed_pages, 1);
        assert!((metrics.elapsed_seconds - 1.5).abs() < 1e-9);
        assert!(metrics.cost_estimate > 0.0);
    }
}
