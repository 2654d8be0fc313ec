//! Console rendering: humanized labels, the throttled progress sink, and
//! the partition view. Display concerns live here, not in the core.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use triage_core::report::progress::{ProgressEvent, ProgressSink};
use triage_core::report::summary::Partition;

/// Humanize a category id for display: `negative_thinking` → "Negative Thinking".
pub fn humanize_label(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a single progress line for display. Deterministic, unit-testable.
#[must_use]
pub fn format_progress_line(done: usize, total: usize) -> String {
    format!("Screening category {}/{}...", done, total)
}

/// Minimum interval between progress updates to avoid log spam.
const PROGRESS_MIN_INTERVAL_MS: u64 = 200;

/// For large catalogs, emit at most every this many categories.
pub(crate) fn progress_step(total: usize) -> usize {
    if total <= 10 {
        1
    } else {
        std::cmp::max(1, total / 10)
    }
}

/// Returns a progress sink that throttles updates and prints to stderr.
/// Skips entirely when total <= 1. Always emits on done == total.
pub fn default_progress_sink(total: usize) -> Option<ProgressSink> {
    if total <= 1 {
        return None;
    }
    let step = progress_step(total);
    let state = Arc::new(Mutex::new(ThrottleState { last_emit: None }));
    Some(Arc::new(move |ev: ProgressEvent| {
        if ev.total == 0 {
            return;
        }
        let now = Instant::now();
        let should_emit = {
            let mut g = state.lock().expect("progress throttle lock");
            let emit_final = ev.done == ev.total;
            let emit_step = ev.done % step == 0 || ev.done == 1;
            let interval_ok = g
                .last_emit
                .map(|t| {
                    now.saturating_duration_since(t)
                        >= Duration::from_millis(PROGRESS_MIN_INTERVAL_MS)
                })
                .unwrap_or(true);
            let ok = emit_final || (emit_step && interval_ok);
            if ok {
                g.last_emit = Some(now);
            }
            ok
        };
        if should_emit {
            eprintln!("{}", format_progress_line(ev.done, ev.total));
        }
    }))
}

struct ThrottleState {
    last_emit: Option<Instant>,
}

/// Render the partition view of a completed batch.
pub fn print_partition(p: &Partition) {
    println!("Analysis results");
    println!();
    if p.present.is_empty() {
        println!("No concerns detected.");
    } else {
        println!("Detected concerns:");
        for id in &p.present {
            println!("  • {}", humanize_label(id));
        }
    }
    if !p.indeterminate.is_empty() {
        println!();
        println!("Could not assess:");
        for id in &p.indeterminate {
            println!("  • {}", humanize_label(id));
        }
    }
    println!();
    println!(
        "Note: this screening is informational only and is not professional medical advice."
    );
}
