use crate::catalog::{Catalog, Category};
use crate::config::EngineConfig;
use crate::errors::{EngineError, InvalidInput};
use crate::model::{EvaluationResult, Verdict};
use crate::on_error::ErrorPolicy;
use crate::providers::oracle::Oracle;
use crate::report::progress::{ProgressEvent, ProgressSink};
use crate::throttle::RequestGate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Cooperative cancellation, checked between categories. An in-flight
/// oracle call is never forcibly cancelled.
#[derive(Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Multi-category evaluation engine: one oracle round-trip per catalog
/// category, answers normalized into ternary verdicts, progress reported
/// per category. Intermediate state is batch-local and never outlives the
/// call, so concurrent batches for different inputs cannot interleave.
pub struct Engine {
    oracle: Arc<dyn Oracle>,
    gate: Arc<dyn RequestGate>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(oracle: Arc<dyn Oracle>, gate: Arc<dyn RequestGate>, config: EngineConfig) -> Self {
        Self {
            oracle,
            gate,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Screen `text` against every catalog category.
    ///
    /// Sequential by default: one oracle round-trip completes before the
    /// next begins, with the request gate enforcing minimum spacing, and
    /// verdicts plus progress events following catalog order exactly. With
    /// `config.parallel = Some(n)`, up to `n` calls are in flight at once;
    /// verdicts are still assembled in catalog order but progress events
    /// fire in completion order.
    ///
    /// The result is all-or-nothing: on failure or cancellation no partial
    /// verdict map is returned.
    pub async fn evaluate(
        &self,
        text: &str,
        catalog: &Catalog,
        progress: Option<ProgressSink>,
        cancel: Option<&CancelFlag>,
    ) -> Result<EvaluationResult, EngineError> {
        self.validate(text)?;

        match self.config.parallel {
            Some(n) if n > 1 => self.evaluate_parallel(text, catalog, progress, cancel, n).await,
            _ => self.evaluate_sequential(text, catalog, progress, cancel).await,
        }
    }

    /// Reject empty or over-long input before any oracle call. Enforcement
    /// never truncates.
    fn validate(&self, text: &str) -> Result<(), InvalidInput> {
        if text.is_empty() {
            return Err(InvalidInput::Empty);
        }
        let chars = text.chars().count();
        let max = self.config.max_input_chars;
        if chars > max {
            return Err(InvalidInput::TooLong { chars, max });
        }
        Ok(())
    }

    async fn evaluate_sequential(
        &self,
        text: &str,
        catalog: &Catalog,
        progress: Option<ProgressSink>,
        cancel: Option<&CancelFlag>,
    ) -> Result<EvaluationResult, EngineError> {
        let total = catalog.len();
        let mut result = EvaluationResult::with_capacity(total);

        for (idx, category) in catalog.iter().enumerate() {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                return Err(EngineError::Cancelled);
            }

            self.gate.acquire().await;
            let verdict = self.screen_one(text, category).await?;
            result.record(category.id(), verdict);
            debug!(category = category.id(), verdict = %verdict, "verdict recorded");

            if let Some(sink) = &progress {
                sink(ProgressEvent {
                    done: idx + 1,
                    total,
                });
            }
        }

        Ok(result)
    }

    /// One category: render, query, normalize. Transport failures are
    /// resolved by the configured error policy.
    async fn screen_one(&self, text: &str, category: &Category) -> Result<Verdict, EngineError> {
        let query = category.render(text);
        match self.oracle.query(&query).await {
            Ok(resp) => Ok(Verdict::from_answer(&resp.text)),
            Err(source) => match self.config.on_error {
                ErrorPolicy::FailFast => Err(EngineError::OracleUnavailable {
                    category: category.id().to_string(),
                    source,
                }),
                ErrorPolicy::SubstituteIndeterminate => {
                    warn!(
                        category = category.id(),
                        error = %source,
                        "oracle call failed, substituting indeterminate"
                    );
                    Ok(Verdict::Indeterminate)
                }
            },
        }
    }

    async fn evaluate_parallel(
        &self,
        text: &str,
        catalog: &Catalog,
        progress: Option<ProgressSink>,
        cancel: Option<&CancelFlag>,
        parallel: usize,
    ) -> Result<EvaluationResult, EngineError> {
        let total = catalog.len();
        let sem = Arc::new(Semaphore::new(parallel));
        let mut join_set = JoinSet::new();

        for (idx, category) in catalog.iter().enumerate() {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                return Err(EngineError::Cancelled);
            }

            let permit = sem
                .clone()
                .acquire_owned()
                .await
                .expect("batch semaphore closed");
            let oracle = self.oracle.clone();
            let gate = self.gate.clone();
            let on_error = self.config.on_error;
            let cancel = cancel.cloned();
            let category = category.clone();
            let query = category.render(text);

            join_set.spawn(async move {
                let _permit = permit;
                if cancel.is_some_and(|c| c.is_cancelled()) {
                    return (idx, category, Err(None));
                }
                gate.acquire().await;
                let verdict = match oracle.query(&query).await {
                    Ok(resp) => Ok(Verdict::from_answer(&resp.text)),
                    Err(source) => match on_error {
                        ErrorPolicy::FailFast => Err(Some(source)),
                        ErrorPolicy::SubstituteIndeterminate => {
                            warn!(
                                category = category.id(),
                                error = %source,
                                "oracle call failed, substituting indeterminate"
                            );
                            Ok(Verdict::Indeterminate)
                        }
                    },
                };
                (idx, category, verdict)
            });
        }

        let mut slots: Vec<Option<Verdict>> = vec![None; total];
        // On fail-fast, surface the failure of the earliest catalog index
        // so the outcome does not depend on completion order.
        let mut failure: Option<(usize, EngineError)> = None;
        let mut cancelled = false;
        let mut done = 0usize;

        while let Some(joined) = join_set.join_next().await {
            let (idx, category, outcome) = match joined {
                Ok(t) => t,
                Err(e) => {
                    return Err(EngineError::OracleUnavailable {
                        category: "unknown".to_string(),
                        source: anyhow::anyhow!("task error: {}", e),
                    })
                }
            };
            match outcome {
                Ok(verdict) => slots[idx] = Some(verdict),
                Err(Some(source)) => {
                    if failure.as_ref().is_none_or(|(i, _)| idx < *i) {
                        failure = Some((
                            idx,
                            EngineError::OracleUnavailable {
                                category: category.id().to_string(),
                                source,
                            },
                        ));
                    }
                }
                Err(None) => cancelled = true,
            }
            done += 1;
            if let Some(sink) = &progress {
                sink(ProgressEvent { done, total });
            }
        }

        if let Some((_, err)) = failure {
            return Err(err);
        }
        if cancelled || cancel.is_some_and(CancelFlag::is_cancelled) {
            return Err(EngineError::Cancelled);
        }

        let mut result = EvaluationResult::with_capacity(total);
        for (category, slot) in catalog.iter().zip(slots) {
            match slot {
                Some(verdict) => result.record(category.id(), verdict),
                // Unreachable once no task failed or was cancelled; keep a
                // hard error rather than a hole in the result map.
                None => {
                    return Err(EngineError::OracleUnavailable {
                        category: category.id().to_string(),
                        source: anyhow::anyhow!("no verdict produced"),
                    })
                }
            }
        }
        Ok(result)
    }
}
