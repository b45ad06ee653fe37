use crate::classify::classify;
use crate::models::{SearchQuery, SearchResult, SessionState};
use crate::traits::SimilarityBackend;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// One request/response cycle against the similarity service.
///
/// Each `submit` supersedes any in-flight one: the session hands out a
/// generation ticket per submission and a response whose ticket is no longer
/// current is dropped without touching state. That keeps a slow first reply
/// from overwriting a fast second one.
pub struct SearchSession<B> {
    backend: B,
    state: Mutex<SessionState>,
    generation: AtomicU64,
}

impl<B> SearchSession<B>
where
    B: SimilarityBackend + Send + Sync,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(SessionState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Submits a snapshot of the candidate proposal. Goes Loading before the
    /// request is issued, then settles into Succeeded or Failed unless a
    /// newer submission took over in the meantime. Empty fields are allowed;
    /// the service decides what they mean.
    pub async fn submit(&self, query: SearchQuery) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_state() = SessionState::Loading;

        let outcome = self.backend.find_similar(&query).await;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != ticket {
            // Superseded while in flight; the fresher submission owns the state.
            return;
        }

        *state = match outcome {
            Ok(results) => SessionState::Succeeded {
                recommendation: best_score(&results).map(classify),
                results,
            },
            Err(error) => SessionState::Failed {
                message: error.to_string(),
            },
        };
    }

    /// Snapshot of the session, safe to poll at any point including while a
    /// submission is in flight.
    pub fn current_state(&self) -> SessionState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Maximum matching score of a response set, absent when it is empty. Ties
/// are irrelevant since only the value feeds the classifier.
fn best_score(results: &[SearchResult]) -> Option<f64> {
    results
        .iter()
        .map(|result| result.matching_score)
        .max_by(f64::total_cmp)
}
