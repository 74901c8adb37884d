//! Per-iteration observation hooks
//!
//! Observers receive the rank vector and convergence difference at every
//! iteration without coupling to the engine loop. Use cases include tracing
//! convergence while tuning parameters and capturing intermediate vectors
//! for debugging.

/// Receives a notification after each power-iteration step.
pub trait IterationObserver {
    /// Called once per iteration with the 1-based iteration number, the
    /// rank vector just produced, and the L1 difference from the previous
    /// vector.
    fn on_iteration(&mut self, iteration: usize, scores: &[f64], delta: f64);
}

/// No-op observer — the default when no observation is requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    #[inline]
    fn on_iteration(&mut self, _iteration: usize, _scores: &[f64], _delta: f64) {
        // Intentionally empty.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_observer_records_iterations() {
        #[derive(Default)]
        struct Recorder {
            deltas: Vec<f64>,
            last_iteration: usize,
        }

        impl IterationObserver for Recorder {
            fn on_iteration(&mut self, iteration: usize, _scores: &[f64], delta: f64) {
                self.deltas.push(delta);
                self.last_iteration = iteration;
            }
        }

        let mut recorder = Recorder::default();
        recorder.on_iteration(1, &[0.5, 0.5], 0.1);
        recorder.on_iteration(2, &[0.6, 0.4], 0.05);

        assert_eq!(recorder.deltas, vec![0.1, 0.05]);
        assert_eq!(recorder.last_iteration, 2);
    }

    #[test]
    fn test_observer_as_trait_object() {
        let mut observer: Box<dyn IterationObserver> = Box::new(NoopObserver);
        observer.on_iteration(1, &[1.0], 0.0);
    }
}
