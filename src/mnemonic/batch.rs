//! Batch Self-Test
//!
//! Runs the generator repeatedly and collects labeled failures. Trials are
//! independent; the word list is only borrowed. Cancellation is checked
//! between trials (sequential) or between chunks (parallel), so a cancelled
//! report always covers trials `1..=total_generated` with no gaps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::types::BatchReport;
use crate::{log_info, log_warn};

use super::{generate_mnemonic, Mnemonic, MnemonicResult, WordList};

const MODULE: &str = "mnemonic::batch";

/// Default number of trials per parallel chunk
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Shared cancellation signal for a running batch
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the batch stop before its next trial
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Builder for a batch self-test run
pub struct BatchRunner<'a> {
    word_list: &'a WordList,
    trials: usize,
    parallel: bool,
    chunk_size: usize,
    cancel: Option<CancelFlag>,
}

impl<'a> BatchRunner<'a> {
    pub fn new(word_list: &'a WordList) -> Self {
        Self {
            word_list,
            trials: 100,
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            cancel: None,
        }
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Trials per parallel chunk; clamped to at least 1
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn run(self) -> BatchReport {
        let word_list = self.word_list;
        let mut errors = Vec::new();
        let mut attempted = 0;
        let mut cancelled = false;

        if self.parallel {
            let mut start = 0;
            while start < self.trials {
                if self.is_cancelled() {
                    cancelled = true;
                    break;
                }
                let end = (start + self.chunk_size).min(self.trials);
                let outcomes: Vec<MnemonicResult<Mnemonic>> = (start..end)
                    .into_par_iter()
                    .map(|_| generate_mnemonic(word_list))
                    .collect();
                for (offset, outcome) in outcomes.iter().enumerate() {
                    record(&mut errors, start + offset + 1, outcome);
                }
                attempted = end;
                start = end;
            }
        } else {
            for trial in 1..=self.trials {
                if self.is_cancelled() {
                    cancelled = true;
                    break;
                }
                record(&mut errors, trial, &generate_mnemonic(word_list));
                attempted = trial;
            }
        }

        let report = BatchReport {
            success: errors.is_empty(),
            total_generated: attempted,
            errors,
            cancelled,
        };

        if cancelled {
            log_warn!(
                MODULE,
                "Batch cancelled",
                attempted = report.total_generated,
                requested = self.trials,
            );
        } else {
            log_info!(
                MODULE,
                "Batch complete",
                total = report.total_generated,
                failures = report.failure_count(),
                parallel = self.parallel,
            );
        }

        report
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }
}

fn record(errors: &mut Vec<String>, trial: usize, outcome: &MnemonicResult<Mnemonic>) {
    if let Err(e) = outcome {
        errors.push(format!("Generation {} failed: {}", trial, e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::test_batch;

    fn alphabet_list() -> WordList {
        WordList::new(
            "apple banana cherry date eagle fig grape hotel igloo jolly kiwi lemon mango nut \
             olive peach quince radish squash tomato umbrella vanilla walnut xylophone yam zebra"
                .split_whitespace(),
        )
        .unwrap()
    }

    #[test]
    fn test_batch_on_sufficient_list() {
        let report = test_batch(&alphabet_list(), 100);
        assert_eq!(
            report,
            BatchReport {
                success: true,
                total_generated: 100,
                errors: Vec::new(),
                cancelled: false,
            }
        );
    }

    #[test]
    fn test_batch_labels_every_failure() {
        let small = WordList::new(["apple", "banana"]).unwrap();
        let report = test_batch(&small, 3);

        assert!(!report.success);
        assert_eq!(report.total_generated, 3);
        assert_eq!(report.errors.len(), 3);
        assert_eq!(
            report.errors[0],
            "Generation 1 failed: Word list must contain at least 26 words, got 2"
        );
        assert!(report.errors[2].starts_with("Generation 3 failed:"));
    }

    #[test]
    fn test_parallel_batch_keeps_trial_order() {
        let small = WordList::new(["apple", "banana"]).unwrap();
        let report = BatchRunner::new(&small)
            .trials(10)
            .parallel(true)
            .chunk_size(3)
            .run();

        assert_eq!(report.total_generated, 10);
        for (i, msg) in report.errors.iter().enumerate() {
            assert!(msg.starts_with(&format!("Generation {} failed:", i + 1)));
        }
    }

    #[test]
    fn test_parallel_batch_success() {
        let report = BatchRunner::new(&WordList::bip39_english())
            .trials(500)
            .parallel(true)
            .run();
        assert!(report.success);
        assert_eq!(report.total_generated, 500);
    }

    #[test]
    fn test_cancelled_before_start() {
        let flag = CancelFlag::new();
        flag.cancel();

        let report = BatchRunner::new(&alphabet_list())
            .trials(50)
            .cancel_flag(flag.clone())
            .run();

        assert!(report.cancelled);
        assert!(report.success);
        assert_eq!(report.total_generated, 0);
        assert!(flag.is_cancelled());
    }

    fn cancel_mid_run(parallel: bool) -> BatchReport {
        let small = WordList::new(["apple", "banana"]).unwrap();
        let flag = CancelFlag::new();
        let runner = BatchRunner::new(&small)
            .trials(50_000_000)
            .parallel(parallel)
            .chunk_size(1000)
            .cancel_flag(flag.clone());

        std::thread::scope(|s| {
            s.spawn(|| {
                std::thread::sleep(std::time::Duration::from_millis(30));
                flag.cancel();
            });
            runner.run()
        })
    }

    fn assert_contiguous_prefix(report: &BatchReport) {
        assert!(report.cancelled);
        assert!(!report.success);
        assert!(report.total_generated > 0);
        assert!(report.total_generated < 50_000_000);
        assert_eq!(report.errors.len(), report.total_generated);
        for (i, msg) in report.errors.iter().enumerate() {
            assert!(msg.starts_with(&format!("Generation {} failed:", i + 1)), "{}", msg);
        }
    }

    #[test]
    fn test_cancel_mid_run_sequential() {
        let report = cancel_mid_run(false);
        assert_contiguous_prefix(&report);
    }

    #[test]
    fn test_cancel_mid_run_parallel() {
        let report = cancel_mid_run(true);
        assert_contiguous_prefix(&report);
        assert_eq!(report.total_generated % 1000, 0);
    }

    #[test]
    fn test_zero_trials() {
        let report = test_batch(&alphabet_list(), 0);
        assert!(report.success);
        assert_eq!(report.total_generated, 0);
        assert!(!report.cancelled);
    }
}
