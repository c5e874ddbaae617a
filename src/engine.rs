//! Strategy dispatch and presentation labels.
//!
//! The dispatcher owns no probability logic. It validates the group size,
//! picks exact enumeration below a configurable threshold and Monte Carlo
//! sampling at or above it, and bundles the finished matrix with labels.
//! Both strategies stay directly callable at any `n` for tests and callers
//! that want to force a path.

use rand::prelude::*;

use crate::error::DrawError;
use crate::exact::exact_matrix;
use crate::monte_carlo::{monte_carlo_matrix_with_rng, DEFAULT_TRIALS};

/// Group sizes below this are enumerated exactly; at or above it the engine
/// falls back to sampling. Exact enumeration visits on the order of
/// `(n-1)!` branches, so the cutoff trades exactness against blow-up.
pub const DEFAULT_EXACT_THRESHOLD: usize = 10;

/// Which strategy produced a [`PairingReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Exact,
    MonteCarlo,
}

/// A finished pair-probability matrix with presentation labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingReport {
    /// `matrix[i][j]` = probability that participant `i` draws `j`.
    pub matrix: Vec<Vec<f64>>,
    /// One label per participant, in index order ("A", "B", ...).
    pub labels: Vec<String>,
    /// The strategy that ran.
    pub method: Method,
}

/// Configurable entry point for the probability engine.
///
/// Defaults match [`DEFAULT_EXACT_THRESHOLD`] and
/// [`DEFAULT_TRIALS`](crate::monte_carlo::DEFAULT_TRIALS); the seed is
/// unset, so Monte Carlo runs are independent across calls.
#[derive(Debug, Clone)]
pub struct ProbabilityEngine {
    exact_threshold: usize,
    trials: usize,
    seed: Option<u64>,
}

impl Default for ProbabilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilityEngine {
    /// Create an engine with default dispatch policy.
    pub fn new() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }

    /// Set the group size at which dispatch switches to Monte Carlo.
    pub fn with_exact_threshold(mut self, threshold: usize) -> Self {
        self.exact_threshold = threshold;
        self
    }

    /// Set the Monte Carlo trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set a random seed for reproducible Monte Carlo runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Compute the pair matrix and labels for `group_size` participants.
    pub fn compute(&self, group_size: usize) -> Result<PairingReport, DrawError> {
        if group_size < 2 {
            return Err(DrawError::GroupTooSmall(group_size));
        }

        let (matrix, method) = if group_size < self.exact_threshold {
            (exact_matrix(group_size)?, Method::Exact)
        } else {
            let mut rng: Box<dyn RngCore> = match self.seed {
                Some(s) => Box::new(StdRng::seed_from_u64(s)),
                None => Box::new(rand::rng()),
            };
            let matrix = monte_carlo_matrix_with_rng(group_size, self.trials, &mut *rng)?;
            (matrix, Method::MonteCarlo)
        };

        Ok(PairingReport {
            matrix,
            labels: participant_labels(group_size),
            method,
        })
    }
}

/// One-call boundary for the surrounding application: default dispatch
/// policy, caller-supplied trial count.
pub fn compute_probability_matrix(
    group_size: usize,
    trials: usize,
) -> Result<(Vec<Vec<f64>>, Vec<String>), DrawError> {
    let report = ProbabilityEngine::new()
        .with_trials(trials)
        .compute(group_size)?;
    Ok((report.matrix, report.labels))
}

/// Presentation labels in participant order: "A".."Z", then "AA", "AB", ...
///
/// Purely cosmetic; the probability computation never sees them.
pub fn participant_labels(n: usize) -> Vec<String> {
    (0..n).map(column_label).collect()
}

/// Spreadsheet-style letter label for a zero-based index.
fn column_label(mut index: usize) -> String {
    let mut reversed = String::new();
    loop {
        reversed.push((b'A' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    reversed.chars().rev().collect()
}
