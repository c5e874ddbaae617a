//! Errors shared by the exact and Monte Carlo paths.

/// Errors produced by the pairing-probability engine.
///
/// Every failure here is deterministic in its inputs and reported
/// synchronously; nothing is retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Fewer than two participants: no non-self assignment exists.
    GroupTooSmall(usize),
    /// Monte Carlo path requested with a trial count of zero.
    NoTrials,
    /// The enumerator ran out of candidates somewhere other than the
    /// final-step own-name dead end. Unreachable for valid inputs; kept as
    /// a loud guard instead of letting a skewed matrix escape.
    ExhaustedPool {
        /// Draw-order step at which the pool ran dry.
        step: usize,
    },
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupTooSmall(n) => {
                write!(f, "group size must be >= 2 (got {n})")
            }
            Self::NoTrials => write!(f, "trial count must be >= 1"),
            Self::ExhaustedPool { step } => {
                write!(f, "no valid candidates left at draw step {step}")
            }
        }
    }
}

impl std::error::Error for DrawError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let msg = DrawError::GroupTooSmall(1).to_string();
        assert!(msg.contains("got 1"), "message was: {msg}");
        let msg = DrawError::ExhaustedPool { step: 3 }.to_string();
        assert!(msg.contains("step 3"), "message was: {msg}");
    }
}
