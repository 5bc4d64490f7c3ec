//! Gate verdicts and failure policies

/// Outcome of a single gate evaluation
///
/// Evaluation failures are a first-class outcome, not an `Err`: the
/// pipeline resolves them through the gate's [`FailurePolicy`] instead
/// of aborting the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The message passed the check
    Safe,
    /// The message was flagged
    Unsafe { reason: String },
    /// The check itself could not be completed
    Error { message: String },
}

impl Verdict {
    /// Check whether this verdict passed
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

/// How a gate's [`Verdict::Error`] is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Evaluation errors let the message through
    FailOpen,
    /// Evaluation errors block the message
    FailClosed,
}

/// A policy-resolved verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The message may proceed
    Allow,
    /// The message is blocked
    Block { reason: String },
}

impl FailurePolicy {
    /// Apply this policy to a verdict
    ///
    /// `Safe` always allows and `Unsafe` always blocks; only `Error`
    /// depends on the policy.
    pub fn resolve(&self, verdict: Verdict) -> Resolution {
        match verdict {
            Verdict::Safe => Resolution::Allow,
            Verdict::Unsafe { reason } => Resolution::Block { reason },
            Verdict::Error { message } => match self {
                FailurePolicy::FailOpen => Resolution::Allow,
                FailurePolicy::FailClosed => Resolution::Block { reason: message },
            },
        }
    }
}
