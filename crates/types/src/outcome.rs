use alloy::primitives::{TxHash, U256};
use core::fmt;

/// What happened to one cart line during checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseStatus {
    /// The wallet accepted the transaction.
    Submitted(TxHash),
    /// Encoding or submission failed.
    Failed(String),
}

/// The result of submitting one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    title: String,
    quantity: u32,
    status: PurchaseStatus,
}

impl PurchaseOutcome {
    /// A line whose transaction was submitted.
    pub fn submitted(title: impl Into<String>, quantity: u32, tx_hash: TxHash) -> Self {
        Self { title: title.into(), quantity, status: PurchaseStatus::Submitted(tx_hash) }
    }

    /// A line that failed.
    pub fn failed(title: impl Into<String>, quantity: u32, error: impl fmt::Display) -> Self {
        Self { title: title.into(), quantity, status: PurchaseStatus::Failed(error.to_string()) }
    }

    /// Get the offering title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the quantity that was attempted.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the status.
    pub const fn status(&self) -> &PurchaseStatus {
        &self.status
    }

    /// True if the transaction was submitted.
    pub const fn is_success(&self) -> bool {
        matches!(self.status, PurchaseStatus::Submitted(_))
    }

    /// Get the transaction hash, if submitted.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        match self.status {
            PurchaseStatus::Submitted(hash) => Some(hash),
            PurchaseStatus::Failed(_) => None,
        }
    }

    /// Get the failure message, if failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            PurchaseStatus::Submitted(_) => None,
            PurchaseStatus::Failed(message) => Some(message),
        }
    }
}

impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            PurchaseStatus::Submitted(hash) => write!(f, "{}: {hash}", self.title),
            PurchaseStatus::Failed(message) => write!(f, "{}: {message}", self.title),
        }
    }
}

/// Aggregate verdict of a checkout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CheckoutSummary {
    /// Every line was submitted.
    AllSucceeded {
        /// Number of lines.
        total: usize,
    },
    /// Some lines were submitted and some failed.
    Partial {
        /// Number of submitted lines.
        successes: usize,
        /// Number of lines.
        total: usize,
    },
    /// No line was submitted.
    AllFailed {
        /// Number of lines.
        total: usize,
    },
}

impl CheckoutSummary {
    /// Classify `successes` out of `total`.
    pub const fn new(successes: usize, total: usize) -> Self {
        if successes == 0 {
            Self::AllFailed { total }
        } else if successes >= total {
            Self::AllSucceeded { total }
        } else {
            Self::Partial { successes, total }
        }
    }
}

impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllSucceeded { total } => {
                write!(f, "All purchases successful! ({total}/{total})")
            }
            Self::Partial { successes, total } => {
                write!(f, "Partial success: {successes}/{total} purchases completed")
            }
            Self::AllFailed { total } => write!(f, "All purchases failed (0/{total})"),
        }
    }
}

/// Everything a checkout produced, one outcome per cart line in cart order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutResult {
    outcomes: Vec<PurchaseOutcome>,
    total_cost: U256,
}

impl CheckoutResult {
    /// Create a new result.
    pub const fn new(outcomes: Vec<PurchaseOutcome>, total_cost: U256) -> Self {
        Self { outcomes, total_cost }
    }

    /// Get the per-line outcomes.
    pub fn outcomes(&self) -> &[PurchaseOutcome] {
        &self.outcomes
    }

    /// Get the total cost of the cart, fees included, as computed before
    /// submission.
    pub const fn total_cost(&self) -> U256 {
        self.total_cost
    }

    /// Number of submitted lines.
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_success()).count()
    }

    /// Number of lines attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Classify the result.
    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::new(self.successes(), self.total())
    }

    /// Consume the result, returning the outcomes.
    pub fn into_outcomes(self) -> Vec<PurchaseOutcome> {
        self.outcomes
    }
}
