//! Execution order ranks for step categories.

use std::fmt;

/// Rank used by a scenario runner to sequence step groups.
///
/// Variants are declared in execution order, so the derived [`Ord`] sorts
/// setup before transitions before assertions.
///
/// # Examples
///
/// ```
/// use stepscan_policy::ExecutionOrder;
///
/// assert!(ExecutionOrder::SetupState < ExecutionOrder::Transition);
/// assert_eq!(ExecutionOrder::Assertion.rank(), 6);
/// assert!(ExecutionOrder::ConsecutiveAssertion.is_consecutive());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExecutionOrder {
    /// One-off initialisation before any state is set up.
    Initialize,
    /// A `Given` step.
    SetupState,
    /// An `And` following a `Given`.
    ConsecutiveSetupState,
    /// A `When` step.
    Transition,
    /// An `And` following a `When`.
    ConsecutiveTransition,
    /// A `Then` step.
    Assertion,
    /// An `And` following a `Then`.
    ConsecutiveAssertion,
    /// Cleanup after all assertions.
    TearDown,
}

impl ExecutionOrder {
    /// Every rank in execution order.
    pub const ALL: [Self; 8] = [
        Self::Initialize,
        Self::SetupState,
        Self::ConsecutiveSetupState,
        Self::Transition,
        Self::ConsecutiveTransition,
        Self::Assertion,
        Self::ConsecutiveAssertion,
        Self::TearDown,
    ];

    /// Return the integer rank, starting at 1 for [`Self::Initialize`].
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Initialize => 1,
            Self::SetupState => 2,
            Self::ConsecutiveSetupState => 3,
            Self::Transition => 4,
            Self::ConsecutiveTransition => 5,
            Self::Assertion => 6,
            Self::ConsecutiveAssertion => 7,
            Self::TearDown => 8,
        }
    }

    /// Look up the order carrying `rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepscan_policy::ExecutionOrder;
    ///
    /// assert_eq!(ExecutionOrder::from_rank(4), Some(ExecutionOrder::Transition));
    /// assert_eq!(ExecutionOrder::from_rank(0), None);
    /// ```
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.rank() == rank)
    }

    /// Returns `true` for the `And` continuations of a group.
    #[must_use]
    pub const fn is_consecutive(self) -> bool {
        matches!(
            self,
            Self::ConsecutiveSetupState | Self::ConsecutiveTransition | Self::ConsecutiveAssertion
        )
    }

    /// Return the variant name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "Initialize",
            Self::SetupState => "SetupState",
            Self::ConsecutiveSetupState => "ConsecutiveSetupState",
            Self::Transition => "Transition",
            Self::ConsecutiveTransition => "ConsecutiveTransition",
            Self::Assertion => "Assertion",
            Self::ConsecutiveAssertion => "ConsecutiveAssertion",
            Self::TearDown => "TearDown",
        }
    }
}

impl fmt::Display for ExecutionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
