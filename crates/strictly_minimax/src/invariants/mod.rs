//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every session
//! transition. They are checked in debug builds and testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cached_turn;
pub mod mark_parity;
pub mod outcome_consistent;

pub use cached_turn::CachedTurnInvariant;
pub use mark_parity::MarkParityInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MarkParityInvariant,
    CachedTurnInvariant,
    OutcomeConsistentInvariant,
);

/// Panics in debug builds if any session invariant is violated.
pub fn assert_invariants(session: &crate::session::GameSession) {
    let result = SessionInvariants::check_all(session);
    debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
}
