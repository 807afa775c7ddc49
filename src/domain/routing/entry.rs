//! Session-entry routing as a terminal state transition.
//!
//! Entering the dashboard root is a two-phase machine: a resolved session
//! (`Resolving`) turns into exactly one redirect (`Redirected`), and
//! `Redirected` is terminal. The transition consumes the entry value, so a
//! second redirect for the same render does not typecheck - the "no further
//! execution after redirect" contract is enforced by ownership rather than
//! by control-flow discipline.

use crate::domain::foundation::{AuthenticatedUser, StateMachine};

use super::Destination;

/// Phase of a single session entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// Session resolved, destination not yet issued.
    Resolving,
    /// Redirect issued. Terminal: a new session entry starts a fresh machine.
    Redirected,
}

impl StateMachine for EntryPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (EntryPhase::Resolving, EntryPhase::Redirected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            EntryPhase::Resolving => vec![EntryPhase::Redirected],
            EntryPhase::Redirected => vec![],
        }
    }
}

/// A dashboard-root entry for one resolved user, in the `Resolving` phase.
#[derive(Debug)]
pub struct SessionEntry {
    user: AuthenticatedUser,
}

impl SessionEntry {
    /// Begins a session entry for a resolved user.
    pub fn new(user: AuthenticatedUser) -> Self {
        Self { user }
    }

    /// The user this entry routes.
    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    /// Current phase of the machine.
    pub fn phase(&self) -> EntryPhase {
        EntryPhase::Resolving
    }

    /// Resolves the destination for the user's plan and moves to the
    /// terminal phase, consuming the entry.
    pub fn redirect(self) -> Redirected {
        Redirected {
            destination: Destination::for_plan(self.user.plan),
        }
    }
}

/// Terminal phase of a session entry: the redirect has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirected {
    destination: Destination,
}

impl Redirected {
    /// The destination the entry resolved to.
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// The literal route path to navigate to.
    pub fn path(&self) -> &'static str {
        self.destination.path()
    }

    /// Current phase of the machine.
    pub fn phase(&self) -> EntryPhase {
        EntryPhase::Redirected
    }
}
