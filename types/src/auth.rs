//! Identity passed explicitly into every mutating operation.
//!
//! Authentication itself (login, signup) happens outside this workspace. What
//! reaches the core is only "who is acting", or nobody.

use crate::id::UserId;

/// Read access to the acting identity.
pub trait AuthContext {
    /// The signed-in user, if any.
    fn current_user_id(&self) -> Option<&UserId>;

    fn is_authenticated(&self) -> bool {
        self.current_user_id().is_some()
    }
}

/// A viewer session: either anonymous or signed in as one user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: impl Into<UserId>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

impl AuthContext for Session {
    fn current_user_id(&self) -> Option<&UserId> {
        self.user.as_ref()
    }
}
