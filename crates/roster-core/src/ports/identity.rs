//! CallerIdentity port - 呼び出し元の識別
//!
//! 認可は行いません。create 時に `lecturerId` として記録するだけです。

use crate::domain::Principal;

/// Supplies the identity of whoever is invoking the current operation.
pub trait CallerIdentity: Send + Sync {
    fn caller(&self) -> Principal;
}

/// Always reports the same principal (CLI, tests).
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    principal: Principal,
}

impl StaticIdentity {
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principal: Principal::new(principal),
        }
    }
}

impl CallerIdentity for StaticIdentity {
    fn caller(&self) -> Principal {
        self.principal.clone()
    }
}
