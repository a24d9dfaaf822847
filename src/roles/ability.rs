//! Use-limited abilities.

use crate::error::RoleError;

/// How many times a limited ability may be used in one game.
pub const DEFAULT_ABILITY_USES: usize = 3;

/// Counts uses of a limited ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseCounter {
    used: usize,
    limit: usize,
}

impl UseCounter {
    /// Create a counter allowing `limit` uses.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { used: 0, limit }
    }

    /// Uses left before the ability is exhausted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit - self.used
    }

    /// Record one use, failing once the limit is reached.
    pub fn try_use(&mut self, role: &'static str) -> Result<(), RoleError> {
        if self.used >= self.limit {
            return Err(RoleError::AbilityExhausted { role, limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }
}

impl Default for UseCounter {
    fn default() -> Self {
        Self::new(DEFAULT_ABILITY_USES)
    }
}

/// A limited "obscure the vote" ability.
///
/// Using it arms a pending flag that the next vote resolution consumes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct VoteObscurer {
    uses: UseCounter,
    pending: bool,
}

impl VoteObscurer {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            uses: UseCounter::new(limit),
            pending: false,
        }
    }

    pub(crate) fn activate(&mut self, role: &'static str) -> Result<(), RoleError> {
        if self.pending {
            return Err(RoleError::AbilityAlreadyActive { role });
        }
        self.uses.try_use(role)?;
        self.pending = true;
        Ok(())
    }

    pub(crate) fn remaining(&self) -> usize {
        self.uses.remaining()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_limit() {
        let mut counter = UseCounter::new(2);
        assert!(counter.try_use("Maeve").is_ok());
        assert!(counter.try_use("Maeve").is_ok());
        assert_eq!(counter.remaining(), 0);
        assert_eq!(
            counter.try_use("Maeve"),
            Err(RoleError::AbilityExhausted { role: "Maeve", limit: 2 })
        );
    }

    #[test]
    fn test_obscurer_is_consumed() {
        let mut obscurer = VoteObscurer::new(3);
        obscurer.activate("Maeve").unwrap();
        assert!(obscurer.is_pending());
        assert_eq!(obscurer.remaining(), 2);
        assert_eq!(
            obscurer.activate("Maeve"),
            Err(RoleError::AbilityAlreadyActive { role: "Maeve" })
        );
        assert!(obscurer.take());
        assert!(!obscurer.take());
        obscurer.activate("Maeve").unwrap();
        assert_eq!(obscurer.remaining(), 1);
    }
}
