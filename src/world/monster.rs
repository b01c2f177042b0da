//! # Otyugh
//!
//! Otyughs are extremely smelly solitary creatures that occupy caves, never
//! tunnels. One always guards the destination cave. An arrow hit removes
//! half of an otyugh's health; at zero it is a harmless corpse.

use serde::{Deserialize, Serialize};

/// A cave-dwelling monster with health tracked as a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Otyugh {
    health: u32,
}

impl Default for Otyugh {
    fn default() -> Self {
        Self::new()
    }
}

impl Otyugh {
    /// Creates an otyugh at full health.
    pub fn new() -> Self {
        Self { health: 100 }
    }

    /// Current health percentage: 100 full, 50 injured, 0 dead.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Whether this otyugh can still kill a player.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduces health by `percentage`, clamped at zero.
    ///
    /// `percentage` outside `[0, 100]` is an input-contract violation.
    pub(crate) fn reduce_health(&mut self, percentage: u32) {
        debug_assert!(percentage <= 100, "health reduction outside [0, 100]");
        self.health = self.health.saturating_sub(percentage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ARROW_DAMAGE;

    #[test]
    fn two_hits_kill_an_otyugh() {
        let mut otyugh = Otyugh::new();
        assert_eq!(otyugh.health(), 100);
        assert!(otyugh.is_alive());

        otyugh.reduce_health(ARROW_DAMAGE);
        assert_eq!(otyugh.health(), 50);
        assert!(otyugh.is_alive());

        otyugh.reduce_health(ARROW_DAMAGE);
        assert_eq!(otyugh.health(), 0);
        assert!(!otyugh.is_alive());
    }

    #[test]
    fn health_never_goes_below_zero() {
        let mut otyugh = Otyugh::new();
        otyugh.reduce_health(100);
        otyugh.reduce_health(50);
        assert_eq!(otyugh.health(), 0);
    }
}
