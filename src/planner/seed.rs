use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

use crate::account::UserId;

const GUEST_MARKER: &str = "guest";

// FNV-1a, 64 bit
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedIdentity {
    User(UserId),
    Guest,
}

/// Components that fully determine a weekly plan's recipe draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanSeed {
    pub identity: SeedIdentity,
    pub iso_week: u32,
    /// Epoch seconds of the last explicit refresh, 0 if never refreshed.
    pub refresh_epoch: i64,
}

impl PlanSeed {
    pub fn new(identity: SeedIdentity, now: DateTime<Utc>, last_refresh: Option<DateTime<Utc>>) -> Self {
        Self {
            identity,
            iso_week: now.iso_week().week(),
            refresh_epoch: last_refresh.map(|t| t.timestamp()).unwrap_or(0),
        }
    }

    /// Stable 64-bit digest of the composite key.
    pub fn digest(&self) -> u64 {
        self.to_string().bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
        })
    }

    /// A fresh generator for one planning call. Never shared between calls.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.digest())
    }
}

impl fmt::Display for PlanSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity {
            SeedIdentity::User(id) => write!(f, "{}-{}-{}", id, self.iso_week, self.refresh_epoch),
            SeedIdentity::Guest => write!(f, "{}-{}-{}", GUEST_MARKER, self.iso_week, self.refresh_epoch),
        }
    }
}
