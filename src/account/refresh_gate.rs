//! Weekly refresh allowance and subscription status.
//!
//! Free users may regenerate their plan once per cooldown period; an active
//! subscription lifts the limit. A refresh stamps the current time, which
//! also feeds the plan seed so the next plan differs.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const REFRESH_COOLDOWN_DAYS: i64 = 7;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshState {
    pub last_refresh: Option<DateTime<Utc>>,
    pub subscription_active: bool,
    /// Last day the subscription is valid. `None` with the flag set is a
    /// permanent grant.
    pub subscription_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GateState {
    SubscriptionActive,
    Eligible,
    Cooling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RefreshOutcome {
    Refreshed { at: DateTime<Utc> },
    Denied { days_left: i64 },
}

impl RefreshState {
    pub fn has_active_subscription(&self, today: NaiveDate) -> bool {
        self.subscription_active
            && self.subscription_expiry.map_or(true, |expiry| expiry >= today)
    }

    /// When the next free refresh becomes available, if one was ever used.
    pub fn next_free_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
            .map(|last| last + Duration::days(REFRESH_COOLDOWN_DAYS))
    }

    pub fn gate_state(&self, now: DateTime<Utc>) -> GateState {
        if self.has_active_subscription(now.date_naive()) {
            return GateState::SubscriptionActive;
        }
        match self.next_free_refresh() {
            Some(next) if now < next => GateState::Cooling,
            _ => GateState::Eligible,
        }
    }

    pub fn can_refresh(&self, now: DateTime<Utc>) -> bool {
        self.gate_state(now) != GateState::Cooling
    }

    /// Whole days until the next free refresh, counting a partial day as a
    /// full one. 0 when a refresh is possible now.
    pub fn days_until_next_refresh(&self, now: DateTime<Utc>) -> i64 {
        if self.gate_state(now) != GateState::Cooling {
            return 0;
        }
        let remaining = match self.next_free_refresh() {
            Some(next) => next - now,
            None => return 0,
        };
        if remaining <= Duration::zero() {
            return 0;
        }
        remaining.num_seconds().div_euclid(SECONDS_PER_DAY) + 1
    }

    /// Stamps `now` as the last refresh when allowed. A denied refresh leaves
    /// the state untouched and reports the remaining wait.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> RefreshOutcome {
        if !self.can_refresh(now) {
            let days_left = self.days_until_next_refresh(now);
            log::info!("Refresh denied, {} day(s) left", days_left);
            return RefreshOutcome::Denied { days_left };
        }
        self.last_refresh = Some(now);
        log::info!("Plan refreshed at {}", now);
        RefreshOutcome::Refreshed { at: now }
    }
}
