//! Caregiver profile and its eco-credit wallet.

use crate::core::constants::{DEFAULT_CAREGIVER_NAME, STARTING_ECO_CREDITS};
use crate::error::{CareError, CareResult};
use serde::{Deserialize, Serialize};

/// Opaque identity handed over by the sign-in layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaregiverProfile {
    pub name: String,
    pub user_id: String,
    pub email: String,
    pub eco_credits: u32,
    #[serde(default)]
    pub total_credits_earned: u64,
    #[serde(default)]
    pub premium: bool,
}

impl CaregiverProfile {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_CAREGIVER_NAME.to_string(),
            user_id: String::new(),
            email: String::new(),
            eco_credits: STARTING_ECO_CREDITS,
            total_credits_earned: 0,
            premium: false,
        }
    }

    /// A fresh profile named after the signed-in user when a display name is available.
    pub fn from_identity(identity: &Identity) -> Self {
        let name = identity
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_CAREGIVER_NAME)
            .to_string();
        Self {
            name,
            user_id: identity.user_id.clone(),
            email: identity.email.clone().unwrap_or_default(),
            ..Self::new()
        }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.eco_credits >= cost
    }

    pub fn spend(&mut self, cost: u32) -> CareResult<()> {
        spend_credits(&mut self.eco_credits, cost)
    }

    /// Credits earned through eco-friendly activity outside the pet game.
    pub fn earn(&mut self, amount: u32) {
        self.eco_credits = self.eco_credits.saturating_add(amount);
        self.total_credits_earned += u64::from(amount);
        tracing::info!(amount, balance = self.eco_credits, "Eco-credits earned");
    }
}

impl Default for CaregiverProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Debits `cost` if the balance covers it. Leaves the balance untouched otherwise.
pub fn spend_credits(credits: &mut u32, cost: u32) -> CareResult<()> {
    if *credits < cost {
        return Err(CareError::InsufficientFunds {
            cost,
            balance: *credits,
        });
    }
    *credits -= cost;
    Ok(())
}
