use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{decimal, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub id: u64,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default, with = "decimal")]
    pub balance: f64,
    #[serde(default, with = "decimal")]
    pub interest_rate: f64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl Identified for SavingsAccount {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsTransaction {
    pub id: u64,
    pub account: u64,
    /// "deposit" | "withdrawal" | "auto_save" | "interest"
    pub transaction_type: String,
    #[serde(default, with = "decimal")]
    pub amount: f64,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for SavingsTransaction {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: u64,
    pub name: String,
    #[serde(default, with = "decimal")]
    pub target_amount: f64,
    #[serde(default, with = "decimal")]
    pub current_amount: f64,
    /// "active" | "paused" | "completed"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub target_date: Option<DateTime<Utc>>,
}

impl Identified for SavingsGoal {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AmountRequest {
    #[serde(with = "decimal")]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
