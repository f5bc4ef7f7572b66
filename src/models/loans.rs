use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{decimal, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: u64,
    pub name: String,
    #[serde(default, with = "decimal")]
    pub min_amount: f64,
    #[serde(default, with = "decimal")]
    pub max_amount: f64,
    #[serde(default, with = "decimal")]
    pub interest_rate: f64,
    #[serde(default)]
    pub interest_type: Option<String>,
    #[serde(default)]
    pub repayment_frequency: Option<String>,
    #[serde(default)]
    pub min_tenure_days: Option<u32>,
    #[serde(default)]
    pub max_tenure_days: Option<u32>,
    #[serde(default)]
    pub is_active: bool,
}

impl Identified for LoanProduct {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: u64,
    #[serde(default)]
    pub loan_number: Option<String>,
    #[serde(default)]
    pub loan_product: Option<u64>,
    #[serde(default, with = "decimal")]
    pub principal_amount: f64,
    #[serde(default, with = "decimal")]
    pub total_amount: f64,
    #[serde(default, with = "decimal")]
    pub amount_paid: f64,
    #[serde(default, with = "decimal")]
    pub outstanding_balance: f64,
    #[serde(default)]
    pub tenure_days: Option<u32>,
    /// "applied" | "approved" | "rejected" | "disbursed" | "active" | "repaid" | "defaulted"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub days_past_due: u32,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Loan {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRepayment {
    pub id: u64,
    pub loan: u64,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub repayment_type: Option<String>,
    #[serde(default, with = "decimal")]
    pub amount: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Identified for LoanRepayment {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanApplication {
    pub loan_product: u64,
    #[serde(with = "decimal")]
    pub principal_amount: f64,
    pub tenure_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanPayment {
    #[serde(with = "decimal")]
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}
