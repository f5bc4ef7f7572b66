use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{decimal, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetric {
    pub id: u64,
    #[serde(default)]
    pub metric_type: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, with = "decimal")]
    pub value: f64,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl Identified for BusinessMetric {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    pub id: u64,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, with = "decimal")]
    pub inflow: f64,
    #[serde(default, with = "decimal")]
    pub outflow: f64,
    #[serde(default, with = "decimal")]
    pub net_flow: f64,
}

impl Identified for CashFlowEntry {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInsight {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub insight_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub is_viewed: bool,
    #[serde(default)]
    pub is_implemented: bool,
}

impl Identified for BusinessInsight {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub rule_type: Option<String>,
    #[serde(default, with = "decimal")]
    pub threshold: f64,
    #[serde(default)]
    pub is_active: bool,
}

impl Identified for AlertRule {
    fn id(&self) -> u64 {
        self.id
    }
}
