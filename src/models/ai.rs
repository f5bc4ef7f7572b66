use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{decimal, Identified};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPrediction {
    pub id: u64,
    #[serde(default)]
    pub transaction: Option<u64>,
    #[serde(default)]
    pub predicted_category: Option<String>,
    #[serde(default, with = "decimal")]
    pub confidence: f64,
    #[serde(default)]
    pub is_accepted: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for CategoryPrediction {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub is_validated: bool,
}

impl Identified for TrainingSample {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub id: u64,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default, with = "decimal")]
    pub accuracy: f64,
    #[serde(default)]
    pub evaluated_at: Option<DateTime<Utc>>,
}

impl Identified for ModelPerformance {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Petición de predicción de categoría para un texto libre
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionFeedback {
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_category: Option<u64>,
}
