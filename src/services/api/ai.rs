use std::rc::Rc;

use serde_json::Value;

use crate::models::{
    CategoryPrediction, ListResponse, ModelPerformance, PredictRequest, PredictionFeedback,
    TrainingSample,
};
use crate::services::error::ApiError;
use crate::services::http::ApiClient;

pub struct AiApi {
    client: Rc<ApiClient>,
}

impl AiApi {
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    // Predicciones de categoría
    pub async fn get_predictions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<CategoryPrediction>, ApiError> {
        self.client.get_query("/ai/predictions/", params).await
    }

    pub async fn get_prediction(&self, id: u64) -> Result<CategoryPrediction, ApiError> {
        self.client.get(&format!("/ai/predictions/{}/", id)).await
    }

    pub async fn create_prediction(&self, data: &Value) -> Result<CategoryPrediction, ApiError> {
        self.client.post("/ai/predictions/", data).await
    }

    pub async fn update_prediction(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<CategoryPrediction, ApiError> {
        self.client.put(&format!("/ai/predictions/{}/", id), data).await
    }

    pub async fn delete_prediction(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/ai/predictions/{}/", id)).await
    }

    /// La predicción corre en el servidor; el cliente solo espeja el resultado
    pub async fn predict_category(
        &self,
        data: &PredictRequest,
    ) -> Result<CategoryPrediction, ApiError> {
        self.client.post("/ai/predictions/predict/", data).await
    }

    pub async fn provide_feedback(
        &self,
        id: u64,
        data: &PredictionFeedback,
    ) -> Result<CategoryPrediction, ApiError> {
        self.client.post(&format!("/ai/predictions/{}/provide_feedback/", id), data).await
    }

    pub async fn get_accuracy_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/ai/predictions/accuracy_stats/").await
    }

    pub async fn get_recent_predictions(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<CategoryPrediction>, ApiError> {
        self.client.get_query("/ai/predictions/recent_predictions/", params).await
    }

    // Datos de entrenamiento
    pub async fn get_training_data(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<TrainingSample>, ApiError> {
        self.client.get_query("/ai/training-data/", params).await
    }

    pub async fn get_training_datum(&self, id: u64) -> Result<TrainingSample, ApiError> {
        self.client.get(&format!("/ai/training-data/{}/", id)).await
    }

    pub async fn create_training_datum(&self, data: &Value) -> Result<TrainingSample, ApiError> {
        self.client.post("/ai/training-data/", data).await
    }

    pub async fn update_training_datum(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<TrainingSample, ApiError> {
        self.client.put(&format!("/ai/training-data/{}/", id), data).await
    }

    pub async fn delete_training_datum(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&format!("/ai/training-data/{}/", id)).await
    }

    pub async fn get_validated_training_data(
        &self,
    ) -> Result<ListResponse<TrainingSample>, ApiError> {
        self.client.get("/ai/training-data/validated/").await
    }

    pub async fn get_training_data_by_category(
        &self,
        category_id: u64,
    ) -> Result<ListResponse<TrainingSample>, ApiError> {
        let category_id = category_id.to_string();
        self.client
            .get_query("/ai/training-data/by_category/", &[("category_id", category_id.as_str())])
            .await
    }

    pub async fn validate_training_datum(
        &self,
        id: u64,
        data: &Value,
    ) -> Result<TrainingSample, ApiError> {
        self.client.post(&format!("/ai/training-data/{}/validate/", id), data).await
    }

    pub async fn get_training_data_stats(&self) -> Result<Value, ApiError> {
        self.client.get("/ai/training-data/stats/").await
    }

    // Desempeño del modelo
    pub async fn get_model_performance(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<ModelPerformance>, ApiError> {
        self.client.get_query("/ai/model-performance/", params).await
    }

    pub async fn get_model_performance_record(&self, id: u64) -> Result<ModelPerformance, ApiError> {
        self.client.get(&format!("/ai/model-performance/{}/", id)).await
    }

    pub async fn get_current_model(&self) -> Result<ModelPerformance, ApiError> {
        self.client.get("/ai/model-performance/current_model/").await
    }

    pub async fn get_performance_history(&self) -> Result<ListResponse<ModelPerformance>, ApiError> {
        self.client.get("/ai/model-performance/performance_history/").await
    }
}
