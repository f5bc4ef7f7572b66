pub mod common;
pub mod auth;
pub mod inventory;
pub mod transactions;
pub mod loans;
pub mod savings;
pub mod notifications;
pub mod analytics;
pub mod ai;

pub use common::{Identified, ListResponse};
pub use auth::{BusinessProfile, Guarantor, LoginRequest, RegisterRequest, SessionResponse, User};
pub use inventory::{Product, ProductCategory, ProductPayload, StockAdjustment, StockMovement};
pub use transactions::{
    CategorizeRequest, RefundRequest, Transaction, TransactionCategory, TransactionItem,
    TransactionPayload,
};
pub use loans::{Loan, LoanApplication, LoanPayment, LoanProduct, LoanRepayment};
pub use savings::{AmountRequest, SavingsAccount, SavingsGoal, SavingsTransaction};
pub use notifications::{
    Notification, NotificationPayload, NotificationPreference, ToggleChannelRequest,
};
pub use analytics::{AlertRule, BusinessInsight, BusinessMetric, CashFlowEntry};
pub use ai::{CategoryPrediction, ModelPerformance, PredictRequest, PredictionFeedback, TrainingSample};
