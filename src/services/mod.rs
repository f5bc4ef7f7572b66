pub mod api;
pub mod error;
pub mod http;
pub mod toast;

pub use error::ApiError;
pub use http::{ApiClient, AuthRedirect, BrowserRedirect};
pub use toast::{DomToaster, ToastLevel, Toaster};
