//! Wire models shared by the API client and the pages.

pub mod auth;
pub mod envelope;
pub mod product;
pub mod timestamp;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use envelope::{ApiFailure, ApiResponse};
pub use product::{Category, CategorySummary, Product};
pub use timestamp::Timestamp;
pub use user::{User, UserRole};
