//! HTTP middleware.

pub mod audit;
pub mod auth;

pub use audit::{audit_middleware, AuditState};
pub use auth::{auth_middleware, AuthMiddlewareState};
