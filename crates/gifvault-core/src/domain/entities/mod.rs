//! Domain entities persisted by the repository layer.

pub mod favorite_gif;
pub mod service_log;
pub mod user;

pub use favorite_gif::*;
pub use service_log::*;
pub use user::*;
