//! Request extractors that reject with `AppError`.

pub mod json;
pub mod user_id;

pub use json::JsonBody;
pub use user_id::UserId;
