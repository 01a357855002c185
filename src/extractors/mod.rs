//! Request extractors that turn path segments, bodies and pool access into typed values or `AppError`.

pub mod conn;
pub mod id;
pub mod json;

pub use conn::DbConn;
pub use id::IdPath;
pub use json::JsonBody;
