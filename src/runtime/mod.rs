//! 应用运行时

mod app;

pub use app::{read_bundle, AppError, BridgeApp};
