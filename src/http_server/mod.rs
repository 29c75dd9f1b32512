//! HTTP surface for takip
//!
//! Maps the routing contract onto store operations: list/create/update/
//! remove per entity kind, the combined export download, the login gate and
//! static client assets. Every failure is turned into a JSON response with a
//! human-readable message; nothing here crashes the process.

mod asset_routes;
mod auth_routes;
mod config;
mod errors;
mod export_routes;
mod server;

pub use asset_routes::{asset_routes, AssetState};
pub use auth_routes::{auth_routes, AuthState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use export_routes::{export_routes, ExportState};
pub use server::HttpServer;
