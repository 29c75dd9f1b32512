//! takip - flat-file inventory tracker for spindle assets and their spares
//!
//! Two CSV backing files (one per entity kind) are the sole source of truth;
//! every operation loads, mutates and rewrites the full file.

pub mod auth;
pub mod cli;
pub mod export;
pub mod http_server;
pub mod store;
pub mod tabular;
