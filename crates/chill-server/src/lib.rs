//! Protocol front-end for the break engine.
//!
//! A JSONL request/response loop over any async byte stream (stdin/stdout
//! in production), plus TOML configuration loading for the binary.

pub mod config;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::{serve, ErrorCode, Request, Response, ServerError, LIST_ACTION};
