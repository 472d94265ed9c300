//! API Layer
//!
//! HTTP plumbing and typed resource clients for the Ledgerly REST API.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod resource;

pub use client::get_api_base;
pub use error::{ApiError, ApiResult};
pub use resource::{CategoryClient, EntryClient, ResourceClient};
