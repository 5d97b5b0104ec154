//! Notes API Library
//!
//! An in-process note store exposed over HTTP:
//!
//! - [`domain`]: the `Note` record and its identifier
//! - [`infrastructure`]: the repository contract, in-memory store, and id generation
//! - [`api`]: routing, handlers, DTOs, and error-to-status mapping
//! - [`config`] and [`server`]: environment configuration and the listener loop

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
