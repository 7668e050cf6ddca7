//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process store for development and tests
//! - `postgres` - PostgreSQL persistence
//! - `http` - REST API

pub mod http;
pub mod memory;
pub mod postgres;
