//! Cohort Tools Server Library
//!
//! HTTP server exposing CRUD operations over two related document
//! collections: cohorts and the students enrolled in them.
//!
//! # Overview
//!
//! - **API Endpoints**: RESTful JSON API under `/api`, plus static demo
//!   data and a documentation page
//! - **Document Store**: schema-flexible JSON documents persisted in
//!   PostgreSQL JSONB collections via SQLx
//! - **Entity Schemas**: declarative required/enum/default constraints
//!   checked before any write
//! - **Configuration**: environment-based configuration management
//!
//! # Architecture
//!
//! Each entity is a vertical feature slice:
//!
//! - **Commands** (write operations): create, update, delete
//! - **Queries** (read operations): get, list, and for students
//!   list-by-cohort with the cohort reference resolved
//!
//! Route handlers translate command/query outcomes into HTTP status codes
//! and `{"error": ...}` bodies; nothing else escapes the handler boundary.
//!
//! ## Framework Stack
//!
//! - **Axum**: web framework
//! - **SQLx**: PostgreSQL driver and migrations
//! - **Tower / tower-http**: request tracing and CORS middleware
//!
//! # Example
//!
//! ```no_run
//! use cohort_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use schema::ValidationError;
pub use store::StoreError;
