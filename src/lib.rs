//! # taskforge
//!
//! Task management HTTP API backed by a pluggable relational store.
//!
//! The interesting part is the request pipeline: payloads parse in two
//! stages (loose shape, then conversion + validation), the service turns
//! store misses into a `NotFound` failure, and a single error mapper at the
//! HTTP boundary converts every failure kind into a stable plain-text
//! response.
//!
//! ## Modules
//! - `api`: axum routes, handlers, and the error mapper
//! - `task`: domain model, validation, CRUD service, and storage backends
//! - `config`: environment-driven configuration

pub mod api;
pub mod config;
pub mod task;

pub use config::Config;
