//! # texmerge-api
//!
//! HTTP API server for the texmerge LaTeX flattener.
//!
//! Endpoints:
//! - `POST /merge` — merge a client-submitted file set into one document
//! - `GET /version` — report the running crate version
//!
//! The merge itself is synchronous, allocation-only work in
//! `texmerge-core`; each request owns its inputs, so handlers are freely
//! concurrent.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;
pub mod server;

pub use error::{Error, Result};
pub use server::{build_router, serve};
