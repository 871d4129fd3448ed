//! Domain types and the generic listing engine for the HR administration
//! backend.
//!
//! This crate has no internal dependencies so it can be shared by the
//! repository layer, the HTTP API and any future tooling.

pub mod error;
pub mod hr;
pub mod listing;
pub mod roles;
pub mod types;
