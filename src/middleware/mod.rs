//! Access control applied before interaction handlers run.

pub mod auth;
