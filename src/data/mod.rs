//! Persistence layer.
//!
//! Repositories here own the storage format and return domain models from
//! `crate::model`. The bot keeps all of its state in one JSON settings file.

pub mod settings;
