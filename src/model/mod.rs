//! Domain models for settings, the configuration wizard, and interaction IDs.

pub mod interaction;
pub mod settings;
pub mod wizard;
