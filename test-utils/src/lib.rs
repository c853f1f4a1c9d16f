//! Gatekeeper Test Utils
//!
//! Provides shared testing utilities for the gatekeeper bot. This crate offers a
//! builder for creating test contexts backed by a temporary settings file, plus
//! factories for the Serenity objects the bot's services consume.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the initial settings document
//! - **TestContext**: Test environment owning the temporary directory and settings path
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for Serenity structs such as `Role`
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_settings_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_settings(serde_json::json!({ "verificationPassword": "secret" }))
//!         .build()?;
//!
//!     let path = &test.settings_path;
//!     // Load settings from path...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
