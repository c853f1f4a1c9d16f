pub mod panel;
pub mod prompt;
