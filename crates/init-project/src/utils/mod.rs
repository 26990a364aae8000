pub mod error_messages;
pub mod git;
pub mod log;
