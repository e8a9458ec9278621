//! # Strings Module
//!
//! Centralizes user-facing strings and log text.
//! Ensures consistency in messaging between the client and the tool server.

pub mod logs;
pub mod messages;
