//! # Application Layer
//!
//! Instruction parsing, dispatch of planned calls, and logging setup.

pub mod dispatch;
pub mod logging;
pub mod parsing;
