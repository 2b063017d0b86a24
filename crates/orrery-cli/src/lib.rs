//! Orrery CLI library.
//!
//! This crate provides the command implementations and the file-backed
//! preset store used by the `orrery` binary.

pub mod commands;
pub mod store;
