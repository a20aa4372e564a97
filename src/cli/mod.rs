//! CLI infrastructure for the domino-train solver
//!
//! This module provides the command-line interface for solving and
//! comparing train searches.

pub mod commands;
pub mod config;
pub mod output;
