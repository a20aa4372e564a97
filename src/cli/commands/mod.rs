//! CLI subcommands

pub mod compare;
pub mod solve;
