//! typedconf — typed access to sectioned INI configuration files.
//!
//! Hexagonal architecture: value coercion and errors in [`domain`], port
//! traits in [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
