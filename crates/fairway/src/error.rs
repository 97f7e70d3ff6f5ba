//! Error types for Fairway operations.
//!
//! This module provides the main error type [`FairwayError`] which wraps
//! the error conditions that can occur while turning a task table into a
//! rendered diagram.

use std::io;

use thiserror::Error;

use fairway_parser::ParseError;

/// The main error type for Fairway operations.
///
/// Row-level problems (unknown persona, unknown stage) are not errors at
/// this level; they are collected as diagnostics on the built diagram.
#[derive(Debug, Error)]
pub enum FairwayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Table error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FairwayError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
