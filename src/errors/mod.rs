//! Error types and error handling for the front end.
//!
//! This module defines the syntax errors collected by the parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each grammar failure
//! - Helpful suggestions used when rendering diagnostics

pub mod errors;
