//! Helpers shared across layers.
//!
//! - [`clock`] - Injectable time source
//! - [`code_generator`] - Short code generation and alias validation
//! - [`url_validator`] - Long URL validation

pub mod clock;
pub mod code_generator;
pub mod url_validator;
