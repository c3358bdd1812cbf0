//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Identifier source for new records

pub mod id_generator;
