//! Domain layer containing business entities and contracts.
//!
//! Independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`record`] - The [`record::Record`] trait every entity implements
//! - [`pagination`] - Page normalization and offset arithmetic
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod pagination;
pub mod record;
pub mod repositories;
