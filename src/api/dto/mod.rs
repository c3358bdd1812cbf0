//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Each resource module implements
//! [`resource::ApiResource`] for its entity.

use regex::Regex;
use std::sync::LazyLock;

pub mod car;
pub mod city;
pub mod customer;
pub mod driver;
pub mod envelope;
pub mod health;
pub mod pagination;
pub mod resource;
pub mod trip;
pub mod trip_customer;

/// Digits with an optional leading `+`, 7 to 15 long.
pub(crate) static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());
