//! Core domain entities of the booking service.
//!
//! Entities are plain data structures without persistence or transport
//! concerns.
//!
//! # Entity Types
//!
//! - [`City`] - A city served by drivers and trips
//! - [`Customer`] - A passenger
//! - [`Driver`] - A driver with a home route between two cities
//! - [`Car`] - A car, optionally assigned to a driver
//! - [`Trip`] - A priced trip between two cities
//! - [`TripCustomer`] - A customer booked on a trip
//!
//! # Design Pattern
//!
//! Each entity has a `New*` companion holding its writable attributes, used
//! both for creation and for whole-record updates. Related records read
//! through a join are exposed as `Option` fields (`*_data`).

pub mod car;
pub mod city;
pub mod customer;
pub mod driver;
pub mod trip;
pub mod trip_customer;

pub use car::{Car, CarRoute, CarStatus, NewCar};
pub use city::{City, NewCity};
pub use customer::{Customer, NewCustomer};
pub use driver::{Driver, DriverData, NewDriver};
pub use trip::{NewTrip, Trip};
pub use trip_customer::{NewTripCustomer, TripCustomer};
