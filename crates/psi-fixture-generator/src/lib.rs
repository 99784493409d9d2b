//! Synthetic test fixtures for private set intersection
//!
//! Produces a sender dataset (`db.csv`, items with optional labels) and a
//! receiver query set (`query.csv`) whose intersection has a chosen size.
//! Items and labels are fixed-length strings over `a-zA-Z`.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

pub mod alphabet;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod generator;

pub use config::GeneratorConfig;
pub use csv_io::{
    read_receiver_file, read_sender_file, write_fixture, FixturePaths, RECEIVER_FILE, SENDER_FILE,
};
pub use error::FixtureError;
pub use generator::{generate, generate_with_rng, Fixture, SenderEntry};
