//! Data generator for PSI test fixtures
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use anyhow::Context;
use clap::Parser;
use log::info;
use psi_fixture_generator::{
    config::{DEFAULT_ITEM_BYTE_COUNT, DEFAULT_LABEL_BYTE_COUNT},
    generate, write_fixture, GeneratorConfig,
};
use std::path::Path;

/// Generate `db.csv` (the sender's items and labels) and `query.csv` (the
/// receiver's items) in the current directory, with an intersection of a
/// chosen size.
#[derive(Parser, Debug)]
#[command(version, author = "The Veracruz Development Team")]
struct Args {
    /// The size of the sender's set
    #[arg()]
    sender_size: usize,

    /// The size of the receiver's set
    #[arg()]
    receiver_size: usize,

    /// The desired size of the intersection
    #[arg()]
    intersection_size: usize,

    /// The number of bytes used for the labels
    #[arg(short = 'l', long = "label_byte_count", default_value_t = DEFAULT_LABEL_BYTE_COUNT)]
    label_byte_count: usize,

    /// The number of bytes used for the items
    #[arg(short = 'i', long = "item_byte_count", default_value_t = DEFAULT_ITEM_BYTE_COUNT)]
    item_byte_count: usize,

    /// The seed for the random number generator. Fresh entropy is used when
    /// omitted.
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        GeneratorConfig {
            sender_size: args.sender_size,
            receiver_size: args.receiver_size,
            intersection_size: args.intersection_size,
            label_byte_count: args.label_byte_count,
            item_byte_count: args.item_byte_count,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::init();

    let config = GeneratorConfig::from(args);
    info!("{:?}", config);

    let fixture = generate(&config)?;
    let paths = write_fixture(Path::new("."), &fixture, config.has_labels())
        .context("Failed to write the fixture files.")?;

    info!(
        "intersection of {:?} and {:?} has {} items",
        paths.sender,
        paths.receiver,
        fixture.intersection_len()
    );

    Ok(())
}
