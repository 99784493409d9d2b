//! Builds the sender and receiver sets with a controlled intersection.
//!
//! The sender set is a list of unique items, each paired with a label that
//! need not be unique. The receiver set copies
//! `min(intersection_size, receiver_size)` sender items and fills the rest
//! with fresh items that collide with neither the sender set nor each other,
//! so the intersection of the two is exact.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{alphabet::random_string, config::GeneratorConfig, error::Result};
use log::{debug, info};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;

/// One row of the sender's dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SenderEntry {
    pub item: String,
    /// Empty when the run has no labels.
    pub label: String,
}

/// Both halves of a generated fixture.
#[derive(Clone, Debug, Default)]
pub struct Fixture {
    /// Sender entries in generation order.
    pub sender: Vec<SenderEntry>,
    /// Receiver items, shuffled.
    pub receiver: Vec<String>,
}

impl Fixture {
    /// Number of receiver items that are also sender items.
    pub fn intersection_len(&self) -> usize {
        let items: HashSet<&str> = self.sender.iter().map(|e| e.item.as_str()).collect();
        self.receiver
            .iter()
            .filter(|item| items.contains(item.as_str()))
            .count()
    }
}

/// Draws sender entries until `config.sender_size` distinct items have been
/// collected. A draw whose item was already collected is discarded.
///
/// The caller is expected to have run [`GeneratorConfig::validate`];
/// otherwise this loop need not terminate.
pub fn build_sender_set<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<SenderEntry> {
    let mut seen = HashSet::with_capacity(config.sender_size);
    let mut sender = Vec::with_capacity(config.sender_size);
    let mut rejected = 0u64;

    while sender.len() < config.sender_size {
        let item = random_string(rng, config.item_byte_count);
        let label = random_string(rng, config.label_byte_count);
        if !seen.insert(item.clone()) {
            rejected += 1;
            continue;
        }
        sender.push(SenderEntry { item, label });
    }

    debug!("sender set built, {} duplicate draws rejected", rejected);
    sender
}

/// Builds the receiver's query set from `sender`.
///
/// # Arguments
///
/// * `config` - Run configuration; `effective_intersection()` items are
///   sampled from `sender` without replacement
/// * `sender` - The sender set produced by [`build_sender_set`]
/// * `rng` - Source of randomness
///
/// # Outputs
///
/// * `receiver` - Exactly `config.receiver_size` distinct items, shuffled
pub fn build_receiver_set<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    sender: &[SenderEntry],
    rng: &mut R,
) -> Vec<String> {
    let overlap = config.effective_intersection();
    let sender_items: HashSet<&str> = sender.iter().map(|e| e.item.as_str()).collect();

    let mut receiver: Vec<String> = sender
        .choose_multiple(rng, overlap)
        .map(|entry| entry.item.clone())
        .collect();
    let mut seen: HashSet<String> = receiver.iter().cloned().collect();

    let mut rejected = 0u64;
    while receiver.len() < config.receiver_size {
        let item = random_string(rng, config.item_byte_count);
        if sender_items.contains(item.as_str()) || !seen.insert(item.clone()) {
            rejected += 1;
            continue;
        }
        receiver.push(item);
    }
    receiver.shuffle(rng);

    debug!(
        "receiver set built, {} colliding filler draws rejected",
        rejected
    );
    receiver
}

/// Validates `config`, then builds both sets with `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Fixture> {
    config.validate()?;

    info!(
        "generating {} sender items ({} chars, labels of {} chars)",
        config.sender_size, config.item_byte_count, config.label_byte_count
    );
    let sender = build_sender_set(config, rng);

    info!(
        "generating {} receiver items with an intersection of {}",
        config.receiver_size,
        config.effective_intersection()
    );
    let receiver = build_receiver_set(config, &sender, rng);

    Ok(Fixture { sender, receiver })
}

/// Validates `config` and builds both sets, seeding from `config.seed`
/// when present.
pub fn generate(config: &GeneratorConfig) -> Result<Fixture> {
    let mut rng = config.rng();
    generate_with_rng(config, &mut rng)
}
