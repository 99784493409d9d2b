//! Run configuration for a single fixture generation.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use crate::{
    alphabet::distinct_capacity,
    error::{FixtureError, Result},
};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

/// Default length of a generated item, in characters.
pub const DEFAULT_ITEM_BYTE_COUNT: usize = 64;
/// Default length of a generated label. Zero means no label column.
pub const DEFAULT_LABEL_BYTE_COUNT: usize = 0;

/// Sizing parameters for one run of the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of entries in the sender's set.
    pub sender_size: usize,
    /// Number of items in the receiver's query set.
    pub receiver_size: usize,
    /// Requested overlap. Clamped to `receiver_size`.
    pub intersection_size: usize,
    /// Length of each label, 0 for an unlabeled sender set.
    pub label_byte_count: usize,
    /// Length of each item.
    pub item_byte_count: usize,
    /// Seed for the random number generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sender_size: 1000,
            receiver_size: 100,
            intersection_size: 10,
            label_byte_count: DEFAULT_LABEL_BYTE_COUNT,
            item_byte_count: DEFAULT_ITEM_BYTE_COUNT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(sender_size: usize, receiver_size: usize, intersection_size: usize) -> Self {
        Self {
            sender_size,
            receiver_size,
            intersection_size,
            ..Self::default()
        }
    }

    pub fn with_label_byte_count(mut self, label_byte_count: usize) -> Self {
        self.label_byte_count = label_byte_count;
        self
    }

    pub fn with_item_byte_count(mut self, item_byte_count: usize) -> Self {
        self.item_byte_count = item_byte_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The number of receiver items copied from the sender set.
    pub fn effective_intersection(&self) -> usize {
        self.intersection_size.min(self.receiver_size)
    }

    /// Whether the sender file carries a label column.
    pub fn has_labels(&self) -> bool {
        self.label_byte_count != 0
    }

    /// Random number generator for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Checks that the sizes are positive and that enough distinct items of
    /// `item_byte_count` characters exist to satisfy them. Generation only
    /// terminates when this passes.
    pub fn validate(&self) -> Result<()> {
        if self.sender_size == 0 {
            return Err(FixtureError::InvalidConfig(
                "sender_size must be positive".to_string(),
            ));
        }
        if self.receiver_size == 0 {
            return Err(FixtureError::InvalidConfig(
                "receiver_size must be positive".to_string(),
            ));
        }
        if self.item_byte_count == 0 {
            return Err(FixtureError::InvalidConfig(
                "item_byte_count must be positive".to_string(),
            ));
        }

        let capacity = distinct_capacity(self.item_byte_count);
        let sender_size = self.sender_size as u64;
        let overlap = self.effective_intersection() as u64;
        let filler = (self.receiver_size - self.effective_intersection()) as u64;
        debug!(
            "capacity for item length {}: {} distinct items",
            self.item_byte_count, capacity
        );

        if sender_size > capacity {
            return Err(FixtureError::CapacityExceeded {
                what: "sender items",
                requested: sender_size,
                available: capacity,
                item_byte_count: self.item_byte_count,
            });
        }
        if overlap > sender_size {
            return Err(FixtureError::CapacityExceeded {
                what: "intersection items",
                requested: overlap,
                available: sender_size,
                item_byte_count: self.item_byte_count,
            });
        }
        // filler items must avoid every sender item as well as each other
        let available = capacity - sender_size;
        if filler > available {
            return Err(FixtureError::CapacityExceeded {
                what: "receiver filler items",
                requested: filler,
                available,
                item_byte_count: self.item_byte_count,
            });
        }

        Ok(())
    }
}
