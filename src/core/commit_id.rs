//! Short commit id generation.
//!
//! Ids are seven characters, like an abbreviated git hash, but carry no content meaning.
//! Uniqueness is not guaranteed by [`RandomIds`]; use [`SequentialIds`] when tests need
//! reproducible ids.

use crate::core::config::CommitIdStrategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const COMMIT_ID_LEN: usize = 7;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub trait CommitIdGenerator {
    /// Produce the next id; always `COMMIT_ID_LEN` characters.
    fn next_id(&mut self) -> String;
}

/// Seven random base36 characters per id
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    /// Reproducible sequence of ids for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl CommitIdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        (0..COMMIT_ID_LEN)
            .map(|_| BASE36_DIGITS[self.rng.gen_range(0..BASE36_DIGITS.len())] as char)
            .collect()
    }
}

/// Monotonic base36 counter, zero-padded: `0000001`, `0000002`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl CommitIdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        let encoded = to_base36(self.next);
        // Keep the low digits if the counter ever outgrows seven characters
        let start = encoded.len().saturating_sub(COMMIT_ID_LEN);
        format!("{:0>width$}", &encoded[start..], width = COMMIT_ID_LEN)
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Build the generator selected in configuration
pub fn generator_for(strategy: CommitIdStrategy) -> Box<dyn CommitIdGenerator> {
    match strategy {
        CommitIdStrategy::Random => Box::new(RandomIds::default()),
        CommitIdStrategy::Sequential => Box::new(SequentialIds::default()),
    }
}
