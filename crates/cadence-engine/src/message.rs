//! Commit message generation: a base message pool plus a pluggable augmentation step.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::error::EngineError;

/// Turns a base message into the final commit message.
pub trait MessageAugmenter {
    fn augment(&self, base: &str, rng: &mut dyn RngCore) -> String;
}

/// Appends one suffix, chosen uniformly and independently of the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixAugmenter {
    suffixes: Vec<String>,
}

impl SuffixAugmenter {
    pub fn new(suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl MessageAugmenter for SuffixAugmenter {
    fn augment(&self, base: &str, rng: &mut dyn RngCore) -> String {
        match self.suffixes.choose(rng) {
            Some(suffix) => format!("{base}{suffix}"),
            None => base.to_string(),
        }
    }
}

/// Uses the base message as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAugmentation;

impl MessageAugmenter for NoAugmentation {
    fn augment(&self, base: &str, _rng: &mut dyn RngCore) -> String {
        base.to_string()
    }
}

/// Pick a base message uniformly from `pool` and run it through `augmenter`.
pub fn pick_message<R: Rng>(
    pool: &[String],
    augmenter: &dyn MessageAugmenter,
    rng: &mut R,
) -> Result<String, EngineError> {
    let base = pool
        .iter()
        .filter(|message| !message.trim().is_empty())
        .collect::<Vec<_>>()
        .choose(rng)
        .copied()
        .map(String::as_str)
        .ok_or(EngineError::EmptyPool("commit messages"))?;
    Ok(augmenter.augment(base, rng))
}
