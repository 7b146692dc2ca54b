//! Two-element `[min, max]` inclusive ranges as they appear in the JSON file.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct InclusiveRange {
    pub min: u32,
    pub max: u32,
}

impl InclusiveRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn is_ordered(self) -> bool {
        self.min <= self.max
    }

    #[must_use]
    pub const fn as_range(self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl From<[u32; 2]> for InclusiveRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<InclusiveRange> for [u32; 2] {
    fn from(range: InclusiveRange) -> Self {
        [range.min, range.max]
    }
}
