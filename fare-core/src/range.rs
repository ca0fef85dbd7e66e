use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Lower,
    Upper,
}

/// Dual-handle integer slider over a fixed inclusive domain.
///
/// Handles move in whole steps and cannot pass each other, so
/// `domain_min <= min <= max <= domain_max` holds after every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSelector {
    domain_min: u32,
    domain_max: u32,
    min: u32,
    max: u32,
}

impl RangeSelector {
    /// Both handles start at the domain bounds.
    pub fn new(domain: RangeInclusive<u32>) -> CoreResult<Self> {
        let (lo, hi) = domain.into_inner();
        if lo > hi {
            return Err(CoreError::ValidationError(format!(
                "Empty slider domain [{}, {}]",
                lo, hi
            )));
        }
        Ok(Self {
            domain_min: lo,
            domain_max: hi,
            min: lo,
            max: hi,
        })
    }

    /// Domain `[0, max]`, which is never empty.
    pub fn up_to(max: u32) -> Self {
        Self {
            domain_min: 0,
            domain_max: max,
            min: 0,
            max,
        }
    }

    pub fn with_start(mut self, min: u32, max: u32) -> Self {
        self.set(min as f64, max as f64);
        self
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn domain(&self) -> RangeInclusive<u32> {
        self.domain_min..=self.domain_max
    }

    /// Tick marks, one per step across the domain
    pub fn ticks(&self) -> Vec<u32> {
        self.domain().collect()
    }

    /// Move one handle to a raw (possibly fractional) position.
    pub fn drag(&mut self, handle: Handle, raw: f64) {
        match handle {
            Handle::Lower => self.min = self.snap(raw, self.domain_min, self.max),
            Handle::Upper => self.max = self.snap(raw, self.min, self.domain_max),
        }
    }

    /// Place both handles. A lower handle past the upper one is
    /// stopped at the upper handle's position.
    pub fn set(&mut self, lower: f64, upper: f64) {
        self.max = self.snap(upper, self.domain_min, self.domain_max);
        self.min = self.snap(lower, self.domain_min, self.max);
    }

    fn snap(&self, raw: f64, lo: u32, hi: u32) -> u32 {
        if raw.is_nan() {
            return lo;
        }
        raw.round().clamp(lo as f64, hi as f64) as u32
    }
}
