//! Threshold tables for per-parameter sub-scores.
//!
//! Each physiological parameter is scored by walking an ordered list of `(limit, score)` pairs
//! and taking the first band the value falls into. Values that match no band take the table's
//! open-ended score, so every input resolves to a score.

/// How a band's limit is compared against the measured value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `value <= limit`; limits are listed in ascending order.
    AtMost,
    /// `value >= limit`; limits are listed in descending order.
    AtLeast,
}

/// An ordered, first-match-wins threshold table.
#[derive(Clone, Copy, Debug)]
pub struct BandTable<T: 'static> {
    direction: Direction,
    bands: &'static [(T, u8)],
    otherwise: u8,
}

impl<T> BandTable<T>
where
    T: PartialOrd + Copy + 'static,
{
    /// Table where each band covers values up to and including its limit.
    pub const fn at_most(bands: &'static [(T, u8)], otherwise: u8) -> Self {
        Self {
            direction: Direction::AtMost,
            bands,
            otherwise,
        }
    }

    /// Table where each band covers values at or above its limit.
    pub const fn at_least(bands: &'static [(T, u8)], otherwise: u8) -> Self {
        Self {
            direction: Direction::AtLeast,
            bands,
            otherwise,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Score `value` against the table.
    ///
    /// Comparisons that are never true (a NaN measurement) fall through to the open-ended band.
    pub fn score(&self, value: T) -> u8 {
        self.bands
            .iter()
            .find(|(limit, _)| match self.direction {
                Direction::AtMost => value <= *limit,
                Direction::AtLeast => value >= *limit,
            })
            .map(|(_, score)| *score)
            .unwrap_or(self.otherwise)
    }

    /// Highest score any value can receive from this table.
    pub fn max_score(&self) -> u8 {
        self.bands
            .iter()
            .map(|(_, score)| *score)
            .fold(self.otherwise, u8::max)
    }
}
