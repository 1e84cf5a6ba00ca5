use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};

/// Number of bins on each axis of a tally
///
/// Counts are read from the bin declaration lines of a tally block, where an
/// axis with no bins is written as `0`. After [normalised()] every axis has at
/// least one bin, and the product of the object, segment, multiplier, and
/// cosine counts is the number of [Cell](crate::Cell)s in the tally.
///
/// User bins and time bins are not part of cell addressing.
///
/// [normalised()]: Dimensions::normalised
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of cells, surfaces, or detectors
    pub object_count: usize,
    /// Number of segments
    pub segment_count: usize,
    /// Number of multiplier bins
    pub multiplier_count: usize,
    /// Number of cosine bins
    pub cosine_count: usize,
    /// Number of real energy bins, excluding the total
    pub energy_count: usize,
    /// Number of time bins
    pub time_count: usize,
}

/// Zero-based coordinates of a [Cell](crate::Cell) within a tally
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinIndex {
    /// Index into the object list
    pub object: usize,
    pub segment: usize,
    pub multiplier: usize,
    pub cosine: usize,
}

impl BinIndex {
    /// Convenience constructor in addressing order
    pub fn new(object: usize, segment: usize, multiplier: usize, cosine: usize) -> Self {
        Self {
            object,
            segment,
            multiplier,
            cosine,
        }
    }
}

/// A declared count of `0` means one implicit bin
#[inline]
fn normalise_count(count: usize) -> usize {
    count.max(1)
}

impl Dimensions {
    /// Copy with every zero count replaced by a single bin
    ///
    /// Applying this to already normalised dimensions changes nothing.
    ///
    /// ```rust
    /// # use mctools_mctal::Dimensions;
    /// let declared = Dimensions {
    ///     object_count: 3,
    ///     energy_count: 10,
    ///     ..Default::default()
    /// };
    ///
    /// let dims = declared.normalised();
    /// assert_eq!(dims.segment_count, 1);
    /// assert_eq!(dims.object_count, 3);
    /// assert_eq!(dims.normalised(), dims);
    /// ```
    pub fn normalised(&self) -> Self {
        Self {
            object_count: normalise_count(self.object_count),
            segment_count: normalise_count(self.segment_count),
            multiplier_count: normalise_count(self.multiplier_count),
            cosine_count: normalise_count(self.cosine_count),
            energy_count: normalise_count(self.energy_count),
            time_count: normalise_count(self.time_count),
        }
    }

    /// Number of cells, i.e. every non-energy bin combination
    ///
    /// Saturates at `usize::MAX`, see [checked_cells()](Dimensions::checked_cells).
    pub fn n_cells(&self) -> usize {
        self.checked_cells().unwrap_or(usize::MAX)
    }

    /// Number of cells, or `None` if the bin counts overflow `usize`
    ///
    /// ```rust
    /// # use mctools_mctal::Dimensions;
    /// let dims = Dimensions {
    ///     object_count: usize::MAX,
    ///     segment_count: 2,
    ///     ..Default::default()
    /// };
    /// assert_eq!(dims.normalised().checked_cells(), None);
    /// assert_eq!(dims.normalised().n_cells(), usize::MAX);
    /// ```
    pub fn checked_cells(&self) -> Option<usize> {
        self.object_count
            .checked_mul(self.segment_count)?
            .checked_mul(self.multiplier_count)?
            .checked_mul(self.cosine_count)
    }

    /// Flat storage offset of a set of bin coordinates
    ///
    /// Objects are the outermost axis and cosines the innermost:
    ///
    /// ```text
    /// offset = object     * (segments * multipliers * cosines)
    ///        + segment    * (multipliers * cosines)
    ///        + multiplier * cosines
    ///        + cosine
    /// ```
    ///
    /// Fails with [Error::BinOutOfRange] if any coordinate is not strictly
    /// less than the count of its axis.
    ///
    /// ```rust
    /// # use mctools_mctal::{BinIndex, Dimensions};
    /// let dims = Dimensions {
    ///     object_count: 2,
    ///     segment_count: 3,
    ///     multiplier_count: 1,
    ///     cosine_count: 4,
    ///     energy_count: 1,
    ///     time_count: 1,
    /// };
    /// assert_eq!(dims.offset(&BinIndex::new(1, 2, 0, 3)).unwrap(), 23);
    /// assert!(dims.offset(&BinIndex::new(2, 0, 0, 0)).is_err());
    /// ```
    pub fn offset(&self, index: &BinIndex) -> Result<usize> {
        check_axis("object", index.object, self.object_count)?;
        check_axis("segment", index.segment, self.segment_count)?;
        check_axis("multiplier", index.multiplier, self.multiplier_count)?;
        check_axis("cosine", index.cosine, self.cosine_count)?;

        Ok(index.object * (self.segment_count * self.multiplier_count * self.cosine_count)
            + index.segment * (self.multiplier_count * self.cosine_count)
            + index.multiplier * self.cosine_count
            + index.cosine)
    }

    /// Inverse of [offset()](Dimensions::offset)
    pub fn coordinates(&self, offset: usize) -> Result<BinIndex> {
        check_axis("cell", offset, self.n_cells())?;

        let cosine = offset % self.cosine_count;
        let rest = offset / self.cosine_count;
        let multiplier = rest % self.multiplier_count;
        let rest = rest / self.multiplier_count;
        let segment = rest % self.segment_count;
        let object = rest / self.segment_count;

        Ok(BinIndex {
            object,
            segment,
            multiplier,
            cosine,
        })
    }
}

fn check_axis(axis: &'static str, index: usize, count: usize) -> Result<()> {
    if index < count {
        Ok(())
    } else {
        Err(Error::BinOutOfRange { axis, index, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(o: usize, s: usize, m: usize, c: usize) -> Dimensions {
        Dimensions {
            object_count: o,
            segment_count: s,
            multiplier_count: m,
            cosine_count: c,
            energy_count: 1,
            time_count: 1,
        }
    }

    #[test]
    fn zero_counts_become_one() {
        let d = Dimensions::default().normalised();
        assert_eq!(d, dims(1, 1, 1, 1));
        assert_eq!(d.n_cells(), 1);
    }

    #[test]
    fn normalise_is_idempotent() {
        let d = dims(4, 0, 2, 0).normalised();
        assert_eq!(d, dims(4, 1, 2, 1));
        assert_eq!(d.normalised(), d);
    }

    #[test]
    fn offset_stride_order() {
        let d = dims(2, 2, 2, 2);
        assert_eq!(d.offset(&BinIndex::new(0, 0, 0, 1)).unwrap(), 1);
        assert_eq!(d.offset(&BinIndex::new(0, 0, 1, 0)).unwrap(), 2);
        assert_eq!(d.offset(&BinIndex::new(0, 1, 0, 0)).unwrap(), 4);
        assert_eq!(d.offset(&BinIndex::new(1, 0, 0, 0)).unwrap(), 8);
        assert_eq!(d.offset(&BinIndex::new(1, 1, 1, 1)).unwrap(), 15);
    }

    #[test]
    fn offset_is_a_bijection() {
        let d = dims(3, 2, 4, 5);
        let mut seen = vec![false; d.n_cells()];
        for o in 0..3 {
            for s in 0..2 {
                for m in 0..4 {
                    for c in 0..5 {
                        let index = BinIndex::new(o, s, m, c);
                        let offset = d.offset(&index).unwrap();
                        assert!(!seen[offset]);
                        seen[offset] = true;
                        assert_eq!(d.coordinates(offset).unwrap(), index);
                    }
                }
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn out_of_range_coordinates() {
        let d = dims(1, 2, 1, 3);
        assert!(matches!(
            d.offset(&BinIndex::new(0, 0, 0, 3)),
            Err(Error::BinOutOfRange {
                axis: "cosine",
                index: 3,
                count: 3
            })
        ));
        assert!(d.offset(&BinIndex::new(0, 0, 1, 0)).is_err());
        assert!(d.coordinates(6).is_err());
    }
}
