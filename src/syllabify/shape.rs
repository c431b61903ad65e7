//! Local sonority shapes and the boundary each one implies.
//!
//! At every interior position the scanner compares the current rank with its
//! left and right neighbours. The pair of comparisons selects one of nine
//! [`Shape`]s, and each shape maps to exactly one [`Boundary`] action.

use std::cmp::Ordering;

use crate::hierarchy::Rank;

/// What the scanner does with the phoneme at an interior position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Append to the current syllable.
    Continue,
    /// Close the current syllable, then open a new one with this phoneme.
    CloseBefore,
    /// Append to the current syllable, then close it.
    CloseAfter,
}

/// Sonority contour around a phoneme, named left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `left < cur < right`
    Rising,
    /// `left > cur > right`
    Falling,
    /// `cur` above both neighbours
    Peak,
    /// `cur == left`, `cur > right`
    LevelThenFall,
    /// `cur > left`, `cur == right`
    RiseIntoLevel,
    /// `cur == left`, `cur < right`
    LevelThenRise,
    /// `cur` equal to both neighbours
    Plateau,
    /// `cur` below both neighbours
    Trough,
    /// `cur < left`, `cur == right`
    FallIntoLevel,
}

impl Shape {
    /// Every shape, one per cell of the (cur vs left) × (cur vs right) grid.
    pub const ALL: [Shape; 9] = [
        Shape::Rising,
        Shape::Falling,
        Shape::Peak,
        Shape::LevelThenFall,
        Shape::RiseIntoLevel,
        Shape::LevelThenRise,
        Shape::Plateau,
        Shape::Trough,
        Shape::FallIntoLevel,
    ];

    /// Classify the contour at `cur`.
    #[inline]
    pub fn of(left: Rank, cur: Rank, right: Rank) -> Self {
        match (cur.cmp(&left), cur.cmp(&right)) {
            (Ordering::Greater, Ordering::Less) => Shape::Rising,
            (Ordering::Less, Ordering::Greater) => Shape::Falling,
            (Ordering::Greater, Ordering::Greater) => Shape::Peak,
            (Ordering::Equal, Ordering::Greater) => Shape::LevelThenFall,
            (Ordering::Greater, Ordering::Equal) => Shape::RiseIntoLevel,
            (Ordering::Equal, Ordering::Less) => Shape::LevelThenRise,
            (Ordering::Equal, Ordering::Equal) => Shape::Plateau,
            (Ordering::Less, Ordering::Less) => Shape::Trough,
            (Ordering::Less, Ordering::Equal) => Shape::FallIntoLevel,
        }
    }

    /// The boundary action for this contour.
    ///
    /// Troughs start the next syllable with the current phoneme; level
    /// stretches keep it as the coda of the current one.
    #[inline]
    pub fn boundary(self) -> Boundary {
        match self {
            Shape::Rising
            | Shape::Falling
            | Shape::Peak
            | Shape::LevelThenFall
            | Shape::RiseIntoLevel
            | Shape::LevelThenRise => Boundary::Continue,
            Shape::Plateau | Shape::FallIntoLevel => Boundary::CloseAfter,
            Shape::Trough => Boundary::CloseBefore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_every_ordering_has_exactly_one_shape() {
        let mut by_ordering = HashMap::new();
        for left in 0..3u8 {
            for cur in 0..3u8 {
                for right in 0..3u8 {
                    let shape = Shape::of(left, cur, right);
                    let key = (cur.cmp(&left), cur.cmp(&right));
                    let previous = by_ordering.insert(key, shape);
                    assert!(previous.is_none() || previous == Some(shape));
                }
            }
        }
        assert_eq!(by_ordering.len(), 9);
        let shapes: HashSet<Shape> = by_ordering.values().copied().collect();
        assert_eq!(shapes.len(), Shape::ALL.len());
    }

    #[test]
    fn test_boundaries_over_grid() {
        for left in 0..3u8 {
            for cur in 0..3u8 {
                for right in 0..3u8 {
                    let expected = if cur == left && cur == right {
                        Boundary::CloseAfter
                    } else if cur < left && cur < right {
                        Boundary::CloseBefore
                    } else if cur == right && cur < left {
                        Boundary::CloseAfter
                    } else {
                        Boundary::Continue
                    };
                    assert_eq!(
                        Shape::of(left, cur, right).boundary(),
                        expected,
                        "left={left} cur={cur} right={right}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_named_shapes() {
        assert_eq!(Shape::of(0, 2, 5), Shape::Rising);
        assert_eq!(Shape::of(5, 2, 0), Shape::Falling);
        assert_eq!(Shape::of(0, 5, 2), Shape::Peak);
        assert_eq!(Shape::of(5, 0, 2), Shape::Trough);
        assert_eq!(Shape::of(2, 2, 2), Shape::Plateau);
        assert_eq!(Shape::of(5, 0, 0), Shape::FallIntoLevel);
        assert_eq!(Shape::of(3, 3, 0), Shape::LevelThenFall);
        assert_eq!(Shape::of(0, 3, 3), Shape::RiseIntoLevel);
        assert_eq!(Shape::of(3, 3, 5), Shape::LevelThenRise);
    }
}
