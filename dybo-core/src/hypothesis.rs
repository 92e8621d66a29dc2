//! Lazy enumeration of underlying-accent hypotheses
//!
//! A hypothesis assigns one accent to every preverb element and every root
//! element. The order is fixed so that ties are always broken the same way:
//! the preverb axis is outer, the root axis inner, and within each tuple the
//! last position varies fastest with `Unaccented` before `Accented`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::accent::Accent;
use crate::error::{CoreError, Result};

/// Inline capacity of an accent tuple
const INLINE_ELEMENTS: usize = 8;

/// Largest root plus preverb element count that can be enumerated
pub const MAX_ELEMENTS: usize = 16;

/// Accent tuple for one morpheme
pub type AccentTuple = SmallVec<[Accent; INLINE_ELEMENTS]>;

/// Underlying accents of a verb's preverb and root elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccentHypothesis {
    /// One accent per preverb element; empty without a preverb
    pub preverb: AccentTuple,
    /// One accent per root element
    pub root: AccentTuple,
}

impl AccentHypothesis {
    /// Whether the first two root elements agree, as a causative prefix
    /// copies the accent of the root element that follows it
    pub fn is_causative_symmetric(&self) -> bool {
        match (self.root.first(), self.root.get(1)) {
            (Some(first), Some(second)) => first == second,
            _ => true,
        }
    }
}

impl fmt::Display for AccentHypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |tuple: &AccentTuple| tuple.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(",");
        if self.preverb.is_empty() {
            write!(f, "R({})", join(&self.root))
        } else {
            write!(f, "PREV({}) R({})", join(&self.preverb), join(&self.root))
        }
    }
}

/// Iterator over every admissible hypothesis for a verb
#[derive(Debug, Clone)]
pub struct AccentHypotheses {
    root_elements: usize,
    preverb_elements: usize,
    causative: bool,
    next: u64,
    end: u64,
}

impl AccentHypotheses {
    /// Enumerate hypotheses for the given element counts.
    ///
    /// Causative verbs skip hypotheses whose first two root elements differ.
    pub fn new(root_elements: usize, preverb_elements: usize, causative: bool) -> Result<Self> {
        let elements = root_elements + preverb_elements;
        if elements > MAX_ELEMENTS {
            return Err(CoreError::SearchSpaceTooLarge {
                elements,
                max: MAX_ELEMENTS,
            });
        }

        Ok(Self {
            root_elements,
            preverb_elements,
            causative,
            next: 0,
            end: 1u64 << elements,
        })
    }

    /// Restart from the first hypothesis
    pub fn reset(&mut self) {
        self.next = 0;
    }

    fn decode(&self, code: u64) -> AccentHypothesis {
        let root_bits = code & ((1u64 << self.root_elements) - 1);
        let preverb_bits = code >> self.root_elements;
        AccentHypothesis {
            preverb: tuple(preverb_bits, self.preverb_elements),
            root: tuple(root_bits, self.root_elements),
        }
    }
}

/// Position 0 is the most significant bit so the last position varies fastest
fn tuple(bits: u64, len: usize) -> AccentTuple {
    (0..len)
        .map(|pos| {
            if (bits >> (len - 1 - pos)) & 1 == 1 {
                Accent::Accented
            } else {
                Accent::Unaccented
            }
        })
        .collect()
}

impl Iterator for AccentHypotheses {
    type Item = AccentHypothesis;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.end {
            let hypothesis = self.decode(self.next);
            self.next += 1;
            if !self.causative || hypothesis.is_causative_symmetric() {
                return Some(hypothesis);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (0, remaining)
    }
}

impl std::iter::FusedIterator for AccentHypotheses {}

#[cfg(test)]
mod tests {
    use super::*;
    use Accent::{Accented as A, Unaccented as U};

    #[test]
    fn test_root_only_order() {
        let all: Vec<_> = AccentHypotheses::new(2, 0, false).unwrap().collect();
        let roots: Vec<Vec<Accent>> = all.iter().map(|h| h.root.to_vec()).collect();
        assert_eq!(roots, vec![vec![U, U], vec![U, A], vec![A, U], vec![A, A]]);
        assert!(all.iter().all(|h| h.preverb.is_empty()));
    }

    #[test]
    fn test_preverb_axis_is_outer() {
        let all: Vec<_> = AccentHypotheses::new(1, 1, false).unwrap().collect();
        let pairs: Vec<(Accent, Accent)> = all.iter().map(|h| (h.preverb[0], h.root[0])).collect();
        assert_eq!(pairs, vec![(U, U), (U, A), (A, U), (A, A)]);
    }

    #[test]
    fn test_causative_filter() {
        let all: Vec<_> = AccentHypotheses::new(3, 0, true).unwrap().collect();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|h| h.root[0] == h.root[1]));

        // A single-element causative root has nothing to copy
        assert_eq!(AccentHypotheses::new(1, 0, true).unwrap().count(), 2);
    }

    #[test]
    fn test_reset_restarts() {
        let mut it = AccentHypotheses::new(2, 1, false).unwrap();
        let first: Vec<_> = it.by_ref().take(3).collect();
        it.reset();
        let again: Vec<_> = it.take(3).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_too_large() {
        assert!(AccentHypotheses::new(12, 4, false).is_ok());

        let err = AccentHypotheses::new(12, 5, false).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SearchSpaceTooLarge {
                elements: 17,
                max: MAX_ELEMENTS
            }
        ));
    }

    #[test]
    fn test_display() {
        let h = AccentHypothesis {
            preverb: [A].into_iter().collect(),
            root: [U, A].into_iter().collect(),
        };
        assert_eq!(h.to_string(), "PREV(A) R(U,A)");
    }
}
