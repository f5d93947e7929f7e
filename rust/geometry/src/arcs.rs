// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc reference resolution
//!
//! A signed ring-reference index maps to an arc id plus a traversal
//! direction: negative means back-to-front.

use crate::error::{Error, Result};
use topo_lite_core::ArcIndex;

/// Resolve a signed arc reference into `(arc_index, reversed)`.
///
/// Returns [`Error::ArcIndexOutOfRange`] when the resolved index does not
/// address an arc; callers treat that as "skip this path component", never as
/// a fatal decode error.
pub fn resolve_arc(index: ArcIndex, arc_count: usize) -> Result<(usize, bool)> {
    let reversed = index < 0;
    // widen before negating so ArcIndex::MIN cannot overflow
    let resolved = if reversed {
        (-(index as i64) - 1) as usize
    } else {
        index as usize
    };
    if resolved >= arc_count {
        return Err(Error::ArcIndexOutOfRange { index, arc_count });
    }
    Ok((resolved, reversed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_reference() {
        assert_eq!(resolve_arc(0, 3).unwrap(), (0, false));
        assert_eq!(resolve_arc(2, 3).unwrap(), (2, false));
    }

    #[test]
    fn test_reversed_reference() {
        assert_eq!(resolve_arc(-1, 3).unwrap(), (0, true));
        assert_eq!(resolve_arc(-3, 3).unwrap(), (2, true));
    }

    #[test]
    fn test_involution_pairs() {
        // index i and -(i+1) address the same arc in opposite directions
        for i in 0..5 {
            let (fwd, r1) = resolve_arc(i, 5).unwrap();
            let (rev, r2) = resolve_arc(-(i + 1), 5).unwrap();
            assert_eq!(fwd, rev);
            assert!(!r1);
            assert!(r2);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            resolve_arc(3, 3),
            Err(Error::ArcIndexOutOfRange {
                index: 3,
                arc_count: 3
            })
        );
        assert!(resolve_arc(-4, 3).is_err());
        assert!(resolve_arc(0, 0).is_err());
    }

    #[test]
    fn test_extreme_index_does_not_overflow() {
        assert!(resolve_arc(ArcIndex::MIN, 3).is_err());
    }
}
