// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Path assembly
//!
//! Turns decoded coordinate runs into draw-command paths. Open paths come
//! from a single arc; polygon rings concatenate several arcs and must not
//! repeat the vertex shared by consecutive arcs.

use crate::path::Path;
use topo_lite_core::Coordinate;

/// Assemble one decoded arc into an open path.
///
/// Reversal is applied by reading the run back-to-front before emitting.
pub fn open_path(coords: &[Coordinate], reversed: bool) -> Path {
    let mut path = Path::new();
    let mut emit = |i: usize, c: Coordinate| {
        if i == 0 {
            path.move_to(c);
        } else {
            path.line_to(c);
        }
    };
    if reversed {
        for (i, c) in coords.iter().rev().enumerate() {
            emit(i, *c);
        }
    } else {
        for (i, c) in coords.iter().enumerate() {
            emit(i, *c);
        }
    }
    path
}

/// Incrementally assembles one closed polygon ring from decoded arc runs.
///
/// Each run is appended in traversal order. Consecutive arcs share an
/// endpoint, so every run after the first drops its leading vertex; the
/// final arc's closing vertex is kept and [`RingAssembler::finish`] appends
/// the explicit close command.
#[derive(Debug, Default)]
pub struct RingAssembler {
    path: Path,
}

impl RingAssembler {
    /// Create an assembler for a new ring
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one decoded arc run, honoring its traversal direction.
    pub fn append_run(&mut self, coords: &[Coordinate], reversed: bool) {
        let skip_join = usize::from(!self.path.is_empty());
        if reversed {
            for c in coords.iter().rev().skip(skip_join) {
                self.vertex(*c);
            }
        } else {
            for c in coords.iter().skip(skip_join) {
                self.vertex(*c);
            }
        }
    }

    /// Close the ring and return its path. Empty if no run contributed.
    pub fn finish(mut self) -> Path {
        if !self.path.is_empty() {
            self.path.close_path();
        }
        self.path
    }

    fn vertex(&mut self, coord: Coordinate) {
        if self.path.is_empty() {
            self.path.move_to(coord);
        } else {
            self.path.line_to(coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Command;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_open_path_forward() {
        let path = open_path(&[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)], false);
        assert_eq!(
            path.commands,
            vec![
                Command::MoveTo(c(0.0, 0.0)),
                Command::LineTo(c(1.0, 0.0)),
                Command::LineTo(c(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_open_path_reversed() {
        let path = open_path(&[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0)], true);
        assert_eq!(
            path.commands,
            vec![
                Command::MoveTo(c(1.0, 1.0)),
                Command::LineTo(c(1.0, 0.0)),
                Command::LineTo(c(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_ring_join_not_duplicated() {
        // arcs A and B share (1,0); assembled ring length is len(A)+len(B)-1
        let a = [c(0.0, 0.0), c(1.0, 0.0)];
        let b = [c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)];
        let mut asm = RingAssembler::new();
        asm.append_run(&a, false);
        asm.append_run(&b, false);
        let path = asm.finish();
        assert_eq!(path.vertex_count(), a.len() + b.len() - 1);
        assert_eq!(
            path.commands,
            vec![
                Command::MoveTo(c(0.0, 0.0)),
                Command::LineTo(c(1.0, 0.0)),
                Command::LineTo(c(1.0, 1.0)),
                Command::LineTo(c(0.0, 0.0)),
                Command::Close,
            ]
        );
    }

    #[test]
    fn test_ring_reversed_run() {
        // B stored back-to-front, referenced reversed: same ring as above
        let a = [c(0.0, 0.0), c(1.0, 0.0)];
        let b_rev = [c(0.0, 0.0), c(1.0, 1.0), c(1.0, 0.0)];
        let mut asm = RingAssembler::new();
        asm.append_run(&a, false);
        asm.append_run(&b_rev, true);
        let path = asm.finish();
        assert_eq!(
            path.commands,
            vec![
                Command::MoveTo(c(0.0, 0.0)),
                Command::LineTo(c(1.0, 0.0)),
                Command::LineTo(c(1.0, 1.0)),
                Command::LineTo(c(0.0, 0.0)),
                Command::Close,
            ]
        );
    }

    #[test]
    fn test_single_arc_ring_kept_whole() {
        let a = [c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)];
        let mut asm = RingAssembler::new();
        asm.append_run(&a, false);
        let path = asm.finish();
        assert_eq!(path.vertex_count(), 4);
        assert_eq!(path.commands.last(), Some(&Command::Close));
    }

    #[test]
    fn test_empty_ring_stays_empty() {
        let asm = RingAssembler::new();
        assert!(asm.finish().is_empty());
    }
}
