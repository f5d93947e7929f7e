// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;
use topo_lite_core::ArcIndex;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a topology.
///
/// All of these are recovered locally: an out-of-range arc reference skips
/// the offending path component and an out-of-range geometry index yields an
/// empty feature. `Featureset::next` never surfaces them to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("arc reference {index} resolves outside topology with {arc_count} arcs")]
    ArcIndexOutOfRange { index: ArcIndex, arc_count: usize },

    #[error("geometry index {index} outside topology with {geometry_count} geometries")]
    GeometryIndexOutOfRange {
        index: usize,
        geometry_count: usize,
    },
}
