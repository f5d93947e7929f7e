// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String transcoding boundary
//!
//! Textual attribute values pass through an externally supplied transcoder
//! before they are stored on a feature. The trait keeps the character-set
//! conversion outside this crate.

/// Converts raw attribute text into the caller's canonical text form.
pub trait Transcoder {
    fn transcode(&self, raw: &str) -> String;
}

/// Passthrough transcoder for input that is already valid Unicode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Transcoder;

impl Transcoder for Utf8Transcoder {
    #[inline]
    fn transcode(&self, raw: &str) -> String {
        raw.to_string()
    }
}
