// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `registry` module abstracts over the host's installed decoder
//! components. Some format codes can only be chosen by asking what the host
//! can actually decode, so that resolution is performed against this trait
//! rather than a process-wide component manager.

use crate::fourcc::FourCc;

/// A queryable registry of the host's installed audio decoder components.
pub trait AudioDecoderRegistry {
    /// Returns `true` when a decoder component claims the given format code.
    fn has_decoder(&self, format: FourCc) -> bool;
}

/// A registry for hosts without decoder discovery. No format code is claimed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInstalledDecoders;

impl AudioDecoderRegistry for NoInstalledDecoders {
    fn has_decoder(&self, _format: FourCc) -> bool {
        false
    }
}
