// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `mkvqt-core` crate provides the structs and traits shared by the MkvQt
//! conversion crates: four-character codes, error reporting, byte-buffer
//! reading, the QuickTime-style sample description records that conversion
//! populates, and the decoder component registry consulted when a format code
//! depends on what the host has installed.

pub mod desc;
pub mod errors;
pub mod fourcc;
pub mod io;
pub mod registry;
