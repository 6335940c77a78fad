// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `mkvqt-mkv` crate converts per-track Matroska codec metadata into
//! QuickTime-style sample descriptions.
//!
//! A demuxer hands over a [`tracks::TrackEntry`] view of a track. The caller
//! resolves the track's format code with [`codecs::track_fourcc`], creates an
//! image or sound description of that format, attaches the format-specific
//! extensions with [`cookie::attach_video_extensions`],
//! [`cookie::attach_audio_extensions`], or
//! [`cookie::attach_subtitle_extensions`], and finally maps the track language
//! with [`lang::track_language`].

pub mod codecs;
pub mod cookie;
pub mod lacing;
pub mod lang;
pub mod tracks;
