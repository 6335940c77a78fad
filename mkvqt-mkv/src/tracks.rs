// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mkvqt_core::desc::SoundDescription;
use mkvqt_core::fourcc::FourCc;

/// A read-only view of a Matroska track entry.
///
/// The demuxer that parsed the container fills this in; conversion never
/// mutates it. Only the elements conversion consumes are represented.
#[derive(Clone, Debug, Default)]
pub struct TrackEntry {
    /// The CodecID string of the track (e.g. `A_VORBIS`).
    pub codec_id: String,
    /// Raw contents of the CodecPrivate element, if present.
    pub codec_private: Option<Box<[u8]>>,
    /// The track UID, if present.
    pub uid: Option<u64>,
    /// The 3-letter track language tag, if present.
    pub language: Option<String>,
    /// Audio settings of the track, if it is an audio track.
    pub audio: Option<AudioSettings>,
    /// Whether the track carries a ContentEncodings element, i.e. the frame
    /// and private data are wrapped in a content encoding such as compression.
    pub content_encodings: bool,
}

impl TrackEntry {
    /// Instantiate a `TrackEntry` with the given CodecID and no other metadata.
    pub fn new<S: Into<String>>(codec_id: S) -> Self {
        Self { codec_id: codec_id.into(), ..Default::default() }
    }

    /// Creates a sound description of the given format, seeded from the
    /// track's audio settings.
    pub fn sound_description(&self, format: FourCc) -> SoundDescription {
        let audio = self.audio.unwrap_or_default();
        SoundDescription::new(format, audio.channels, audio.bit_depth.unwrap_or(0))
    }
}

/// Audio-specific settings of a track entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioSettings {
    /// Number of audio channels.
    pub channels: u32,
    /// Bits per sample, if stated.
    pub bit_depth: Option<u32>,
}
