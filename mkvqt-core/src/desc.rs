// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `desc` module defines the sample description records a media track
//! converts into: an image or sound description identified by a format code,
//! carrying an ordered list of tagged binary extensions ("magic cookies").

use bitflags::bitflags;

use crate::fourcc::FourCc;

/// A tagged binary extension attached to a sample description.
#[derive(Clone, Debug)]
pub struct DescriptionExtension {
    /// The extension tag.
    pub tag: FourCc,
    /// The extension payload.
    pub data: Box<[u8]>,
}

/// A sample description for a video or subpicture track.
#[derive(Clone, Debug)]
pub struct ImageDescription {
    /// The format code of the encoded images.
    pub format: FourCc,
    /// Tagged extensions, in attachment order.
    pub extensions: Vec<DescriptionExtension>,
}

impl ImageDescription {
    /// Instantiate a new `ImageDescription` for the given format code.
    pub fn new(format: FourCc) -> Self {
        Self { format, extensions: Vec::new() }
    }

    /// Attach an extension with the given tag.
    pub fn add_extension(&mut self, tag: FourCc, data: Box<[u8]>) {
        self.extensions.push(DescriptionExtension { tag, data });
    }

    /// Gets the payload of the first extension with the given tag.
    pub fn extension(&self, tag: FourCc) -> Option<&[u8]> {
        self.extensions.iter().find(|ext| ext.tag == tag).map(|ext| &*ext.data)
    }
}

bitflags! {
    /// Format flags of a linear-PCM sound description.
    ///
    /// Bit positions match the host framework's linear-PCM flag word.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PcmFormatFlags: u32 {
        /// Samples are IEEE floating point.
        const FLOAT          = 0x1;
        /// Samples are big-endian.
        const BIG_ENDIAN     = 0x2;
        /// Samples are signed integers.
        const SIGNED_INTEGER = 0x4;
    }
}

/// A sample description for an audio track.
#[derive(Clone, Debug)]
pub struct SoundDescription {
    /// The format code of the encoded audio.
    pub format: FourCc,
    /// Number of audio channels.
    pub channels: u32,
    /// Bits per channel for uncompressed formats.
    pub bits_per_channel: u32,
    /// Bytes in a packet of audio.
    pub bytes_per_packet: u32,
    /// Frames in a packet of audio.
    pub frames_per_packet: u32,
    /// Linear-PCM format flags.
    pub pcm_flags: PcmFormatFlags,
    /// Tagged extensions, in attachment order.
    pub extensions: Vec<DescriptionExtension>,
}

impl SoundDescription {
    /// Instantiate a new `SoundDescription` for the given format code.
    pub fn new(format: FourCc, channels: u32, bits_per_channel: u32) -> Self {
        Self {
            format,
            channels,
            bits_per_channel,
            bytes_per_packet: 0,
            frames_per_packet: 0,
            pcm_flags: PcmFormatFlags::empty(),
            extensions: Vec::new(),
        }
    }

    /// Attach an extension with the given tag.
    pub fn add_extension(&mut self, tag: FourCc, data: Box<[u8]>) {
        self.extensions.push(DescriptionExtension { tag, data });
    }

    /// Gets the payload of the first extension with the given tag.
    pub fn extension(&self, tag: FourCc) -> Option<&[u8]> {
        self.extensions.iter().find(|ext| ext.tag == tag).map(|ext| &*ext.data)
    }
}
