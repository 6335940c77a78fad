// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `cookie` module synthesizes the sample description extensions ("magic
//! cookies") a codec family requires, from the track's codec private data.
//!
//! Cookies are sequences of self-describing chunks. Every chunk is laid out as
//! a 32-bit big-endian total length (header included), a four-byte chunk tag,
//! and the payload, so a chunk's length field always equals 8 plus its payload
//! length.

use log::debug;

use mkvqt_core::desc::{ImageDescription, PcmFormatFlags, SoundDescription};
use mkvqt_core::errors::{malformed_data_error, missing_metadata_error, Result};
use mkvqt_core::fourcc::FourCc;
use mkvqt_core::registry::AudioDecoderRegistry;

use crate::codecs::{
    FORMAT_AAC, FORMAT_AC3, FORMAT_AC3_MS, FORMAT_FLAC, FORMAT_H264, FORMAT_LPCM, FORMAT_VOBSUB,
    FORMAT_VORBIS, MKV_A_PCM_BIG, MKV_A_PCM_FLOAT, MKV_A_PCM_LIT,
};
use crate::lacing::xiph_packets;
use crate::tracks::TrackEntry;

/// Tag of the AVC decoder configuration extension on an image description.
pub const EXT_AVC_CONFIG: FourCc = FourCc::new(*b"avcC");
/// Tag of the VobSub index extension on an image description.
pub const EXT_VOBSUB_IDX: FourCc = FourCc::new(*b"VSUB");
/// Tag of the decompression-parameters extension on a sound description.
pub const EXT_DECOMPRESSION_PARAMS: FourCc = FourCc::new(*b"wave");

// Chunk tags inside a decompression-parameters cookie.
const COOKIE_OGG_SERIAL_NO: FourCc = FourCc::new(*b"oCtN");
const COOKIE_VORBIS_HEADER: FourCc = FourCc::new(*b"vCtH");
const COOKIE_VORBIS_COMMENTS: FourCc = FourCc::new(*b"vCtC");
const COOKIE_VORBIS_CODEBOOKS: FourCc = FourCc::new(*b"vCtB");
const COOKIE_FLAC_STREAMINFO: FourCc = FourCc::new(*b"fCtS");
const COOKIE_FLAC_METADATA: FourCc = FourCc::new(*b"fCtM");
const COOKIE_TERMINATOR: FourCc = FourCc::new([0, 0, 0, 0]);

/// Appends one cookie chunk: big-endian total length, tag, payload.
fn put_chunk(cookie: &mut Vec<u8>, tag: FourCc, payload: &[u8]) {
    cookie.extend_from_slice(&((payload.len() + 8) as u32).to_be_bytes());
    cookie.extend_from_slice(&tag.bytes());
    cookie.extend_from_slice(payload);
}

/// Gets the track's codec private data, or fails with a missing metadata error.
fn require_codec_private(track: &TrackEntry) -> Result<&[u8]> {
    match &track.codec_private {
        Some(private) => Ok(private),
        None => missing_metadata_error("track has no codec private data"),
    }
}

/// The serial number a track's Ogg-style cookie carries. Tracks without a UID
/// get serial number 0.
fn track_serial(track: &TrackEntry) -> u32 {
    track.uid.unwrap_or(0) as u32
}

/// Attaches the track's codec private data as an AVC decoder configuration.
pub fn avc_extension(track: &TrackEntry, desc: &mut ImageDescription) -> Result<()> {
    let private = require_codec_private(track)?;
    desc.add_extension(EXT_AVC_CONFIG, Box::from(private));
    Ok(())
}

/// Attaches the track's codec private data as a VobSub index.
///
/// VobSub tracks store their whole `.idx` file in the codec private data; it
/// is passed through to the subpicture decoder untouched.
pub fn vobsub_extension(track: &TrackEntry, desc: &mut ImageDescription) -> Result<()> {
    let private = require_codec_private(track)?;
    desc.add_extension(EXT_VOBSUB_IDX, Box::from(private));
    Ok(())
}

// Vorbis decoders expect the cookie to have been built from the first three
// packets of the codec private data: identification, comments, codebooks.
/// Builds the Vorbis decompression-parameters cookie and attaches it.
pub fn vorbis_cookie(track: &TrackEntry, desc: &mut SoundDescription) -> Result<()> {
    const HEADER_TAGS: [FourCc; 3] =
        [COOKIE_VORBIS_HEADER, COOKIE_VORBIS_COMMENTS, COOKIE_VORBIS_CODEBOOKS];

    let private = require_codec_private(track)?;

    let packets = xiph_packets(private)?;
    if packets.count() < HEADER_TAGS.len() {
        return malformed_data_error("vorbis: codec private data holds fewer than 3 packets");
    }

    let mut cookie = Vec::new();
    put_chunk(&mut cookie, COOKIE_OGG_SERIAL_NO, &track_serial(track).to_be_bytes());
    for (index, &tag) in HEADER_TAGS.iter().enumerate() {
        put_chunk(&mut cookie, tag, &private[packets.range(index)]);
    }
    put_chunk(&mut cookie, COOKIE_TERMINATOR, &[]);

    desc.add_extension(EXT_DECOMPRESSION_PARAMS, cookie.into_boxed_slice());
    Ok(())
}

/// Builds the FLAC decompression-parameters cookie and attaches it.
///
/// The first packet is the stream info block; every following packet becomes a
/// metadata chunk under the one metadata tag.
pub fn flac_cookie(track: &TrackEntry, desc: &mut SoundDescription) -> Result<()> {
    let private = require_codec_private(track)?;

    let packets = xiph_packets(private)?;

    let mut cookie = Vec::new();
    put_chunk(&mut cookie, COOKIE_OGG_SERIAL_NO, &track_serial(track).to_be_bytes());
    put_chunk(&mut cookie, COOKIE_FLAC_STREAMINFO, &private[packets.range(0)]);
    for index in 1..packets.count() {
        put_chunk(&mut cookie, COOKIE_FLAC_METADATA, &private[packets.range(index)]);
    }
    put_chunk(&mut cookie, COOKIE_TERMINATOR, &[]);

    desc.add_extension(EXT_DECOMPRESSION_PARAMS, cookie.into_boxed_slice());
    Ok(())
}

/// Rewrites a linear-PCM sound description's packet sizing and format flags
/// from the track's CodecID. No extension is attached.
pub fn lpcm_remap(track: &TrackEntry, desc: &mut SoundDescription) -> Result<()> {
    desc.bytes_per_packet = desc.channels * desc.bits_per_channel / 8;
    desc.frames_per_packet = desc.bytes_per_packet;

    match track.codec_id.as_str() {
        MKV_A_PCM_BIG => {
            desc.pcm_flags |= PcmFormatFlags::BIG_ENDIAN;
        }
        // 8-bit little-endian samples stay unsigned.
        MKV_A_PCM_LIT if desc.bits_per_channel > 8 => {
            desc.pcm_flags |= PcmFormatFlags::SIGNED_INTEGER;
        }
        MKV_A_PCM_FLOAT => {
            desc.pcm_flags |= PcmFormatFlags::FLOAT;
        }
        _ => (),
    }

    Ok(())
}

/// Picks the AC-3 format code a host with the given decoders will play.
///
/// Older AC-3 decoders only claim the `ms \0` code defined for AVI files, and
/// only decode to stereo. Prefer a decoder claiming the modern code, fall back
/// to a legacy decoder (forcing 2-channel output), and without any installed
/// decoder keep the modern code.
pub fn ac3_remap<R: AudioDecoderRegistry>(
    track: &TrackEntry,
    registry: &R,
    desc: &mut SoundDescription,
) -> Result<()> {
    if registry.has_decoder(FORMAT_AC3) {
        desc.format = FORMAT_AC3;
    }
    else if registry.has_decoder(FORMAT_AC3_MS) {
        desc.format = FORMAT_AC3_MS;
        desc.channels = 2;
    }
    else {
        debug!("{}: no installed ac-3 decoder, keeping {}", track.codec_id, FORMAT_AC3);
        desc.format = FORMAT_AC3;
    }

    Ok(())
}

/// Attaches nothing for AAC tracks.
///
/// Newer files store an esds atom in the codec private data, but the host
/// framework wants the complete atom rather than the AAC-specific section a
/// track carries, so there is nothing useful to attach. The format code alone
/// is enough for a decoder to claim the track.
pub fn aac_passthrough(track: &TrackEntry, _desc: &mut SoundDescription) -> Result<()> {
    if track.codec_private.is_none() {
        debug!("{}: aac track without an esds atom", track.codec_id);
    }
    Ok(())
}

/// Attaches the extensions a video sample description of the given format
/// requires. Formats without extension requirements succeed unmodified.
pub fn attach_video_extensions(track: &TrackEntry, desc: &mut ImageDescription) -> Result<()> {
    match desc.format {
        FORMAT_H264 => avc_extension(track, desc),
        _ => Ok(()),
    }
}

/// Attaches the extensions an audio sample description of the given format
/// requires, or remaps its fields where the format demands it. Formats without
/// extension requirements succeed unmodified.
pub fn attach_audio_extensions<R: AudioDecoderRegistry>(
    track: &TrackEntry,
    registry: &R,
    desc: &mut SoundDescription,
) -> Result<()> {
    match desc.format {
        FORMAT_VORBIS => vorbis_cookie(track, desc),
        FORMAT_FLAC => flac_cookie(track, desc),
        FORMAT_LPCM => lpcm_remap(track, desc),
        FORMAT_AC3 | FORMAT_AC3_MS => ac3_remap(track, registry, desc),
        FORMAT_AAC => aac_passthrough(track, desc),
        _ => Ok(()),
    }
}

/// Attaches the extensions a subtitle sample description of the given format
/// requires. Formats without extension requirements succeed unmodified.
pub fn attach_subtitle_extensions(track: &TrackEntry, desc: &mut ImageDescription) -> Result<()> {
    match desc.format {
        FORMAT_VOBSUB => vobsub_extension(track, desc),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::AudioSettings;
    use mkvqt_core::errors::Error;
    use mkvqt_core::registry::NoInstalledDecoders;

    // A decoder registry claiming a fixed set of format codes.
    struct InstalledDecoders(&'static [FourCc]);

    impl AudioDecoderRegistry for InstalledDecoders {
        fn has_decoder(&self, format: FourCc) -> bool {
            self.0.contains(&format)
        }
    }

    fn xiph_track(codec_id: &str, packets: &[&[u8]], uid: Option<u64>) -> TrackEntry {
        let mut private = vec![(packets.len() - 1) as u8];
        for packet in &packets[..packets.len() - 1] {
            let mut remaining = packet.len();
            while remaining >= 255 {
                private.push(255);
                remaining -= 255;
            }
            private.push(remaining as u8);
        }
        for packet in packets {
            private.extend_from_slice(packet);
        }

        let mut track = TrackEntry::new(codec_id);
        track.codec_private = Some(private.into_boxed_slice());
        track.uid = uid;
        track
    }

    #[test]
    fn vorbis_cookie_layout() {
        let ident = [1u8; 30];
        let comments = [3u8; 12];
        let codebooks = [5u8; 200];
        let track =
            xiph_track("A_VORBIS", &[&ident, &comments, &codebooks], Some(0x1234_5678));

        let mut desc = SoundDescription::new(FORMAT_VORBIS, 2, 0);
        vorbis_cookie(&track, &mut desc).unwrap();

        let cookie = desc.extension(EXT_DECOMPRESSION_PARAMS).unwrap();
        assert_eq!(cookie.len(), 12 + (8 + 30) + (8 + 12) + (8 + 200) + 8);

        // Serial number chunk carries the track UID, big-endian.
        assert_eq!(&cookie[0..4], &[0, 0, 0, 12]);
        assert_eq!(&cookie[4..8], b"oCtN");
        assert_eq!(&cookie[8..12], &[0x12, 0x34, 0x56, 0x78]);

        // Identification header chunk: length 38, fixed tag, then the packet.
        assert_eq!(&cookie[12..16], &[0, 0, 0, 38]);
        assert_eq!(&cookie[16..20], b"vCtH");
        assert_eq!(&cookie[20..50], &ident[..]);

        assert_eq!(&cookie[50..54], &[0, 0, 0, 20]);
        assert_eq!(&cookie[54..58], b"vCtC");
        assert_eq!(&cookie[58..70], &comments[..]);

        assert_eq!(&cookie[70..74], &[0, 0, 0, 208]);
        assert_eq!(&cookie[74..78], b"vCtB");
        assert_eq!(&cookie[78..278], &codebooks[..]);

        // Fixed eight-byte terminator.
        assert_eq!(&cookie[278..], &[0, 0, 0, 8, 0, 0, 0, 0]);
    }

    #[test]
    fn vorbis_cookie_defaults_to_serial_zero() {
        let track = xiph_track("A_VORBIS", &[&[1], &[3], &[5]], None);

        let mut desc = SoundDescription::new(FORMAT_VORBIS, 2, 0);
        vorbis_cookie(&track, &mut desc).unwrap();

        let cookie = desc.extension(EXT_DECOMPRESSION_PARAMS).unwrap();
        assert_eq!(&cookie[8..12], &[0, 0, 0, 0]);
    }

    #[test]
    fn vorbis_cookie_requires_codec_private() {
        let track = TrackEntry::new("A_VORBIS");
        let mut desc = SoundDescription::new(FORMAT_VORBIS, 2, 0);

        match vorbis_cookie(&track, &mut desc) {
            Err(Error::MissingMetadata(_)) => (),
            other => panic!("expected missing metadata, got {:?}", other.map(|_| ())),
        }
        assert!(desc.extensions.is_empty());
    }

    #[test]
    fn vorbis_cookie_rejects_short_private_data() {
        let track = xiph_track("A_VORBIS", &[&[1], &[5]], None);
        let mut desc = SoundDescription::new(FORMAT_VORBIS, 2, 0);

        assert!(matches!(vorbis_cookie(&track, &mut desc), Err(Error::MalformedData(_))));
        assert!(desc.extensions.is_empty());
    }

    #[test]
    fn flac_cookie_tags_every_metadata_packet_alike() {
        let streaminfo = [0xaau8; 34];
        let padding = [0u8; 20];
        let comments = [0xccu8; 50];
        let track = xiph_track("A_FLAC", &[&streaminfo, &padding, &comments], Some(7));

        let mut desc = SoundDescription::new(FORMAT_FLAC, 2, 0);
        flac_cookie(&track, &mut desc).unwrap();

        let cookie = desc.extension(EXT_DECOMPRESSION_PARAMS).unwrap();

        assert_eq!(&cookie[4..8], b"oCtN");
        assert_eq!(&cookie[8..12], &[0, 0, 0, 7]);

        assert_eq!(&cookie[12..16], &[0, 0, 0, 42]);
        assert_eq!(&cookie[16..20], b"fCtS");
        assert_eq!(&cookie[20..54], &streaminfo[..]);

        assert_eq!(&cookie[54..58], &[0, 0, 0, 28]);
        assert_eq!(&cookie[58..62], b"fCtM");
        assert_eq!(&cookie[62..82], &padding[..]);

        assert_eq!(&cookie[82..86], &[0, 0, 0, 58]);
        assert_eq!(&cookie[86..90], b"fCtM");
        assert_eq!(&cookie[90..140], &comments[..]);

        assert_eq!(&cookie[140..], &[0, 0, 0, 8, 0, 0, 0, 0]);
    }

    #[test]
    fn avc_extension_copies_codec_private_verbatim() {
        let mut track = TrackEntry::new("V_MPEG4/ISO/AVC");
        track.codec_private = Some(Box::new([0x01, 0x64, 0x00, 0x1f, 0xff]));

        let mut desc = ImageDescription::new(FORMAT_H264);
        avc_extension(&track, &mut desc).unwrap();

        assert_eq!(desc.extension(EXT_AVC_CONFIG).unwrap(), &[0x01, 0x64, 0x00, 0x1f, 0xff]);
    }

    #[test]
    fn direct_copy_requires_codec_private() {
        let track = TrackEntry::new("V_MPEG4/ISO/AVC");
        let mut desc = ImageDescription::new(FORMAT_H264);

        assert!(matches!(avc_extension(&track, &mut desc), Err(Error::MissingMetadata(_))));
        assert!(desc.extensions.is_empty());

        let track = TrackEntry::new("S_VOBSUB");
        let mut desc = ImageDescription::new(FORMAT_VOBSUB);

        assert!(matches!(vobsub_extension(&track, &mut desc), Err(Error::MissingMetadata(_))));
        assert!(desc.extensions.is_empty());
    }

    fn pcm_track(codec_id: &str, channels: u32, bit_depth: u32) -> TrackEntry {
        let mut track = TrackEntry::new(codec_id);
        track.audio = Some(AudioSettings { channels, bit_depth: Some(bit_depth) });
        track
    }

    #[test]
    fn lpcm_flags_follow_the_codec_id() {
        let track = pcm_track(MKV_A_PCM_LIT, 2, 8);
        let mut desc = track.sound_description(FORMAT_LPCM);
        lpcm_remap(&track, &mut desc).unwrap();
        assert_eq!(desc.pcm_flags, PcmFormatFlags::empty());
        assert_eq!(desc.bytes_per_packet, 2);
        assert_eq!(desc.frames_per_packet, 2);

        let track = pcm_track(MKV_A_PCM_LIT, 2, 16);
        let mut desc = track.sound_description(FORMAT_LPCM);
        lpcm_remap(&track, &mut desc).unwrap();
        assert_eq!(desc.pcm_flags, PcmFormatFlags::SIGNED_INTEGER);
        assert_eq!(desc.bytes_per_packet, 4);

        let track = pcm_track(MKV_A_PCM_BIG, 1, 8);
        let mut desc = track.sound_description(FORMAT_LPCM);
        lpcm_remap(&track, &mut desc).unwrap();
        assert_eq!(desc.pcm_flags, PcmFormatFlags::BIG_ENDIAN);

        let track = pcm_track(MKV_A_PCM_BIG, 6, 24);
        let mut desc = track.sound_description(FORMAT_LPCM);
        lpcm_remap(&track, &mut desc).unwrap();
        assert_eq!(desc.pcm_flags, PcmFormatFlags::BIG_ENDIAN);
        assert_eq!(desc.bytes_per_packet, 18);

        let track = pcm_track(MKV_A_PCM_FLOAT, 2, 32);
        let mut desc = track.sound_description(FORMAT_LPCM);
        lpcm_remap(&track, &mut desc).unwrap();
        assert_eq!(desc.pcm_flags, PcmFormatFlags::FLOAT);
    }

    #[test]
    fn ac3_prefers_the_modern_decoder() {
        let track = TrackEntry::new("A_AC3");

        let mut desc = SoundDescription::new(FORMAT_AC3, 6, 0);
        ac3_remap(&track, &InstalledDecoders(&[FORMAT_AC3, FORMAT_AC3_MS]), &mut desc).unwrap();
        assert_eq!(desc.format, FORMAT_AC3);
        assert_eq!(desc.channels, 6);

        // Only a legacy decoder installed: legacy code, stereo output.
        let mut desc = SoundDescription::new(FORMAT_AC3, 6, 0);
        ac3_remap(&track, &InstalledDecoders(&[FORMAT_AC3_MS]), &mut desc).unwrap();
        assert_eq!(desc.format, FORMAT_AC3_MS);
        assert_eq!(desc.channels, 2);

        // No decoder at all: keep the modern code.
        let mut desc = SoundDescription::new(FORMAT_AC3, 6, 0);
        ac3_remap(&track, &NoInstalledDecoders, &mut desc).unwrap();
        assert_eq!(desc.format, FORMAT_AC3);
        assert_eq!(desc.channels, 6);
    }

    #[test]
    fn audio_dispatch_is_keyed_on_the_format_code() {
        let registry = InstalledDecoders(&[]);

        let track = xiph_track("A_VORBIS", &[&[1], &[3], &[5]], Some(9));
        let mut desc = SoundDescription::new(FORMAT_VORBIS, 2, 0);
        attach_audio_extensions(&track, &registry, &mut desc).unwrap();
        assert!(desc.extension(EXT_DECOMPRESSION_PARAMS).is_some());

        // A format with no extension requirements is left untouched.
        let track = TrackEntry::new("A_DTS");
        let mut desc = SoundDescription::new(crate::codecs::FORMAT_DTS, 2, 0);
        attach_audio_extensions(&track, &registry, &mut desc).unwrap();
        assert!(desc.extensions.is_empty());

        // AAC succeeds without attaching anything.
        let track = TrackEntry::new("A_AAC/MPEG4/LC");
        let mut desc = SoundDescription::new(FORMAT_AAC, 2, 0);
        attach_audio_extensions(&track, &registry, &mut desc).unwrap();
        assert!(desc.extensions.is_empty());
    }

    #[test]
    fn subtitle_dispatch_attaches_the_vobsub_index() {
        let idx = b"# VobSub index file, v7\nsize: 720x480\n";
        let mut track = TrackEntry::new("S_VOBSUB");
        track.codec_private = Some(Box::from(&idx[..]));

        let mut desc = ImageDescription::new(FORMAT_VOBSUB);
        attach_subtitle_extensions(&track, &mut desc).unwrap();
        assert_eq!(desc.extension(EXT_VOBSUB_IDX).unwrap(), &idx[..]);
    }
}
