// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `codecs` module maps Matroska CodecID strings to host format codes.

use log::warn;

use mkvqt_core::fourcc::FourCc;
use mkvqt_core::io::{BufReader, ReadBytes};

use crate::tracks::TrackEntry;

// CodecID strings handled outside of the identity table.

/// AVI compatibility mode. The real format code sits inside the private data.
pub const MKV_V_MS: &str = "V_MS/VFW/FOURCC";
/// QuickTime compatibility mode. The private data is a big-endian image
/// description, starting with the format code.
pub const MKV_V_QT: &str = "V_QUICKTIME";
/// Little-endian integer PCM.
pub const MKV_A_PCM_LIT: &str = "A_PCM/INT/LIT";
/// Big-endian integer PCM.
pub const MKV_A_PCM_BIG: &str = "A_PCM/INT/BIG";
/// IEEE floating-point PCM.
pub const MKV_A_PCM_FLOAT: &str = "A_PCM/FLOAT/IEEE";

// Video format codes.
pub const FORMAT_RAW: FourCc = FourCc::new(*b"raw ");
pub const FORMAT_MPEG4_VISUAL: FourCc = FourCc::new(*b"mp4v");
pub const FORMAT_H264: FourCc = FourCc::new(*b"avc1");
pub const FORMAT_MSMPEG4_V3: FourCc = FourCc::new(*b"MP43");
pub const FORMAT_MPEG1_VIDEO: FourCc = FourCc::new(*b"mp1v");
pub const FORMAT_MPEG2_VIDEO: FourCc = FourCc::new(*b"mp2v");
pub const FORMAT_REAL_VIDEO_1: FourCc = FourCc::new(*b"RV10");
pub const FORMAT_REAL_VIDEO_G2: FourCc = FourCc::new(*b"RV20");
pub const FORMAT_REAL_VIDEO_8: FourCc = FourCc::new(*b"RV30");
pub const FORMAT_REAL_VIDEO_9: FourCc = FourCc::new(*b"RV40");
pub const FORMAT_THEORA: FourCc = FourCc::new(*b"XiTh");

// Audio format codes.
pub const FORMAT_AAC: FourCc = FourCc::new(*b"aac ");
pub const FORMAT_MP1: FourCc = FourCc::new(*b".mp1");
pub const FORMAT_MP2: FourCc = FourCc::new(*b".mp2");
pub const FORMAT_MP3: FourCc = FourCc::new(*b".mp3");
pub const FORMAT_AC3: FourCc = FourCc::new(*b"ac-3");
/// The AC-3 code claimed by older decoders, carried over from AVI.
pub const FORMAT_AC3_MS: FourCc = FourCc::new([0x6d, 0x73, 0x20, 0x00]);
pub const FORMAT_VORBIS: FourCc = FourCc::new(*b"XiVs");
pub const FORMAT_FLAC: FourCc = FourCc::new(*b"XiFL");
pub const FORMAT_LPCM: FourCc = FourCc::new(*b"lpcm");
pub const FORMAT_DTS: FourCc = FourCc::new(*b"DTS ");
pub const FORMAT_TTA: FourCc = FourCc::new(*b"TTA1");
pub const FORMAT_WAVPACK: FourCc = FourCc::new(*b"WVPK");
pub const FORMAT_REAL_AUDIO_1: FourCc = FourCc::new(*b"lpcJ");
pub const FORMAT_REAL_AUDIO_2: FourCc = FourCc::new(*b"28_8");
pub const FORMAT_REAL_COOK: FourCc = FourCc::new(*b"cook");
pub const FORMAT_REAL_SIPRO: FourCc = FourCc::new(*b"sipr");
pub const FORMAT_REAL_LOSSLESS: FourCc = FourCc::new(*b"ralf");
pub const FORMAT_REAL_ATRAC3: FourCc = FourCc::new(*b"atrc");

// Subtitle format codes.
pub const FORMAT_TEXT_UTF8: FourCc = FourCc::new(*b"SRT ");
pub const FORMAT_VOBSUB: FourCc = FourCc::new(*b"SPU ");

/// Reserved marker for tracks wrapped in a content encoding.
pub const FORMAT_COMPRESSED: FourCc = FourCc::new(*b"COMP");

/// The codec identity table. The first matching pair is used for conversion.
static CODEC_IDS: &[(FourCc, &str)] = &[
    (FORMAT_RAW, "V_UNCOMPRESSED"),
    (FORMAT_MPEG4_VISUAL, "V_MPEG4/ISO/ASP"),
    (FORMAT_MPEG4_VISUAL, "V_MPEG4/ISO/SP"),
    (FORMAT_MPEG4_VISUAL, "V_MPEG4/ISO/AP"),
    (FORMAT_H264, "V_MPEG4/ISO/AVC"),
    (FORMAT_MSMPEG4_V3, "V_MPEG4/MS/V3"),
    (FORMAT_MPEG1_VIDEO, "V_MPEG1"),
    (FORMAT_MPEG2_VIDEO, "V_MPEG2"),
    (FORMAT_REAL_VIDEO_1, "V_REAL/RV10"),
    (FORMAT_REAL_VIDEO_G2, "V_REAL/RV20"),
    (FORMAT_REAL_VIDEO_8, "V_REAL/RV30"),
    (FORMAT_REAL_VIDEO_9, "V_REAL/RV40"),
    (FORMAT_THEORA, "V_THEORA"),
    (FORMAT_AAC, "A_AAC/MPEG4/LC"),
    (FORMAT_AAC, "A_AAC/MPEG4/MAIN"),
    (FORMAT_AAC, "A_AAC/MPEG4/LC/SBR"),
    (FORMAT_AAC, "A_AAC/MPEG4/SSR"),
    (FORMAT_AAC, "A_AAC/MPEG4/LTP"),
    (FORMAT_AAC, "A_AAC/MPEG2/LC"),
    (FORMAT_AAC, "A_AAC/MPEG2/MAIN"),
    (FORMAT_AAC, "A_AAC/MPEG2/LC/SBR"),
    (FORMAT_AAC, "A_AAC/MPEG2/SSR"),
    (FORMAT_MP1, "A_MPEG/L1"),
    (FORMAT_MP2, "A_MPEG/L2"),
    (FORMAT_MP3, "A_MPEG/L3"),
    (FORMAT_AC3, "A_AC3"),
    (FORMAT_AC3_MS, "A_AC3"),
    (FORMAT_AC3, "A_AC3/BSID9"),
    (FORMAT_AC3, "A_AC3/BSID10"),
    (FORMAT_VORBIS, "A_VORBIS"),
    (FORMAT_FLAC, "A_FLAC"),
    (FORMAT_LPCM, MKV_A_PCM_LIT),
    (FORMAT_LPCM, MKV_A_PCM_BIG),
    (FORMAT_LPCM, MKV_A_PCM_FLOAT),
    (FORMAT_DTS, "A_DTS"),
    (FORMAT_TTA, "A_TTA1"),
    (FORMAT_WAVPACK, "A_WAVPACK4"),
    (FORMAT_REAL_AUDIO_1, "A_REAL/14_4"),
    (FORMAT_REAL_AUDIO_2, "A_REAL/28_8"),
    (FORMAT_REAL_COOK, "A_REAL/COOK"),
    (FORMAT_REAL_SIPRO, "A_REAL/SIPR"),
    (FORMAT_REAL_LOSSLESS, "A_REAL/RALF"),
    (FORMAT_REAL_ATRAC3, "A_REAL/ATRC"),
    (FORMAT_TEXT_UTF8, "S_TEXT/UTF8"),
    (FORMAT_VOBSUB, "S_VOBSUB"),
];

/// Looks the given CodecID string up in the codec identity table. The first
/// matching entry wins.
pub fn lookup_codec_id(codec_id: &str) -> Option<FourCc> {
    CODEC_IDS.iter().find(|(_, id)| *id == codec_id).map(|(cc, _)| *cc)
}

/// Reads a big-endian format code at `offset` bytes into the track's private
/// data. Returns [`None`] when the private data is absent or too short.
fn fourcc_from_codec_private(track: &TrackEntry, offset: u64) -> Option<FourCc> {
    let private = match &track.codec_private {
        Some(buf) => buf,
        None => return None,
    };

    let mut reader = BufReader::new(private);

    match reader.ignore_bytes(offset).and_then(|_| reader.read_be_u32()) {
        Ok(cc) => Some(FourCc::from_be_u32(cc)),
        Err(_) => {
            warn!("{}: codec private too short for a format code", track.codec_id);
            None
        }
    }
}

/// Resolves the format code to describe the given track with.
///
/// Tracks wrapped in a content encoding resolve to [`FORMAT_COMPRESSED`];
/// the compatibility-mode CodecIDs read the code out of the private data;
/// everything else consults the codec identity table. Returns [`None`] when
/// no rule matches.
pub fn track_fourcc(track: &TrackEntry) -> Option<FourCc> {
    if track.content_encodings {
        // How compressed tracks should resolve in general is unsettled.
        // Surface the reserved marker so callers can refuse them uniformly.
        return Some(FORMAT_COMPRESSED);
    }

    match track.codec_id.as_str() {
        // Offset of biCompression in BITMAPINFOHEADER.
        MKV_V_MS => fourcc_from_codec_private(track, 16),
        // A big-endian image description starts with its format code.
        MKV_V_QT => fourcc_from_codec_private(track, 0),
        other => {
            let cc = lookup_codec_id(other);
            if cc.is_none() {
                log::info!("unknown codec: {}", other);
            }
            cc
        }
    }
}
