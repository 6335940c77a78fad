// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `lang` module maps Matroska 3-letter language tags to the host
//! framework's numeric language codes.

use phf::phf_map;

use crate::tracks::TrackEntry;

/// A host framework language code.
pub type LangCode = u16;

/// The host framework's sentinel for an unspecified language.
pub const LANG_UNSPECIFIED: LangCode = 32767;

/// ISO 639-2 tags to host language codes. Languages with distinct
/// bibliographic and terminological tags carry one entry per tag.
static LANGUAGES: phf::Map<&'static str, LangCode> = phf_map! {
    "eng" => 0,
    "fre" => 1, "fra" => 1,
    "ger" => 2, "deu" => 2,
    "ita" => 3,
    "dut" => 4, "nld" => 4,
    "swe" => 5,
    "spa" => 6,
    "dan" => 7,
    "por" => 8,
    "nor" => 9,
    "heb" => 10,
    "jpn" => 11,
    "ara" => 12,
    "fin" => 13,
    "gre" => 14, "ell" => 14,
    "ice" => 15, "isl" => 15,
    "mlt" => 16,
    "tur" => 17,
    "hrv" => 18, "scr" => 18,
    "chi" => 19, "zho" => 19,
    "urd" => 20,
    "hin" => 21,
    "tha" => 22,
    "kor" => 23,
    "lit" => 24,
    "pol" => 25,
    "hun" => 26,
    "est" => 27,
    "lav" => 28,
    "smi" => 29, "sme" => 29,
    "fao" => 30,
    "per" => 31, "fas" => 31,
    "rus" => 32,
    "gle" => 35,
    "alb" => 36, "sqi" => 36,
    "rum" => 37, "ron" => 37,
    "cze" => 38, "ces" => 38,
    "slo" => 39, "slk" => 39,
    "slv" => 40,
    "yid" => 41,
    "srp" => 42, "scc" => 42,
    "mac" => 43, "mkd" => 43,
    "bul" => 44,
    "ukr" => 45,
    "bel" => 46,
    "uzb" => 47,
    "kaz" => 48,
    "aze" => 49,
    "arm" => 51, "hye" => 51,
    "geo" => 52, "kat" => 52,
    "kir" => 54,
    "tgk" => 55,
    "tuk" => 56,
    "mon" => 57,
    "pus" => 59,
    "kur" => 60,
    "kas" => 61,
    "snd" => 62,
    "tib" => 63, "bod" => 63,
    "nep" => 64,
    "san" => 65,
    "mar" => 66,
    "ben" => 67,
    "asm" => 68,
    "guj" => 69,
    "pan" => 70,
    "ori" => 71,
    "mal" => 72,
    "kan" => 73,
    "tam" => 74,
    "tel" => 75,
    "sin" => 76,
    "bur" => 77, "mya" => 77,
    "khm" => 78,
    "lao" => 79,
    "vie" => 80,
    "ind" => 81,
    "tgl" => 82,
    "may" => 83, "msa" => 83,
    "amh" => 85,
    "tir" => 86,
    "orm" => 87,
    "som" => 88,
    "swa" => 89,
    "kin" => 90,
    "run" => 91,
    "nya" => 92,
    "mlg" => 93,
    "epo" => 94,
    "wel" => 128, "cym" => 128,
    "baq" => 129, "eus" => 129,
    "cat" => 130,
    "lat" => 131,
    "que" => 132,
    "grn" => 133,
    "aym" => 134,
    "tat" => 135,
    "uig" => 136,
    "dzo" => 137,
    "jav" => 138,
};

/// Maps the track's language tag to a host language code.
///
/// The tag is truncated to its first three bytes; tracks without a tag, and
/// tags the table does not know, map to [`LANG_UNSPECIFIED`].
pub fn track_language(track: &TrackEntry) -> LangCode {
    let tag = match &track.language {
        Some(tag) => tag.as_str(),
        None => return LANG_UNSPECIFIED,
    };

    let tag = tag.get(..3).unwrap_or(tag);
    LANGUAGES.get(tag).copied().unwrap_or(LANG_UNSPECIFIED)
}
