// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `lacing` module segments Xiph-laced codec private data into packets.

use std::ops::Range;

use mkvqt_core::errors::{malformed_data_error, Result};

/// The sub-packet layout of a Xiph-laced codec private blob.
///
/// The blob starts with one byte holding `packet count - 1`, followed by the
/// laced lengths of every packet but the last, followed by the concatenated
/// packet bytes. The last packet's length is deduced from the total length.
#[derive(Clone, Debug)]
pub struct XiphPacketSet {
    /// Per-packet sizes, in packet order.
    sizes: Vec<usize>,
    /// Offset of the first packet's bytes, just past the lacing header.
    data_start: usize,
}

impl XiphPacketSet {
    /// Gets the number of packets.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Gets the size of the packet at `index`.
    pub fn size(&self, index: usize) -> usize {
        self.sizes[index]
    }

    /// Gets the offset of the first packet's bytes.
    pub fn data_start(&self) -> usize {
        self.data_start
    }

    /// Gets the byte range the packet at `index` occupies within the blob.
    pub fn range(&self, index: usize) -> Range<usize> {
        let start = self.data_start + self.sizes[..index].iter().sum::<usize>();
        start..start + self.sizes[index]
    }
}

/// Segments a Xiph-laced codec private blob into its packets.
///
/// Every packet except the last carries a laced length: a run of 255-valued
/// bytes, terminated by one byte below 255, summing to the packet's size. The
/// last packet absorbs whatever follows the other packets. Geometry that does
/// not fit inside the blob is rejected without reading past it.
pub fn xiph_packets(buf: &[u8]) -> Result<XiphPacketSet> {
    if buf.is_empty() {
        return malformed_data_error("xiph: empty codec private data");
    }

    let count = buf[0] as usize + 1;
    let mut sizes = Vec::with_capacity(count);

    let mut pos = 1;
    let mut size = 0;

    while sizes.len() < count - 1 {
        if pos >= buf.len() {
            return malformed_data_error("xiph: lacing runs past the end of the data");
        }

        size += buf[pos] as usize;
        if buf[pos] < 255 {
            sizes.push(size);
            size = 0;
        }
        pos += 1;
    }

    let laced: usize = sizes.iter().sum();
    let last = match (buf.len() - pos).checked_sub(laced) {
        Some(last) => last,
        None => return malformed_data_error("xiph: laced sizes exceed the data length"),
    };
    sizes.push(last);

    Ok(XiphPacketSet { sizes, data_start: pos })
}
