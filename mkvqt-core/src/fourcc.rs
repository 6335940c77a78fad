// MkvQt
// Copyright (c) 2026 The MkvQt Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// A four-character code identifying a sample's encoding to the host framework.
///
/// Codes are stored in wire order: the first byte is the most significant byte
/// of the big-endian 32-bit representation.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[repr(transparent)]
pub struct FourCc {
    val: [u8; 4],
}

impl FourCc {
    /// Construct a new four-character code from the given byte array.
    pub const fn new(val: [u8; 4]) -> Self {
        Self { val }
    }

    /// Construct a four-character code from a big-endian 32-bit value.
    pub const fn from_be_u32(val: u32) -> Self {
        Self { val: val.to_be_bytes() }
    }

    /// Get the code as a byte array in wire order.
    pub const fn bytes(self) -> [u8; 4] {
        self.val
    }

    /// Get the code as a big-endian 32-bit value.
    pub const fn to_be_u32(self) -> u32 {
        u32::from_be_bytes(self.val)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printable codes are rendered as text, anything else as hex.
        if self.val.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
            match std::str::from_utf8(&self.val) {
                Ok(name) => f.write_str(name),
                _ => write!(f, "{:#010x}", self.to_be_u32()),
            }
        }
        else {
            write!(f, "{:#010x}", self.to_be_u32())
        }
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::FourCc;

    #[test]
    fn round_trips_through_be_u32() {
        let cc = FourCc::new(*b"avc1");
        assert_eq!(cc.to_be_u32(), 0x61766331);
        assert_eq!(FourCc::from_be_u32(0x61766331), cc);
    }

    #[test]
    fn formats_printable_and_opaque_codes() {
        assert_eq!(FourCc::new(*b"mp4v").to_string(), "mp4v");
        assert_eq!(FourCc::new(*b"DTS ").to_string(), "DTS ");
        assert_eq!(FourCc::new([0x6d, 0x73, 0x20, 0x00]).to_string(), "0x6d732000");
    }
}
