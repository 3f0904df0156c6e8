//! Indexed colour decoding.
//!
//! Canvas bytes are RGB332: three bits red, three bits green, two bits blue.

use crate::fb::Rgb;

const fn expand(value: u8, max: u8) -> u8 {
    ((value as u16 * 255 + max as u16 / 2) / max as u16) as u8
}

pub const fn rgb332(index: u8) -> Rgb {
    Rgb::new(
        expand((index >> 5) & 0x07, 7),
        expand((index >> 2) & 0x07, 7),
        expand(index & 0x03, 3),
    )
}

const fn build() -> [Rgb; 256] {
    let mut out = [Rgb::new(0, 0, 0); 256];
    let mut i = 0;
    while i < 256 {
        out[i] = rgb332(i as u8);
        i += 1;
    }
    out
}

/// Lookup table for all 256 indices.
pub const PALETTE: [Rgb; 256] = build();

#[inline(always)]
pub fn color(index: u8) -> Rgb {
    PALETTE[index as usize]
}
