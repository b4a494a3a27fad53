use std::fmt;

use foundation::{hex_to_unit_rgb, unit_rgb_to_rgba8};
use tracing::debug;

/// Alpha applied to every palette color.
pub const TRIP_ALPHA: u8 = 192;

/// Leading run of the "glasbey light" categorical palette
/// (minimum chroma 20, minimum lightness 30), unit-interval RGB.
pub const GLASBEY_LIGHT: [[f64; 3]; 32] = [
    hex_to_unit_rgb(0xd60000),
    hex_to_unit_rgb(0x018700),
    hex_to_unit_rgb(0xb500ff),
    hex_to_unit_rgb(0x05acc6),
    hex_to_unit_rgb(0x97ff00),
    hex_to_unit_rgb(0xffa52f),
    hex_to_unit_rgb(0xff8ec8),
    hex_to_unit_rgb(0x79525e),
    hex_to_unit_rgb(0x00fdcf),
    hex_to_unit_rgb(0xafa5ff),
    hex_to_unit_rgb(0x93ac83),
    hex_to_unit_rgb(0x9a6900),
    hex_to_unit_rgb(0x366962),
    hex_to_unit_rgb(0xd3008c),
    hex_to_unit_rgb(0xfdf490),
    hex_to_unit_rgb(0xc86e66),
    hex_to_unit_rgb(0x9ee2ff),
    hex_to_unit_rgb(0x00c846),
    hex_to_unit_rgb(0xa877ac),
    hex_to_unit_rgb(0xb8ba01),
    hex_to_unit_rgb(0xf4bfb1),
    hex_to_unit_rgb(0xff28fd),
    hex_to_unit_rgb(0xf2cdff),
    hex_to_unit_rgb(0x009e7c),
    hex_to_unit_rgb(0xff6200),
    hex_to_unit_rgb(0x56642a),
    hex_to_unit_rgb(0x953f1f),
    hex_to_unit_rgb(0x90318e),
    hex_to_unit_rgb(0xff3464),
    hex_to_unit_rgb(0xa0e491),
    hex_to_unit_rgb(0x8c9ab1),
    hex_to_unit_rgb(0x829026),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteExhausted {
    pub offset: usize,
    pub len: usize,
}

impl fmt::Display for PaletteExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "palette exhausted: requested entry {} of a {}-color palette",
            self.offset, self.len
        )
    }
}

impl std::error::Error for PaletteExhausted {}

/// Walks a fixed palette, handing out one color per call. Colors are never
/// reused within the lifetime of the cursor.
#[derive(Debug, Clone)]
pub struct PaletteCursor<'a> {
    palette: &'a [[f64; 3]],
    offset: usize,
}

impl<'a> PaletteCursor<'a> {
    pub fn new(palette: &'a [[f64; 3]]) -> Self {
        Self { palette, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.palette.len().saturating_sub(self.offset)
    }

    pub fn next_color(&mut self) -> Result<[u8; 4], PaletteExhausted> {
        let rgb = self.palette.get(self.offset).ok_or(PaletteExhausted {
            offset: self.offset,
            len: self.palette.len(),
        })?;
        let color = unit_rgb_to_rgba8(*rgb, TRIP_ALPHA);
        debug!(offset = self.offset, ?color, "assigned palette color");
        self.offset += 1;
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::{GLASBEY_LIGHT, PaletteCursor, PaletteExhausted, TRIP_ALPHA};
    use std::collections::HashSet;

    #[test]
    fn walks_palette_in_order() {
        let palette = [[1.0, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 1.0]];
        let mut cursor = PaletteCursor::new(&palette);
        assert_eq!(cursor.next_color().unwrap(), [255, 0, 0, TRIP_ALPHA]);
        assert_eq!(cursor.next_color().unwrap(), [0, 128, 0, TRIP_ALPHA]);
        assert_eq!(cursor.next_color().unwrap(), [0, 0, 255, TRIP_ALPHA]);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn exhaustion_is_an_error() {
        let palette = [[0.2, 0.2, 0.2]];
        let mut cursor = PaletteCursor::new(&palette);
        cursor.next_color().unwrap();
        assert_eq!(
            cursor.next_color(),
            Err(PaletteExhausted { offset: 1, len: 1 })
        );
        // A failed call does not advance.
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn builtin_palette_starts_with_red_and_is_distinct() {
        let mut cursor = PaletteCursor::new(&GLASBEY_LIGHT);
        assert_eq!(cursor.next_color().unwrap(), [0xd6, 0x00, 0x00, 192]);

        let mut seen = HashSet::new();
        seen.insert([0xd6, 0x00, 0x00, 192]);
        while cursor.remaining() > 0 {
            assert!(seen.insert(cursor.next_color().unwrap()));
        }
        assert_eq!(seen.len(), GLASBEY_LIGHT.len());
    }
}
