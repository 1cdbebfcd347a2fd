// Image data model shared by source and derived maps
use crate::map::Image;
// Utility functions for canvas padding and channel encoding
use crate::util::{encode_unit, next_pow2};
// For mapping key colors to their row's atlas position
use std::collections::HashMap;

/// Half-texel bias stored in the z channel of each lookup entry
/// Subtracting it from the row-length coordinate lands a point sample
/// inside the row's last display cell instead of on the terminator
const HALF_TEXEL: f32 = 0.5;

/// Output of the palette indexing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPalette {
    /// Lookup map: each in-bounds color-map pixel holds its palette row's
    /// encoded UV; unmapped pixels and padding keep the zero color
    pub index_map: Image,
    /// Packed palette atlas: rows shifted left past the key column and
    /// padded with transparent cells to a square power-of-two canvas
    pub adjusted: Image,
    /// Number of color-map pixels whose color matched no palette key
    pub misses: u32,
}

/// Build the palette lookup textures for a color map
///
/// The palette is organized as rows: column 0 of row y holds the key color
/// identifying that row, and columns 1.. hold its display colors until the
/// first fully transparent cell (the row terminator). Packing strips the
/// key column, so row y's display colors land at columns 0.. of the
/// adjusted atlas.
///
/// Each key color maps to a UV triple
/// ((y + 0.5) / dim, (terminator - 1) / dim, 0.5 / dim): the centered row
/// coordinate, the row length, and the half-texel bias, each encoded as
/// round(v * 255). Color-map pixels are rewritten to their key's UV on a
/// square power-of-two canvas; pixels whose color is not a registered key
/// keep the zero sentinel and are counted as misses.
///
/// Key colors are compared as full RGBA values and expected to be pairwise
/// distinct across rows; duplicates are an input-contract violation and
/// resolve to the last row scanned.
///
/// # Arguments
/// * `cmap` - Color map whose pixels reference palette rows by key color
/// * `palette` - Palette image; both dimensions must be nonzero
///
/// # Returns
/// * The packed atlas, the rewritten lookup map, and the miss count
pub fn index(cmap: &Image, palette: &Image) -> IndexedPalette {
    let (pw, ph) = palette.size();
    assert!(pw > 0 && ph > 0, "palette must have nonzero dimensions");

    // Pack the rows into the square power-of-two atlas while recording
    // each row's key color and lookup UV
    let dim = next_pow2(pw.max(ph));
    let mut adjusted = Image::new(dim, dim);
    let mut row_uvs: HashMap<[u8; 4], [u8; 4]> = HashMap::new();
    for y in 0..ph {
        let mut x = 1;
        while x < pw {
            let color = palette.get(x, y);
            if color[3] == 0 {
                // Row terminator; not copied into the atlas
                break;
            }
            adjusted.set(x - 1, y, color);
            x += 1;
        }
        // x now sits on the terminator, or one past the last column for a
        // row that runs to the palette edge
        let uv = [
            encode_unit((y as f32 + 0.5) / dim as f32),
            encode_unit((x as f32 - 1.0) / dim as f32),
            encode_unit(HALF_TEXEL / dim as f32),
            255,
        ];
        row_uvs.insert(palette.get(0, y), uv);
    }

    // Rewrite the color map into row UVs on its own power-of-two canvas
    let (cw, ch) = cmap.size();
    let cdim = next_pow2(cw.max(ch));
    let mut index_map = Image::new(cdim, cdim);
    let mut misses = 0;
    for y in 0..ch {
        for x in 0..cw {
            match row_uvs.get(&cmap.get(x, y)) {
                Some(&uv) => index_map.set(x, y, uv),
                // Unmapped colors keep the zero sentinel
                None => misses += 1,
            }
        }
    }

    IndexedPalette {
        index_map,
        adjusted,
        misses,
    }
}
