// Image data model shared by source and derived maps
use crate::map::Image;
// Utility functions for canvas padding and channel encoding
use crate::util::{encode_axis, next_pow2};

/// Fixed z component of the raw gradient vector
/// Gives near-flat regions a gentle outward relief and keeps the vector
/// from degenerating to zero length before normalization
const RELIEF_BIAS: f32 = 0.2;

/// Cardinal scan directions as (dx, dy) offsets: left, right, down, up
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Synthesize a tangent-space normal map from a height map
///
/// The height map's red channel encodes elevation and its alpha channel is
/// a validity mask: alpha 0 marks pixels outside the sprite silhouette,
/// which terminate gradient scans without contributing a height difference.
/// The gradient at each pixel is an edge-terminated central difference:
/// each direction is scanned to the first differing pixel, so constant
/// regions produce a zero gradient on that axis no matter how large they
/// are.
///
/// The output canvas is square with side length rounded up to the next
/// power of two; pixels outside the original height-map bounds are left at
/// the zero color (undefined normal).
///
/// # Arguments
/// * `hmap` - Height map image; both dimensions must be nonzero
///
/// # Returns
/// * Normal map image where each in-bounds pixel encodes a unit vector as
///   round(v * 127 + 127) per axis with alpha 255
pub fn synthesize(hmap: &Image) -> Image {
    let (width, height) = hmap.size();
    assert!(
        width > 0 && height > 0,
        "height map must have nonzero dimensions"
    );

    let dim = next_pow2(width.max(height));
    let mut nmap = Image::new(dim, dim);

    for y in 0..height {
        for x in 0..width {
            // Distance to and signed height difference with the first
            // differing pixel in each scan direction
            let mut dists = [0u32; 4];
            let mut diffs = [0f32; 4];
            for (dir, &(dx, dy)) in DIRECTIONS.iter().enumerate() {
                let (dist, diff) = scan(hmap, x, y, dx, dy);
                dists[dir] = dist;
                diffs[dir] = diff;
            }

            // Central difference with each side weighted by how far its
            // scan traveled before stopping
            let gx = diffs[1] / dists[1] as f32 - diffs[0] / dists[0] as f32;
            let gy = diffs[3] / dists[3] as f32 - diffs[2] / dists[2] as f32;

            // Normalize (gx, gy, bias) to unit length
            let len = (gx * gx + gy * gy + RELIEF_BIAS * RELIEF_BIAS).sqrt();

            nmap.set(
                x,
                y,
                [
                    encode_axis(gx / len),
                    encode_axis(gy / len),
                    encode_axis(RELIEF_BIAS / len),
                    255,
                ],
            );
        }
    }

    nmap
}

/// Walk outward from (x, y) along (dx, dy) until a pixel differs from the
/// origin pixel or the walk leaves the image
///
/// Returns (distance, diff): distance counts the pixels stepped to the
/// stop point (minimum 1), diff is the signed red-channel difference in
/// [-1, 1] when the differing pixel carries height data, or 0 when it is
/// off-silhouette (alpha 0) or the image edge was reached first
fn scan(hmap: &Image, x: u32, y: u32, dx: i32, dy: i32) -> (u32, f32) {
    let (width, height) = hmap.size();
    let orig = hmap.get(x, y);
    let mut k = 0u32;
    loop {
        let nx = x as i64 + dx as i64 * (k as i64 + 1);
        let ny = y as i64 + dy as i64 * (k as i64 + 1);
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            // Edge reached with no height change: no gradient information
            return (k + 1, 0.0);
        }
        let color = hmap.get(nx as u32, ny as u32);
        if color != orig {
            let diff = if color[3] > 0 {
                (orig[0] as f32 - color[0] as f32) / 255.0
            } else {
                // Silhouette boundary: terminate without faking a cliff
                0.0
            };
            return (k + 1, diff);
        }
        k += 1;
    }
}
