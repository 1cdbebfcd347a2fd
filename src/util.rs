// Import standard library items for file path handling
use std::ffi::OsStr; // OS-specific string slice for file extensions
use std::path::Path; // Cross-platform file path handling

/// Round a texture dimension up to the next power of two
/// Derived texture canvases are sized this way; zero is promoted to one so
/// a degenerate dimension still yields a valid canvas side
pub fn next_pow2(n: u32) -> u32 {
    n.max(1).next_power_of_two()
}

/// Encode one axis of a unit normal vector as a byte
/// Maps v in [-1, 1] to round(v * 127 + 127), clamped to [0, 255]
pub fn encode_axis(v: f32) -> u8 {
    (v * 127.0 + 127.0).round().clamp(0.0, 255.0) as u8
}

/// Encode a normalized texture coordinate as a byte
/// Maps v in [0, 1] to round(v * 255), clamped to [0, 255]
pub fn encode_unit(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Extract the file extension from a filename or path
///
/// # Arguments
/// * `filename` - The filename or path to extract extension from
///
/// # Returns
/// * `Some(&str)` - The file extension (without the dot)
/// * `None` - If there's no extension or it contains invalid UTF-8
pub fn file_ext(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_pow2_rounds_up() {
        assert_eq!(next_pow2(1), 1);
        assert_eq!(next_pow2(2), 2);
        assert_eq!(next_pow2(3), 4);
        assert_eq!(next_pow2(5), 8);
        assert_eq!(next_pow2(100), 128);
        // Degenerate dimension still gives a usable canvas side
        assert_eq!(next_pow2(0), 1);
    }

    #[test]
    fn encode_axis_covers_the_unit_range() {
        assert_eq!(encode_axis(-1.0), 0);
        assert_eq!(encode_axis(0.0), 127);
        assert_eq!(encode_axis(1.0), 254);
        // Out-of-range values clamp instead of wrapping
        assert_eq!(encode_axis(-2.0), 0);
        assert_eq!(encode_axis(2.0), 255);
    }

    #[test]
    fn encode_unit_covers_the_texture_range() {
        assert_eq!(encode_unit(0.0), 0);
        assert_eq!(encode_unit(0.5), 128);
        assert_eq!(encode_unit(1.0), 255);
        assert_eq!(encode_unit(1.5), 255);
    }

    #[test]
    fn file_ext_reads_the_extension() {
        assert_eq!(file_ext("image.png"), Some("png"));
        assert_eq!(file_ext("path/to/file.jpg"), Some("jpg"));
        assert_eq!(file_ext("no_extension"), None);
    }
}
