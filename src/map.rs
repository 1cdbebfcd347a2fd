// External crate import for image decoding and encoding
use image::RgbaImage;
use std::result::Result; // Standard Result type for error handling

/// A 2D grid of RGBA samples stored in row-major order
/// Source maps (color map, height map, palette) and all derived textures
/// share this representation; each channel is an 8-bit unsigned integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width of the grid in pixels
    width: u32,
    /// Height of the grid in pixels
    height: u32,
    /// Pixel data as [r, g, b, a] samples, one row after another
    pixels: Vec<[u8; 4]>,
}

impl Image {
    /// Create a fully transparent black image of the given dimensions
    /// Derived textures start from this zero state so padding cells and
    /// unmapped pixels keep a well-defined default
    pub fn new(width: u32, height: u32) -> Self {
        Image {
            width,
            height,
            pixels: vec![[0; 4]; (width * height) as usize],
        }
    }

    /// Get the dimensions of this image as (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width of this image in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of this image in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the RGBA sample at the given x,y coordinates
    /// Out-of-bounds coordinates are a programming error and panic
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Replace the RGBA sample at the given x,y coordinates
    pub fn set(&mut self, x: u32, y: u32, color: [u8; 4]) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Load an image from a PNG file
    ///
    /// # Arguments
    /// * `file` - Path to the PNG image file
    ///
    /// # Returns
    /// * `Ok(Image)` if the image loaded successfully
    /// * `Err(String)` if the image file couldn't be opened
    pub fn open(file: &str) -> Result<Self, String> {
        if let Ok(img) = image::open(file) {
            // Convert any image format to RGBA8 for consistent processing
            Ok(Image::from_rgba(&img.to_rgba8()))
        } else {
            Err(format!("Could not open PNG {}", file))
        }
    }

    /// Build an Image from a decoded RGBA buffer
    pub fn from_rgba(source: &RgbaImage) -> Self {
        let mut img = Image::new(source.width(), source.height());
        for (x, y, pixel) in source.enumerate_pixels() {
            img.set(x, y, pixel.0);
        }
        img
    }

    /// Convert this image into an encodable RGBA buffer
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| image::Rgba(self.get(x, y)))
    }
}
