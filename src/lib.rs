// Module declarations - tell Rust about the other source files in this project
pub mod map;       // Contains the RGBA image data structure and PNG loading
pub mod normal;    // Synthesizes a tangent-space normal map from the height map
pub mod palette;   // Packs the palette atlas and indexes the color map into it
pub mod pipeline;  // Whole-pipeline rebuild producing the derived-texture bundle
pub mod technique; // Shading technique selection and renderer binding sets
pub mod util;      // Utility functions for texture padding and channel encoding
