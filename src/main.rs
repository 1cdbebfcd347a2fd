// External crate imports for command-line parsing and logging
use clap::clap_app;              // Command-line argument parsing macro
use env_logger::Builder;         // Configures logging output
use log::{error, info, LevelFilter}; // Logging macros and level filtering
// Library items: image loading, the pipeline, and the extension helper
use sprite2shade::{map::Image, pipeline::Pipeline, util::file_ext};
use std::{io::Write, path::Path}; // Standard library items for output handling

fn main() {
    // Configure logging to output info-level messages and above
    // The custom format removes timestamps and log levels for cleaner output
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command-line arguments using the clap_app! macro
    let matches = clap_app!(sprite2shade =>
        (version: env!("CARGO_PKG_VERSION"))
        (about: "Converts sprite color, height, and palette images into shading textures")
        // Required source images
        (@arg CMAP: +required "Input base color map PNG image")
        (@arg HMAP: +required "Input height map PNG image")
        (@arg PALETTE: +required "Input color palette PNG image")
        // Output options
        (@arg output: -o --output +takes_value "Output directory for derived textures (default .)")
    )
    .get_matches();

    // Extract file paths from command-line arguments
    let cmap_file = matches.value_of("CMAP").unwrap();
    let hmap_file = matches.value_of("HMAP").unwrap();
    let palette_file = matches.value_of("PALETTE").unwrap();
    let out_dir = matches.value_of("output").unwrap_or(".");

    // Reject inputs that are not PNG images before decoding anything
    for file in [cmap_file, hmap_file, palette_file] {
        match file_ext(&file.to_lowercase()) {
            Some("png") => {}
            Some(ext) => {
                return error!("Unsupported image format '{}'", ext);
            }
            None => {
                return error!("Missing image format for '{}'", file);
            }
        }
    }

    info!("Reading image files");

    // The base color map referencing palette rows by key color
    let cmap = match Image::open(cmap_file) {
        Ok(img) => img,
        Err(err) => {
            return error!("Error reading color map: {}", err);
        }
    };
    // The height map driving normal synthesis
    let hmap = match Image::open(hmap_file) {
        Ok(img) => img,
        Err(err) => {
            return error!("Error reading height map: {}", err);
        }
    };
    // The row-keyed palette
    let palette = match Image::open(palette_file) {
        Ok(img) => img,
        Err(err) => {
            return error!("Error reading palette: {}", err);
        }
    };

    // Derive every shading texture in one rebuild
    info!("Deriving shading textures");
    let mut pipeline = Pipeline::new();
    let bundle = pipeline.rebuild(&cmap, &hmap, &palette);
    if bundle.palette_misses > 0 {
        info!(
            "{} color map pixels matched no palette key",
            bundle.palette_misses
        );
    }

    // Write the derived textures as PNG files
    info!("Writing textures to {}", out_dir);
    let out = Path::new(out_dir);
    bundle
        .normal_map
        .to_rgba()
        .save(out.join("nmap.png"))
        .expect("Failed to write normal map!");
    bundle
        .index_map
        .to_rgba()
        .save(out.join("pmap.png"))
        .expect("Failed to write palette index map!");
    bundle
        .adjusted_palette
        .to_rgba()
        .save(out.join("palette.png"))
        .expect("Failed to write adjusted palette!");
    info!("Done!");
}
