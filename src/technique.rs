// Image data model and the derived-texture bundle the bindings borrow from
use crate::map::Image;
use crate::pipeline::DerivedBundle;

/// The two shading strategies a renderer can drive with this pipeline
/// Both states are reachable from either at any time; selecting one is a
/// pure assignment and never recomputes anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    /// Render straight from the unprocessed height map and palette; the
    /// fallback when derived textures are stale or unavailable
    Direct,
    /// Render from the fully preprocessed lookup textures; the
    /// higher-fidelity path
    Indexed,
}

impl Default for Technique {
    fn default() -> Self {
        Technique::Indexed
    }
}

/// Everything a renderer must bind for one technique: borrowed textures
/// plus per-draw scalars
#[derive(Debug)]
pub enum Bindings<'a> {
    /// Binding set for the direct technique
    Direct {
        color_map: &'a Image,
        height_map: &'a Image,
        palette: &'a Image,
        /// Sprite dimensions, taken from the color map
        sprite_width: u32,
        sprite_height: u32,
        light_dir: [f32; 3],
    },
    /// Binding set for the indexed technique
    Indexed {
        index_map: &'a Image,
        normal_map: &'a Image,
        adjusted_palette: &'a Image,
        light_dir: [f32; 3],
    },
}

/// Resolve the binding set for an explicitly supplied technique
///
/// The technique is an argument rather than ambient state, so the selector
/// itself holds no side effects; callers that keep a current technique
/// pass it in per frame.
///
/// # Arguments
/// * `technique` - Which shading strategy to bind for
/// * `cmap`, `hmap`, `palette` - Raw source images
/// * `derived` - The latest published bundle, if any
/// * `light_dir` - Light direction supplied by the caller
///
/// # Returns
/// * `Some(Bindings)` with the textures and scalars the technique needs
/// * `None` when the indexed technique is requested before any derived
///   textures have been published
pub fn bindings<'a>(
    technique: Technique,
    cmap: &'a Image,
    hmap: &'a Image,
    palette: &'a Image,
    derived: Option<&'a DerivedBundle>,
    light_dir: [f32; 3],
) -> Option<Bindings<'a>> {
    match technique {
        Technique::Direct => Some(Bindings::Direct {
            color_map: cmap,
            height_map: hmap,
            palette,
            sprite_width: cmap.width(),
            sprite_height: cmap.height(),
            light_dir,
        }),
        Technique::Indexed => derived.map(|bundle| Bindings::Indexed {
            index_map: &bundle.index_map,
            normal_map: &bundle.normal_map,
            adjusted_palette: &bundle.adjusted_palette,
            light_dir,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::rebuild;

    #[test]
    fn default_technique_is_the_preprocessed_path() {
        assert_eq!(Technique::default(), Technique::Indexed);
    }

    #[test]
    fn direct_bindings_expose_raw_sources_and_sprite_dimensions() {
        let cmap = Image::new(5, 3);
        let hmap = Image::new(7, 7);
        let palette = Image::new(2, 2);
        let light = [0.5, -0.5, 0.7];

        let bound = bindings(Technique::Direct, &cmap, &hmap, &palette, None, light);
        match bound {
            Some(Bindings::Direct {
                sprite_width,
                sprite_height,
                height_map,
                light_dir,
                ..
            }) => {
                // Sprite dimensions follow the color map, not the height map
                assert_eq!((sprite_width, sprite_height), (5, 3));
                assert_eq!(height_map.size(), (7, 7));
                assert_eq!(light_dir, light);
            }
            other => panic!("expected direct bindings, got {:?}", other),
        }
    }

    #[test]
    fn indexed_bindings_expose_the_derived_bundle() {
        let mut cmap = Image::new(2, 2);
        let mut palette = Image::new(2, 1);
        palette.set(0, 0, [5, 5, 5, 255]);
        palette.set(1, 0, [200, 200, 200, 255]);
        cmap.set(0, 0, [5, 5, 5, 255]);
        let mut hmap = Image::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                hmap.set(x, y, [70, 0, 0, 255]);
            }
        }

        let bundle = rebuild(&cmap, &hmap, &palette);
        let bound = bindings(
            Technique::Indexed,
            &cmap,
            &hmap,
            &palette,
            Some(&bundle),
            [0.0, 0.0, 1.0],
        );
        match bound {
            Some(Bindings::Indexed {
                index_map,
                normal_map,
                adjusted_palette,
                ..
            }) => {
                assert_eq!(index_map, &bundle.index_map);
                assert_eq!(normal_map, &bundle.normal_map);
                assert_eq!(adjusted_palette, &bundle.adjusted_palette);
            }
            other => panic!("expected indexed bindings, got {:?}", other),
        }
    }

    #[test]
    fn indexed_bindings_without_a_bundle_are_unavailable() {
        let cmap = Image::new(1, 1);
        let hmap = Image::new(1, 1);
        let palette = Image::new(1, 1);
        let bound = bindings(
            Technique::Indexed,
            &cmap,
            &hmap,
            &palette,
            None,
            [0.0, 0.0, 1.0],
        );
        assert!(bound.is_none());
    }
}
