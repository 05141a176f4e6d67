use crate::{gid::Gid, map::MapDocument};
use log::debug;

/// returns a copy of `document` with the flip flags of every tile reference cleared
///
/// Only the `data` arrays of tile layers are rewritten, every other field and every
/// non-tile layer is cloned as is. The input is left untouched.
pub fn clean(document: &MapDocument) -> MapDocument {
    let layers = document
        .layers()
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            if let Some(tiles) = layer.tiles() {
                let flagged = tiles.iter().filter(|gid| gid.is_flipped()).count();
                debug!(
                    "layer {} ({}): clearing {} of {} tiles",
                    index,
                    layer.name().unwrap_or("unnamed"),
                    flagged,
                    tiles.len()
                );
            }

            layer.map_tiles(Gid::cleared)
        })
        .collect();

    document.with_layers(layers)
}
