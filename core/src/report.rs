use crate::{map::MapDocument, position::Position};
use serde::{Deserialize, Serialize};

/// flag statistics of a single tile layer
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct LayerFlagReport {
    /// position of the layer in the map's `layers` array
    pub layer: usize,
    pub name: Option<String>,

    pub total_tiles: usize,
    pub flagged_tiles: usize,

    pub horizontal: usize,
    pub vertical: usize,
    pub diagonal: usize,

    /// first flagged cells, only available if the layer size matches its data
    pub positions: Vec<Position>,
}

/// read only summary of all flip flags found in a map
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct FlagReport {
    pub layers: Vec<LayerFlagReport>,
}

impl FlagReport {
    /// scans all tile layers, at most `max_positions` flagged cells are listed per layer
    pub fn scan(document: &MapDocument, max_positions: usize) -> FlagReport {
        let mut layers = Vec::new();

        for (index, layer) in document.layers().iter().enumerate() {
            let Some(tiles) = layer.tiles() else {
                continue;
            };

            let mut report = LayerFlagReport {
                layer: index,
                name: layer.name().map(String::from),
                total_tiles: tiles.len(),
                ..Default::default()
            };

            for gid in tiles {
                let flags = gid.flags();
                report.horizontal += usize::from(flags.horizontal);
                report.vertical += usize::from(flags.vertical);
                report.diagonal += usize::from(flags.diagonal);
                report.flagged_tiles += usize::from(gid.is_flipped());
            }

            if let Some(grid) = layer.grid() {
                report.positions = grid
                    .indexed_iter()
                    .filter(|(_, gid)| gid.is_flipped())
                    .map(|((y, x), _)| Position::new(x, y))
                    .take(max_positions)
                    .collect();
            }

            layers.push(report);
        }

        FlagReport { layers }
    }

    pub fn total_tiles(&self) -> usize {
        self.layers.iter().map(|l| l.total_tiles).sum()
    }

    pub fn total_flagged(&self) -> usize {
        self.layers.iter().map(|l| l.flagged_tiles).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_flagged() == 0
    }
}
