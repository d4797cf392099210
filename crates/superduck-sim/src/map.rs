//! TileMap: layered tile grid backing the world query.

use std::collections::HashMap;

use superduck_core::enums::TileLayer;
use superduck_core::error::SimError;
use superduck_core::query::WorldQuery;

/// Layered boolean tile grid. Cell (0, 0) is the bottom-left corner.
#[derive(Debug, Clone)]
pub struct TileMap {
    width: u32,
    height: u32,
    tile_size: f64,
    /// Row-major presence bits per layer, bottom row first.
    layers: HashMap<TileLayer, Vec<bool>>,
}

impl TileMap {
    /// An empty map with no layers.
    pub fn new(width: u32, height: u32, tile_size: f64) -> Result<Self, SimError> {
        if tile_size.is_nan() || tile_size <= 0.0 {
            return Err(SimError::InvalidTileSize(tile_size));
        }
        Ok(Self {
            width,
            height,
            tile_size,
            layers: HashMap::new(),
        })
    }

    /// Build a map from ASCII rows, top row first.
    ///
    /// `~` water, `#` collision, `o` obstacle, anything in `.PMB` floor.
    pub fn from_ascii(rows: &[&str], tile_size: f64) -> Result<Self, SimError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let height = rows.len();
        let mut map = TileMap::new(width as u32, height as u32, tile_size)?;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(SimError::RaggedMap {
                    row,
                    expected: width,
                    found,
                });
            }
            let grid_y = (height - 1 - row) as u32;
            for (col, glyph) in line.chars().enumerate() {
                let layer = match glyph {
                    '~' => Some(TileLayer::Water),
                    '#' => Some(TileLayer::Collision),
                    'o' => Some(TileLayer::Obstacles),
                    '.' | 'P' | 'M' | 'B' => None,
                    _ => return Err(SimError::UnknownGlyph { glyph, row, col }),
                };
                if let Some(layer) = layer {
                    map.set_tile(layer, col as u32, grid_y, true);
                }
            }
        }
        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set or clear a tile. Out-of-range cells are ignored.
    pub fn set_tile(&mut self, layer: TileLayer, grid_x: u32, grid_y: u32, present: bool) {
        if grid_x >= self.width || grid_y >= self.height {
            return;
        }
        let len = (self.width * self.height) as usize;
        let cells = self.layers.entry(layer).or_insert_with(|| vec![false; len]);
        cells[(grid_y * self.width + grid_x) as usize] = present;
    }

    /// Whether the map carries any data for a layer.
    pub fn has_layer(&self, layer: TileLayer) -> bool {
        self.layers.contains_key(&layer)
    }
}

impl WorldQuery for TileMap {
    fn tile_size(&self) -> f64 {
        self.tile_size
    }

    fn query_tile(&self, layer: TileLayer, grid_x: i32, grid_y: i32) -> bool {
        if grid_x < 0 || grid_y < 0 || grid_x as u32 >= self.width || grid_y as u32 >= self.height {
            return false;
        }
        self.layers
            .get(&layer)
            .map(|cells| cells[(grid_y as u32 * self.width + grid_x as u32) as usize])
            .unwrap_or(false)
    }
}
