//! World query surface consumed by characters and AI.

use crate::enums::TileLayer;
use crate::types::Position;

/// Tile classification on a fixed-size grid.
///
/// Implementations must report missing layers and out-of-range cells as
/// absent rather than failing.
pub trait WorldQuery {
    /// Edge length of one grid cell in world units.
    fn tile_size(&self) -> f64;

    /// Whether `layer` has a tile at the given grid cell.
    fn query_tile(&self, layer: TileLayer, grid_x: i32, grid_y: i32) -> bool;

    /// Grid cell containing a world position.
    fn grid_cell(&self, pos: &Position) -> (i32, i32) {
        let size = self.tile_size();
        ((pos.x / size).floor() as i32, (pos.y / size).floor() as i32)
    }

    /// Whether `layer` has a tile under a world position.
    fn query_at(&self, layer: TileLayer, pos: &Position) -> bool {
        let (gx, gy) = self.grid_cell(pos);
        self.query_tile(layer, gx, gy)
    }

    /// Whether a world position is impassable for walking characters.
    fn is_blocked_at(&self, pos: &Position) -> bool {
        self.query_at(TileLayer::Collision, pos) || self.query_at(TileLayer::Obstacles, pos)
    }
}
