//! Tests for grid sizing and tile plan construction

#[cfg(test)]
mod tests {
    use huetile::MosaicError;
    use huetile::index::TileIndex;
    use huetile::mosaic::MosaicOptions;
    use huetile::mosaic::planner::{clamp_grid, initial_grid, plan_tiles};
    use image::{Rgb, RgbImage};
    use std::path::Path;
    use tempfile::TempDir;

    fn write_solid(path: &Path, color: [u8; 3]) {
        RgbImage::from_pixel(8, 8, Rgb(color)).save(path).unwrap();
    }

    // Tests that grid dimensions round to the nearest whole tile
    // Verified by replacing round with floor, which drops the 33px column
    #[test]
    fn test_initial_grid_rounds_to_nearest_tile() {
        assert_eq!(initial_grid(33, 16, 16), (2, 1));
        assert_eq!(initial_grid(16, 33, 16), (1, 2));
    }

    #[test]
    fn test_initial_grid_rounds_half_up() {
        // 8 / 16 = 0.5 rounds away from zero
        assert_eq!(initial_grid(8, 8, 16), (1, 1));
    }

    #[test]
    fn test_initial_grid_never_returns_zero() {
        assert_eq!(initial_grid(7, 1, 16), (1, 1));
    }

    #[test]
    fn test_clamp_shrinks_wide_grids_by_pixel_aspect() {
        // 4000x1000 px source, cap 100: rows follow the 4:1 pixel ratio
        assert_eq!(clamp_grid(200, 50, 4000, 1000, 100), (100, 25));
    }

    #[test]
    fn test_clamp_shrinks_tall_grids_by_pixel_aspect() {
        assert_eq!(clamp_grid(50, 200, 1000, 4000, 100), (25, 100));
    }

    #[test]
    fn test_clamp_leaves_small_grids_alone() {
        assert_eq!(clamp_grid(20, 10, 320, 160, 100), (20, 10));
    }

    // Tests that a square grid at the cap clamps to the cap on both axes
    // Verified by excluding the equal case, which leaves the grid at 250
    #[test]
    fn test_clamp_square_grid_at_cap() {
        assert_eq!(clamp_grid(250, 250, 4000, 4000, 200), (200, 200));
    }

    #[test]
    fn test_clamp_floors_the_minor_axis() {
        // 3 * 999 / 1000 floors to 2
        assert_eq!(clamp_grid(30, 29, 1000, 999, 3), (3, 2));
    }

    #[test]
    fn test_clamp_minor_axis_never_reaches_zero() {
        assert_eq!(clamp_grid(100, 1, 1000, 5, 10), (10, 1));
    }

    #[test]
    fn test_plan_tiles_rejects_short_buffer() {
        // Buffer length is checked before the tile library is touched
        let index = TileIndex::new(Path::new("/no/such/tiles"), 16);
        let options = MosaicOptions::default();

        let result = plan_tiles(&[0_u8; 399], 10, 10, &index, &options);

        assert!(matches!(
            result,
            Err(MosaicError::SizeMismatch { expected: 400, actual: 399, .. })
        ));
    }

    #[test]
    fn test_plan_tiles_picks_nearest_tile_per_pixel() {
        let tiles = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        write_solid(&tiles.path().join("red.png"), [255, 0, 0]);
        write_solid(&tiles.path().join("green.png"), [0, 255, 0]);

        let mut index = TileIndex::with_cache_root(tiles.path(), 4, cache.path());
        index.set_quiet(true);
        let options = MosaicOptions { quiet: true, ..MosaicOptions::default() };

        // 2x2 grid: red on the top row, green on the bottom
        let buffer = [
            [250_u8, 5, 5, 255],
            [250, 5, 5, 255],
            [5, 250, 5, 255],
            [5, 250, 5, 255],
        ]
        .concat();

        let plan = plan_tiles(&buffer, 2, 2, &index, &options).unwrap();

        assert_eq!(plan.columns(), 2);
        assert_eq!(plan.rows(), 2);
        let top = plan.tile_at(0, 0).unwrap();
        let bottom = plan.tile_at(1, 1).unwrap();
        assert!(top.to_string_lossy().contains("red.png"));
        assert!(bottom.to_string_lossy().contains("green.png"));
        assert_eq!(plan.tile_at(2, 0), None);
        assert_eq!(plan.tile_at(0, 2), None);
    }
}
