//! Tests for tile library loading, cache reuse and the default tile fallback

#[cfg(test)]
mod tests {
    use huetile::MosaicError;
    use huetile::color::Rgb;
    use huetile::index::TileIndex;
    use huetile::index::cache;
    use image::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::TempDir;

    fn write_solid(dir: &Path, name: &str, color: [u8; 3]) {
        let pixel = Rgba([color[0], color[1], color[2], 255]);
        RgbaImage::from_pixel(8, 8, pixel)
            .save(dir.join(name))
            .unwrap();
    }

    fn primary_library(dir: &Path) {
        write_solid(dir, "red.png", [255, 0, 0]);
        write_solid(dir, "green.png", [0, 255, 0]);
        write_solid(dir, "blue.png", [0, 0, 255]);
    }

    #[test]
    fn test_load_indexes_every_tile() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        primary_library(tiles.path());

        let index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        let hue_index = index.load().unwrap();

        assert_eq!(hue_index.len(), 3);
    }

    #[test]
    fn test_load_writes_thumbnails_and_table() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        write_solid(tiles.path(), "only.png", [10, 20, 30]);

        let index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        index.load().unwrap();

        let cache_dir = index.cache_dir();
        assert!(cache::color_table_path(cache_dir).exists());
        // Resized copies keep the full original name plus .png
        assert!(cache_dir.join("only.png.png").exists());
        assert_eq!(image::image_dimensions(cache_dir.join("only.png.png")).unwrap(), (4, 4));
    }

    #[test]
    fn test_second_instance_reuses_the_cache_file() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        primary_library(tiles.path());

        let first = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        first.load().unwrap();

        let table_path = cache::color_table_path(first.cache_dir());
        let written = std::fs::metadata(&table_path).unwrap().modified().unwrap();

        let second = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        assert_eq!(second.load().unwrap().len(), 3);

        let after = std::fs::metadata(&table_path).unwrap().modified().unwrap();
        assert_eq!(written, after, "second load must not rewrite the table");
    }

    #[test]
    fn test_load_is_idempotent_within_an_instance() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        primary_library(tiles.path());

        let index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        let first = index.load().unwrap().len();
        let second = index.load().unwrap().len();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_library_fails_at_load() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();

        let index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        let result = index.load();

        assert!(matches!(result, Err(MosaicError::EmptyTileLibrary { .. })));
    }

    #[test]
    fn test_unmatched_pixel_falls_back_to_default_tile() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        // Only a blue tile: bucket 240
        write_solid(tiles.path(), "blue.png", [0, 0, 255]);

        let mut index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        index.set_default_color(Rgb::new(0, 0, 255)).unwrap();
        let default = index.default_tile().unwrap().to_path_buf();

        // Pure red lives in bucket 0; a zero window cannot reach 240
        let chosen = index
            .find_best_tile_for_pixel(Rgb::new(255, 0, 0), 0)
            .unwrap();
        assert_eq!(chosen, default.as_path());
    }

    #[test]
    fn test_unmatched_pixel_without_default_is_an_error() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        write_solid(tiles.path(), "blue.png", [0, 0, 255]);

        let index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        let result = index.find_best_tile_for_pixel(Rgb::new(255, 0, 0), 0);

        assert!(matches!(result, Err(MosaicError::NoTileAvailable { .. })));
    }

    #[test]
    fn test_matched_pixel_returns_the_nearest_tile() {
        let tiles = TempDir::new().unwrap();
        let cache_root = TempDir::new().unwrap();
        primary_library(tiles.path());

        let index = TileIndex::with_cache_root(tiles.path(), 4, cache_root.path());
        let chosen = index
            .find_best_tile_for_pixel(Rgb::new(0, 250, 5), 60)
            .unwrap();

        assert!(chosen.to_string_lossy().contains("green"));
    }
}
