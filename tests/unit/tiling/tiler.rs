//! Tests for the crop-and-save loop

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbaImage};
    use tilesplit::TilerError;
    use tilesplit::io::progress::TileProgress;
    use tilesplit::tiling::tiler::{tile_image, tile_image_file};

    fn blank_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::new(width, height))
    }

    // Tests tile count matches rows times columns
    // Verified by writing one tile fewer than the grid holds
    #[test]
    fn test_tile_count_returned() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = temp_dir.path().join("tiles");

        let result = tile_image(&blank_image(64, 32), 16, &destination, None);
        assert_eq!(result.ok(), Some(8));

        let written = std::fs::read_dir(&destination)
            .map(|entries| entries.count())
            .unwrap_or(0);
        assert_eq!(written, 8);
    }

    // Tests the progress bar is advanced once per tile
    // Verified by skipping the progress update in the loop
    #[test]
    fn test_progress_receives_every_tile() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = temp_dir.path().join("tiles");

        let progress = TileProgress::new(4);
        let result = tile_image(&blank_image(40, 40), 20, &destination, Some(&progress));
        progress.finish();

        assert_eq!(result.ok(), Some(4));
    }

    // Tests an empty grid writes nothing but still succeeds
    // Verified by turning the empty grid into an error
    #[test]
    fn test_empty_grid_succeeds() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = temp_dir.path().join("tiles");

        let result = tile_image(&blank_image(5, 5), 8, &destination, None);
        assert_eq!(result.ok(), Some(0));
        assert!(destination.is_dir());
    }

    // Tests a file squatting on the destination path is reported
    // Verified by mapping the create_dir_all failure to WriteFailed
    #[test]
    fn test_blocked_destination_reports_unavailable() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = temp_dir.path().join("tiles");
        std::fs::write(&destination, b"blocker").expect("Failed to write blocker");

        let result = tile_image(&blank_image(32, 32), 16, &destination, None);
        assert!(matches!(
            result,
            Err(TilerError::DestinationUnavailable { .. })
        ));
    }

    // Tests a failed tile write surfaces without removing earlier tiles
    // Verified by deleting written tiles on error
    #[test]
    fn test_failed_write_is_not_rolled_back() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let destination = temp_dir.path().join("tiles");
        std::fs::create_dir_all(destination.join("square_1_0.png"))
            .expect("Failed to create blocker");

        let result = tile_image(&blank_image(16, 32), 16, &destination, None);
        assert!(matches!(result, Err(TilerError::WriteFailed { .. })));
        assert!(destination.join("square_0_0.png").is_file());
    }

    // Tests a non-image file reports a load error
    // Verified by mapping decode failures to WriteFailed
    #[test]
    fn test_undecodable_file_reports_load_error() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let fake_image = temp_dir.path().join("not_an_image.png");
        std::fs::write(&fake_image, b"plain text").expect("Failed to write fixture");

        let result = tile_image_file(&fake_image, 8, &temp_dir.path().join("tiles"), None);
        assert!(matches!(result, Err(TilerError::ImageLoad { .. })));
    }
}
