/// The bitmap renditions required by the macOS iconset convention

/// One required rendition of the app icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    /// Pixel width and height (renditions are always square)
    pub dimension: u32,
    /// Iconset filename for this size/scale combination
    pub filename: &'static str,
}

/// Five logical sizes at 1x and 2x scale, ascending, 1x before 2x.
/// `iconutil` expects exactly these filenames inside the .iconset directory.
pub const ICONSET_SIZES: [SizeEntry; 10] = [
    SizeEntry { dimension: 16, filename: "icon_16x16.png" },
    SizeEntry { dimension: 32, filename: "icon_16x16@2x.png" },
    SizeEntry { dimension: 32, filename: "icon_32x32.png" },
    SizeEntry { dimension: 64, filename: "icon_32x32@2x.png" },
    SizeEntry { dimension: 128, filename: "icon_128x128.png" },
    SizeEntry { dimension: 256, filename: "icon_128x128@2x.png" },
    SizeEntry { dimension: 256, filename: "icon_256x256.png" },
    SizeEntry { dimension: 512, filename: "icon_256x256@2x.png" },
    SizeEntry { dimension: 512, filename: "icon_512x512.png" },
    SizeEntry { dimension: 1024, filename: "icon_512x512@2x.png" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_logical_sizes_at_two_scales() {
        assert_eq!(ICONSET_SIZES.len(), 10);
    }

    #[test]
    fn test_dimensions_in_fixed_order() {
        let dims: Vec<u32> = ICONSET_SIZES.iter().map(|e| e.dimension).collect();
        assert_eq!(dims, [16, 32, 32, 64, 128, 256, 256, 512, 512, 1024]);
    }

    #[test]
    fn test_filenames_encode_logical_size() {
        for pair in ICONSET_SIZES.chunks(2) {
            let logical = pair[0].dimension;
            assert_eq!(pair[0].filename, format!("icon_{}x{}.png", logical, logical));
            assert_eq!(pair[1].filename, format!("icon_{}x{}@2x.png", logical, logical));
        }
    }

    #[test]
    fn test_retina_entries_double_the_logical_size() {
        for pair in ICONSET_SIZES.chunks(2) {
            assert_eq!(pair[1].dimension, pair[0].dimension * 2);
        }
    }
}
