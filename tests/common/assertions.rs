//! Assertion helpers shared by the integration tests.

use eink_pack::PackedImage;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.len() > PNG_SIGNATURE.len() && bytes[..8] == PNG_SIGNATURE,
        "Expected PNG data, got {} bytes starting with {:02X?}",
        bytes.len(),
        &bytes[..bytes.len().min(8)]
    );
}

/// Assert the packed buffer length matches the meta's depth and size
pub fn assert_packed_len(image: &PackedImage) {
    let meta = image.meta();
    let bpp = if meta.bpp == 3 { 4 } else { meta.bpp };
    let row = eink_pack::pack::bytes_per_row(meta.width, bpp).expect("known depth");
    assert_eq!(
        image.buffer().len(),
        row * meta.height,
        "buffer length for {}x{} @ {} bpp",
        meta.width,
        meta.height,
        meta.bpp
    );
}

/// Assert every preview pixel is one of `colors`
pub fn assert_preview_within(image: &PackedImage, colors: &[[u8; 3]]) {
    for (i, px) in image.preview().iter().enumerate() {
        assert!(
            colors.contains(&[px.r, px.g, px.b]),
            "preview pixel {i} = {:?} not in allowed set",
            [px.r, px.g, px.b]
        );
    }
}
