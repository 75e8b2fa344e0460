//! Test fixtures: PNG builders and board files.

use std::path::{Path, PathBuf};

use inkpack::services::image_io::encode_rgba_png;
use eink_pack::Rgba;

/// A small board file with one board per packer family
pub const TEST_BOARDS_JSON: &str = r#"{
  "boards": [
    {
      "board": "Tiny",
      "display_width": 8,
      "display_height": 2,
      "modes": [
        { "id": "bw", "bpp": 1, "defaults": { "threshold": 100 } },
        { "id": "bwr", "bpp": 2 },
        { "id": "gray8", "bpp": 3, "levels": 8 },
        { "id": "gray16", "bpp": 4, "levels": 16, "defaults": { "dither": "jarvis" } },
        { "id": "acep7", "bpp": 5, "levels": 7 }
      ]
    }
  ]
}"#;

/// Same boards as YAML
pub const TEST_BOARDS_YAML: &str = r#"
boards:
  - board: Tiny
    display_width: 8
    display_height: 2
    modes:
      - id: bw
        bpp: 1
"#;

/// Horizontal gray ramp from black to white
pub fn gradient(width: u32, height: u32) -> Vec<Rgba> {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = if width > 1 { (x * 255 / (width - 1)) as u8 } else { 0 };
            pixels.push(Rgba::gray(v));
        }
    }
    pixels
}

/// Every pixel the same color
pub fn solid(width: u32, height: u32, color: Rgba) -> Vec<Rgba> {
    vec![color; (width * height) as usize]
}

/// Encode `pixels` and write them to `dir/name`
pub fn write_png(dir: &Path, name: &str, pixels: &[Rgba], width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let bytes = encode_rgba_png(pixels, width, height).expect("encode fixture");
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

/// Write the test board file into `dir`
pub fn write_boards(dir: &Path) -> PathBuf {
    let path = dir.join("boards.json");
    std::fs::write(&path, TEST_BOARDS_JSON).expect("write boards");
    path
}
