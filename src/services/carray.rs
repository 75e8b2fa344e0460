//! C header output for firmware builds.
//!
//! Emits the packed buffer as a `PROGMEM` byte array plus width and height
//! constants, sixteen bytes per line.

use std::fmt::Write as _;

use eink_pack::ConvertMeta;

const BYTES_PER_LINE: usize = 16;

/// Turn an arbitrary file stem into a valid C identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets a `_` prefix. An empty name becomes `image`.
pub fn sanitize_c_name(name: &str) -> String {
    if name.is_empty() {
        return "image".to_string();
    }
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Depth of one stored pixel. 3 bpp values live in nibbles, so firmware
/// reads them as 4 bpp.
fn stored_bpp(bpp: u8) -> u8 {
    if bpp == 3 {
        4
    } else {
        bpp
    }
}

/// Render a C header for a packed buffer.
pub fn write_c_array(name: &str, buffer: &[u8], meta: &ConvertMeta) -> String {
    let name = sanitize_c_name(name);
    let bpp = stored_bpp(meta.bpp);
    let bytes_per_row = eink_pack::pack::bytes_per_row(meta.width, bpp)
        .unwrap_or_else(|| (meta.width * bpp as usize).div_ceil(8));

    let hex_block = buffer
        .chunks(BYTES_PER_LINE)
        .map(|line| {
            let bytes: Vec<String> = line.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("  {}", bytes.join(", "))
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "// {bpp} BPP image");
    let _ = writeln!(
        out,
        "// size: {}x{}px, bytesPerRow: {bytes_per_row}, total bytes: {}",
        meta.width,
        meta.height,
        buffer.len()
    );
    let _ = writeln!(out, "#include <stdint.h>");
    let _ = writeln!(out);
    let _ = writeln!(out, "const uint8_t {name}[{}] PROGMEM = {{", buffer.len());
    if !hex_block.is_empty() {
        let _ = writeln!(out, "{hex_block}");
    }
    let _ = writeln!(out, "}};");
    let _ = writeln!(out);
    let _ = writeln!(out, "const uint16_t {name}_w = {};", meta.width);
    let _ = writeln!(out, "const uint16_t {name}_h = {};", meta.height);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta(width: usize, height: usize, bpp: u8) -> ConvertMeta {
        ConvertMeta {
            width,
            height,
            bpp,
            mode_id: "m".to_string(),
        }
    }

    #[test]
    fn test_sanitize_c_name() {
        assert_eq!(sanitize_c_name("logo"), "logo");
        assert_eq!(sanitize_c_name("my logo-v2"), "my_logo_v2");
        assert_eq!(sanitize_c_name("2024_banner"), "_2024_banner");
        assert_eq!(sanitize_c_name(""), "image");
        assert_eq!(sanitize_c_name("ünï"), "_n_");
    }

    #[test]
    fn test_header_layout() {
        let header = write_c_array("logo", &[0x80, 0x80], &meta(2, 2, 1));
        let expected = "\
// 1 BPP image
// size: 2x2px, bytesPerRow: 1, total bytes: 2
#include <stdint.h>

const uint8_t logo[2] PROGMEM = {
  0x80, 0x80
};

const uint16_t logo_w = 2;
const uint16_t logo_h = 2;
";
        assert_eq!(header, expected);
    }

    #[test]
    fn test_wraps_at_sixteen_bytes() {
        let buffer: Vec<u8> = (0..20).collect();
        let header = write_c_array("x", &buffer, &meta(160, 1, 1));
        assert!(header.contains("  0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,\n  0x10, 0x11, 0x12, 0x13\n};"));
    }

    #[test]
    fn test_three_bpp_reported_as_nibbles() {
        let header = write_c_array("g", &[0xA4, 0x20], &meta(3, 1, 3));
        assert!(header.starts_with("// 4 BPP image\n// size: 3x1px, bytesPerRow: 2, total bytes: 2\n"));
    }
}
