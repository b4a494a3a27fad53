/// Scales a unit-interval RGB triple to 8-bit channels and appends `alpha`.
pub fn unit_rgb_to_rgba8(rgb: [f64; 3], alpha: u8) -> [u8; 4] {
    let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(rgb[0]), channel(rgb[1]), channel(rgb[2]), alpha]
}

/// Packed `0xRRGGBB` to unit-interval RGB.
pub const fn hex_to_unit_rgb(hex: u32) -> [f64; 3] {
    [
        ((hex >> 16) & 0xFF) as f64 / 255.0,
        ((hex >> 8) & 0xFF) as f64 / 255.0,
        (hex & 0xFF) as f64 / 255.0,
    ]
}
