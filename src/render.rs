use crate::models::{BACKGROUND, GLYPH, GlyphStyle, IconError, IconSpec};
use image::{ImageBuffer, RgbImage};

/// Renders one icon into an RGB raster buffer.
pub fn render_icon(spec: &IconSpec) -> Result<RgbImage, IconError> {
    if spec.size == 0 {
        return Err(IconError::InvalidSize { size: spec.size });
    }

    let mut image = ImageBuffer::from_pixel(spec.size, spec.size, BACKGROUND);
    match spec.style {
        GlyphStyle::DetailedLock => draw_lock(&mut image, spec.size),
        GlyphStyle::SimpleCircle => draw_disc(&mut image, spec.size),
    }
    Ok(image)
}

/// Scales an edge length by a factor, rounding to the nearest pixel.
fn scaled(size: u32, factor: f32) -> u32 {
    (size as f32 * factor).round() as u32
}

/// Lock body plus shackle arc, all proportions relative to the edge length.
fn draw_lock(image: &mut RgbImage, size: u32) {
    let body_side = scaled(size, 0.4);
    let body_left = (size - body_side) / 2;
    let body_top = scaled(size, 0.45);

    let shackle_side = scaled(size, 0.25);
    let shackle_left = (size - shackle_side) / 2;
    let shackle_top = scaled(size, 0.25);
    let stroke = scaled(size, 0.08);

    // Shackle stroke is a band centered on the circle's radius, clipped to
    // the upper half. y grows downward, so "upper" means rows at or above
    // the circle center.
    let radius = shackle_side as f32 / 2.0;
    let center_x = shackle_left as f32 + radius;
    let center_y = shackle_top as f32 + radius;
    let half_stroke = stroke as f32 / 2.0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let in_body = x >= body_left
            && x < body_left + body_side
            && y >= body_top
            && y < body_top + body_side;

        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        let in_shackle = y as f32 <= center_y && (distance - radius).abs() <= half_stroke;

        if in_body || in_shackle {
            *pixel = GLYPH;
        }
    }
}

/// Filled disc for sizes too small to carry the lock shape.
fn draw_disc(image: &mut RgbImage, size: u32) {
    let center = (size / 2) as f32;
    let radius = (size / 3) as f32;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance <= radius {
            *pixel = GLYPH;
        }
    }
}
