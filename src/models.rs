use image::Rgb;
use thiserror::Error;

/// Background fill behind every glyph, the FluxAuth brand violet (#667eea).
pub const BACKGROUND: Rgb<u8> = Rgb([0x66, 0x7e, 0xea]);

/// Fill and stroke color of the glyph itself.
pub const GLYPH: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Sizes the extension manifest registers, in the order they are rendered.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Smallest edge length at which the detailed lock stays legible.
pub const DETAIL_THRESHOLD: u32 = 48;

/// File name of the optional multi-resolution bundle.
pub const ICO_FILE_NAME: &str = "icon.ico";

/// Selects which glyph is drawn over the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Lock body with a shackle arc above it.
    DetailedLock,
    /// A plain filled disc; the lock smears into noise below 48 px.
    SimpleCircle,
}

/// Describes one icon to render: edge length plus the glyph chosen for it.
#[derive(Clone, Copy, Debug)]
pub struct IconSpec {
    pub size: u32,
    pub style: GlyphStyle,
}

impl IconSpec {
    /// Builds the spec for an edge length, picking the glyph by size.
    pub fn for_size(size: u32) -> Self {
        let style = if size >= DETAIL_THRESHOLD {
            GlyphStyle::DetailedLock
        } else {
            GlyphStyle::SimpleCircle
        };
        Self { size, style }
    }

    /// File name the extension manifest refers to, e.g. `icon48.png`.
    pub fn file_name(&self) -> String {
        format!("icon{}.png", self.size)
    }
}

/// Errors raised while rendering or writing icon files.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot render a {size}x{size} icon")]
    InvalidSize { size: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_threshold_is_inclusive_at_48() {
        assert_eq!(IconSpec::for_size(47).style, GlyphStyle::SimpleCircle);
        assert_eq!(IconSpec::for_size(48).style, GlyphStyle::DetailedLock);
        assert_eq!(IconSpec::for_size(128).style, GlyphStyle::DetailedLock);
    }

    #[test]
    fn file_names_embed_the_size() {
        assert_eq!(IconSpec::for_size(16).file_name(), "icon16.png");
        assert_eq!(IconSpec::for_size(128).file_name(), "icon128.png");
    }
}
