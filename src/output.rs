use crate::models::{ICO_FILE_NAME, IconError, IconSpec};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbImage;
use log::debug;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Encodes one rendered icon as `icon{size}.png` in the output directory.
/// The directory must already exist; a missing or read-only directory
/// surfaces the underlying error and aborts the run.
pub fn write_png(image: &RgbImage, spec: &IconSpec, out_dir: &Path) -> Result<PathBuf, IconError> {
    let path = out_dir.join(spec.file_name());
    image.save(&path)?;
    debug!("wrote {} ({}x{} px)", path.display(), spec.size, spec.size);
    Ok(path)
}

/// Bundles every rendered size into a single multi-resolution `icon.ico`.
pub fn write_ico_bundle(
    rendered: &[(IconSpec, RgbImage)],
    out_dir: &Path,
) -> Result<PathBuf, IconError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for (spec, image) in rendered {
        // ICO entries carry RGBA payloads.
        let rgba = image::DynamicImage::ImageRgb8(image.clone()).into_rgba8();
        let entry = IconImage::from_rgba_data(spec.size, spec.size, rgba.into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&entry)?);
    }

    let path = out_dir.join(ICO_FILE_NAME);
    let file = BufWriter::new(File::create(&path)?);
    icon_dir.write(file)?;
    debug!("wrote {} ({} entries)", path.display(), rendered.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_icon;

    #[test]
    fn png_round_trips_with_exact_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let spec = IconSpec::for_size(48);
        let image = render_icon(&spec).unwrap();

        let path = write_png(&image, &spec, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "icon48.png");

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (48, 48));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let spec = IconSpec::for_size(16);
        let image = render_icon(&spec).unwrap();

        let result = write_png(&image, &spec, &dir.path().join("missing"));
        assert!(result.is_err());
    }

    #[test]
    fn ico_bundle_holds_one_entry_per_size() {
        let dir = tempfile::tempdir().unwrap();
        let rendered: Vec<_> = [16u32, 48, 128]
            .into_iter()
            .map(|size| {
                let spec = IconSpec::for_size(size);
                let image = render_icon(&spec).unwrap();
                (spec, image)
            })
            .collect();

        let path = write_ico_bundle(&rendered, dir.path()).unwrap();
        let parsed = IconDir::read(File::open(path).unwrap()).unwrap();
        assert_eq!(parsed.entries().len(), 3);

        let mut sizes: Vec<u32> = parsed.entries().iter().map(|e| e.width()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![16, 48, 128]);
    }
}
