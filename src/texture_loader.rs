use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use log::{debug, warn};

use crate::config::SlideSelector;
use crate::error::{CarouselError, Result};

// --- Resolve the slides of a container, sorted by file name ---
pub fn load_slide_paths(container: &Path, selector: &SlideSelector) -> Result<Vec<PathBuf>> {
    if !container.is_dir() {
        return Err(CarouselError::ContainerNotFound { path: container.to_path_buf() });
    }

    let entries = fs::read_dir(container).map_err(|e| CarouselError::io(container, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CarouselError::io(container, e))?.path();
        if selector.matches(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(CarouselError::NoSlides {
            container: container.to_path_buf(),
            selector: selector.to_string(),
        })
    } else {
        Ok(paths)
    }
}

/// Reads the EXIF orientation tag of a JPEG. 1 (no rotation) when absent.
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|e| CarouselError::io(image_path, e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| CarouselError::image(image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped variants are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| CarouselError::image(image_path, e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_container_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = load_slide_paths(&missing, &SlideSelector::default()).unwrap_err();
        assert!(matches!(err, CarouselError::ContainerNotFound { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn container_without_matches_has_no_slides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), b"hi").unwrap();

        let err = load_slide_paths(dir.path(), &SlideSelector::parse("png")).unwrap_err();
        assert!(matches!(err, CarouselError::NoSlides { ref selector, .. } if selector == "png"));
    }

    #[test]
    fn slides_are_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.JPG", "b.txt", "b.jpeg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let paths = load_slide_paths(dir.path(), &SlideSelector::default()).unwrap();
        let names: Vec<_> =
            paths.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, ["a.JPG", "b.jpeg", "c.png"]);
    }

    #[test]
    fn orientation_defaults_without_exif() {
        assert_eq!(exif_orientation(Path::new("plain.jpg"), b"not a jpeg"), 1);
    }
}
