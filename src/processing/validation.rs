use crate::core::SourceImage;

/// Whether a declared MIME type indicates an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Filter an input set down to items with an image MIME type, preserving
/// input order. Non-image items are dropped before any processing; they are
/// not decode failures and produce no per-item error.
pub fn filter_images(files: Vec<SourceImage>) -> Vec<SourceImage> {
    files
        .into_iter()
        .filter(|f| is_image_mime(&f.mime))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, mime: &str) -> SourceImage {
        SourceImage::new(name, mime, vec![0u8; 4])
    }

    #[test]
    fn image_mime_prefix_is_accepted() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/x-custom"));
        assert!(is_image_mime("IMAGE/JPEG"));
    }

    #[test]
    fn non_image_mime_is_rejected() {
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/octet-stream"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn filter_drops_non_images_and_keeps_order() {
        let files = vec![
            source("a.png", "image/png"),
            source("notes.txt", "text/plain"),
            source("b.jpg", "image/jpeg"),
        ];

        let images = filter_images(files);

        let names: Vec<_> = images.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn filter_of_only_non_images_is_empty() {
        let files = vec![source("notes.txt", "text/plain")];
        assert!(filter_images(files).is_empty());
    }
}
