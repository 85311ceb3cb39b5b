//! End-to-end test of the public API: filter, compress, account, download.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use image::{DynamicImage, RgbImage};
use image_compressor::{
    download_all, download_one, CompressionSettings, CompressorError, CompressorSession,
    Notifier, SourceImage,
};

fn encoded_source(name: &str, mime: &str, w: u32, h: u32, format: image::ImageFormat) -> SourceImage {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    SourceImage::new(name, mime, bytes)
}

#[derive(Default)]
struct CollectingNotifier {
    messages: Mutex<Vec<(bool, String)>>,
}

impl Notifier for CollectingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push((false, message.to_string()));
    }

    fn notify_success(&self, message: &str) {
        self.messages.lock().unwrap().push((true, message.to_string()));
    }
}

#[tokio::test]
async fn mixed_batch_compresses_resizes_and_downloads() {
    let notifier = Arc::new(CollectingNotifier::default());
    let mut session =
        CompressorSession::new(CompressionSettings::default()).with_notifier(notifier.clone());

    let files = vec![
        encoded_source("large.jpg", "image/jpeg", 4000, 2000, image::ImageFormat::Jpeg),
        SourceImage::new("readme.txt", "text/plain", b"not an image".to_vec()),
        encoded_source("icon.png", "image/png", 100, 60, image::ImageFormat::Png),
    ];

    let results = session.compress_batch(files).await.unwrap();

    // The text file was filtered before processing, not failed
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "large.jpg");
    assert_eq!(results[1].name, "icon.png");

    // 4000x2000 clamps to the 1920 edge with the 2:1 aspect kept
    let large = image::load_from_memory(&results[0].data).unwrap();
    assert_eq!((large.width(), large.height()), (1920, 960));
    assert_eq!(results[0].mime, "image/jpeg");
    assert!(results[0].ratio <= 100);

    // 100x60 is within bounds and keeps its dimensions
    let icon = image::load_from_memory(&results[1].data).unwrap();
    assert_eq!((icon.width(), icon.height()), (100, 60));

    // Sizes and ratio come from the same encode pass
    for result in results {
        assert_eq!(result.encoded_size, result.data.len() as u64);
    }

    let messages = notifier.messages.lock().unwrap().clone();
    assert_eq!(messages, vec![(true, "2 images compressed".to_string())]);

    // Artifacts are byte-identical to the encoded buffers
    let dir = tempfile::tempdir().unwrap();
    let paths = download_all(session.results(), dir.path()).await.unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("compressed_large.jpg"));
    assert_eq!(
        tokio::fs::read(&paths[0]).await.unwrap(),
        session.results()[0].data
    );
}

#[tokio::test]
async fn batch_without_images_reports_error_and_produces_nothing() {
    let notifier = Arc::new(CollectingNotifier::default());
    let mut session =
        CompressorSession::new(CompressionSettings::default()).with_notifier(notifier.clone());

    let files = vec![SourceImage::new("doc.pdf", "application/pdf", vec![0; 16])];
    let outcome = session.compress_batch(files).await;

    assert!(matches!(outcome, Err(CompressorError::NoValidInput)));
    assert!(session.results().is_empty());

    let messages = notifier.messages.lock().unwrap().clone();
    assert_eq!(messages.len(), 1);
    assert!(!messages[0].0);
}

#[tokio::test]
async fn download_one_round_trips_a_single_result() {
    let mut session = CompressorSession::default();
    session
        .compress_batch(vec![encoded_source(
            "photo.png",
            "image/png",
            64,
            64,
            image::ImageFormat::Png,
        )])
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let result = &session.results()[0];
    let path = download_one(result, dir.path()).await.unwrap();

    assert!(path.ends_with("compressed_photo.png"));
    let written = tokio::fs::read(&path).await.unwrap();
    assert_eq!(written, result.data);
    let reloaded = image::load_from_memory(&written).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (64, 64));
}
