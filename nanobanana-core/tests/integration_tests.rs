//! Integration tests for nanobanana-core

use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use nanobanana_core::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::mpsc;

fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8])
    });
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), format)
        .unwrap();
    buffer
}

fn png_file(name: &str, width: u32, height: u32) -> SelectedFile {
    SelectedFile::new(name, "image/png", encode_image(width, height, ImageFormat::Png))
}

fn shown_file(controller: &IntakeController) -> Option<String> {
    controller
        .snapshot()
        .preview()
        .map(|preview| preview.file_name.clone())
}

/// Decoder that holds each file until the test releases it by name
#[derive(Default)]
struct GatedDecoder {
    gates: Mutex<HashMap<String, mpsc::Receiver<()>>>,
}

impl GatedDecoder {
    fn gate(&self, name: &str) -> mpsc::Sender<()> {
        let (tx, rx) = mpsc::channel();
        self.gates.lock().insert(name.to_string(), rx);
        tx
    }
}

impl PreviewDecoder for GatedDecoder {
    fn decode(&self, file: &SelectedFile) -> Result<Preview> {
        let gate = self.gates.lock().remove(file.name());
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
        nanobanana_core::preview::decode_preview(file)
    }
}

/// Test configuration defaults
#[test]
fn test_config_defaults() {
    let config = IntakeConfig::default();

    assert_eq!(config.max_bytes, 10 * 1024 * 1024);
    assert!(config.validate);
    assert_eq!(
        config.accepted,
        vec![ImageKind::Png, ImageKind::Jpeg, ImageKind::Webp, ImageKind::Gif]
    );
}

#[tokio::test]
async fn test_select_png_shows_preview() {
    let controller = IntakeController::new(IntakeConfig::default());

    let completion = controller.select_file(png_file("cat.png", 40, 30)).await;
    assert_eq!(completion, Ok(Completion::Applied));

    let state = controller.snapshot();
    assert_eq!(state.phase(), Phase::HasPreview);
    let preview = state.preview().unwrap();
    assert_eq!(preview.dimensions(), (40, 30));
    assert_eq!(preview.decode_image().unwrap().dimensions(), (40, 30));
}

#[rstest]
#[case("photo.jpg", ImageFormat::Jpeg, ImageKind::Jpeg)]
#[case("sticker.webp", ImageFormat::WebP, ImageKind::Webp)]
#[case("loop.gif", ImageFormat::Gif, ImageKind::Gif)]
#[tokio::test]
async fn test_each_accepted_kind(
    #[case] name: &str,
    #[case] format: ImageFormat,
    #[case] expected: ImageKind,
) {
    let controller = IntakeController::new(IntakeConfig::default());
    let file = SelectedFile::from_named_bytes(name, encode_image(16, 8, format));

    controller.select_file(file).await.unwrap();

    let state = controller.snapshot();
    let preview = state.preview().unwrap();
    assert_eq!(preview.kind, expected);
    assert_eq!(preview.dimensions(), (16, 8));
    assert!(preview
        .data_uri
        .starts_with(&format!("data:{};base64,", expected.mime_type())));
}

#[tokio::test]
async fn test_pdf_is_rejected() {
    let controller = IntakeController::new(IntakeConfig::default());
    let file = SelectedFile::new("invoice.pdf", "application/pdf", b"%PDF-1.7".to_vec());

    let err = controller.select_file(file).await.unwrap_err();
    assert!(matches!(err, IntakeError::UnsupportedType { ref media_type, .. } if media_type == "application/pdf"));

    let state = controller.snapshot();
    assert_eq!(state.phase(), Phase::Empty);
    assert!(state.error().is_some());
}

#[tokio::test]
async fn test_oversize_png_is_rejected() {
    let controller = IntakeController::new(IntakeConfig::default());
    let mut bytes = encode_image(4, 4, ImageFormat::Png);
    bytes.resize(15 * 1024 * 1024, 0);
    let file = SelectedFile::new("huge.png", "image/png", bytes);

    let err = controller.select_file(file).await.unwrap_err();
    assert_eq!(
        err,
        IntakeError::Oversize {
            size: "15.0 MB".to_string(),
            max: "10.0 MB".to_string(),
        }
    );
    assert_eq!(controller.snapshot().phase(), Phase::Empty);
}

#[tokio::test]
async fn test_validation_can_be_disabled() {
    let controller = IntakeController::new(IntakeConfig::new().with_validation(false));

    // Declared type is wrong, content is fine
    let file = SelectedFile::new(
        "scan.bin",
        "application/octet-stream",
        encode_image(6, 6, ImageFormat::Png),
    );
    assert_eq!(controller.select_file(file).await, Ok(Completion::Applied));

    // Content is not an image at all
    let junk = SelectedFile::new("notes.txt", "text/plain", b"hello".to_vec());
    assert!(matches!(
        controller.select_file(junk).await,
        Err(IntakeError::Decode(_))
    ));
    assert_eq!(shown_file(&controller).as_deref(), Some("scan.bin"));
}

#[tokio::test]
async fn test_corrupt_file_reports_decode_error() {
    let controller = IntakeController::new(IntakeConfig::default());
    let mut bytes = encode_image(64, 64, ImageFormat::Png);
    bytes.truncate(40);

    let err = controller
        .select_file(SelectedFile::new("broken.png", "image/png", bytes))
        .await
        .unwrap_err();

    assert!(matches!(err, IntakeError::Decode(_)));
    let state = controller.snapshot();
    assert_eq!(state.phase(), Phase::Empty);
    assert!(state.error().unwrap().starts_with("Could not decode image"));
}

#[tokio::test]
async fn test_selections_replace_each_other() {
    let controller = IntakeController::new(IntakeConfig::default());

    for (i, name) in ["a.png", "b.png", "c.png"].into_iter().enumerate() {
        let size = 10 + i as u32;
        controller.select_file(png_file(name, size, size)).await.unwrap();

        let state = controller.snapshot();
        let preview = state.preview().unwrap();
        assert_eq!(preview.file_name, name);
        assert_eq!(preview.dimensions(), (size, size));
    }
}

#[tokio::test]
async fn test_select_clear_select() {
    let controller = IntakeController::new(IntakeConfig::default());

    controller.select_file(png_file("first.png", 8, 8)).await.unwrap();
    controller.clear();
    let state = controller.snapshot();
    assert_eq!(state.phase(), Phase::Empty);
    assert!(state.preview().is_none());

    controller.select_file(png_file("second.png", 5, 3)).await.unwrap();
    let state = controller.snapshot();
    let preview = state.preview().unwrap();
    assert_eq!(preview.file_name, "second.png");
    assert_eq!(preview.dimensions(), (5, 3));

    controller.clear();
    controller.clear();
    assert_eq!(controller.snapshot().phase(), Phase::Empty);
}

#[tokio::test]
async fn test_drop_takes_first_file_only() {
    let controller = IntakeController::new(IntakeConfig::default());
    controller.begin_drag();
    assert!(controller.snapshot().is_dragging());

    let files = vec![png_file("one.png", 2, 2), png_file("two.png", 3, 3)];
    controller.accept_drop(files).await.unwrap();

    let state = controller.snapshot();
    assert!(!state.is_dragging());
    assert_eq!(state.preview().unwrap().file_name, "one.png");
}

#[tokio::test]
async fn test_drag_without_drop() {
    let controller = IntakeController::new(IntakeConfig::default());
    controller.select_file(png_file("kept.png", 2, 2)).await.unwrap();
    let before = controller.snapshot();

    controller.begin_drag();
    controller.end_drag();

    assert_eq!(controller.snapshot(), before);
}

#[tokio::test]
async fn test_later_request_wins_when_earlier_finishes_last() {
    let decoder = std::sync::Arc::new(GatedDecoder::default());
    let release_slow = decoder.gate("slow.png");
    let controller = IntakeController::with_decoder(IntakeConfig::default(), decoder.clone());
    let mut updates = controller.subscribe();

    let slow = tokio::spawn({
        let controller = controller.clone();
        async move { controller.select_file(png_file("slow.png", 4, 4)).await }
    });
    updates
        .wait_for(|state| state.phase() == Phase::Decoding)
        .await
        .unwrap();

    let fast = controller.select_file(png_file("fast.png", 7, 7)).await;
    assert_eq!(fast, Ok(Completion::Applied));

    release_slow.send(()).unwrap();
    assert_eq!(slow.await.unwrap(), Ok(Completion::Superseded));

    assert_eq!(shown_file(&controller).as_deref(), Some("fast.png"));
    assert_eq!(controller.snapshot().phase(), Phase::HasPreview);
}

#[tokio::test]
async fn test_later_request_wins_when_earlier_finishes_first() {
    let decoder = std::sync::Arc::new(GatedDecoder::default());
    let release_first = decoder.gate("first.png");
    let release_second = decoder.gate("second.png");
    let controller = IntakeController::with_decoder(IntakeConfig::default(), decoder.clone());
    let mut updates = controller.subscribe();

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.select_file(png_file("first.png", 4, 4)).await }
    });
    updates
        .wait_for(|state| state.pending() == Some(1))
        .await
        .unwrap();

    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.select_file(png_file("second.png", 9, 9)).await }
    });
    updates
        .wait_for(|state| state.pending() == Some(2))
        .await
        .unwrap();

    release_first.send(()).unwrap();
    assert_eq!(first.await.unwrap(), Ok(Completion::Superseded));
    assert_eq!(controller.snapshot().phase(), Phase::Decoding);
    assert!(controller.snapshot().preview().is_none());

    release_second.send(()).unwrap();
    assert_eq!(second.await.unwrap(), Ok(Completion::Applied));
    assert_eq!(shown_file(&controller).as_deref(), Some("second.png"));
}

#[tokio::test]
async fn test_rejected_selection_supersedes_pending_decode() {
    let decoder = std::sync::Arc::new(GatedDecoder::default());
    let release = decoder.gate("slow.png");
    let controller = IntakeController::with_decoder(IntakeConfig::default(), decoder.clone());
    let mut updates = controller.subscribe();

    let slow = tokio::spawn({
        let controller = controller.clone();
        async move { controller.select_file(png_file("slow.png", 4, 4)).await }
    });
    updates
        .wait_for(|state| state.phase() == Phase::Decoding)
        .await
        .unwrap();

    let pdf = SelectedFile::new("invoice.pdf", "application/pdf", b"%PDF-1.7".to_vec());
    assert!(matches!(
        controller.select_file(pdf).await,
        Err(IntakeError::UnsupportedType { .. })
    ));

    release.send(()).unwrap();
    assert_eq!(slow.await.unwrap(), Ok(Completion::Superseded));

    let state = controller.snapshot();
    assert_eq!(state.phase(), Phase::Empty);
    assert!(state.preview().is_none());
    assert!(state
        .error()
        .is_some_and(|msg| msg.contains("application/pdf")));
}

#[tokio::test]
async fn test_clear_during_decode_discards_result() {
    let decoder = std::sync::Arc::new(GatedDecoder::default());
    let release = decoder.gate("late.png");
    let controller = IntakeController::with_decoder(IntakeConfig::default(), decoder.clone());
    let mut updates = controller.subscribe();

    let pending = tokio::spawn({
        let controller = controller.clone();
        async move { controller.select_file(png_file("late.png", 4, 4)).await }
    });
    updates
        .wait_for(|state| state.phase() == Phase::Decoding)
        .await
        .unwrap();

    controller.clear();
    release.send(()).unwrap();

    assert_eq!(pending.await.unwrap(), Ok(Completion::Superseded));
    assert_eq!(controller.snapshot().phase(), Phase::Empty);
}

#[tokio::test]
async fn test_preview_image_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banana.png");
    std::fs::write(&path, encode_image(21, 13, ImageFormat::Png)).unwrap();

    let preview = preview_image_file(&path, None).await.unwrap();
    assert_eq!(preview.file_name, "banana.png");
    assert_eq!(preview.dimensions(), (21, 13));
}

/// Test error handling with invalid files
#[rstest]
#[case("nonexistent.png")]
#[case("../Cargo.toml")] // Valid file but not an image
#[tokio::test]
async fn test_preview_error_handling(#[case] invalid_path: &str) {
    let result = preview_image_file(invalid_path, None).await;

    match result {
        Err(IntakeError::Io(_)) | Err(IntakeError::UnsupportedType { .. }) => {}
        other => panic!("Unexpected result for {}: {:?}", invalid_path, other),
    }
}
