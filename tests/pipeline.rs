//! End-to-end: pick → pad → save through the public API.
//!
//! Uses small recording hosts for the picker and library so every call that
//! crosses the host boundary can be counted.

use image::{Rgba, RgbaImage};
use instasquare::config::AppConfig;
use instasquare::imaging::{self, Image, OutputFormat};
use instasquare::library::{DirectoryLibrary, PhotoLibrary, SaveError, SavedAsset};
use instasquare::picker::{FilePicker, PhotoPicker, PickRequest, PickedAsset, PickerError};
use instasquare::studio::{Phase, SelectionReport, Studio};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn gradient(width: u32, height: u32) -> Image {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
    });
    Image::from_rgba(pixels).unwrap()
}

fn png_asset(name: &str, width: u32, height: u32) -> PickedAsset {
    PickedAsset {
        source_hint: name.to_string(),
        bytes: imaging::encode(&gradient(width, height), OutputFormat::Png, 90).unwrap(),
    }
}

/// Host picker that ignores the selection limit and returns everything.
struct GreedyPicker {
    assets: Vec<PickedAsset>,
    requests: Arc<Mutex<Vec<PickRequest>>>,
}

impl GreedyPicker {
    fn new(assets: Vec<PickedAsset>) -> Self {
        Self {
            assets,
            requests: Arc::default(),
        }
    }
}

impl PhotoPicker for GreedyPicker {
    fn pick(&self, request: &PickRequest) -> Result<Vec<PickedAsset>, PickerError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.assets.clone())
    }
}

#[derive(Default)]
struct RecordingLibrary {
    writes: Mutex<Vec<Image>>,
}

impl PhotoLibrary for RecordingLibrary {
    fn write(&self, image: &Image, _name_hint: &str) -> Result<SavedAsset, SaveError> {
        let mut writes = self.writes.lock().unwrap();
        writes.push(image.clone());
        Ok(SavedAsset {
            location: format!("memory:{}", writes.len()),
            width: image.width(),
            height: image.height(),
        })
    }
}

#[test]
fn select_300x150_then_save_writes_one_300x300_image() {
    let picker = GreedyPicker::new(vec![png_asset("wide.png", 300, 150)]);
    let mut studio = Studio::new(picker, RecordingLibrary::default());

    studio.pick().unwrap();
    studio.save().unwrap();

    let writes = studio.library().writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!((writes[0].width(), writes[0].height()), (300, 300));
    assert_eq!(writes[0].get_pixel(150, 75), gradient(300, 150).get_pixel(150, 75));
    assert_eq!(writes[0].get_pixel(150, 225), WHITE);
}

#[test]
fn session_never_delivers_more_than_one_image() {
    let picker = GreedyPicker::new(vec![
        png_asset("first.png", 10, 30),
        png_asset("second.png", 40, 20),
    ]);
    let mut studio = Studio::new(picker, RecordingLibrary::default());

    let report = studio.pick().unwrap();
    let SelectionReport::Selected { source, padded, .. } = report else {
        panic!("expected a selection");
    };
    assert_eq!(source, "first.png");
    assert_eq!((padded.width, padded.height), (30, 30));

    studio.save().unwrap();
    assert_eq!(studio.library().writes.lock().unwrap().len(), 1);
}

#[test]
fn picker_is_asked_for_one_image() {
    let picker = GreedyPicker::new(Vec::new());
    let requests = Arc::clone(&picker.requests);
    let mut studio = Studio::new(picker, RecordingLibrary::default());

    let report = studio.pick().unwrap();
    assert_eq!(report, SelectionReport::Cancelled);
    assert_eq!(studio.phase(), Phase::Idle);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].selection_limit, 1);
}

#[test]
fn file_to_directory_round_trip() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("portrait.png");
    let src = gradient(100, 200);
    std::fs::write(&input, imaging::encode(&src, OutputFormat::Png, 90).unwrap()).unwrap();

    let library_dir = tmp.path().join("library");
    let library = DirectoryLibrary::new(&library_dir, OutputFormat::Png, 90);
    let mut studio = Studio::new(FilePicker::new(&input), library);

    studio.pick().unwrap();
    let saved = studio.save().unwrap().expect("image was selected");
    assert_eq!((saved.width, saved.height), (200, 200));

    let written = image::open(library_dir.join("portrait-square.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(written.dimensions(), (200, 200));
    assert_eq!(*written.get_pixel(99, 199), src.get_pixel(99, 199));
    assert_eq!(*written.get_pixel(100, 0), WHITE);
    assert_eq!(*written.get_pixel(199, 199), WHITE);
}

#[test]
fn missing_file_reports_no_selection_and_saves_nothing() {
    let tmp = TempDir::new().unwrap();
    let library = DirectoryLibrary::new(tmp.path().join("library"), OutputFormat::Png, 90);
    let mut studio = Studio::new(FilePicker::new(tmp.path().join("gone.jpg")), library);

    let report = studio.pick().unwrap();
    assert!(matches!(report, SelectionReport::Failed { .. }));
    assert_eq!(studio.phase(), Phase::Idle);
    assert_eq!(studio.save().unwrap(), None);
    assert!(!tmp.path().join("library").exists());
}

#[test]
fn strip_whose_canvas_exceeds_default_limit_is_refused_not_padded() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("panorama.png");
    let strip = Image::from_rgba(RgbaImage::new(3_000_000, 1)).unwrap();
    std::fs::write(&input, imaging::encode(&strip, OutputFormat::Png, 90).unwrap()).unwrap();

    let limit = AppConfig::default().picker.max_canvas_pixels;
    let library = DirectoryLibrary::new(tmp.path().join("library"), OutputFormat::Png, 90);
    let mut studio = Studio::new(FilePicker::new(&input), library).with_max_canvas_pixels(limit);

    let report = studio.pick().unwrap();
    let SelectionReport::Failed { reason } = report else {
        panic!("expected the pick to be refused, got {report:?}");
    };
    assert!(reason.contains("3000000x3000000"), "{reason}");
    assert_eq!(studio.phase(), Phase::Idle);
    assert_eq!(studio.save().unwrap(), None);
}
