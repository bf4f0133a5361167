//! Session-level tests: files in, edits, spectrum and files out.

use photon_core::{Raster, Rect};
use photon_edit::{EditError, Editor, EditorConfig, Level, MemoryNotifier, PngFileView};
use photon_ops::{ChannelScale, CropSelection, Rotation};
use tempfile::TempDir;

fn checker(w: u32, h: u32) -> Raster {
    let mut img = Raster::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = if (x / 2 + y / 2) % 2 == 0 { 230 } else { 20 };
            img.set_pixel(x, y, [v, v / 2, 255 - v, 255]);
        }
    }
    img
}

#[test]
fn open_edit_save_reopen() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    photon_io::write(&input, &checker(32, 16)).unwrap();

    let mut editor = Editor::new(MemoryNotifier::new());
    editor.open(&input).unwrap();
    editor.rotate(Rotation::Ccw90).unwrap();
    editor.crop(Rect::new(0, 4, 16, 8)).unwrap();
    editor.scale_channels(ChannelScale::new(1.0, 0.0, 1.0).unwrap()).unwrap();
    editor.save(&output).unwrap();

    let saved = photon_io::read(&output).unwrap();
    assert_eq!(saved.dimensions(), (16, 8));
    assert!(saved.pixels().all(|(_, _, px)| px[1] == 0 && px[3] == 255));
    assert_eq!(editor.notifier().last().unwrap().0, Level::Success);
}

#[test]
fn spectrum_written_through_file_view() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("spectrum.png");

    let mut editor = Editor::new(MemoryNotifier::new());
    editor.load(checker(16, 16));
    let mut view = PngFileView::new(&out);
    editor.show_spectrum(&mut view).unwrap();

    let spectrum = photon_io::read(&out).unwrap();
    assert_eq!(spectrum.dimensions(), (16, 16));
    assert_eq!(spectrum.pixel(8, 8), [255, 255, 255, 255]);
    assert_eq!(view.last_generation(), Some(editor.generation()));
}

#[test]
fn spectrum_view_failure_does_not_end_session() {
    let dir = TempDir::new().unwrap();
    let mut view = PngFileView::new(dir.path().join("no_such_dir").join("s.png"));

    let mut editor = Editor::new(MemoryNotifier::new());
    editor.load(checker(8, 8));
    assert!(matches!(editor.show_spectrum(&mut view), Err(EditError::View(_))));
    assert_eq!(editor.notifier().count(Level::Error), 1);

    // Later edits still work.
    editor.rotate(Rotation::Half).unwrap();
    assert!(editor.export_png().is_ok());
}

#[test]
fn selection_on_display_canvas() {
    let dir = TempDir::new().unwrap();
    let cfg_path = dir.path().join("editor.yaml");
    std::fs::write(&cfg_path, "canvas_max_width: 64\ncanvas_max_height: 64\ndisplay_filter: nearest\n").unwrap();
    let config = EditorConfig::load(&cfg_path).unwrap();

    let mut editor = Editor::with_config(config, MemoryNotifier::new()).unwrap();
    editor.load(checker(256, 128));

    let display = editor.display_image().unwrap();
    assert_eq!(display.dimensions(), (64, 32));

    // Drag right-to-left over the left half of the canvas.
    let mut sel = CropSelection::begin([32.0, 32.0]);
    sel.update([0.0, 0.0]);
    let rect = editor.crop_selection(&sel, display.dimensions()).unwrap();
    assert_eq!(rect, Rect::new(0, 0, 128, 128));
    assert_eq!(editor.image().unwrap().dimensions(), (128, 128));
}

#[test]
fn open_unsupported_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.bmp");
    std::fs::write(&path, b"BM not really").unwrap();

    let mut editor = Editor::new(MemoryNotifier::new());
    assert!(matches!(editor.open(&path), Err(EditError::Io(_))));
    assert!(!editor.has_image());
    assert_eq!(editor.notifier().last().unwrap().0, Level::Error);
}
