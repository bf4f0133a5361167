//! Runs the `photon` binary end to end.

use photon_core::Raster;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn photon() -> Command {
    Command::new(env!("CARGO_BIN_EXE_photon"))
}

fn write_input(dir: &Path, w: u32, h: u32) -> std::path::PathBuf {
    let path = dir.join("input.png");
    let mut img = Raster::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(x, y, [(x * 7) as u8, (y * 5) as u8, 100, 255]);
        }
    }
    photon_io::write(&path, &img).unwrap();
    path
}

#[test]
fn rotate_writes_turned_image() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), 12, 5);
    let output = dir.path().join("rotated.png");

    let status = photon()
        .args(["rotate"])
        .arg(&input)
        .args(["-a", "270", "-o"])
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(photon_io::read(&output).unwrap().dimensions(), (5, 12));
}

#[test]
fn spectrum_writes_same_size_image() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), 10, 6);
    let output = dir.path().join("spectrum.png");

    let status = photon().arg("spectrum").arg(&input).arg("-o").arg(&output).status().unwrap();
    assert!(status.success());
    assert_eq!(photon_io::read(&output).unwrap().dimensions(), (10, 6));
}

#[test]
fn fit_uses_config_canvas() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), 40, 20);
    let config = dir.path().join("editor.yaml");
    std::fs::write(&config, "canvas_max_width: 10\ncanvas_max_height: 10\n").unwrap();
    let output = dir.path().join("fit.png");

    let status = photon()
        .arg("--config")
        .arg(&config)
        .arg("fit")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(photon_io::read(&output).unwrap().dimensions(), (10, 5));
}

#[test]
fn crop_out_of_bounds_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), 8, 8);
    let output = dir.path().join("crop.png");

    let result = photon()
        .arg("crop")
        .arg(&input)
        .args(["-x", "4", "-y", "4", "-w", "8", "-H", "8", "-o"])
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let status = photon()
        .arg("info")
        .arg(dir.path().join("missing.png"))
        .status()
        .unwrap();
    assert!(!status.success());
}
