//! End-to-end spectrum tests: raster in, centered log-magnitude image out.

use approx::assert_relative_eq;
use photon_core::{Raster, Rect};
use photon_ops::spectrum::{analyze, analyze_surface, log_intensity};
use photon_ops::transform::{crop, rotate, Rotation};

/// Vertical stripes with a 4px period: 255, 128, 0, 128, ...
fn stripes(w: u32, h: u32) -> Raster {
    let mut img = Raster::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = [255, 128, 0, 128][(x % 4) as usize];
            img.set_pixel(x, y, [v, v, v, 255]);
        }
    }
    img
}

/// Deterministic non-symmetric test pattern.
fn pattern(w: u32, h: u32) -> Raster {
    let mut img = Raster::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let r = ((x * 37 + y * 11) % 256) as u8;
            let g = ((x * x + 3 * y) % 256) as u8;
            let b = ((x ^ y) * 19 % 256) as u8;
            img.set_pixel(x, y, [r, g, b, 255]);
        }
    }
    img
}

#[test]
fn stripes_light_up_horizontal_frequency_pair() {
    let analysis = analyze(&stripes(8, 8));
    let img = &analysis.image;
    assert_eq!(img.dimensions(), (8, 8));

    // DC sits at the center after the shift and carries the maximum.
    assert_eq!(img.pixel(4, 4), [255, 255, 255, 255]);

    // Period 4 on an 8-wide image is frequency 2, i.e. 2px either side of center.
    let right = img.pixel(6, 4);
    let left = img.pixel(2, 4);
    assert_eq!(right, left);
    assert!(right[0] > 100 && right[0] < 200, "got {}", right[0]);

    // Every row is identical, so nothing outside the center row.
    for (x, y, px) in img.pixels() {
        if y != 4 {
            assert!(px[0] <= 1, "unexpected energy at ({}, {}): {}", x, y, px[0]);
        }
    }
}

#[test]
fn stripes_intensity_matches_log_scale() {
    let analysis = analyze(&stripes(8, 8));
    let m = &analysis.magnitude;

    // Unshifted bin (2, 0) holds the stripe energy.
    let want = log_intensity(m.get(2, 0), m.max());
    assert_eq!(analysis.image.pixel(6, 4)[0], want);
    assert_relative_eq!(m.get(2, 0), 16.0, max_relative = 0.01);
}

#[test]
fn real_input_gives_symmetric_magnitude() {
    let analysis = analyze(&pattern(16, 8));
    let m = &analysis.magnitude;
    let (w, h) = (m.width(), m.height());

    for y in 0..h {
        for x in 0..w {
            let mirror = m.get((w - x) % w, (h - y) % h);
            assert_relative_eq!(m.get(x, y), mirror, epsilon = 1e-2, max_relative = 1e-3);
        }
    }
}

#[test]
fn output_is_opaque_gray() {
    let analysis = analyze(&pattern(16, 16));
    for (_, _, px) in analysis.image.pixels() {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn non_power_of_two_keeps_image_size() {
    let analysis = analyze(&pattern(6, 5));
    assert_eq!(analysis.image.dimensions(), (6, 5));
    assert_eq!(analysis.magnitude.width(), 6);
    assert_eq!(analysis.magnitude.height(), 5);
    assert!(analysis.image.pixels().any(|(_, _, px)| px[0] == 255));
}

#[test]
fn spectrum_follows_edits() {
    let src = pattern(16, 8);

    let rotated = rotate(&src, Rotation::Cw90);
    assert_eq!(analyze(&rotated).image.dimensions(), (8, 16));

    let region = Rect::new(4, 2, 8, 4);
    let cropped = crop(&src, region).unwrap();
    let from_surface = analyze_surface(&cropped).unwrap();
    assert_eq!(from_surface.image, analyze(&cropped).image);
    assert_eq!(from_surface.image.dimensions(), (8, 4));
}

#[test]
fn alpha_does_not_change_spectrum() {
    let opaque = pattern(8, 8);
    let mut translucent = opaque.clone();
    for px in translucent.data_mut().chunks_exact_mut(4) {
        px[3] = 7;
    }
    assert_eq!(analyze(&opaque).image, analyze(&translucent).image);
}
