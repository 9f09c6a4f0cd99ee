//! Property tests for square padding.

use image::{Rgba, RgbaImage};
use instasquare::imaging::{FillColor, Image, ImagingError, canvas_side, pad, pad_with};
use proptest::prelude::*;

fn patterned(width: u32, height: u32, seed: u8) -> Image {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x as u8).wrapping_add(seed),
            (y as u8).wrapping_mul(3),
            seed,
            // Never fully opaque white, so margin checks are meaningful
            200,
        ])
    });
    Image::from_rgba(pixels).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_is_square_of_longer_edge(w in 1u32..120, h in 1u32..120, seed: u8) {
        let out = pad(&patterned(w, h, seed)).unwrap();
        prop_assert_eq!(out.width(), w.max(h));
        prop_assert_eq!(out.height(), w.max(h));
        prop_assert_eq!(out.width(), canvas_side(w, h));
    }

    #[test]
    fn source_pixels_preserved_at_origin(w in 1u32..80, h in 1u32..80, seed: u8) {
        let src = patterned(w, h, seed);
        let out = pad(&src).unwrap();
        for y in 0..h {
            for x in 0..w {
                prop_assert_eq!(out.get_pixel(x, y), src.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn margin_is_fill_color(w in 1u32..80, h in 1u32..80, fill: [u8; 4]) {
        let out = pad_with(&patterned(w, h, 7), FillColor(fill)).unwrap();
        let side = w.max(h);
        for y in 0..side {
            for x in 0..side {
                if x >= w || y >= h {
                    prop_assert_eq!(out.get_pixel(x, y), Rgba(fill));
                }
            }
        }
    }

    #[test]
    fn square_input_is_unchanged(side in 1u32..100, seed: u8) {
        let src = patterned(side, side, seed);
        prop_assert_eq!(pad(&src).unwrap(), src);
    }

    #[test]
    fn pad_is_idempotent(w in 1u32..100, h in 1u32..100) {
        let once = pad(&patterned(w, h, 1)).unwrap();
        let twice = pad(&once).unwrap();
        prop_assert_eq!(twice, once);
    }
}

#[test]
fn zero_area_input_is_invalid() {
    for (w, h) in [(0, 10), (10, 0), (0, 0)] {
        let result = Image::from_rgba(RgbaImage::new(w, h));
        assert!(matches!(
            result,
            Err(ImagingError::InvalidImage { width, height }) if width == w && height == h
        ));
    }
}

#[test]
fn portrait_100x200_becomes_200x200_with_white_right_band() {
    let src = patterned(100, 200, 42);
    let out = pad(&src).unwrap();
    assert_eq!((out.width(), out.height()), (200, 200));
    assert_eq!(out.get_pixel(0, 0), src.get_pixel(0, 0));
    assert_eq!(out.get_pixel(99, 199), src.get_pixel(99, 199));
    assert_eq!(out.get_pixel(100, 0), Rgba([255, 255, 255, 255]));
    assert_eq!(out.get_pixel(199, 199), Rgba([255, 255, 255, 255]));
}
