#![allow(missing_docs, reason = "integration tests")]
use led_cylinder::led_strip::{
    RGB8, Rgb888, ToRgb8, ToRgb888, colors, grb_bytes, pack_rgb, unpack_rgb,
};

#[test]
fn rgb888_to_rgb8_matches_rgb8() {
    let rgb8_color = RGB8::new(16, 32, 48);
    let rgb888_color = Rgb888::new(16, 32, 48);

    let converted = rgb888_color.to_rgb8();

    assert_eq!(rgb8_color, converted);
}

#[test]
fn rgb8_to_rgb888_matches_rgb888() {
    let rgb8_color = RGB8::new(16, 32, 48);
    let rgb888_color = Rgb888::new(16, 32, 48);

    let converted = rgb8_color.to_rgb888();

    assert_eq!(rgb888_color, converted);
}

#[test]
fn packed_u32_converts_like_unpack() {
    let converted = 0x00_FF_00_u32.to_rgb8();

    assert_eq!(converted, colors::LIME);
    assert_eq!(converted, unpack_rgb(0x00_FF_00));
}

#[test]
fn packed_colors_match_named_colors() {
    assert_eq!(pack_rgb(colors::RED), 0xFF_00_00);
    assert_eq!(pack_rgb(colors::BLUE), 0x00_00_FF);
    assert_eq!(pack_rgb(colors::BLACK), 0);
}

#[test]
fn wire_bytes_put_green_first() {
    assert_eq!(grb_bytes(colors::RED), [0, 255, 0]);
    assert_eq!(grb_bytes(colors::LIME), [255, 0, 0]);
    assert_eq!(grb_bytes(colors::BLUE), [0, 0, 255]);
}
