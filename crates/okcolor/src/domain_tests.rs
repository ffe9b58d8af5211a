//! Domain-critical regression tests for okcolor.
//!
//! These exercise the whole conversion matrix through [`Color`] rather than
//! one `From` impl at a time. Each test documents the regression it guards
//! against.

use crate::color::{Hsv888, HsvDecimal, LinearRgb16, Rgb16, Rgb565, Rgb888};
use crate::gamma;
use crate::space::{Color, ColorSpace};

fn is_hsv(space: ColorSpace) -> bool {
    space.channel_names() == ["h", "s", "v"]
}

/// Full-intensity white in `space`; HSV white has no hue or saturation.
fn white(space: ColorSpace) -> [u32; 3] {
    let [_, _, max_v] = space.channel_maxima();
    if is_hsv(space) {
        [0, 0, max_v]
    } else {
        space.channel_maxima()
    }
}

/// Distance between two 8-bit hues, going the short way around.
fn hue_distance(a: u8, b: u8) -> u8 {
    let d = a.wrapping_sub(b);
    d.min(d.wrapping_neg())
}

// ========================================================================
// Endpoints survive every path
// ========================================================================

/// If this breaks, it means: some direct or composed path does not map the
/// range endpoints onto each other. Usually a rescale used the wrong
/// constant or a gamma table endpoint drifted.
#[test]
fn test_black_and_white_across_all_pairs() {
    for from in ColorSpace::ALL {
        for to in ColorSpace::ALL {
            let black = Color::from_channels(from, [0, 0, 0]).convert(to);
            assert_eq!(
                black.channels(),
                [0, 0, 0],
                "REGRESSION: black {from} -> {to} gave {black}"
            );

            let white_in = Color::from_channels(from, white(from));
            let white_out = white_in.convert(to);
            assert_eq!(
                white_out.channels(),
                white(to),
                "REGRESSION: white {white_in} -> {to} gave {white_out}"
            );
        }
    }
}

/// If this breaks, it means: an HSV encoding reports a hue or saturation for
/// a color with no chroma. Grays must have h == 0 and s == 0 at every
/// precision, or hue jitter appears on neutral inputs.
#[test]
fn test_grays_are_achromatic_everywhere() {
    let hsv_spaces: Vec<ColorSpace> = ColorSpace::ALL.into_iter().filter(|s| is_hsv(*s)).collect();
    assert_eq!(hsv_spaces.len(), 4);

    for x in 0..=255u32 {
        for source in [ColorSpace::Rgb888, ColorSpace::LinearRgb888] {
            let gray = Color::from_channels(source, [x, x, x]);
            for &target in &hsv_spaces {
                let [h, s, _] = gray.convert(target).channels();
                assert_eq!((h, s), (0, 0), "REGRESSION: {gray} -> {target}");
            }
        }
    }

    for x in (0..=65535u32).step_by(97) {
        let gray = Color::from_channels(ColorSpace::Rgb16, [x, x, x]);
        for &target in &hsv_spaces {
            let [h, s, _] = gray.convert(target).channels();
            assert_eq!((h, s), (0, 0), "REGRESSION: {gray} -> {target}");
        }
    }
}

// ========================================================================
// Hue anchors
// ========================================================================

/// If this breaks, it means: the hue-sector scaling or the hue rescale
/// changed. Blue lands on 171 rather than 170 because two thirds of a turn is
/// 170.67 steps of 256, which rounds up.
#[test]
fn test_primary_anchors() {
    let cases = [
        (Rgb888::new(255, 0, 0), Hsv888::new(0, 255, 255)),
        (Rgb888::new(0, 255, 0), Hsv888::new(85, 255, 255)),
        (Rgb888::new(0, 0, 255), Hsv888::new(171, 255, 255)),
    ];
    for (rgb, expected) in cases {
        assert_eq!(Hsv888::from(rgb), expected, "REGRESSION: {rgb:?}");
    }

    assert_eq!(HsvDecimal::from(Rgb888::new(0, 0, 255)), HsvDecimal::new(240, 100, 100));
}

// ========================================================================
// Round trips within quantization
// ========================================================================

/// If this breaks, it means: HSV -> RGB -> HSV drifts by more than one unit
/// in bright colors that are at least a quarter saturated. Darker colors
/// lose up to two saturation steps because chroma is floored to whole HSV
/// units before it is scaled to RGB.
#[test]
fn test_hsv888_round_trip_within_one() {
    for s in (64..=255u8).step_by(9) {
        for v in (170..=255u8).step_by(5) {
            for h in 0..=255u8 {
                let hsv = Hsv888::new(h, s, v);
                let back = Hsv888::from(Rgb888::from(hsv));
                assert!(
                    hue_distance(back.h, hsv.h) <= 1
                        && back.s.abs_diff(hsv.s) <= 1
                        && back.v.abs_diff(hsv.v) <= 1,
                    "REGRESSION: {hsv:?} came back as {back:?}"
                );
            }
        }
    }
}

/// If this breaks, it means: the composed 565 -> HSV path no longer goes
/// through 8-bit sRGB, or one of its legs changed rounding.
#[test]
fn test_rgb565_chain_matches_two_step() {
    for word in (0..=u16::MAX).step_by(7) {
        let color = Rgb565::unpack(word);
        let via = Rgb888::from(color);
        assert_eq!(HsvDecimal::from(color), HsvDecimal::from(via), "{word:#06x}");
        assert_eq!(Hsv888::from(color), Hsv888::from(via), "{word:#06x}");
    }
}

/// If this breaks, it means: the 8-bit gamma tables are no longer near
/// inverses. Linear -> sRGB -> linear holds everywhere; the other direction
/// only holds above the dark end, where 8-bit linear has too few codes.
#[test]
fn test_gamma_tables_near_inverse() {
    for v in 0..=255u8 {
        let back = gamma::linear8_from_srgb8(gamma::srgb8_from_linear8(v));
        assert!(back.abs_diff(v) <= 1, "REGRESSION: linear {v} -> {back}");
    }
    for v in 49..=255u8 {
        let back = gamma::srgb8_from_linear8(gamma::linear8_from_srgb8(v));
        assert!(back.abs_diff(v) <= 1, "REGRESSION: sRGB {v} -> {back}");
    }
    // 16-bit linear has no such dead zone
    for v in 0..=255u8 {
        let srgb = Rgb888::new(v, v, v);
        assert_eq!(Rgb888::from(LinearRgb16::from(srgb)), srgb);
    }
}

// ========================================================================
// Ordering and robustness
// ========================================================================

/// If this breaks, it means: a gray ramp reverses somewhere along a path,
/// which shows up as banding in gradients.
#[test]
fn test_gray_ramps_stay_monotonic() {
    let mut prev_linear = 0;
    let mut prev_rgb16 = 0;
    for x in 0..=255u16 {
        let linear = LinearRgb16::from(Rgb888::new(x as u8, x as u8, x as u8));
        assert!(linear.r >= prev_linear, "REGRESSION: sRGB {x}");
        prev_linear = linear.r;

        let rgb16 = Rgb16::from(Hsv888::new(0, 0, x as u8));
        assert!(rgb16.r >= prev_rgb16, "REGRESSION: HSV888 v={x}");
        prev_rgb16 = rgb16.r;
    }
}

/// If this breaks, it means: a conversion panics (overflow, bad sector
/// index) on channels outside their nominal range. Such inputs give an
/// unspecified result but must never crash.
#[test]
fn test_out_of_range_channels_do_not_panic() {
    let inputs = [[u32::MAX; 3], [65535, 0, 65535], [400, 255, 300], [359, 101, 0]];
    for from in ColorSpace::ALL {
        for channels in inputs {
            let color = Color::from_channels(from, channels);
            for to in ColorSpace::ALL {
                let _ = color.convert(to);
            }
        }
    }
}
