//! Hue/saturation/brightness conversion.
//!
//! The arithmetic is single precision and rounds channels with
//! `(v * 255 + 0.5)` truncation, matching `java.awt.Color`, so that hue
//! rotation produces the same 8-bit colors as the AWT conversions.

use crate::rgb::Rgb;

/// Hue, saturation and brightness, each nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

pub fn rgb_to_hsb(c: Rgb) -> Hsb {
    let (r, g, b) = (c.r as i32, c.g as i32, c.b as i32);
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = cmax as f32 / 255.0;
    let saturation = if cmax != 0 {
        (cmax - cmin) as f32 / cmax as f32
    } else {
        0.0
    };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let span = (cmax - cmin) as f32;
        let redc = (cmax - r) as f32 / span;
        let greenc = (cmax - g) as f32 / span;
        let bluec = (cmax - b) as f32 / span;
        let sector = if r == cmax {
            bluec - greenc
        } else if g == cmax {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };
        let h = sector / 6.0;
        if h < 0.0 { h + 1.0 } else { h }
    };

    Hsb {
        h: hue,
        s: saturation,
        b: brightness,
    }
}

/// Only the fractional part of the hue is used, so any real hue is valid.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let Hsb {
        h: hue,
        s: saturation,
        b: brightness,
    } = hsb;
    let channel = |v: f32| (v * 255.0 + 0.5) as i32 as u8;

    if saturation == 0.0 {
        let v = channel(brightness);
        return Rgb::new(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - (saturation * (1.0 - f)));

    let (r, g, b) = match h as i32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => return Rgb::BLACK,
    };
    Rgb::new(channel(r), channel(g), channel(b))
}
