use crate::core::data::colour::Colour;

fn channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Converts hue, saturation and brightness, each in `[0, 1]`, to RGB.
///
/// The hue wraps, so any finite value is accepted. Saturation and brightness
/// are clamped.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    let saturation = saturation.clamp(0.0, 1.0);
    let brightness = brightness.clamp(0.0, 1.0);

    if saturation == 0.0 {
        let v = channel(brightness);
        return Colour::new(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Colour::new(channel(r), channel(g), channel(b))
}
