use crate::core::fractals::mandelbrot::normalize::RawRenderParams;

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Decodes `+` and `%XX` escapes. Malformed escapes are kept verbatim.
fn decode_component(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(high), Some(low)) => {
                        decoded.push((high << 4) | low);
                        i += 2;
                    }
                    _ => decoded.push(b'%'),
                }
            }
            other => decoded.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Reads render parameters from a URL query string such as
/// `width=800&centerX=-0.75&palette=dark`.
///
/// Keys are matched case-insensitively and may use camelCase or snake_case.
/// Unknown keys are ignored; when a key repeats, the first value wins.
#[must_use]
pub fn parse_query(query: &str) -> RawRenderParams {
    let mut params = RawRenderParams::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

        let slot = match canonical_key(&decode_component(key)).as_str() {
            "width" => &mut params.width,
            "height" => &mut params.height,
            "centerx" => &mut params.center_x,
            "centery" => &mut params.center_y,
            "zoom" => &mut params.zoom,
            "palette" => &mut params.palette,
            "maxiterations" => &mut params.max_iterations,
            _ => continue,
        };

        if slot.is_none() {
            *slot = Some(decode_component(value));
        }
    }

    params
}
