use ratatui::style::Color;

/// Convert a style color string to a terminal color.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and the named colors ratatui
/// understands (`"red"`, `"darkgray"`, ...). Returns `None` for
/// `"transparent"` and anything unrecognised.
#[must_use]
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();

    if color.eq_ignore_ascii_case("transparent") {
        return None;
    }

    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = color
        .strip_prefix("rgb(")
        .or_else(|| color.strip_prefix("rgba("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<u8> = args
            .split(',')
            .take(3)
            .filter_map(|c| c.trim().parse::<u8>().ok())
            .collect();
        return match channels.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }

    color.parse::<Color>().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    // `from_str_radix` alone would let a sign through.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expand = |c: u8| c * 16 + c;
    match hex.len() {
        3 => {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
                .collect::<Option<_>>()?;
            Some(Color::Rgb(expand(digits[0]), expand(digits[1]), expand(digits[2])))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
