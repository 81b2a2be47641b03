use anyhow::{anyhow, Context, Result};
use plotters::style::RGBColor;

/// Parse a color specifier to an RGBColor.
///
/// Accepts CSS-style color names, `#rrggbb` hex, and `rgb(r,g,b)`.
pub fn parse_color(spec: &str) -> Result<RGBColor> {
    let s = spec.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).with_context(|| format!("Invalid hex color '{}'", spec));
    }

    if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_rgb(body).with_context(|| format!("Invalid rgb color '{}'", spec));
    }

    let lower = s.to_ascii_lowercase();

    // grayN / greyN scale (gray0 = black, gray100 = white)
    if let Some(level) = lower
        .strip_prefix("gray")
        .or_else(|| lower.strip_prefix("grey"))
        .and_then(|n| n.parse::<u32>().ok())
    {
        if level <= 100 {
            let v = (level * 255 / 100) as u8;
            return Ok(RGBColor(v, v, v));
        }
        return Err(anyhow!("Gray level out of range in '{}'", spec));
    }

    named_color(&lower).ok_or_else(|| anyhow!("Unsupported color '{}'", spec))
}

fn parse_hex(hex: &str) -> Result<RGBColor> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16)?;
            let g = u8::from_str_radix(&hex[2..4], 16)?;
            let b = u8::from_str_radix(&hex[4..6], 16)?;
            Ok(RGBColor(r, g, b))
        }
        // Shorthand #rgb
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16)?;
            let g = u8::from_str_radix(&hex[1..2], 16)?;
            let b = u8::from_str_radix(&hex[2..3], 16)?;
            Ok(RGBColor(r * 17, g * 17, b * 17))
        }
        n => Err(anyhow!("expected 3 or 6 hex digits, got {}", n)),
    }
}

fn parse_rgb(body: &str) -> Result<RGBColor> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(anyhow!("expected 3 components, got {}", parts.len()));
    }
    let r = parts[0].parse::<u8>()?;
    let g = parts[1].parse::<u8>()?;
    let b = parts[2].parse::<u8>()?;
    Ok(RGBColor(r, g, b))
}

fn named_color(name: &str) -> Option<RGBColor> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "dimgray" | "dimgrey" => (105, 105, 105),
        "slategray" | "slategrey" => (112, 128, 144),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "olive" => (128, 128, 0),
        "maroon" => (128, 0, 0),
        "lime" => (0, 255, 0),
        "gold" => (255, 215, 0),
        "indigo" => (75, 0, 130),
        "violet" => (238, 130, 238),
        "coral" => (255, 127, 80),
        "salmon" => (250, 128, 114),
        "crimson" => (220, 20, 60),
        "tomato" => (255, 99, 71),
        "orchid" => (218, 112, 214),
        "darkorchid" => (153, 50, 204),
        "plum" => (221, 160, 221),
        "khaki" => (240, 230, 140),
        "tan" => (210, 180, 140),
        "beige" => (245, 245, 220),
        "lavender" => (230, 230, 250),
        "skyblue" => (135, 206, 235),
        "lightblue" => (173, 216, 230),
        "steelblue" => (70, 130, 180),
        "royalblue" => (65, 105, 225),
        "cornflowerblue" => (100, 149, 237),
        "darkblue" => (0, 0, 139),
        "darkred" => (139, 0, 0),
        "darkgreen" => (0, 100, 0),
        "darkolivegreen" => (85, 107, 47),
        "forestgreen" => (34, 139, 34),
        "seagreen" => (46, 139, 87),
        "firebrick" => (178, 34, 34),
        _ => return None,
    };
    Some(RGBColor(r, g, b))
}
