//! Color notation conversion between HEX, RGB and HSL.

use crate::domain::errors::ToolError;
use crate::domain::models::ColorReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn invalid(raw: &str) -> ToolError {
    ToolError::InvalidColor(raw.trim().to_string())
}

fn parse_hex(raw: &str, digits: &str) -> Result<Rgb, ToolError> {
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid(raw)),
    };
    let bytes = hex::decode(&expanded).map_err(|_| invalid(raw))?;
    Ok(Rgb {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
    })
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = s.strip_prefix(name)?.trim().strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_component(raw: &str, part: &str, max: f64) -> Result<f64, ToolError> {
    let v: f64 = part.trim_end_matches('%').trim().parse().map_err(|_| invalid(raw))?;
    if !(0.0..=max).contains(&v) {
        return Err(invalid(raw));
    }
    Ok(v)
}

pub fn parse_color(raw: &str) -> Result<Rgb, ToolError> {
    let s = raw.trim().to_ascii_lowercase();
    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(raw, digits);
    }
    if let Some(parts) = function_args(&s, "rgb") {
        if parts.len() != 3 {
            return Err(invalid(raw));
        }
        return Ok(Rgb {
            r: parse_component(raw, parts[0], 255.0)?.round() as u8,
            g: parse_component(raw, parts[1], 255.0)?.round() as u8,
            b: parse_component(raw, parts[2], 255.0)?.round() as u8,
        });
    }
    if let Some(parts) = function_args(&s, "hsl") {
        if parts.len() != 3 {
            return Err(invalid(raw));
        }
        let h = parse_component(raw, parts[0].trim_end_matches("deg"), 360.0)?;
        let sat = parse_component(raw, parts[1], 100.0)?;
        let l = parse_component(raw, parts[2], 100.0)?;
        return Ok(hsl_to_rgb(h, sat / 100.0, l / 100.0));
    }
    if s.len() == 6 || s.len() == 3 {
        return parse_hex(raw, &s);
    }
    Err(invalid(raw))
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let v = to_u8(l);
        return Rgb { r: v, g: v, b: v };
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;
    Rgb {
        r: to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_u8(hue_to_channel(p, q, h)),
        b: to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

/// Returns hue in degrees, saturation and lightness in percent.
pub fn rgb_to_hsl(c: Rgb) -> (f64, f64, f64) {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l * 100.0);
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s * 100.0, l * 100.0)
}

pub fn convert(raw: &str) -> Result<ColorReport, ToolError> {
    let c = parse_color(raw)?;
    let (h, s, l) = rgb_to_hsl(c);
    Ok(ColorReport {
        hex: format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
        rgb: format!("rgb({}, {}, {})", c.r, c.g, c.b),
        hsl: format!("hsl({}, {}%, {}%)", h.round(), s.round(), l.round()),
        red: c.r,
        green: c.g,
        blue: c.b,
    })
}
