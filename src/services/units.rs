//! Unit conversion. Linear quantities go through a base unit; temperature
//! uses the affine celsius/fahrenheit/kelvin formulas.

use crate::domain::errors::ToolError;
use crate::domain::models::{UnitListing, UnitReport};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Length,
    Mass,
    Temperature,
    Data,
    Time,
    Area,
    Volume,
    Speed,
}

impl Quantity {
    pub const ALL: [Quantity; 8] = [
        Quantity::Length,
        Quantity::Mass,
        Quantity::Temperature,
        Quantity::Data,
        Quantity::Time,
        Quantity::Area,
        Quantity::Volume,
        Quantity::Speed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Mass => "mass",
            Quantity::Temperature => "temperature",
            Quantity::Data => "data",
            Quantity::Time => "time",
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::Speed => "speed",
        }
    }

    fn units(self) -> &'static [Unit] {
        match self {
            Quantity::Length => LENGTH,
            Quantity::Mass => MASS,
            Quantity::Temperature => TEMPERATURE,
            Quantity::Data => DATA,
            Quantity::Time => TIME,
            Quantity::Area => AREA,
            Quantity::Volume => VOLUME,
            Quantity::Speed => SPEED,
        }
    }
}

struct Unit {
    symbol: &'static str,
    aliases: &'static [&'static str],
    /// Size of one unit expressed in the quantity's base unit.
    factor: f64,
}

const fn unit(symbol: &'static str, aliases: &'static [&'static str], factor: f64) -> Unit {
    Unit {
        symbol,
        aliases,
        factor,
    }
}

static LENGTH: &[Unit] = &[
    unit("mm", &["millimeter", "millimetre"], 0.001),
    unit("cm", &["centimeter", "centimetre"], 0.01),
    unit("m", &["meter", "metre"], 1.0),
    unit("km", &["kilometer", "kilometre"], 1000.0),
    unit("in", &["inch", "inches"], 0.0254),
    unit("ft", &["foot", "feet"], 0.3048),
    unit("yd", &["yard", "yards"], 0.9144),
    unit("mi", &["mile", "miles"], 1609.344),
    unit("nmi", &["nautical-mile"], 1852.0),
];

static MASS: &[Unit] = &[
    unit("mg", &["milligram"], 1e-6),
    unit("g", &["gram", "grams"], 0.001),
    unit("kg", &["kilogram", "kilograms"], 1.0),
    unit("t", &["tonne", "tonnes"], 1000.0),
    unit("oz", &["ounce", "ounces"], 0.028349523125),
    unit("lb", &["lbs", "pound", "pounds"], 0.45359237),
    unit("st", &["stone"], 6.35029318),
];

static TEMPERATURE: &[Unit] = &[
    unit("c", &["celsius"], 1.0),
    unit("f", &["fahrenheit"], 1.0),
    unit("k", &["kelvin"], 1.0),
];

static DATA: &[Unit] = &[
    unit("bit", &["bits"], 0.125),
    unit("b", &["byte", "bytes"], 1.0),
    unit("kb", &["kilobyte"], 1e3),
    unit("mb", &["megabyte"], 1e6),
    unit("gb", &["gigabyte"], 1e9),
    unit("tb", &["terabyte"], 1e12),
    unit("kib", &["kibibyte"], 1024.0),
    unit("mib", &["mebibyte"], 1_048_576.0),
    unit("gib", &["gibibyte"], 1_073_741_824.0),
    unit("tib", &["tebibyte"], 1_099_511_627_776.0),
];

static TIME: &[Unit] = &[
    unit("ms", &["millisecond", "milliseconds"], 0.001),
    unit("s", &["sec", "second", "seconds"], 1.0),
    unit("min", &["minute", "minutes"], 60.0),
    unit("h", &["hr", "hour", "hours"], 3600.0),
    unit("day", &["d", "days"], 86_400.0),
    unit("week", &["w", "weeks"], 604_800.0),
    unit("year", &["y", "years"], 31_536_000.0),
];

static AREA: &[Unit] = &[
    unit("mm2", &[], 1e-6),
    unit("cm2", &[], 1e-4),
    unit("m2", &[], 1.0),
    unit("km2", &[], 1e6),
    unit("ha", &["hectare", "hectares"], 1e4),
    unit("acre", &["acres"], 4046.8564224),
    unit("in2", &[], 0.00064516),
    unit("ft2", &[], 0.09290304),
    unit("yd2", &[], 0.83612736),
    unit("mi2", &[], 2_589_988.110336),
];

static VOLUME: &[Unit] = &[
    unit("ml", &["milliliter", "millilitre"], 0.001),
    unit("l", &["liter", "litre", "liters", "litres"], 1.0),
    unit("m3", &[], 1000.0),
    unit("tsp", &["teaspoon"], 0.00492892159375),
    unit("tbsp", &["tablespoon"], 0.01478676478125),
    unit("floz", &["fl-oz"], 0.0295735295625),
    unit("cup", &["cups"], 0.2365882365),
    unit("pt", &["pint", "pints"], 0.473176473),
    unit("qt", &["quart", "quarts"], 0.946352946),
    unit("gal", &["gallon", "gallons"], 3.785411784),
];

static SPEED: &[Unit] = &[
    unit("mps", &["m/s"], 1.0),
    unit("kmh", &["km/h", "kph"], 1.0 / 3.6),
    unit("mph", &["mi/h"], 0.44704),
    unit("fps", &["ft/s"], 0.3048),
    unit("knot", &["kn", "knots"], 1852.0 / 3600.0),
];

fn lookup(quantity: Quantity, raw: &str) -> Result<&'static Unit, ToolError> {
    let wanted = raw.trim().to_ascii_lowercase();
    quantity
        .units()
        .iter()
        .find(|u| u.symbol == wanted || u.aliases.contains(&wanted.as_str()))
        .ok_or_else(|| ToolError::UnknownUnit {
            quantity: quantity.name().to_string(),
            unit: raw.to_string(),
            valid: unit_symbols(quantity).join(", "),
        })
}

pub fn unit_symbols(quantity: Quantity) -> Vec<String> {
    quantity.units().iter().map(|u| u.symbol.to_string()).collect()
}

pub fn list_units(quantity: Option<Quantity>) -> Vec<UnitListing> {
    let quantities: Vec<Quantity> = match quantity {
        Some(q) => vec![q],
        None => Quantity::ALL.to_vec(),
    };
    quantities
        .into_iter()
        .map(|q| UnitListing {
            quantity: q.name().to_string(),
            units: unit_symbols(q),
        })
        .collect()
}

/// Rounds to `digits` significant digits to hide binary floating-point noise.
pub fn round_sig(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let precision = (digits - 1).max(0) as usize;
    format!("{:.*e}", precision, x).parse().unwrap_or(x)
}

const ABSOLUTE_ZERO_C: f64 = -273.15;

fn to_celsius(symbol: &str, v: f64) -> f64 {
    match symbol {
        "f" => (v - 32.0) * 5.0 / 9.0,
        "k" => v + ABSOLUTE_ZERO_C,
        _ => v,
    }
}

fn from_celsius(symbol: &str, c: f64) -> f64 {
    match symbol {
        "f" => c * 9.0 / 5.0 + 32.0,
        "k" => c - ABSOLUTE_ZERO_C,
        _ => c,
    }
}

pub fn convert(
    quantity: Quantity,
    value: f64,
    from: &str,
    to: &str,
) -> Result<UnitReport, ToolError> {
    if !value.is_finite() {
        return Err(ToolError::InvalidArgument("value must be a finite number".to_string()));
    }
    let from_unit = lookup(quantity, from)?;
    let to_unit = lookup(quantity, to)?;

    let result = if quantity == Quantity::Temperature {
        let celsius = to_celsius(from_unit.symbol, value);
        if celsius < ABSOLUTE_ZERO_C - 1e-9 {
            return Err(ToolError::InvalidArgument(
                "temperature is below absolute zero".to_string(),
            ));
        }
        from_celsius(to_unit.symbol, celsius)
    } else {
        value * from_unit.factor / to_unit.factor
    };

    Ok(UnitReport {
        quantity: quantity.name().to_string(),
        value,
        from: from_unit.symbol.to_string(),
        to: to_unit.symbol.to_string(),
        result: round_sig(result, 12),
    })
}
