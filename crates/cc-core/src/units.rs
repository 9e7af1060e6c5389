//! Unit aliases, constructors and unit-qualified input parsing.
//!
//! The calculator works in engineering display units (mm, A, T, W, °C, bar)
//! rather than SI base units. Unit-qualified text such as `"16 cm"` or
//! `"270 mT"` is converted through uom into that display unit, so a bare
//! number always means "already in the calculator's unit".

use thiserror::Error;
use uom::si::f64::{
    Area as UomArea, ElectricCurrent as UomElectricCurrent, Length as UomLength,
    MagneticFluxDensity as UomMagneticFluxDensity, MassRate as UomMassRate, Power as UomPower,
    Pressure as UomPressure, TemperatureInterval as UomTemperatureInterval,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Current = UomElectricCurrent;
pub type FluxDensity = UomMagneticFluxDensity;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm2(v: f64) -> Area {
    use uom::si::area::square_millimeter;
    Area::new::<square_millimeter>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn tesla(v: f64) -> FluxDensity {
    use uom::si::magnetic_flux_density::tesla;
    FluxDensity::new::<tesla>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn delta_c(v: f64) -> TempInterval {
    use uom::si::temperature_interval::degree_celsius;
    TempInterval::new::<degree_celsius>(v)
}

#[inline]
pub fn gps(v: f64) -> MassRate {
    use uom::si::mass_rate::gram_per_second;
    MassRate::new::<gram_per_second>(v)
}

#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_minute;
    VolumeRate::new::<liter_per_minute>(v)
}

/// Quantity family of a calculator input field, with its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Length (canonical: mm)
    Length,
    /// Electric current (canonical: A)
    Current,
    /// Magnetic flux density (canonical: T)
    FluxDensity,
    /// Power (canonical: W)
    Power,
    /// Temperature rise (canonical: °C interval)
    TemperatureRise,
    /// Pressure (canonical: bar)
    Pressure,
    /// Dimensionless (canonical: as-is, but may include %)
    Dimensionless,
}

impl Quantity {
    fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Current => "Current",
            Self::FluxDensity => "Magnetic Flux Density",
            Self::Power => "Power",
            Self::TemperatureRise => "Temperature Rise",
            Self::Pressure => "Pressure",
            Self::Dimensionless => "Dimensionless",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
}

/// Parse a value with an optional unit tag and convert it to the display
/// unit of `quantity`.
///
/// - `"160"` -> 160.0 (already mm for [`Quantity::Length`])
/// - `"16 cm"` -> 160.0
/// - `"270mT"` -> 0.27
/// - `"200 kPa"` -> 2.0
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Length => parse_length(trimmed),
        Quantity::Current => parse_current(trimmed),
        Quantity::FluxDensity => parse_flux_density(trimmed),
        Quantity::Power => parse_power(trimmed),
        Quantity::TemperatureRise => parse_temperature_rise(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Dimensionless => parse_dimensionless(trimmed),
    }
}

fn unknown(unit: &str, quantity: Quantity) -> UnitError {
    UnitError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
    }
}

/// Parse length, return mm.
fn parse_length(input: &str) -> Result<f64, UnitError> {
    use uom::si::length::{centimeter, inch, meter, micrometer, millimeter};

    // Case matters for the metric prefixes ("Mm" is not "mm").
    let (value, unit) = split_value_and_unit(input)?;
    let length = match unit.as_str() {
        "" | "mm" => return Ok(value),
        "um" | "µm" | "μm" => Length::new::<micrometer>(value),
        "cm" => Length::new::<centimeter>(value),
        "m" => Length::new::<meter>(value),
        "in" | "\"" => Length::new::<inch>(value),
        _ => return Err(unknown(&unit, Quantity::Length)),
    };
    Ok(length.get::<millimeter>())
}

/// Parse current, return A.
fn parse_current(input: &str) -> Result<f64, UnitError> {
    use uom::si::electric_current::{ampere, kiloampere, milliampere};

    let (value, unit) = split_value_and_unit(input)?;
    let current = match unit.as_str() {
        "" | "A" | "a" => return Ok(value),
        "mA" => Current::new::<milliampere>(value),
        "kA" | "ka" => Current::new::<kiloampere>(value),
        _ => return Err(unknown(&unit, Quantity::Current)),
    };
    Ok(current.get::<ampere>())
}

/// Parse flux density, return T.
fn parse_flux_density(input: &str) -> Result<f64, UnitError> {
    use uom::si::magnetic_flux_density::{gauss, millitesla, tesla};

    // Case matters here: "mT" is millitesla, "G" is gauss.
    let (value, unit) = split_value_and_unit(input)?;
    let field = match unit.as_str() {
        "" | "T" | "t" => return Ok(value),
        "mT" | "mt" => FluxDensity::new::<millitesla>(value),
        "G" | "g" | "Gs" => FluxDensity::new::<gauss>(value),
        _ => return Err(unknown(&unit, Quantity::FluxDensity)),
    };
    Ok(field.get::<tesla>())
}

/// Parse power, return W.
fn parse_power(input: &str) -> Result<f64, UnitError> {
    use uom::si::power::{kilowatt, watt};

    let (value, unit) = split_value_and_unit(input)?;
    let power = match unit.to_lowercase().as_str() {
        "" | "w" => return Ok(value),
        "kw" => Power::new::<kilowatt>(value),
        _ => return Err(unknown(&unit, Quantity::Power)),
    };
    Ok(power.get::<watt>())
}

/// Parse a temperature rise, return °C interval.
fn parse_temperature_rise(input: &str) -> Result<f64, UnitError> {
    use uom::si::temperature_interval::{degree_celsius, degree_fahrenheit, kelvin};

    let (value, unit) = split_value_and_unit(input)?;
    let rise = match unit.to_lowercase().as_str() {
        "" | "c" | "°c" | "degc" => return Ok(value),
        "k" => TempInterval::new::<kelvin>(value),
        "f" | "°f" | "degf" => TempInterval::new::<degree_fahrenheit>(value),
        _ => return Err(unknown(&unit, Quantity::TemperatureRise)),
    };
    Ok(rise.get::<degree_celsius>())
}

/// Parse pressure, return bar.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    use uom::si::pressure::{
        bar, kilopascal, megapascal, millibar, pascal, pound_force_per_square_inch,
    };

    // "mbar" and "MPa" differ only by case of the prefix.
    let (value, unit) = split_value_and_unit(input)?;
    let pressure = match unit.as_str() {
        "" | "bar" => return Ok(value),
        "mbar" => Pressure::new::<millibar>(value),
        "Pa" | "pa" => Pressure::new::<pascal>(value),
        "kPa" | "kpa" => Pressure::new::<kilopascal>(value),
        "MPa" => Pressure::new::<megapascal>(value),
        "psi" | "PSI" => Pressure::new::<pound_force_per_square_inch>(value),
        _ => return Err(unknown(&unit, Quantity::Pressure)),
    };
    Ok(pressure.get::<bar>())
}

/// Parse dimensionless, accepting plain numbers or percent.
fn parse_dimensionless(input: &str) -> Result<f64, UnitError> {
    let (text, scale) = match input.strip_suffix('%') {
        Some(num) => (num.trim(), 0.01),
        None => (input, 1.0),
    };
    let value: f64 = text.parse().map_err(|_| {
        UnitError::ParseError(format!(
            "Could not parse dimensionless value from '{}'",
            input
        ))
    })?;
    Ok(value * scale)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "160mm" -> (160.0, "mm")
/// - "2.5e-1 T" -> (0.25, "T")
/// - "80" -> (80.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // An exponent marker only belongs to the number when a digit or sign follows it.
    let bytes = trimmed.as_bytes();
    let mut split_idx = trimmed.len();
    for (i, c) in trimmed.char_indices() {
        let numeric = c.is_ascii_digit()
            || c == '.'
            || ((c == '-' || c == '+')
                && (i == 0 || matches!(bytes[i - 1], b'e' | b'E')))
            || ((c == 'e' || c == 'E')
                && i > 0
                && bytes
                    .get(i + 1)
                    .is_some_and(|b| b.is_ascii_digit() || *b == b'-' || *b == b'+'));
        if !numeric {
            split_idx = i;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.trim().to_string()))
}
