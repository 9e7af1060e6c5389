//! Fixed constants of the calculator.
//!
//! `MU0_SURROGATE_H_PER_M` and the pressure shares are placeholder values
//! carried verbatim; they are not the physical constants.

/// Permeability surrogate [H/m] used by the turns formula.
pub const MU0_SURROGATE_H_PER_M: f64 = 1e-6;

/// Specific heat of water [J/(g·°C)].
pub const WATER_SPECIFIC_HEAT_J_PER_G_C: f64 = 4.186;

/// Share of the available water pressure dropped across a large cooling unit.
pub const LARGE_UNIT_PRESSURE_SHARE: f64 = 0.6;

/// Share of the available water pressure dropped across a small cooling unit.
pub const SMALL_UNIT_PRESSURE_SHARE: f64 = 0.4;

pub const MM_PER_M: f64 = 1000.0;
pub const G_PER_L: f64 = 1000.0;
pub const S_PER_MIN: f64 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_shares_sum_to_one() {
        assert_eq!(LARGE_UNIT_PRESSURE_SHARE + SMALL_UNIT_PRESSURE_SHARE, 1.0);
    }
}
