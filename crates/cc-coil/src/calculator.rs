//! The coil parameter formulas.
//!
//! Every quantity is a closed-form expression of the input. Nothing here
//! guards against division by zero: outside the valid domain the IEEE-754
//! result (±inf or NaN) is returned as-is. Use [`compute_checked`] to
//! reject such inputs up front.

use crate::constants::{
    G_PER_L, LARGE_UNIT_PRESSURE_SHARE, MM_PER_M, MU0_SURROGATE_H_PER_M, S_PER_MIN,
    SMALL_UNIT_PRESSURE_SHARE, WATER_SPECIFIC_HEAT_J_PER_G_C,
};
use crate::error::CoilResult;
use crate::input::{CalculatorInput, CoolingInput};
use crate::output::{CalculatorOutput, CoolingOutput};
use crate::validate::validate;
use std::f64::consts::PI;

/// Compute every derived quantity for `input`.
pub fn compute(input: &CalculatorInput) -> CalculatorOutput {
    let gap_m = input.pole_gap_mm / MM_PER_M;

    let conductor_area_mm2 =
        conductor_area_mm2(input.conductor_side_mm, input.cooling_duct_diameter_mm);
    let current_density = input.current_a / conductor_area_mm2;

    let ideal_turns = (input.required_field_t * gap_m)
        / (MU0_SURROGATE_H_PER_M * input.current_a * input.correction_factor);
    let total_turns = ideal_turns + f64::from(input.added_turns);
    let turns_per_coil = total_turns / f64::from(input.num_coils);

    CalculatorOutput {
        mu0_h_per_m: MU0_SURROGATE_H_PER_M,
        gap_m,
        conductor_area_mm2,
        current_density,
        ideal_turns,
        total_turns,
        turns_per_coil,
        horizontal_turns_selected: input.horizontal_turns_selected,
        vertical_turns_selected: input.vertical_turns_selected,
        cooling: input.cooling.as_ref().map(compute_cooling),
    }
}

/// Validate `input`, then compute.
pub fn compute_checked(input: &CalculatorInput) -> CoilResult<CalculatorOutput> {
    validate(input)?;
    Ok(compute(input))
}

/// Square conductor cross-section minus the round cooling duct [mm²].
pub(crate) fn conductor_area_mm2(side_mm: f64, duct_diameter_mm: f64) -> f64 {
    side_mm.powi(2) - PI * (duct_diameter_mm / 2.0).powi(2)
}

fn compute_cooling(cooling: &CoolingInput) -> CoolingOutput {
    let power_per_large_unit_w = cooling.power_per_coil_w / f64::from(cooling.num_large_units);
    let power_per_small_unit_w = cooling.power_per_coil_w / f64::from(cooling.num_small_units);

    let heat_per_gram = WATER_SPECIFIC_HEAT_J_PER_G_C * cooling.allowed_delta_t_c;
    let mass_flow_large_g_s = power_per_large_unit_w / heat_per_gram;
    let mass_flow_small_g_s = power_per_small_unit_w / heat_per_gram;

    CoolingOutput {
        power_per_large_unit_w,
        power_per_small_unit_w,
        mass_flow_large_g_s,
        mass_flow_small_g_s,
        flow_large_l_min: mass_flow_large_g_s / G_PER_L * S_PER_MIN,
        flow_small_l_min: mass_flow_small_g_s / G_PER_L * S_PER_MIN,
        pressure_drop_large_bar: cooling.available_pressure_bar * LARGE_UNIT_PRESSURE_SHARE,
        pressure_drop_small_bar: cooling.available_pressure_bar * SMALL_UNIT_PRESSURE_SHARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoilError, DomainErrorKind};
    use cc_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64, abs: f64) -> bool {
        nearly_equal(a, b, Tolerances { abs, rel: 0.0 })
    }

    #[test]
    fn base_scenario() {
        let out = compute(&CalculatorInput::base());

        assert_eq!(out.gap_m, 0.16);
        assert_eq!(out.conductor_area_mm2, 64.0 - PI * 6.25);
        assert!(close(out.conductor_area_mm2, 44.365, 1e-3));
        assert!(close(out.current_density, 1.8032, 1e-4));
        assert!(close(out.ideal_turns, 540.0, 1e-9));
        assert!(close(out.total_turns, 550.0, 1e-9));
        assert_eq!(out.turns_per_coil, out.total_turns);
        assert_eq!(out.horizontal_turns_selected, 14);
        assert_eq!(out.vertical_turns_selected, 32);
        assert_eq!(out.mu0_h_per_m, 1e-6);
        assert!(out.cooling.is_none());
    }

    #[test]
    fn cooling_scenario() {
        let out = compute(&CalculatorInput::default());
        let c = out.cooling.expect("default input includes cooling");

        assert_eq!(c.power_per_large_unit_w, 100.0);
        assert_eq!(c.power_per_small_unit_w, 100.0);
        assert!(close(c.mass_flow_large_g_s, 1.1945, 1e-4));
        assert_eq!(c.mass_flow_large_g_s, 100.0 / (4.186 * 20.0));
        assert!(close(c.flow_large_l_min, 0.0717, 1e-4));
        assert_eq!(c.flow_large_l_min, c.flow_small_l_min);
        assert!(close(c.pressure_drop_large_bar, 1.2, 1e-12));
        assert!(close(c.pressure_drop_small_bar, 0.8, 1e-12));
    }

    #[test]
    fn cooling_load_is_split_across_units() {
        let input = CalculatorInput::base().with_cooling(CoolingInput {
            power_per_coil_w: 300.0,
            num_large_units: 2,
            num_small_units: 3,
            ..CoolingInput::default()
        });
        let c = compute(&input).cooling.unwrap();
        assert_eq!(c.power_per_large_unit_w, 150.0);
        assert_eq!(c.power_per_small_unit_w, 100.0);
        assert!(c.flow_large_l_min > c.flow_small_l_min);
    }

    #[test]
    fn zero_duct_leaves_full_square() {
        let input = CalculatorInput {
            cooling_duct_diameter_mm: 0.0,
            ..CalculatorInput::base()
        };
        assert_eq!(compute(&input).conductor_area_mm2, 64.0);
    }

    #[test]
    fn coils_share_the_total_turns() {
        let input = CalculatorInput {
            num_coils: 2,
            ..CalculatorInput::base()
        };
        let out = compute(&input);
        assert_eq!(out.turns_per_coil, out.total_turns / 2.0);
    }

    #[test]
    fn correction_factor_scales_ideal_turns_down() {
        let plain = compute(&CalculatorInput::base());
        let corrected = compute(&CalculatorInput {
            correction_factor: 1.08,
            ..CalculatorInput::base()
        });
        assert!(corrected.ideal_turns < plain.ideal_turns);
        assert!(close(corrected.ideal_turns * 1.08, plain.ideal_turns, 1e-9));
    }

    #[test]
    fn zero_current_yields_non_finite_values() {
        let input = CalculatorInput {
            current_a: 0.0,
            ..CalculatorInput::base()
        };
        let out = compute(&input);
        assert!(out.ideal_turns.is_infinite());
        assert_eq!(out.current_density, 0.0);
    }

    #[test]
    fn zero_units_yield_infinite_flow() {
        let input = CalculatorInput::base().with_cooling(CoolingInput {
            num_large_units: 0,
            ..CoolingInput::default()
        });
        let c = compute(&input).cooling.unwrap();
        assert!(c.power_per_large_unit_w.is_infinite());
        assert!(c.flow_large_l_min.is_infinite());
        assert!(c.flow_small_l_min.is_finite());
    }

    #[test]
    fn duct_filling_conductor_is_non_finite() {
        let input = CalculatorInput {
            conductor_side_mm: 0.0,
            cooling_duct_diameter_mm: 0.0,
            ..CalculatorInput::base()
        };
        assert!(compute(&input).current_density.is_infinite());
    }

    #[test]
    fn checked_rejects_before_computing() {
        let input = CalculatorInput {
            num_coils: 0,
            ..CalculatorInput::default()
        };
        let err = compute_checked(&input).unwrap_err();
        assert!(matches!(
            err,
            CoilError::InvalidDomain {
                kind: DomainErrorKind::ZeroOrNegativeDenominator,
                field: "num_coils"
            }
        ));
    }

    #[test]
    fn checked_matches_unchecked_on_valid_input() {
        let input = CalculatorInput::default();
        assert_eq!(compute_checked(&input).unwrap(), compute(&input));
    }
}
