//! Strict domain checks run before a checked calculation.

use crate::error::{CoilError, CoilResult};
use crate::input::{CalculatorInput, CoolingInput};
use cc_core::{ensure_finite, ensure_positive};

/// Reject inputs for which the formulas would divide by zero or use a
/// non-physical value. Reports the first violation in field order.
pub fn validate(input: &CalculatorInput) -> CoilResult<()> {
    ensure_positive(input.required_field_t, "required_field_t")?;
    ensure_positive(input.pole_gap_mm, "pole_gap_mm")?;
    ensure_positive(input.current_a, "current_a")?;
    ensure_positive(input.conductor_side_mm, "conductor_side_mm")?;

    let duct = ensure_finite(input.cooling_duct_diameter_mm, "cooling_duct_diameter_mm")?;
    if duct < 0.0 {
        return Err(CoilError::non_positive("cooling_duct_diameter_mm"));
    }
    if crate::calculator::conductor_area_mm2(input.conductor_side_mm, duct) <= 0.0 {
        return Err(CoilError::zero_denominator("conductor_area_mm2"));
    }

    ensure_positive(input.correction_factor, "correction_factor")?;
    if input.num_coils == 0 {
        return Err(CoilError::zero_denominator("num_coils"));
    }

    if let Some(cooling) = &input.cooling {
        validate_cooling(cooling)?;
    }

    Ok(())
}

fn validate_cooling(cooling: &CoolingInput) -> CoilResult<()> {
    ensure_positive(cooling.power_per_coil_w, "power_per_coil_w")?;
    if cooling.num_large_units == 0 {
        return Err(CoilError::zero_denominator("num_large_units"));
    }
    if cooling.num_small_units == 0 {
        return Err(CoilError::zero_denominator("num_small_units"));
    }
    ensure_positive(cooling.allowed_delta_t_c, "allowed_delta_t_c")?;
    ensure_positive(cooling.available_pressure_bar, "available_pressure_bar")?;
    Ok(())
}
