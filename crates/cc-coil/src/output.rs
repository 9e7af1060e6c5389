//! Calculator output record and its labelled listing.

use cc_core::units::{Area, Length, MassRate, Power, Pressure, VolumeRate};
use cc_core::units::{bar, gps, lpm, m, mm2, watts};
use serde::Serialize;

pub const LABEL_MU0: &str = "Vacuum Permeability (mu0) [H/m]";
pub const LABEL_CONDUCTOR_AREA: &str = "Conductor Area [mm^2]";
pub const LABEL_CURRENT_DENSITY: &str = "Current Density [A/mm^2]";
pub const LABEL_IDEAL_TURNS: &str = "Ideal Number of Turns";
pub const LABEL_TOTAL_TURNS: &str = "Total Turns Used";
pub const LABEL_TURNS_PER_COIL: &str = "Turns per Coil";
pub const LABEL_HORIZONTAL_TURNS: &str = "Horizontal Turns (selected)";
pub const LABEL_VERTICAL_TURNS: &str = "Vertical Turns (selected)";
pub const LABEL_POWER_LARGE: &str = "Power per Large Cooling Unit [W]";
pub const LABEL_POWER_SMALL: &str = "Power per Small Cooling Unit [W]";
pub const LABEL_FLOW_LARGE: &str = "Flow in Large Unit [L/min]";
pub const LABEL_FLOW_SMALL: &str = "Flow in Small Unit [L/min]";
pub const LABEL_PRESSURE_DROP_LARGE: &str = "Pressure Drop in Large Unit [bar]";
pub const LABEL_PRESSURE_DROP_SMALL: &str = "Pressure Drop in Small Unit [bar]";

/// Value of one listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Real(f64),
    /// Integer-valued pass-through (selected turn counts)
    Count(u32),
}

impl OutputValue {
    pub fn is_finite(self) -> bool {
        match self {
            Self::Real(v) => v.is_finite(),
            Self::Count(_) => true,
        }
    }
}

/// One `label: value` pair of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputEntry {
    pub label: &'static str,
    pub value: OutputValue,
}

impl OutputEntry {
    fn real(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: OutputValue::Real(value),
        }
    }

    fn count(label: &'static str, value: u32) -> Self {
        Self {
            label,
            value: OutputValue::Count(value),
        }
    }
}

/// Every quantity derived by one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorOutput {
    pub mu0_h_per_m: f64,
    pub gap_m: f64,
    pub conductor_area_mm2: f64,
    /// [A/mm²]
    pub current_density: f64,
    pub ideal_turns: f64,
    pub total_turns: f64,
    pub turns_per_coil: f64,
    pub horizontal_turns_selected: u32,
    pub vertical_turns_selected: u32,
    pub cooling: Option<CoolingOutput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoolingOutput {
    pub power_per_large_unit_w: f64,
    pub power_per_small_unit_w: f64,
    pub mass_flow_large_g_s: f64,
    pub mass_flow_small_g_s: f64,
    pub flow_large_l_min: f64,
    pub flow_small_l_min: f64,
    pub pressure_drop_large_bar: f64,
    pub pressure_drop_small_bar: f64,
}

impl CalculatorOutput {
    /// Ordered `label: value` listing; cooling rows follow the turns rows
    /// and appear only for the cooling variant.
    pub fn entries(&self) -> Vec<OutputEntry> {
        let mut entries = vec![
            OutputEntry::real(LABEL_MU0, self.mu0_h_per_m),
            OutputEntry::real(LABEL_CONDUCTOR_AREA, self.conductor_area_mm2),
            OutputEntry::real(LABEL_CURRENT_DENSITY, self.current_density),
            OutputEntry::real(LABEL_IDEAL_TURNS, self.ideal_turns),
            OutputEntry::real(LABEL_TOTAL_TURNS, self.total_turns),
            OutputEntry::real(LABEL_TURNS_PER_COIL, self.turns_per_coil),
            OutputEntry::count(LABEL_HORIZONTAL_TURNS, self.horizontal_turns_selected),
            OutputEntry::count(LABEL_VERTICAL_TURNS, self.vertical_turns_selected),
        ];

        if let Some(c) = &self.cooling {
            entries.extend([
                OutputEntry::real(LABEL_POWER_LARGE, c.power_per_large_unit_w),
                OutputEntry::real(LABEL_POWER_SMALL, c.power_per_small_unit_w),
                OutputEntry::real(LABEL_FLOW_LARGE, c.flow_large_l_min),
                OutputEntry::real(LABEL_FLOW_SMALL, c.flow_small_l_min),
                OutputEntry::real(LABEL_PRESSURE_DROP_LARGE, c.pressure_drop_large_bar),
                OutputEntry::real(LABEL_PRESSURE_DROP_SMALL, c.pressure_drop_small_bar),
            ]);
        }

        entries
    }

    /// Labels of listing entries whose value is NaN or infinite.
    pub fn non_finite_labels(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|e| !e.value.is_finite())
            .map(|e| e.label)
            .collect()
    }

    pub fn gap(&self) -> Length {
        m(self.gap_m)
    }

    pub fn conductor_area(&self) -> Area {
        mm2(self.conductor_area_mm2)
    }
}

impl CoolingOutput {
    pub fn power_per_large_unit(&self) -> Power {
        watts(self.power_per_large_unit_w)
    }

    pub fn power_per_small_unit(&self) -> Power {
        watts(self.power_per_small_unit_w)
    }

    pub fn mass_flow_large(&self) -> MassRate {
        gps(self.mass_flow_large_g_s)
    }

    pub fn mass_flow_small(&self) -> MassRate {
        gps(self.mass_flow_small_g_s)
    }

    pub fn flow_large(&self) -> VolumeRate {
        lpm(self.flow_large_l_min)
    }

    pub fn flow_small(&self) -> VolumeRate {
        lpm(self.flow_small_l_min)
    }

    pub fn pressure_drop_large(&self) -> Pressure {
        bar(self.pressure_drop_large_bar)
    }

    pub fn pressure_drop_small(&self) -> Pressure {
        bar(self.pressure_drop_small_bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::{
        area::square_meter, length::millimeter, mass_rate::kilogram_per_second,
        power::kilowatt, pressure::kilopascal, volume_rate::liter_per_second,
    };

    fn sample() -> CalculatorOutput {
        CalculatorOutput {
            mu0_h_per_m: 1e-6,
            gap_m: 0.16,
            conductor_area_mm2: 44.0,
            current_density: 2.0,
            ideal_turns: 540.0,
            total_turns: 550.0,
            turns_per_coil: 275.0,
            horizontal_turns_selected: 14,
            vertical_turns_selected: 32,
            cooling: None,
        }
    }

    fn sample_cooling() -> CoolingOutput {
        CoolingOutput {
            power_per_large_unit_w: 100.0,
            power_per_small_unit_w: 50.0,
            mass_flow_large_g_s: 1.2,
            mass_flow_small_g_s: 0.6,
            flow_large_l_min: 0.072,
            flow_small_l_min: 0.036,
            pressure_drop_large_bar: 1.2,
            pressure_drop_small_bar: 0.8,
        }
    }

    #[test]
    fn base_listing_has_eight_rows_in_order() {
        let labels: Vec<_> = sample().entries().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                LABEL_MU0,
                LABEL_CONDUCTOR_AREA,
                LABEL_CURRENT_DENSITY,
                LABEL_IDEAL_TURNS,
                LABEL_TOTAL_TURNS,
                LABEL_TURNS_PER_COIL,
                LABEL_HORIZONTAL_TURNS,
                LABEL_VERTICAL_TURNS,
            ]
        );
    }

    #[test]
    fn cooling_rows_follow_turns_rows() {
        let mut out = sample();
        out.cooling = Some(sample_cooling());
        let entries = out.entries();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries[8].label, LABEL_POWER_LARGE);
        assert_eq!(entries[13].label, LABEL_PRESSURE_DROP_SMALL);
        assert_eq!(entries[13].value, OutputValue::Real(0.8));
    }

    #[test]
    fn selected_turns_are_counts() {
        let entries = sample().entries();
        assert_eq!(entries[6].value, OutputValue::Count(14));
        assert_eq!(entries[7].value, OutputValue::Count(32));
        assert!(entries.iter().all(|e| e.label != LABEL_FLOW_LARGE));
    }

    #[test]
    fn non_finite_labels_lists_bad_values_only() {
        let mut out = sample();
        assert!(out.non_finite_labels().is_empty());

        out.current_density = f64::INFINITY;
        out.turns_per_coil = f64::NAN;
        assert_eq!(
            out.non_finite_labels(),
            vec![LABEL_CURRENT_DENSITY, LABEL_TURNS_PER_COIL]
        );
    }

    #[test]
    fn entries_serialize_as_label_value_objects() {
        let json = serde_json::to_value(sample().entries()).unwrap();
        assert_eq!(json[3]["label"], LABEL_IDEAL_TURNS);
        assert_eq!(json[3]["value"], 540.0);
        assert_eq!(json[6]["value"], 14);
    }

    #[test]
    fn typed_views() {
        let out = sample();
        assert!((out.gap().get::<millimeter>() - 160.0).abs() < 1e-9);
        assert!((out.conductor_area().get::<square_meter>() - 44.0e-6).abs() < 1e-15);

        let c = sample_cooling();
        assert!((c.power_per_large_unit().get::<kilowatt>() - 0.1).abs() < 1e-12);
        assert!((c.power_per_small_unit().get::<kilowatt>() - 0.05).abs() < 1e-12);
        assert!((c.mass_flow_large().get::<kilogram_per_second>() - 1.2e-3).abs() < 1e-15);
        assert!(c.mass_flow_small() < c.mass_flow_large());
        assert!((c.flow_large().get::<liter_per_second>() - 0.0012).abs() < 1e-12);
        assert!(c.flow_small() < c.flow_large());
        assert!((c.pressure_drop_large().get::<kilopascal>() - 120.0).abs() < 1e-9);
        assert!(c.pressure_drop_small() < c.pressure_drop_large());
    }
}
