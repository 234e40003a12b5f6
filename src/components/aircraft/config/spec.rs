use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::components::aircraft::config::{ConfigError, RawAircraftSpec};
use crate::utils::{InterpolationTable, AIR_DENSITY, KMH_TO_MS, OSWALD_EFFICIENCY};

/// Control authority per surface, torque per unit deflection per m/s of airspeed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlCoefficients {
    /// Pitch authority (body x)
    pub elevator: f64,
    /// Roll authority (body y)
    pub aileron: f64,
    /// Yaw authority (body z)
    pub rudder: f64,
}

impl ControlCoefficients {
    pub fn new(elevator: f64, aileron: f64, rudder: f64) -> Self {
        Self {
            elevator,
            aileron,
            rudder,
        }
    }

    /// Coefficients laid out along the body axes (pitch, roll, yaw).
    pub fn as_body_vector(&self) -> Vector3<f64> {
        Vector3::new(self.elevator, self.aileron, self.rudder)
    }
}

/// Coupling between the nose direction and the flight path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathDeviationCoefficients {
    /// Torque pulling the nose toward the velocity in pitch
    pub pitch_torque: f64,
    /// Torque pulling the nose toward the velocity in yaw
    pub heading_torque: f64,
    /// Force turning the velocity toward the nose in pitch
    pub pitch_force: f64,
    /// Force turning the velocity toward the nose in yaw
    pub heading_force: f64,
}

/// Immutable description of an aircraft type.
///
/// Built only through [`AircraftSpec::from_raw`] or the presets, so every
/// accepted spec has positive mass, geometry and inertia and total lookup
/// tables. Shared between instances as `Arc<AircraftSpec>`.
///
/// Fields are public for reading. Editing a spec in place skips
/// validation; change the [`RawAircraftSpec`] and rebuild instead. The
/// force model constants are derived from the fields on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftSpec {
    pub name: String,
    /// Total mass (kg)
    pub mass: f64,
    /// Speed above which the overspeed flag is raised (m/s)
    pub max_speed: f64,
    /// Wing area (m²)
    pub wing_area: f64,
    /// Wing span (m)
    pub wing_span: f64,
    pub aspect_ratio: f64,
    /// Profile drag coefficients along body x/y/z
    pub drag_coefficients: Vector3<f64>,
    /// Reference areas for profile drag along body x/y/z (m²)
    pub drag_areas: Vector3<f64>,
    /// Thrust at full throttle (N)
    pub max_thrust: f64,
    /// Lift coefficient by angle of attack (rad)
    pub lift_vs_alpha: InterpolationTable,
    /// Form drag coefficient by angle of attack (rad)
    pub drag_vs_alpha: Option<InterpolationTable>,
    /// Side force coefficient by sideslip (rad)
    pub side_force_vs_beta: Option<InterpolationTable>,
    /// Principal moments of inertia about body x/y/z (kg·m²)
    pub inertia: Vector3<f64>,
    pub control: ControlCoefficients,
    /// Rotational damping per body axis
    pub damping: Vector3<f64>,
    /// Rates (rad/s) above which control authority is withheld, per body axis
    pub terminal_rates: Vector3<f64>,
    pub path_deviation: Option<PathDeviationCoefficients>,
}

impl AircraftSpec {
    /// Validates a raw spec and derives the force model constants.
    pub fn from_raw(raw: &RawAircraftSpec) -> Result<Self, ConfigError> {
        validate(raw)?;
        Ok(Self::assemble(raw))
    }

    /// The original physics sandbox aircraft.
    pub fn generic() -> Self {
        Self::assemble(&RawAircraftSpec::generic())
    }

    /// The generic airframe without an engine or path coupling.
    pub fn glider() -> Self {
        Self::assemble(&RawAircraftSpec::glider())
    }

    fn assemble(raw: &RawAircraftSpec) -> Self {
        Self {
            name: raw.name.clone(),
            mass: raw.mass,
            max_speed: raw.max_speed * KMH_TO_MS,
            wing_area: raw.wing_area,
            wing_span: raw.wing_span,
            aspect_ratio: raw.effective_aspect_ratio(),
            drag_coefficients: Vector3::from(raw.drag_coefficients),
            drag_areas: Vector3::from(raw.drag_areas),
            max_thrust: raw.max_thrust,
            lift_vs_alpha: raw.lift_vs_alpha.clone(),
            drag_vs_alpha: raw.drag_vs_alpha.clone(),
            side_force_vs_beta: raw.side_force_vs_beta.clone(),
            inertia: Vector3::from(raw.inertia),
            control: raw.control,
            damping: Vector3::from(raw.damping),
            terminal_rates: Vector3::new(raw.pitch_rate, raw.roll_rate, raw.yaw_rate),
            path_deviation: raw.path_deviation,
        }
    }

    /// `0.5 * ρ * wing_area`
    pub fn lift_factor(&self) -> f64 {
        0.5 * AIR_DENSITY * self.wing_area
    }

    /// `-0.5 * ρ * area * coefficient` per body axis
    pub fn drag_factors(&self) -> Vector3<f64> {
        self.drag_coefficients
            .component_mul(&self.drag_areas)
            .map(|ca| -0.5 * AIR_DENSITY * ca)
    }

    /// Denominator of the induced drag coefficient, `π * AR * e`.
    pub fn induced_drag_denominator(&self) -> f64 {
        PI * self.aspect_ratio * OSWALD_EFFICIENCY
    }

    pub fn weight(&self) -> f64 {
        self.mass * crate::utils::GRAVITY
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Validation(format!("{} {}", field, reason))
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be finite and positive, got {}", value)))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be finite and non-negative, got {}", value)))
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be finite, got {}", value)))
    }
}

fn check_axes(
    field: &str,
    values: &[f64; 3],
    check: fn(&str, f64) -> Result<(), ConfigError>,
) -> Result<(), ConfigError> {
    for (axis, value) in ["x", "y", "z"].iter().zip(values) {
        check(&format!("{}.{}", field, axis), *value)?;
    }
    Ok(())
}

fn check_table(field: &str, table: &InterpolationTable) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(invalid(field, "has no points"));
    }
    if table
        .points()
        .iter()
        .any(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(invalid(field, "has non-finite points"));
    }
    match (table.low(), table.high()) {
        (Some(low), Some(high)) if low.is_finite() && high.is_finite() => Ok(()),
        _ => Err(invalid(field, "needs finite low and high defaults")),
    }
}

fn validate(raw: &RawAircraftSpec) -> Result<(), ConfigError> {
    check_positive("mass", raw.mass)?;
    check_positive("max_speed", raw.max_speed)?;
    check_positive("wing_area", raw.wing_area)?;
    check_positive("wing_span", raw.wing_span)?;
    check_positive("aspect_ratio", raw.effective_aspect_ratio())?;
    check_non_negative("max_thrust", raw.max_thrust)?;
    check_axes("drag_coefficients", &raw.drag_coefficients, check_non_negative)?;
    check_axes("drag_areas", &raw.drag_areas, check_non_negative)?;
    check_axes("inertia", &raw.inertia, check_positive)?;
    check_axes("damping", &raw.damping, check_non_negative)?;
    check_positive("pitch_rate", raw.pitch_rate)?;
    check_positive("roll_rate", raw.roll_rate)?;
    check_positive("yaw_rate", raw.yaw_rate)?;

    check_finite("control.elevator", raw.control.elevator)?;
    check_finite("control.aileron", raw.control.aileron)?;
    check_finite("control.rudder", raw.control.rudder)?;

    if let Some(path) = &raw.path_deviation {
        check_finite("path_deviation.pitch_torque", path.pitch_torque)?;
        check_finite("path_deviation.heading_torque", path.heading_torque)?;
        check_finite("path_deviation.pitch_force", path.pitch_force)?;
        check_finite("path_deviation.heading_force", path.heading_force)?;
    }

    check_table("lift_vs_alpha", &raw.lift_vs_alpha)?;
    if let Some(table) = &raw.drag_vs_alpha {
        check_table("drag_vs_alpha", table)?;
    }
    if let Some(table) = &raw.side_force_vs_beta {
        check_table("side_force_vs_beta", table)?;
    }
    Ok(())
}
