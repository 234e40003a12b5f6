use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::components::aircraft::config::{
    AircraftSpec, ControlCoefficients, PathDeviationCoefficients,
};
use crate::utils::{deg_to_rad, InterpolationTable};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    Validation(String),
    #[error("Unknown aircraft type: {0}")]
    UnknownAircraft(String),
}

/// Aircraft spec as written in a catalog file.
///
/// Units follow the catalog convention: `max_speed` in km/h, rates in
/// rad/s and table keys in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAircraftSpec {
    /// Aircraft identification, filled from the catalog key when empty
    #[serde(default)]
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub inertia: [f64; 3],

    /// Performance
    pub max_speed: f64,
    pub max_thrust: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,

    /// Profile drag per body axis
    pub drag_coefficients: [f64; 3],
    pub drag_areas: [f64; 3],

    /// Coefficient tables
    pub lift_vs_alpha: InterpolationTable,
    #[serde(default)]
    pub drag_vs_alpha: Option<InterpolationTable>,
    #[serde(default)]
    pub side_force_vs_beta: Option<InterpolationTable>,

    /// Rotational behaviour
    pub control: ControlCoefficients,
    pub damping: [f64; 3],
    pub pitch_rate: f64,
    pub roll_rate: f64,
    pub yaw_rate: f64,
    #[serde(default)]
    pub path_deviation: Option<PathDeviationCoefficients>,
}

impl RawAircraftSpec {
    /// Aspect ratio as configured, or `span² / area`.
    pub fn effective_aspect_ratio(&self) -> f64 {
        self.aspect_ratio
            .unwrap_or(self.wing_span * self.wing_span / self.wing_area)
    }

    pub fn generic() -> Self {
        let mass = 1000.0;
        Self {
            name: "generic".to_string(),
            mass,
            inertia: [mass / 6.0; 3],
            max_speed: 600.0,
            max_thrust: 5000.0,
            wing_area: 48.0,
            wing_span: 24.0,
            aspect_ratio: None,
            drag_coefficients: [0.9, 0.1, 0.9],
            drag_areas: [30.0, 2.75, 50.0],
            lift_vs_alpha: InterpolationTable::clamped(
                vec![
                    (deg_to_rad(-10.0), -0.4),
                    (deg_to_rad(-8.0), -0.45),
                    (deg_to_rad(15.0), 1.75),
                    (deg_to_rad(18.0), 1.05),
                ],
                0.0,
                0.0,
            ),
            drag_vs_alpha: Some(InterpolationTable::clamped(
                vec![
                    (deg_to_rad(-10.0), 0.010),
                    (deg_to_rad(0.0), 0.006),
                    (deg_to_rad(4.0), 0.005),
                    (deg_to_rad(8.0), 0.0065),
                    (deg_to_rad(12.0), 0.012),
                    (deg_to_rad(14.0), 0.020),
                    (deg_to_rad(16.0), 0.028),
                ],
                0.03,
                0.1,
            )),
            side_force_vs_beta: None,
            control: ControlCoefficients::new(4.5, 5.5, 1.0),
            damping: [100.0; 3],
            pitch_rate: 3.0,
            roll_rate: 3.0,
            yaw_rate: 3.0,
            path_deviation: Some(PathDeviationCoefficients {
                pitch_torque: 0.1,
                heading_torque: 12.0,
                pitch_force: 4.0,
                heading_force: 1.0,
            }),
        }
    }

    pub fn glider() -> Self {
        Self {
            name: "glider".to_string(),
            max_thrust: 0.0,
            path_deviation: None,
            ..Self::generic()
        }
    }
}

/// Where an aircraft spec comes from.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Generic,
    Glider,
    Catalog { path: PathBuf, name: String },
}

impl AircraftSource {
    pub fn load(&self) -> Result<Arc<AircraftSpec>, ConfigError> {
        match self {
            AircraftSource::Generic => Ok(Arc::new(AircraftSpec::generic())),
            AircraftSource::Glider => Ok(Arc::new(AircraftSpec::glider())),
            AircraftSource::Catalog { path, name } => AircraftCatalog::from_file(path)?.get(name),
        }
    }
}

/// Validated aircraft specs keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    specs: BTreeMap<String, Arc<AircraftSpec>>,
}

impl AircraftCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML map of type name to raw spec, validating every entry.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, RawAircraftSpec> = serde_yaml::from_str(yaml)?;
        let mut catalog = Self::new();
        for (name, mut spec) in raw {
            if spec.name.is_empty() {
                spec.name = name.clone();
            }
            catalog.register(&name, &spec)?;
        }
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_yaml_str(&contents)?;
        info!(
            "Loaded {} aircraft from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Validates and adds a spec, replacing any entry with the same name.
    pub fn register(&mut self, name: &str, raw: &RawAircraftSpec) -> Result<(), ConfigError> {
        let spec = AircraftSpec::from_raw(raw).map_err(|err| match err {
            ConfigError::Validation(msg) => {
                ConfigError::Validation(format!("aircraft '{}': {}", name, msg))
            }
            other => other,
        })?;
        self.specs.insert(name.to_string(), Arc::new(spec));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<AircraftSpec>, ConfigError> {
        self.specs
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownAircraft(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.specs.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
