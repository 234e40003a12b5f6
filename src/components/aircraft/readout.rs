use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{AircraftSpec, AircraftState};
use crate::utils::{heading_pitch_roll, BodyAxes, GRAVITY};

/// Load factors along the body axes, in g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GForce {
    /// Along the up axis, 1.0 in level flight
    pub normal: f64,
    /// Along the right axis
    pub lateral: f64,
    /// Along the forward axis
    pub axial: f64,
    /// Magnitude of the felt acceleration
    pub total: f64,
}

impl GForce {
    /// Projects the felt acceleration `a - g` onto the body axes.
    pub fn from_acceleration(acceleration: &Vector3<f64>, axes: &BodyAxes) -> Self {
        let felt = acceleration - Vector3::new(0.0, 0.0, -GRAVITY);
        Self {
            normal: felt.dot(&axes.up) / GRAVITY,
            lateral: felt.dot(&axes.right) / GRAVITY,
            axial: felt.dot(&axes.forward) / GRAVITY,
            total: felt.norm() / GRAVITY,
        }
    }
}

/// Values published to the HUD once per host frame.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightReadout {
    pub position: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
    /// Heading, positive nose left (rad)
    pub heading: f64,
    /// Pitch, positive nose up (rad)
    pub pitch: f64,
    /// Roll, positive right wing down (rad)
    pub roll: f64,
    pub velocity: Vector3<f64>,
    pub speed: f64,
    pub altitude: f64,
    /// Angle of attack (rad)
    pub angle_of_attack: f64,
    /// Sideslip (rad)
    pub sideslip: f64,
    pub throttle: f64,
    pub g_force: GForce,
    pub overspeed: bool,
}

impl Default for FlightReadout {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            velocity: Vector3::zeros(),
            speed: 0.0,
            altitude: 0.0,
            angle_of_attack: 0.0,
            sideslip: 0.0,
            throttle: 0.0,
            g_force: GForce::default(),
            overspeed: false,
        }
    }
}

impl FlightReadout {
    pub fn from_state(spec: &AircraftSpec, state: &AircraftState) -> Self {
        let spatial = &state.spatial;
        let axes = BodyAxes::from_attitude(&spatial.attitude);
        let angles = heading_pitch_roll(&spatial.attitude);
        let speed = spatial.speed();

        Self {
            position: spatial.position,
            attitude: spatial.attitude,
            heading: angles.x,
            pitch: angles.y,
            roll: angles.z,
            velocity: spatial.velocity,
            speed,
            altitude: spatial.altitude(),
            angle_of_attack: state.air_data.alpha,
            sideslip: state.air_data.beta,
            throttle: state.throttle,
            g_force: GForce::from_acceleration(&spatial.acceleration, &axes),
            overspeed: speed > spec.max_speed,
        }
    }
}
