use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::SimError;

/// Named control action coming from the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlAction {
    RollLeft,
    RollRight,
    PitchUp,
    PitchDown,
    HeadingLeft,
    HeadingRight,
    ThrustAdd,
    ThrustSubtract,
}

impl ControlAction {
    pub const ALL: [ControlAction; 8] = [
        ControlAction::RollLeft,
        ControlAction::RollRight,
        ControlAction::PitchUp,
        ControlAction::PitchDown,
        ControlAction::HeadingLeft,
        ControlAction::HeadingRight,
        ControlAction::ThrustAdd,
        ControlAction::ThrustSubtract,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ControlAction::RollLeft => "roll-left",
            ControlAction::RollRight => "roll-right",
            ControlAction::PitchUp => "pitch-up",
            ControlAction::PitchDown => "pitch-down",
            ControlAction::HeadingLeft => "heading-left",
            ControlAction::HeadingRight => "heading-right",
            ControlAction::ThrustAdd => "thrust-add",
            ControlAction::ThrustSubtract => "thrust-subtract",
        }
    }

    /// Signed deflection for surface actions, `None` for throttle actions.
    pub fn deflection(&self) -> Option<f64> {
        match self {
            ControlAction::RollRight | ControlAction::PitchUp | ControlAction::HeadingLeft => {
                Some(1.0)
            }
            ControlAction::RollLeft | ControlAction::PitchDown | ControlAction::HeadingRight => {
                Some(-1.0)
            }
            ControlAction::ThrustAdd | ControlAction::ThrustSubtract => None,
        }
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlAction {
    type Err = SimError;

    /// Parses `pitch-up`, `move.pitch-up`, `thrust.add` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = match trimmed.split_once('.') {
            Some(("move", rest)) => rest.to_string(),
            Some(("thrust", rest)) => format!("thrust-{}", rest),
            _ => trimmed.to_string(),
        };

        ControlAction::ALL
            .iter()
            .copied()
            .find(|action| action.name() == name)
            .ok_or_else(|| SimError::InvalidControl(s.to_string()))
    }
}
