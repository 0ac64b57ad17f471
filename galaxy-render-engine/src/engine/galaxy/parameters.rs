use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use constants::galaxy;

/// Errors surfaced by galaxy generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalaxyError {
    /// A generation parameter is outside its domain. Values are never
    /// clamped internally; silent correction would hide misconfiguration
    /// from the control panel.
    #[error("invalid parameter `{field}`: {message}")]
    InvalidParameter {
        field: &'static str,
        message: &'static str,
    },
}

/// Parameter set for one galaxy generation pass.
///
/// Plain data so presets round-trip through JSON. Counts are unsigned,
/// making negative values unrepresentable; the zero cases are caught by
/// [`GalaxyParameters::validate`].
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Asset, TypePath)]
pub struct GalaxyParameters {
    /// Number of generated points.
    pub count: u32,
    /// Rendered sprite size in world units. Passed through to the points
    /// material; the generator itself never reads it.
    pub size: f32,
    /// Number of evenly spaced spiral arms.
    pub branch_count: u32,
    /// Maximum distance from the galaxy centre.
    pub radius: f32,
    /// Additional rotation in radians per unit radius.
    pub spin: f32,
    /// Per-axis positional jitter magnitude, scaled by point radius.
    pub randomness: f32,
    /// Exponent sharpening the jitter distribution toward zero.
    pub randomness_power: f32,
    /// Colour at the galaxy centre (linear RGB).
    pub inside_colour: [f32; 3],
    /// Colour at the outer radius (linear RGB).
    pub outside_colour: [f32; 3],
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            count: galaxy::DEFAULT_COUNT,
            size: galaxy::DEFAULT_SIZE,
            branch_count: galaxy::DEFAULT_BRANCH_COUNT,
            radius: galaxy::DEFAULT_RADIUS,
            spin: galaxy::DEFAULT_SPIN,
            randomness: galaxy::DEFAULT_RANDOMNESS,
            randomness_power: galaxy::DEFAULT_RANDOMNESS_POWER,
            inside_colour: galaxy::DEFAULT_INSIDE_COLOUR,
            outside_colour: galaxy::DEFAULT_OUTSIDE_COLOUR,
        }
    }
}

impl GalaxyParameters {
    /// Check the generation constraints: `count >= 1`, `branch_count >= 1`,
    /// `radius > 0` and finite.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.count == 0 {
            return Err(GalaxyError::InvalidParameter {
                field: "count",
                message: "must be at least 1",
            });
        }
        if self.branch_count == 0 {
            return Err(GalaxyError::InvalidParameter {
                field: "branch_count",
                message: "must be at least 1",
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GalaxyError::InvalidParameter {
                field: "radius",
                message: "must be positive and finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_valid() {
        assert!(GalaxyParameters::default().validate().is_ok());
    }

    #[test]
    fn zero_count_is_rejected() {
        let params = GalaxyParameters {
            count: 0,
            ..GalaxyParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GalaxyError::InvalidParameter { field: "count", .. })
        ));
    }

    #[test]
    fn zero_branch_count_is_rejected() {
        let params = GalaxyParameters {
            branch_count: 0,
            ..GalaxyParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GalaxyError::InvalidParameter {
                field: "branch_count",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let params = GalaxyParameters {
                radius,
                ..GalaxyParameters::default()
            };
            assert!(
                matches!(
                    params.validate(),
                    Err(GalaxyError::InvalidParameter { field: "radius", .. })
                ),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn parameters_round_trip_through_json() {
        let params = GalaxyParameters::default();
        let json = serde_json::to_string(&params).unwrap();
        let restored: GalaxyParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, restored);
    }
}
