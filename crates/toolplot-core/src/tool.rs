//! Tool geometry
//!
//! A tool is a cutter profile plus a radius. The profile gives the height of the cutting
//! surface above the tool tip at a given distance from the tool axis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cutter profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolShape {
    /// Flat end mill
    #[default]
    Flat,
    /// Ball end mill / ball nose
    Ball,
}

impl ToolShape {
    /// Resolve a shape name. Only `"ball"` selects the hemispherical profile; every other
    /// name falls back to a flat end mill.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ball" => Self::Ball,
            _ => Self::Flat,
        }
    }
}

impl fmt::Display for ToolShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Ball => write!(f, "ball"),
        }
    }
}

/// A cutter of a given shape and radius, in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    shape: ToolShape,
    radius: f32,
    radius_sqr: f32,
}

impl Tool {
    /// Build a tool from its diameter.
    pub fn new(shape: ToolShape, diameter: f32) -> Self {
        let radius = diameter / 2.0;
        Self {
            shape,
            radius,
            radius_sqr: radius * radius,
        }
    }

    pub fn shape(&self) -> ToolShape {
        self.shape
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn radius_sqr(&self) -> f32 {
        self.radius_sqr
    }

    /// Height of the cutting surface above the tip at squared radial distance `r_sqr`.
    ///
    /// Returns `None` when `r_sqr` lies outside the footprint. For a ball end mill the
    /// height is `radius - sqrt(radius² - r²)`: zero on the axis, `radius` at the rim.
    pub fn height_at_radius_sqr(&self, r_sqr: f32) -> Option<f32> {
        if r_sqr > self.radius_sqr {
            return None;
        }
        match self.shape {
            ToolShape::Flat => Some(0.0),
            ToolShape::Ball => Some(self.radius - (self.radius_sqr - r_sqr).sqrt()),
        }
    }

    /// Height of the cutting surface above the tip at radial distance `r`.
    pub fn height_at_radius(&self, r: f32) -> Option<f32> {
        self.height_at_radius_sqr(r * r)
    }
}
