//! Area calculation over a tagged shape union.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DrillError, DrillResult};

/// A shape, tagged by its `shape` field in serialized form.
///
/// Any tag other than `circle` or `rectangle` deserializes to
/// [`Shape::Unknown`], which has no area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Circle {
        radius: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
    },
    #[serde(other)]
    Unknown,
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    /// Parse a shape from its tagged JSON object form.
    pub fn from_json(input: &str) -> DrillResult<Self> {
        serde_json::from_str(input).map_err(DrillError::InvalidShape)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Unknown => "unknown",
        }
    }
}

/// Result of an area calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Area {
    Square(f64),
    UnknownShape,
}

/// Sentinel text reported for shapes without a known area formula.
pub const UNKNOWN_SHAPE: &str = "unknown shape";

impl Serialize for Area {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Area::Square(v) => serializer.serialize_f64(*v),
            Area::UnknownShape => serializer.serialize_str(UNKNOWN_SHAPE),
        }
    }
}

impl Area {
    pub fn value(&self) -> Option<f64> {
        match self {
            Area::Square(v) => Some(*v),
            Area::UnknownShape => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Area::UnknownShape)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Area::Square(v) => write!(f, "{}", v),
            Area::UnknownShape => f.write_str(UNKNOWN_SHAPE),
        }
    }
}

/// Compute the area of `shape`.
///
/// Dimensions are used as given: negative values are not rejected and the
/// result is not rounded.
pub fn calculate_shape_area(shape: &Shape) -> Area {
    let area = match *shape {
        Shape::Circle { radius } => Area::Square(PI * radius.powi(2)),
        Shape::Rectangle { width, height } => Area::Square(width * height),
        Shape::Unknown => {
            warn!("No area formula for unknown shape");
            return Area::UnknownShape;
        }
    };

    debug!(shape = shape.kind(), %area, "Calculated area");
    area
}
