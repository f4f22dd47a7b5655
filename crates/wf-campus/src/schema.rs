//! Campus document schema.

use serde::{Deserialize, Serialize};
use wf_core::Cost;

use crate::point::Point;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CampusDoc {
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub walkways: Vec<Walkway>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Building {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

impl Building {
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One-way walkway from `(x1, y1)` to `(x2, y2)`.
///
/// `distance` is checked when read: negative or non-finite values fail to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Walkway {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: Cost,
}

impl Walkway {
    pub fn from_point(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}
