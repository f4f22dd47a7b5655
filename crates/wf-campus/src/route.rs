//! Serializable view of a campus path.

use serde::{Deserialize, Serialize};
use wf_path::Path;

use crate::point::Point;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteLeg {
    pub start: Point,
    pub end: Point,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub cost: f64,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// One leg per segment. A zero-segment path still yields a single
    /// zero-cost leg so that consumers always have something to draw.
    pub fn from_path(start: &str, end: &str, path: &Path<Point>) -> Self {
        let mut legs: Vec<RouteLeg> = path
            .segments()
            .map(|seg| RouteLeg {
                start: *seg.start(),
                end: *seg.end(),
                cost: seg.cost(),
            })
            .collect();
        if legs.is_empty() {
            legs.push(RouteLeg {
                start: *path.start(),
                end: *path.end(),
                cost: 0.0,
            });
        }
        Self {
            start: start.to_string(),
            end: end.to_string(),
            cost: path.cost(),
            legs,
        }
    }
}
