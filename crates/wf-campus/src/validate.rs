//! Campus document validation logic.

use std::collections::HashSet;

use crate::schema::{Building, CampusDoc, Walkway};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CampusValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_campus(doc: &CampusDoc) -> Result<(), CampusValidationError> {
    let mut short_names = HashSet::new();
    for building in &doc.buildings {
        validate_building(building)?;
        if !short_names.insert(building.short_name.as_str()) {
            return Err(CampusValidationError::DuplicateId {
                id: building.short_name.clone(),
                context: "buildings".to_string(),
            });
        }
    }

    for (i, walkway) in doc.walkways.iter().enumerate() {
        validate_walkway(i, walkway)?;
    }

    Ok(())
}

fn validate_building(building: &Building) -> Result<(), CampusValidationError> {
    if building.short_name.trim().is_empty() {
        return Err(CampusValidationError::EmptyName {
            context: format!("building '{}' short_name", building.long_name),
        });
    }

    for (axis, v) in [("x", building.x), ("y", building.y)] {
        if !v.is_finite() {
            return Err(CampusValidationError::InvalidValue {
                field: format!("building '{}' {}", building.short_name, axis),
                value: v.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_walkway(index: usize, walkway: &Walkway) -> Result<(), CampusValidationError> {
    let coords = [
        ("x1", walkway.x1),
        ("y1", walkway.y1),
        ("x2", walkway.x2),
        ("y2", walkway.y2),
    ];
    for (axis, v) in coords {
        if !v.is_finite() {
            return Err(CampusValidationError::InvalidValue {
                field: format!("walkway {} {}", index, axis),
                value: v.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    Ok(())
}
