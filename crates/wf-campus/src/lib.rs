//! wf-campus: campus map façade over the wayfinder graph and path engine.
//!
//! A campus is a set of named buildings at coordinates plus directed walkways
//! between coordinates. `CampusMap` turns that into a `Graph<Point, Cost>` and
//! answers building-to-building route queries.

pub mod map;
pub mod point;
pub mod route;
pub mod schema;
pub mod validate;

pub use map::CampusMap;
pub use point::Point;
pub use route::{Route, RouteLeg};
pub use schema::*;
pub use validate::{CampusValidationError, validate_campus};

pub type CampusResult<T> = Result<T, CampusError>;

#[derive(thiserror::Error, Debug)]
pub enum CampusError {
    #[error("Unknown building: {short_name}")]
    UnknownBuilding { short_name: String },

    #[error("Validation error: {0}")]
    Validation(#[from] CampusValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_yaml(content: &str) -> CampusResult<CampusDoc> {
    let doc: CampusDoc = serde_yaml::from_str(content)?;
    validate_campus(&doc)?;
    Ok(doc)
}

pub fn load_yaml(path: &std::path::Path) -> CampusResult<CampusDoc> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &std::path::Path, doc: &CampusDoc) -> CampusResult<()> {
    validate_campus(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CampusResult<CampusDoc> {
    let content = std::fs::read_to_string(path)?;
    let doc: CampusDoc = serde_json::from_str(&content)?;
    validate_campus(&doc)?;
    Ok(doc)
}

/// Load a campus document, choosing JSON for a `.json` extension and YAML otherwise.
pub fn load_campus(path: &std::path::Path) -> CampusResult<CampusDoc> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
