//! Building directory and route finder.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;
use wf_core::Cost;
use wf_graph::Graph;
use wf_path::{Path, find_path};

use crate::point::Point;
use crate::route::Route;
use crate::schema::{Building, CampusDoc};
use crate::validate::validate_campus;
use crate::{CampusError, CampusResult};

/// A validated campus: buildings by short name plus the walkway graph.
#[derive(Debug, Clone)]
pub struct CampusMap {
    buildings: Vec<Building>,
    by_short_name: HashMap<String, usize>,
    graph: Graph<Point, Cost>,
}

impl CampusMap {
    pub fn new(doc: CampusDoc) -> CampusResult<Self> {
        validate_campus(&doc)?;

        let mut graph = Graph::new();
        for walkway in &doc.walkways {
            let from = walkway.from_point();
            let to = walkway.to_point();
            graph.add_node_value(from);
            graph.add_node_value(to);
            graph.add_edge_between(from, to, walkway.distance);
        }

        let by_short_name = doc
            .buildings
            .iter()
            .enumerate()
            .map(|(i, b)| (b.short_name.clone(), i))
            .collect();

        debug!(
            buildings = doc.buildings.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "campus map built"
        );

        Ok(Self {
            buildings: doc.buildings,
            by_short_name,
            graph,
        })
    }

    pub fn from_yaml_file(path: &std::path::Path) -> CampusResult<Self> {
        Self::new(crate::load_yaml(path)?)
    }

    /// Load from YAML or JSON depending on the file extension.
    pub fn from_file(path: &std::path::Path) -> CampusResult<Self> {
        Self::new(crate::load_campus(path)?)
    }

    pub fn graph(&self) -> &Graph<Point, Cost> {
        &self.graph
    }

    /// Buildings in document order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building(&self, short_name: &str) -> CampusResult<&Building> {
        self.by_short_name
            .get(short_name)
            .map(|&i| &self.buildings[i])
            .ok_or_else(|| CampusError::UnknownBuilding {
                short_name: short_name.to_string(),
            })
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.by_short_name.contains_key(short_name)
    }

    pub fn long_name_for_short(&self, short_name: &str) -> CampusResult<&str> {
        Ok(self.building(short_name)?.long_name.as_str())
    }

    /// Short name to long name, sorted by short name.
    pub fn building_names(&self) -> BTreeMap<String, String> {
        self.buildings
            .iter()
            .map(|b| (b.short_name.clone(), b.long_name.clone()))
            .collect()
    }

    /// Shortest walk between two buildings, `Ok(None)` if there is none.
    ///
    /// A building whose location touches no walkway can only reach itself.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> CampusResult<Option<Path<Point>>> {
        let from = self.building(start)?.location();
        let to = self.building(end)?.location();

        if from == to {
            return Ok(Some(Path::new(from)));
        }
        if !self.graph.contains_value(&from) || !self.graph.contains_value(&to) {
            debug!(start, end, "building is off the walkway network");
            return Ok(None);
        }

        let path = find_path(&self.graph, &from, &to);
        debug!(start, end, found = path.is_some(), "campus route query");
        Ok(path)
    }

    pub fn route(&self, start: &str, end: &str) -> CampusResult<Option<Route>> {
        Ok(self
            .find_shortest_path(start, end)?
            .map(|path| Route::from_path(start, end, &path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Walkway;

    fn building(short: &str, x: f64, y: f64) -> Building {
        Building {
            short_name: short.to_string(),
            long_name: format!("{short} Building"),
            x,
            y,
        }
    }

    fn walk(a: (f64, f64), b: (f64, f64), distance: f64) -> Walkway {
        Walkway {
            x1: a.0,
            y1: a.1,
            x2: b.0,
            y2: b.1,
            distance: Cost::new(distance).unwrap(),
        }
    }

    fn small_campus() -> CampusMap {
        CampusMap::new(CampusDoc {
            buildings: vec![
                building("A", 0.0, 0.0),
                building("B", 1.0, 0.0),
                building("C", 2.0, 0.0),
                building("LONE", 50.0, 50.0),
            ],
            walkways: vec![
                walk((0.0, 0.0), (1.0, 0.0), 2.0),
                walk((1.0, 0.0), (2.0, 0.0), 3.0),
                walk((0.0, 0.0), (2.0, 0.0), 10.0),
            ],
        })
        .unwrap()
    }

    #[test]
    fn directory_lookups() {
        let map = small_campus();
        assert!(map.short_name_exists("A"));
        assert!(!map.short_name_exists("Z"));
        assert_eq!(map.long_name_for_short("B").unwrap(), "B Building");
        assert!(matches!(
            map.long_name_for_short("Z"),
            Err(CampusError::UnknownBuilding { .. })
        ));
        let names: Vec<_> = map.building_names().into_keys().collect();
        assert_eq!(names, vec!["A", "B", "C", "LONE"]);
    }

    #[test]
    fn walkways_become_graph() {
        let map = small_campus();
        assert_eq!(map.graph().node_count(), 3);
        assert_eq!(map.graph().edge_count(), 3);
    }

    #[test]
    fn shortest_route_between_buildings() {
        let map = small_campus();
        let path = map.find_shortest_path("A", "C").unwrap().unwrap();
        assert_eq!(path.cost(), 5.0);
        assert_eq!(path.len(), 2);
        // Walkways are one-way
        assert!(map.find_shortest_path("C", "A").unwrap().is_none());
    }

    #[test]
    fn same_building_route() {
        let map = small_campus();
        let route = map.route("LONE", "LONE").unwrap().unwrap();
        assert_eq!(route.cost, 0.0);
        assert_eq!(route.legs.len(), 1);
    }

    #[test]
    fn off_network_building_has_no_route() {
        let map = small_campus();
        assert!(map.find_shortest_path("A", "LONE").unwrap().is_none());
    }

    #[test]
    fn unknown_building_is_an_error() {
        let map = small_campus();
        let err = map.find_shortest_path("A", "NOPE").unwrap_err();
        assert_eq!(err.to_string(), "Unknown building: NOPE");
    }
}
