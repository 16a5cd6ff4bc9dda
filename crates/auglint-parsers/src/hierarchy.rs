//! Transform-family resolution over the parsed class hierarchy.
//!
//! Inheritance is modeled as a directed graph with base → subclass edges.
//! The transform family is everything reachable from the marker class,
//! excluding the marker itself. The marker does not need to be defined in
//! the scanned tree: a class naming it as a base is enough to link it.

use std::collections::BTreeSet;

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Bfs;

use crate::python::PyClass;

/// The set of class names that transitively subclass `marker`, excluding
/// the exact marker class. Returned as an ordered set so downstream
/// iteration is deterministic.
pub fn transform_family<'a>(classes: &'a [PyClass], marker: &'a str) -> BTreeSet<&'a str> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for class in classes {
        graph.add_node(class.name.as_str());
        for base in &class.bases {
            graph.add_edge(base.as_str(), class.name.as_str(), ());
        }
    }

    let mut family = BTreeSet::new();
    if !graph.contains_node(marker) {
        return family;
    }

    let mut bfs = Bfs::new(&graph, marker);
    while let Some(name) = bfs.next(&graph) {
        if name != marker {
            family.insert(name);
        }
    }
    family
}
