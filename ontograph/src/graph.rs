/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Node kinds. The serialized names are the tags the presentation layer
/// filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Class,
    Property,
    Individual,
    Ontology,
    SkosConcept,
    SkosConceptScheme,
    Literal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeType {
    SubClassOf,
    SubPropertyOf,
    Type,
    Domain,
    Range,
    SkosInScheme,
    PropertyAssertion,
    DataAssertion,
    Other,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Class => "class",
            NodeType::Property => "property",
            NodeType::Individual => "individual",
            NodeType::Ontology => "ontology",
            NodeType::SkosConcept => "skosConcept",
            NodeType::SkosConceptScheme => "skosConceptScheme",
            NodeType::Literal => "literal",
        }
    }
}

impl EdgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::SubClassOf => "subClassOf",
            EdgeType::SubPropertyOf => "subPropertyOf",
            EdgeType::Type => "type",
            EdgeType::Domain => "domain",
            EdgeType::Range => "range",
            EdgeType::SkosInScheme => "skosInScheme",
            EdgeType::PropertyAssertion => "propertyAssertion",
            EdgeType::DataAssertion => "dataAssertion",
            EdgeType::Other => "other",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl OntologyNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: NodeType, uri: Option<String>) -> Self {
        OntologyNode {
            id: id.into(),
            label: label.into(),
            node_type,
            uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyMetadata {
    #[serde(rename = "ontologyURI", default, skip_serializing_if = "Option::is_none")]
    pub ontology_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Node map keyed by id. Once an id is present its type never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeMap {
    nodes: BTreeMap<String, OntologyNode>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false, leaving the stored node untouched, when the id is
    /// already taken.
    pub fn insert_if_absent(&mut self, node: OntologyNode) -> bool {
        match self.nodes.entry(node.id.clone()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&OntologyNode> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut OntologyNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn has_type(&self, id: &str, node_type: NodeType) -> bool {
        self.nodes.get(id).map_or(false, |n| n.node_type == node_type)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OntologyNode)> {
        self.nodes.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &OntologyNode> {
        self.nodes.values()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologyGraph {
    pub nodes: NodeMap,
    pub edges: Vec<OntologyEdge>,
    pub metadata: OntologyMetadata,
}

/// Node and edge counts per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<NodeType, usize>,
    pub edges_by_type: BTreeMap<EdgeType, usize>,
}

impl OntologyGraph {
    pub fn node(&self, id: &str) -> Option<&OntologyNode> {
        self.nodes.get(id)
    }

    pub fn edges_of_type(&self, edge_type: EdgeType) -> impl Iterator<Item = &OntologyEdge> {
        self.edges.iter().filter(move |e| e.edge_type == edge_type)
    }

    pub fn has_edge(&self, source: &str, target: &str, edge_type: EdgeType) -> bool {
        self.edges
            .iter()
            .any(|e| e.edge_type == edge_type && e.source == source && e.target == target)
    }

    /// Stable sort by `(type, source, target)`. Edge ids are kept.
    pub fn sort_edges(&mut self) {
        self.edges.sort_by(|a, b| {
            (a.edge_type.as_str(), &a.source, &a.target).cmp(&(b.edge_type.as_str(), &b.source, &b.target))
        });
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            ..GraphStats::default()
        };
        for node in self.nodes.values() {
            *stats.nodes_by_type.entry(node.node_type).or_insert(0) += 1;
        }
        for edge in &self.edges {
            *stats.edges_by_type.entry(edge.edge_type).or_insert(0) += 1;
        }
        stats
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
