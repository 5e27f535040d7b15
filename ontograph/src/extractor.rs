/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::config::ExtractorConfig;
use crate::graph::{EdgeType, NodeMap, NodeType, OntologyEdge, OntologyGraph, OntologyMetadata, OntologyNode};
use crate::identifier::local_id;
use crate::resolver::resolve_concept_schemes_from_range;
use crate::vocab::{self, dc, dcterms, owl, rdf, rdfs, skos};
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use shared::store::TripleSource;
use shared::terms::{Literal, Term};

/// Semantic kind of a property, as declared by its `rdf:type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Object,
    Data,
    Annotation,
    Unknown,
}

/// Property declarations, scanned in this order.
const PROPERTY_TYPES: [(&str, PropertyKind); 4] = [
    (owl::OBJECT_PROPERTY, PropertyKind::Object),
    (owl::DATATYPE_PROPERTY, PropertyKind::Data),
    (owl::ANNOTATION_PROPERTY, PropertyKind::Annotation),
    (rdf::PROPERTY, PropertyKind::Unknown),
];

const SKOS_RELATIONS: [(&str, &str); 3] = [
    (skos::BROADER, "broader"),
    (skos::NARROWER, "narrower"),
    (skos::RELATED, "related"),
];

/// Extracts an ontology graph using the default configuration.
pub fn extract<S: TripleSource + ?Sized>(store: &S) -> OntologyGraph {
    OntologyExtractor::new(store, ExtractorConfig::default()).extract()
}

pub fn extract_with_config<S: TripleSource + ?Sized>(store: &S, config: &ExtractorConfig) -> OntologyGraph {
    OntologyExtractor::new(store, config.clone()).extract()
}

/// Extracts independent stores in parallel, one graph per store, in input
/// order. Each extraction owns all of its state.
pub fn extract_many<S: TripleSource + Sync>(stores: &[S], config: &ExtractorConfig) -> Vec<OntologyGraph> {
    stores
        .par_iter()
        .map(|store| extract_with_config(store, config))
        .collect()
}

/// Builds an [`OntologyGraph`] from a triple source in a fixed sequence of
/// stages.
///
/// Stages only ever add: a node keeps the type of whichever stage created
/// it first. All bookkeeping lives in the extractor, so one instance serves
/// exactly one extraction.
pub struct OntologyExtractor<'a, S: TripleSource + ?Sized> {
    store: &'a S,
    config: ExtractorConfig,
    nodes: NodeMap,
    edges: Vec<OntologyEdge>,
    property_kinds: FxHashMap<String, PropertyKind>,
    // Individual ids in discovery order.
    individuals: Vec<String>,
    literal_ids: FxHashMap<(String, String, String), String>,
    range_keys: FxHashSet<(String, String)>,
    in_scheme_keys: FxHashSet<(String, String)>,
    relation_keys: FxHashSet<(String, String, String)>,
    type_keys: FxHashSet<(String, String)>,
    assertion_keys: FxHashSet<(String, String, String)>,
}

impl<'a, S: TripleSource + ?Sized> OntologyExtractor<'a, S> {
    pub fn new(store: &'a S, config: ExtractorConfig) -> Self {
        OntologyExtractor {
            store,
            config,
            nodes: NodeMap::new(),
            edges: Vec::new(),
            property_kinds: FxHashMap::default(),
            individuals: Vec::new(),
            literal_ids: FxHashMap::default(),
            range_keys: FxHashSet::default(),
            in_scheme_keys: FxHashSet::default(),
            relation_keys: FxHashSet::default(),
            type_keys: FxHashSet::default(),
            assertion_keys: FxHashSet::default(),
        }
    }

    pub fn extract(mut self) -> OntologyGraph {
        let metadata = self.extract_metadata();
        self.discover_classes();
        self.log_stage("classes");
        self.discover_properties();
        self.log_stage("properties");
        self.discover_individuals();
        self.log_stage("individuals");
        self.extract_structural_edges();
        self.log_stage("structural edges");
        self.extract_skos();
        self.log_stage("skos");
        self.infer_instances();
        self.log_stage("instances");
        self.extract_assertions();
        self.log_stage("assertions");

        let mut graph = OntologyGraph {
            nodes: self.nodes,
            edges: self.edges,
            metadata,
        };
        if self.config.sort_edges {
            graph.sort_edges();
        }
        graph
    }

    fn log_stage(&self, stage: &str) {
        debug!(
            "after {}: {} nodes, {} edges",
            stage,
            self.nodes.len(),
            self.edges.len()
        );
    }

    fn extract_metadata(&self) -> OntologyMetadata {
        let ontology = self
            .store
            .subjects(&Term::named(rdf::TYPE), &Term::named(owl::ONTOLOGY))
            .into_iter()
            .find_map(|s| s.as_named().map(str::to_string));

        let Some(uri) = ontology else {
            return OntologyMetadata::default();
        };
        let subject = Term::named(uri.as_str());
        OntologyMetadata {
            title: self.first_literal(&subject, &[dc::TITLE, dcterms::TITLE]),
            description: self.first_literal(&subject, &[dc::DESCRIPTION, dcterms::DESCRIPTION]),
            ontology_uri: Some(uri),
        }
    }

    fn discover_classes(&mut self) {
        for class_type in [owl::CLASS, rdfs::CLASS] {
            for subject in self.typed_subjects(class_type) {
                self.ensure_node(&subject, NodeType::Class);
            }
        }
        for triple in self.store.matches(None, Some(&Term::named(rdfs::SUB_CLASS_OF)), None) {
            for term in [&triple.subject, &triple.object] {
                if let Some(uri) = term.as_named() {
                    self.ensure_node(uri, NodeType::Class);
                }
            }
        }
    }

    fn discover_properties(&mut self) {
        for (property_type, kind) in PROPERTY_TYPES {
            for subject in self.typed_subjects(property_type) {
                self.ensure_node(&subject, NodeType::Property);
                self.record_property_kind(&subject, kind);
            }
        }
        for predicate in [rdfs::DOMAIN, rdfs::RANGE] {
            for triple in self.store.matches(None, Some(&Term::named(predicate)), None) {
                if let Some(uri) = triple.subject.as_named() {
                    self.ensure_node(uri, NodeType::Property);
                    self.record_property_kind(uri, PropertyKind::Unknown);
                }
            }
        }
    }

    fn discover_individuals(&mut self) {
        for subject in self.typed_subjects(owl::NAMED_INDIVIDUAL) {
            self.ensure_node(&subject, NodeType::Individual);
        }
    }

    fn extract_structural_edges(&mut self) {
        for triple in self.store.matches(None, Some(&Term::named(rdfs::SUB_CLASS_OF)), None) {
            if let (Some(sub), Some(sup)) = (triple.subject.as_named(), triple.object.as_named()) {
                let source = self.ensure_node(sub, NodeType::Class);
                let target = self.ensure_node(sup, NodeType::Class);
                self.push_edge(source, target, "subClassOf", EdgeType::SubClassOf);
            }
        }

        for triple in self.store.matches(None, Some(&Term::named(rdfs::SUB_PROPERTY_OF)), None) {
            if let (Some(sub), Some(sup)) = (triple.subject.as_named(), triple.object.as_named()) {
                let source = self.ensure_node(sub, NodeType::Property);
                let target = self.ensure_node(sup, NodeType::Property);
                self.record_property_kind(sub, PropertyKind::Unknown);
                self.record_property_kind(sup, PropertyKind::Unknown);
                self.push_edge(source, target, "subPropertyOf", EdgeType::SubPropertyOf);
            }
        }

        // Domain edges point from the class to the property it carries.
        for triple in self.store.matches(None, Some(&Term::named(rdfs::DOMAIN)), None) {
            if let (Some(property), Some(class)) = (triple.subject.as_named(), triple.object.as_named()) {
                let property_id = self.ensure_node(property, NodeType::Property);
                let class_id = self.ensure_node(class, NodeType::Class);
                self.push_edge(class_id, property_id, "domain", EdgeType::Domain);
            }
        }

        for triple in self.store.matches(None, Some(&Term::named(rdfs::RANGE)), None) {
            let Some(property) = triple.subject.as_named() else {
                continue;
            };
            let targets = self.range_targets(&triple.object);
            if targets.is_empty() {
                trace!("range {} of {} resolves to nothing", triple.object, property);
                continue;
            }
            let property_id = self.ensure_node(property, NodeType::Property);
            for (uri, node_type) in targets {
                let target_id = self.ensure_node(&uri, node_type);
                if self.range_keys.insert((property_id.clone(), target_id.clone())) {
                    self.push_edge(property_id.clone(), target_id, "range", EdgeType::Range);
                }
            }
        }
    }

    /// A named range is a class; an anonymous one may encode concept
    /// schemes through `skos:inScheme` restrictions.
    fn range_targets(&self, range: &Term) -> Vec<(String, NodeType)> {
        match range {
            Term::NamedNode(uri) => vec![(uri.clone(), NodeType::Class)],
            _ => {
                let mut visited = FxHashSet::default();
                resolve_concept_schemes_from_range(self.store, range, &mut visited)
                    .into_iter()
                    .filter_map(|scheme| scheme.as_named().map(str::to_string))
                    .map(|uri| (uri, NodeType::SkosConceptScheme))
                    .collect()
            }
        }
    }

    fn extract_skos(&mut self) {
        for scheme in self.typed_subjects(skos::CONCEPT_SCHEME) {
            self.ensure_node(&scheme, NodeType::SkosConceptScheme);
        }
        for concept in self.typed_subjects(skos::CONCEPT) {
            self.ensure_node(&concept, NodeType::SkosConcept);
        }

        for triple in self.store.matches(None, Some(&Term::named(skos::IN_SCHEME)), None) {
            if let (Some(concept), Some(scheme)) = (triple.subject.as_named(), triple.object.as_named()) {
                let concept_id = self.ensure_node(concept, NodeType::SkosConcept);
                let scheme_id = self.ensure_node(scheme, NodeType::SkosConceptScheme);
                if self.in_scheme_keys.insert((concept_id.clone(), scheme_id.clone())) {
                    self.push_edge(concept_id, scheme_id, "inScheme", EdgeType::SkosInScheme);
                }
            }
        }

        for (relation, label) in SKOS_RELATIONS {
            for triple in self.store.matches(None, Some(&Term::named(relation)), None) {
                if let (Some(from), Some(to)) = (triple.subject.as_named(), triple.object.as_named()) {
                    let source = self.ensure_node(from, NodeType::SkosConcept);
                    let target = self.ensure_node(to, NodeType::SkosConcept);
                    if self.relation_keys.insert((source.clone(), target.clone(), label.to_string())) {
                        self.push_edge(source, target, label, EdgeType::Other);
                    }
                }
            }
        }
    }

    fn infer_instances(&mut self) {
        for triple in self.store.matches(None, Some(&Term::named(rdf::TYPE)), None) {
            let (Some(instance), Some(class)) = (triple.subject.as_named(), triple.object.as_named()) else {
                continue;
            };
            let class_id = local_id(class);
            if vocab::is_reserved(class) && !self.nodes.has_type(class_id, NodeType::Class) {
                continue;
            }
            let instance_id = local_id(instance);
            if self
                .nodes
                .get(instance_id)
                .map_or(false, |node| node.node_type != NodeType::Individual)
            {
                trace!("{} is not an individual, no type edge to {}", instance, class);
                continue;
            }

            let instance_id = self.ensure_individual(instance);
            let class_id = self.ensure_node(class, NodeType::Class);
            if self.type_keys.insert((class_id.clone(), instance_id.clone())) {
                self.push_edge(instance_id, class_id, "type", EdgeType::Type);
            }
        }
    }

    fn extract_assertions(&mut self) {
        let individuals = self.individuals.clone();
        for individual_id in individuals {
            let Some(uri) = self.nodes.get(&individual_id).and_then(|n| n.uri.clone()) else {
                continue;
            };
            for triple in self.store.matches(Some(&Term::named(uri.as_str())), None, None) {
                let Some(predicate) = triple.predicate.as_named() else {
                    continue;
                };
                if matches!(predicate, rdf::TYPE | rdfs::LABEL | rdfs::COMMENT) {
                    continue;
                }
                if !self.is_known_property(predicate) {
                    trace!("{} is not a known property, skipping assertion", predicate);
                    continue;
                }
                let label = self.property_label(predicate);
                let kind = self.property_kinds.get(predicate).copied().unwrap_or(PropertyKind::Unknown);
                let key = (individual_id.clone(), predicate.to_string(), triple.object.to_string());

                match &triple.object {
                    Term::NamedNode(object) => {
                        if kind == PropertyKind::Data {
                            debug!("datatype property {} used with resource {}", predicate, object);
                        }
                        let target_id = if self.nodes.contains(local_id(object)) {
                            local_id(object).to_string()
                        } else {
                            let node_type = self.infer_node_type(&triple.object);
                            self.ensure_node(object, node_type)
                        };
                        if self.assertion_keys.insert(key) {
                            self.push_edge(individual_id.clone(), target_id, &label, EdgeType::PropertyAssertion);
                        }
                    }
                    Term::Literal(literal) => {
                        if !self.config.include_literals {
                            continue;
                        }
                        if kind == PropertyKind::Object {
                            debug!("object property {} used with literal {}", predicate, literal);
                        }
                        let literal_id = self.intern_literal(literal);
                        if self.assertion_keys.insert(key) {
                            self.push_edge(individual_id.clone(), literal_id, &label, EdgeType::DataAssertion);
                        }
                    }
                    Term::BlankNode(_) => {}
                }
            }
        }
    }

    /// Node type for an assertion target, from its own `rdf:type` triples.
    fn infer_node_type(&self, term: &Term) -> NodeType {
        let types: Vec<Term> = self.store.objects(term, &Term::named(rdf::TYPE));
        let has_type = |uris: &[&str]| types.iter().any(|t| uris.iter().any(|u| t.is_named_as(u)));

        if has_type(&[owl::CLASS, rdfs::CLASS]) {
            NodeType::Class
        } else if has_type(&PROPERTY_TYPES.map(|(uri, _)| uri)) {
            NodeType::Property
        } else if has_type(&[skos::CONCEPT]) {
            NodeType::SkosConcept
        } else if has_type(&[skos::CONCEPT_SCHEME]) {
            NodeType::SkosConceptScheme
        } else if has_type(&[owl::ONTOLOGY]) {
            NodeType::Ontology
        } else {
            NodeType::Individual
        }
    }

    fn intern_literal(&mut self, literal: &Literal) -> String {
        let key = (
            literal.value.clone(),
            literal.datatype.clone().unwrap_or_default(),
            literal.language.clone().unwrap_or_default(),
        );
        if let Some(id) = self.literal_ids.get(&key) {
            return id.clone();
        }
        let id = format!("literal_{}", self.literal_ids.len());
        self.nodes.insert_if_absent(OntologyNode::new(
            id.clone(),
            literal_display(literal),
            NodeType::Literal,
            None,
        ));
        self.literal_ids.insert(key, id.clone());
        id
    }

    /// Inserts the node unless its id is taken and returns the id.
    fn ensure_node(&mut self, uri: &str, node_type: NodeType) -> String {
        let id = local_id(uri).to_string();
        if !self.nodes.contains(&id) {
            let label = self.node_label(uri, &id);
            self.nodes
                .insert_if_absent(OntologyNode::new(id.clone(), label, node_type, Some(uri.to_string())));
            if node_type == NodeType::Individual {
                self.individuals.push(id.clone());
            }
        }
        id
    }

    /// Like `ensure_node`, but completes an existing individual stub that
    /// lacks its uri or label.
    fn ensure_individual(&mut self, uri: &str) -> String {
        let id = local_id(uri).to_string();
        if !self.nodes.contains(&id) {
            return self.ensure_node(uri, NodeType::Individual);
        }
        let label = self.node_label(uri, &id);
        if let Some(node) = self.nodes.get_mut(&id) {
            if node.uri.is_none() {
                node.uri = Some(uri.to_string());
            }
            if node.label.is_empty() {
                node.label = label;
            }
        }
        id
    }

    fn push_edge(&mut self, source: String, target: String, label: &str, edge_type: EdgeType) {
        let id = format!("edge_{}", self.edges.len());
        self.edges.push(OntologyEdge {
            id,
            source,
            target,
            label: label.to_string(),
            edge_type,
        });
    }

    /// A classified kind is never downgraded back to `Unknown`.
    fn record_property_kind(&mut self, uri: &str, kind: PropertyKind) {
        let entry = self
            .property_kinds
            .entry(uri.to_string())
            .or_insert(PropertyKind::Unknown);
        if *entry == PropertyKind::Unknown {
            *entry = kind;
        }
    }

    fn is_known_property(&self, uri: &str) -> bool {
        self.nodes.has_type(local_id(uri), NodeType::Property) || self.property_kinds.contains_key(uri)
    }

    fn property_label(&self, uri: &str) -> String {
        let id = local_id(uri);
        match self.nodes.get(id) {
            Some(node) => node.label.clone(),
            None => self.node_label(uri, id),
        }
    }

    fn node_label(&self, uri: &str, id: &str) -> String {
        if self.config.use_labels {
            let subject = Term::named(uri);
            if let Some(label) = self.first_literal(&subject, &[rdfs::LABEL, skos::PREF_LABEL]) {
                return label;
            }
        }
        id.to_string()
    }

    fn first_literal(&self, subject: &Term, predicates: &[&str]) -> Option<String> {
        predicates.iter().find_map(|predicate| {
            self.store
                .objects(subject, &Term::named(*predicate))
                .into_iter()
                .find_map(|o| o.as_literal().map(|l| l.value.clone()))
        })
    }

    /// Named subjects of `(?, rdf:type, type_uri)` in store order.
    fn typed_subjects(&self, type_uri: &str) -> Vec<String> {
        self.store
            .subjects(&Term::named(rdf::TYPE), &Term::named(type_uri))
            .into_iter()
            .filter_map(|s| s.as_named().map(str::to_string))
            .collect()
    }
}

/// Display form of a literal node: the value followed by its language
/// tag, its datatype's local name, or `string`.
pub fn literal_display(literal: &Literal) -> String {
    let qualifier = match (&literal.language, &literal.datatype) {
        (Some(language), _) => format!("@{}", language),
        (None, Some(datatype)) => local_id(datatype).to_string(),
        (None, None) => "string".to_string(),
    };
    format!("{} ({})", literal.value, qualifier)
}
