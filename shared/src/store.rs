/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::dictionary::Dictionary;
use crate::index_manager::UnifiedIndex;
use crate::terms::Term;
use crate::triple::{Quad, Triple};

/// Read-only pattern lookup over a set of triples.
///
/// `None` in any position is a wildcard. Implementations must return
/// results in an order that is stable across calls on the same data.
pub trait TripleSource {
    fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<Triple>;

    /// Objects of `(subject, predicate, ?)`.
    fn objects(&self, subject: &Term, predicate: &Term) -> Vec<Term> {
        self.matches(Some(subject), Some(predicate), None)
            .into_iter()
            .map(|t| t.object)
            .collect()
    }

    /// Subjects of `(?, predicate, object)`.
    fn subjects(&self, predicate: &Term, object: &Term) -> Vec<Term> {
        self.matches(None, Some(predicate), Some(object))
            .into_iter()
            .map(|t| t.subject)
            .collect()
    }

    fn first_object(&self, subject: &Term, predicate: &Term) -> Option<Term> {
        self.objects(subject, predicate).into_iter().next()
    }
}

/// Dictionary-encoded, insertion-ordered triple store.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    pub dictionary: Dictionary,
    index: UnifiedIndex,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the triple was already present.
    pub fn insert(&mut self, triple: &Triple) -> bool {
        let encoded = self.dictionary.encode_triple(triple);
        self.index.insert(encoded)
    }

    pub fn insert_quad(&mut self, quad: Quad) -> bool {
        self.insert(&quad.into_triple())
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        let encoded = (
            self.dictionary.lookup(&triple.subject),
            self.dictionary.lookup(&triple.predicate),
            self.dictionary.lookup(&triple.object),
        );
        match encoded {
            (Some(s), Some(p), Some(o)) => !self.index.query(Some(s), Some(p), Some(o)).is_empty(),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Triple> + '_ {
        self.index
            .iter()
            .filter_map(move |encoded| self.dictionary.decode_triple(encoded))
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.dictionary = Dictionary::new();
    }
}

impl TripleSource for TripleStore {
    fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<Triple> {
        // A bound term the dictionary never saw matches nothing.
        let lookup = |term: Option<&Term>| term.map(|t| self.dictionary.lookup(t));
        let (s, p, o) = (lookup(subject), lookup(predicate), lookup(object));
        if [s, p, o].contains(&Some(None)) {
            return Vec::new();
        }
        let (s, p, o) = (s.flatten(), p.flatten(), o.flatten());

        self.index
            .query(s, p, o)
            .iter()
            .filter_map(|encoded| self.dictionary.decode_triple(encoded))
            .collect()
    }
}

impl Extend<Triple> for TripleStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(&triple);
        }
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = TripleStore::new();
        store.extend(iter);
        store
    }
}

/// Linear scan in slice order. Duplicates are kept, which makes slices
/// handy for exercising de-duplication downstream.
impl TripleSource for [Triple] {
    fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<Triple> {
        self.iter()
            .filter(|t| subject.map_or(true, |s| &t.subject == s))
            .filter(|t| predicate.map_or(true, |p| &t.predicate == p))
            .filter(|t| object.map_or(true, |o| &t.object == o))
            .cloned()
            .collect()
    }
}

impl TripleSource for Vec<Triple> {
    fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Vec<Triple> {
        self.as_slice().matches(subject, predicate, object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(Term::named(s), Term::named(p), o).unwrap()
    }

    fn setup_store() -> TripleStore {
        let mut store = TripleStore::new();
        store.insert(&triple("http://ex.org/a", "http://ex.org/p", Term::named("http://ex.org/b")));
        store.insert(&triple("http://ex.org/a", "http://ex.org/q", Term::literal("x")));
        store.insert(&triple("http://ex.org/c", "http://ex.org/p", Term::named("http://ex.org/b")));
        store
    }

    #[test]
    fn test_wildcard_matches() {
        let store = setup_store();
        let a = Term::named("http://ex.org/a");
        let p = Term::named("http://ex.org/p");
        let b = Term::named("http://ex.org/b");

        assert_eq!(store.matches(Some(&a), None, None).len(), 2);
        assert_eq!(store.matches(None, Some(&p), None).len(), 2);
        assert_eq!(store.matches(None, None, Some(&b)).len(), 2);
        assert_eq!(store.matches(None, None, None).len(), 3);
        assert_eq!(
            store.subjects(&p, &b),
            vec![Term::named("http://ex.org/a"), Term::named("http://ex.org/c")]
        );
    }

    #[test]
    fn test_unknown_term_matches_nothing() {
        let store = setup_store();
        let unknown = Term::named("http://ex.org/nope");
        assert!(store.matches(Some(&unknown), None, None).is_empty());
    }

    #[test]
    fn test_store_deduplicates_but_slice_does_not() {
        let t = triple("http://ex.org/a", "http://ex.org/p", Term::named("http://ex.org/b"));
        let store: TripleStore = vec![t.clone(), t.clone()].into_iter().collect();
        assert_eq!(store.len(), 1);
        assert!(store.contains(&t));

        let slice = vec![t.clone(), t];
        assert_eq!(slice.matches(None, None, None).len(), 2);
    }

    #[test]
    fn test_literal_subject_rejected() {
        let result = Triple::new(Term::literal("x"), Term::named("http://ex.org/p"), Term::literal("y"));
        assert!(result.is_err());
        let result = Triple::new(Term::named("http://ex.org/s"), Term::blank("b0"), Term::literal("y"));
        assert!(result.is_err());
    }

    #[test]
    fn test_quad_graph_is_ignored() {
        let t = triple("http://ex.org/a", "http://ex.org/p", Term::literal("x"));
        let mut store = TripleStore::new();
        assert!(store.insert_quad(Quad::new(t.clone(), Some(Term::named("http://ex.org/g1")))));
        assert!(!store.insert_quad(Quad::new(t.clone(), Some(Term::named("http://ex.org/g2")))));
        assert_eq!(store.iter().collect::<Vec<_>>(), vec![t]);
    }
}
