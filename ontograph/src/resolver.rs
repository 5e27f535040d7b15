/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::vocab::{owl, rdf, skos};
use log::trace;
use rustc_hash::FxHashSet;
use shared::store::TripleSource;
use shared::terms::Term;

/// Expands an RDF list (`rdf:first` / `rdf:rest` ... `rdf:nil`) into its
/// items.
///
/// Stops at the first revisited cell, missing `rdf:first` or missing
/// `rdf:rest` and returns the items collected up to that point.
pub fn expand_list<S: TripleSource + ?Sized>(store: &S, head: &Term) -> Vec<Term> {
    let first = Term::named(rdf::FIRST);
    let rest = Term::named(rdf::REST);

    let mut items = Vec::new();
    let mut visited: FxHashSet<Term> = FxHashSet::default();
    let mut current = head.clone();

    loop {
        if current.is_named_as(rdf::NIL) {
            break;
        }
        if !visited.insert(current.clone()) {
            trace!("list cell {} revisited, stopping", current);
            break;
        }
        let Some(item) = store.first_object(&current, &first) else {
            trace!("list cell {} has no rdf:first", current);
            break;
        };
        items.push(item);
        let Some(next) = store.first_object(&current, &rest) else {
            trace!("list cell {} has no rdf:rest", current);
            break;
        };
        current = next;
    }

    items
}

/// Named concept schemes denoted by an anonymous range restriction.
///
/// Understands `[ owl:onProperty skos:inScheme ; owl:hasValue <scheme> ]`,
/// optionally nested in `owl:intersectionOf` lists. `visited` holds the
/// blank node labels already entered; the caller owns it so one set can
/// span several resolutions.
pub fn resolve_concept_schemes_from_range<S: TripleSource + ?Sized>(
    store: &S,
    term: &Term,
    visited: &mut FxHashSet<String>,
) -> Vec<Term> {
    let Some(label) = term.as_blank() else {
        return Vec::new();
    };
    if !visited.insert(label.to_string()) {
        return Vec::new();
    }

    let mut schemes = Vec::new();

    let constrains_in_scheme = store
        .objects(term, &Term::named(owl::ON_PROPERTY))
        .iter()
        .any(|p| p.is_named_as(skos::IN_SCHEME));
    if constrains_in_scheme {
        schemes.extend(
            store
                .objects(term, &Term::named(owl::HAS_VALUE))
                .into_iter()
                .filter(Term::is_named),
        );
    }

    for list in store.objects(term, &Term::named(owl::INTERSECTION_OF)) {
        for member in expand_list(store, &list) {
            if member.is_blank() {
                schemes.extend(resolve_concept_schemes_from_range(store, &member, visited));
            }
        }
    }

    schemes
}
