/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rustc_hash::{FxHashMap, FxHashSet};
use crate::triple::EncodedTriple;

type Positions = Vec<usize>;

/// Three-permutation index over encoded triples.
///
/// Triples are kept in insertion order and every index entry points at
/// positions in that sequence, so query results always come back in
/// insertion order regardless of which permutation answered them.
#[derive(Debug, Clone, Default)]
pub struct UnifiedIndex {
    triples: Vec<EncodedTriple>,
    seen: FxHashSet<EncodedTriple>,
    pub spo: FxHashMap<u32, FxHashMap<u32, Positions>>,
    pub pos: FxHashMap<u32, FxHashMap<u32, Positions>>,
    pub osp: FxHashMap<u32, FxHashMap<u32, Positions>>,
}

impl UnifiedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single triple into all indexes
    pub fn insert(&mut self, triple: EncodedTriple) -> bool {
        if !self.seen.insert(triple) {
            return false; // triple already stored
        }
        let EncodedTriple { subject: s, predicate: p, object: o } = triple;
        let position = self.triples.len();
        self.triples.push(triple);
        self.spo.entry(s).or_default().entry(p).or_default().push(position);
        self.pos.entry(p).or_default().entry(o).or_default().push(position);
        self.osp.entry(o).or_default().entry(s).or_default().push(position);
        true
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &EncodedTriple) -> bool {
        self.seen.contains(triple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodedTriple> {
        self.triples.iter()
    }

    /// Query the index
    pub fn query(&self, s: Option<u32>, p: Option<u32>, o: Option<u32>) -> Vec<EncodedTriple> {
        let positions: Positions = match (s, p, o) {
            // Fully bound
            (Some(ss), Some(pp), Some(oo)) => {
                let candidate = EncodedTriple { subject: ss, predicate: pp, object: oo };
                if self.seen.contains(&candidate) {
                    return vec![candidate];
                }
                return Vec::new();
            }
            // (S, P, -)
            (Some(ss), Some(pp), None) => lookup(&self.spo, ss, pp),
            // (S, -, O)
            (Some(ss), None, Some(oo)) => lookup(&self.osp, oo, ss),
            // (-, P, O)
            (None, Some(pp), Some(oo)) => lookup(&self.pos, pp, oo),
            // (S, -, -)
            (Some(ss), None, None) => merge_all(&self.spo, ss),
            // (-, P, -)
            (None, Some(pp), None) => merge_all(&self.pos, pp),
            // (-, -, O)
            (None, None, Some(oo)) => merge_all(&self.osp, oo),
            // (-, -, -) => all
            (None, None, None) => return self.triples.clone(),
        };

        positions.into_iter().map(|i| self.triples[i]).collect()
    }

    /// Clear all data in the indexes
    pub fn clear(&mut self) {
        self.triples.clear();
        self.seen.clear();
        self.spo.clear();
        self.pos.clear();
        self.osp.clear();
    }
}

#[inline]
fn lookup(index: &FxHashMap<u32, FxHashMap<u32, Positions>>, key1: u32, key2: u32) -> Positions {
    index
        .get(&key1)
        .and_then(|inner| inner.get(&key2))
        .cloned()
        .unwrap_or_default()
}

/// Collects every position under `key1`, restoring insertion order.
#[inline]
fn merge_all(index: &FxHashMap<u32, FxHashMap<u32, Positions>>, key1: u32) -> Positions {
    let mut positions: Positions = index
        .get(&key1)
        .map(|inner| inner.values().flatten().copied().collect())
        .unwrap_or_default();
    positions.sort_unstable();
    positions
}
