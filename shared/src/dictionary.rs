/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rustc_hash::FxHashMap;
use crate::terms::Term;
use crate::triple::{EncodedTriple, Triple};

// Dictionary for encoding and decoding terms
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    term_to_id: FxHashMap<Term, u32>,
    id_to_term: Vec<Term>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            term_to_id: FxHashMap::default(),
            id_to_term: Vec::new(),
        }
    }

    pub fn encode(&mut self, term: &Term) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            id
        } else {
            let id = self.id_to_term.len() as u32;
            self.term_to_id.insert(term.clone(), id);
            self.id_to_term.push(term.clone());
            id
        }
    }

    /// Lookup without interning; a term the dictionary has never seen
    /// cannot occur in any stored triple.
    pub fn lookup(&self, term: &Term) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    pub fn decode(&self, id: u32) -> Option<&Term> {
        self.id_to_term.get(id as usize)
    }

    pub fn encode_triple(&mut self, triple: &Triple) -> EncodedTriple {
        EncodedTriple {
            subject: self.encode(&triple.subject),
            predicate: self.encode(&triple.predicate),
            object: self.encode(&triple.object),
        }
    }

    pub fn decode_triple(&self, encoded: &EncodedTriple) -> Option<Triple> {
        Some(Triple {
            subject: self.decode(encoded.subject)?.clone(),
            predicate: self.decode(encoded.predicate)?.clone(),
            object: self.decode(encoded.object)?.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.id_to_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_term.is_empty()
    }
}
