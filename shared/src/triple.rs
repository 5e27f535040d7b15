/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */
use crate::terms::{Term, TermError};
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(PartialEq, Debug, Clone, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    /// Subjects must be named or blank, predicates must be named.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Result<Self, TermError> {
        if subject.is_literal() {
            return Err(TermError::LiteralSubject(subject.to_string()));
        }
        if !predicate.is_named() {
            return Err(TermError::InvalidPredicate(predicate.to_string()));
        }
        Ok(Triple { subject, predicate, object })
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A triple with an optional graph name. Stores index the triple part only.
#[derive(PartialEq, Debug, Clone, Eq, Hash, Serialize, Deserialize)]
pub struct Quad {
    pub triple: Triple,
    pub graph: Option<Term>,
}

impl Quad {
    pub fn new(triple: Triple, graph: Option<Term>) -> Self {
        Quad { triple, graph }
    }

    pub fn into_triple(self) -> Triple {
        self.triple
    }
}

/// Dictionary-encoded form of a [`Triple`] held by the index.
#[derive(PartialEq, Debug, Clone, Copy, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EncodedTriple {
    pub subject: u32,
    pub predicate: u32,
    pub object: u32,
}
