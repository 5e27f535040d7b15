/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Prefix used when a blank node label is rendered as a plain identifier.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// An RDF term as it appears in a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    NamedNode(String),
    BlankNode(String),
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub datatype: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("literal {0} cannot be used as a triple subject")]
    LiteralSubject(String),
    #[error("{0} cannot be used as a predicate, only named nodes can")]
    InvalidPredicate(String),
}

impl Term {
    pub fn named(uri: impl Into<String>) -> Self {
        Term::NamedNode(uri.into())
    }

    /// Accepts the label with or without the `_:` marker.
    pub fn blank(label: impl Into<String>) -> Self {
        let label = label.into();
        match label.strip_prefix(BLANK_NODE_PREFIX) {
            Some(stripped) => Term::BlankNode(stripped.to_string()),
            None => Term::BlankNode(label),
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            datatype: None,
            language: None,
        })
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            datatype: Some(datatype.into()),
            language: None,
        })
    }

    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        })
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Term::NamedNode(uri) => Some(uri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<&str> {
        match self {
            Term::BlankNode(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn is_named_as(&self, uri: &str) -> bool {
        self.as_named() == Some(uri)
    }
}

impl fmt::Display for Term {
    /// N-Triples rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(uri) => write!(f, "<{}>", uri),
            Term::BlankNode(label) => write!(f, "{}{}", BLANK_NODE_PREFIX, label),
            Term::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.value.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                '\t' => write!(f, "\\t")?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            write!(f, "^^<{}>", dt)
        } else {
            Ok(())
        }
    }
}
