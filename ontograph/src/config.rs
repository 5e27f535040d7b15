/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::custom_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extraction switches. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Take node labels from `rdfs:label`, then `skos:prefLabel`, instead
    /// of the local id.
    pub use_labels: bool,
    /// Emit literal nodes and data assertion edges.
    pub include_literals: bool,
    /// Sort edges by `(type, source, target)` after extraction.
    pub sort_edges: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            use_labels: false,
            include_literals: true,
            sort_edges: false,
        }
    }
}

impl ExtractorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ExtractorConfig::from_json_str(r#"{ "sort_edges": true }"#).unwrap();
        assert!(config.sort_edges);
        assert!(config.include_literals);
        assert!(!config.use_labels);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(ExtractorConfig::from_json_str(r#"{ "sort_edges": "yes" }"#).is_err());
    }
}
