/*
 * Copyright © 2024 ladroid
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod config;
pub mod custom_error;
pub mod extractor;
pub mod graph;
pub mod identifier;
pub mod parser;
pub mod resolver;
pub mod vocab;

pub use config::ExtractorConfig;
pub use extractor::{extract, extract_many, extract_with_config, OntologyExtractor};
pub use graph::{EdgeType, NodeType, OntologyEdge, OntologyGraph, OntologyNode};
