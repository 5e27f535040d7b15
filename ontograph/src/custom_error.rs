/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use nom::error::Error as NomError;
use shared::terms::TermError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("syntax error at line {line}, column {column}{message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("invalid triple at line {line}: {source}")]
    Term {
        line: usize,
        #[source]
        source: TermError,
    },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Turns a nom failure on one input line into a [`LoadError::Syntax`]
/// whose message points at the offending column.
pub fn format_parse_error(line_no: usize, line: &str, err: nom::Err<NomError<&str>>) -> LoadError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let offset = line.len() - e.input.len();
            let col_no = line[..offset].chars().count() + 1;

            let error_description = match e.code {
                nom::error::ErrorKind::Tag => ". Expected a specific token",
                nom::error::ErrorKind::Char => ". Expected a specific character",
                nom::error::ErrorKind::Alt => ". Expected an IRI, blank node or literal",
                nom::error::ErrorKind::TakeWhile1 => ". Unexpected character",
                nom::error::ErrorKind::Eof => ". Unexpected trailing input",
                _ => "",
            };

            LoadError::Syntax {
                line: line_no,
                column: col_no,
                message: format!(
                    "{}:\n{}\n{}^ Here",
                    error_description,
                    line,
                    " ".repeat(col_no - 1)
                ),
            }
        }
        nom::Err::Incomplete(_) => LoadError::Syntax {
            line: line_no,
            column: line.chars().count() + 1,
            message: ". Incomplete statement".to_string(),
        },
    }
}
