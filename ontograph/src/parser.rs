/*
 * Copyright © 2024 Volodymyr Kadzhaia
 * Copyright © 2024 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Line-oriented N-Triples reader feeding a [`TripleStore`].

use crate::custom_error::{format_parse_error, LoadError};
use log::{debug, warn};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, space0, space1},
    combinator::{eof, map, opt, recognize, rest},
    error::{Error as NomError, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use shared::store::TripleStore;
use shared::terms::{Literal, Term};
use shared::triple::Triple;
use std::path::Path;

fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

// Parser for a URI within angle brackets
pub fn parse_uri(input: &str) -> IResult<&str, &str> {
    delimited(
        char('<'),
        take_while(|c: char| c != '>' && c != '<' && c != '"' && !c.is_whitespace()),
        char('>'),
    )(input)
}

// Parser for a blank node label such as _:b0 or _:node.1
pub fn parse_blank_node(input: &str) -> IResult<&str, &str> {
    preceded(
        tag("_:"),
        recognize(pair(
            take_while1(is_label_char),
            many0(pair(char('.'), take_while1(is_label_char))),
        )),
    )(input)
}

// Parser for a language tag such as en or en-GB
pub fn parse_language(input: &str) -> IResult<&str, &str> {
    preceded(
        char('@'),
        recognize(pair(alpha1, many0(pair(char('-'), alphanumeric1)))),
    )(input)
}

/// Quoted string body with N-Triples escapes decoded.
pub fn parse_quoted(input: &str) -> IResult<&str, String> {
    let (body, _) = char('"')(input)?;
    let mut value = String::new();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok((&body[i + 1..], value)),
            '\\' => {
                let Some((j, escaped)) = chars.next() else {
                    break;
                };
                match escaped {
                    't' => value.push('\t'),
                    'b' => value.push('\u{8}'),
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    'f' => value.push('\u{c}'),
                    '"' => value.push('"'),
                    '\'' => value.push('\''),
                    '\\' => value.push('\\'),
                    'u' | 'U' => {
                        let width = if escaped == 'u' { 4 } else { 8 };
                        let start = j + 1;
                        let hex = body.get(start..start + width).ok_or_else(|| {
                            nom::Err::Error(NomError::new(&body[j..], ErrorKind::Escaped))
                        })?;
                        let decoded = u32::from_str_radix(hex, 16)
                            .ok()
                            .and_then(char::from_u32)
                            .ok_or_else(|| {
                                nom::Err::Error(NomError::new(&body[j..], ErrorKind::Escaped))
                            })?;
                        value.push(decoded);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    _ => {
                        return Err(nom::Err::Error(NomError::new(&body[i..], ErrorKind::Escaped)));
                    }
                }
            }
            _ => value.push(c),
        }
    }

    // Unterminated literal
    Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)))
}

// Parser for a literal with an optional language tag or datatype
pub fn parse_literal(input: &str) -> IResult<&str, Literal> {
    let (input, value) = parse_quoted(input)?;
    let (input, language) = opt(parse_language)(input)?;
    if let Some(language) = language {
        return Ok((
            input,
            Literal { value, datatype: None, language: Some(language.to_string()) },
        ));
    }
    let (input, datatype) = opt(preceded(tag("^^"), parse_uri))(input)?;
    Ok((
        input,
        Literal { value, datatype: datatype.map(str::to_string), language: None },
    ))
}

fn subject_term(input: &str) -> IResult<&str, Term> {
    alt((
        map(parse_uri, Term::named),
        map(parse_blank_node, Term::blank),
    ))(input)
}

fn object_term(input: &str) -> IResult<&str, Term> {
    alt((
        map(parse_uri, Term::named),
        map(parse_blank_node, Term::blank),
        map(parse_literal, Term::Literal),
    ))(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), rest)(input)
}

/// One N-Triples line. Blank and comment-only lines yield `None`.
pub fn parse_statement(input: &str) -> IResult<&str, Option<(Term, Term, Term)>> {
    let (input, _) = space0(input)?;
    if let Ok((remaining, _)) = tuple((opt(comment), eof))(input) {
        return Ok((remaining, None));
    }
    let (input, (subject, _, predicate, _, object, _, _, _, _, _)) = tuple((
        subject_term,
        space1,
        map(parse_uri, Term::named),
        space1,
        object_term,
        space0,
        char('.'),
        space0,
        opt(comment),
        eof,
    ))(input)?;
    Ok((input, Some((subject, predicate, object))))
}

/// Parses N-Triples text, failing on the first malformed line.
pub fn parse_ntriples(data: &str) -> Result<Vec<Triple>, LoadError> {
    let mut triples = Vec::new();
    for (index, line) in data.lines().enumerate() {
        if let Some(triple) = parse_line(index + 1, line)? {
            triples.push(triple);
        }
    }
    Ok(triples)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Triple>, LoadError> {
    let (_, parsed) = parse_statement(line).map_err(|e| format_parse_error(line_no, line, e))?;
    parsed
        .map(|(s, p, o)| Triple::new(s, p, o).map_err(|source| LoadError::Term { line: line_no, source }))
        .transpose()
}

/// Loads N-Triples text into `store` and returns how many new triples
/// were added. In lenient mode malformed lines are logged and skipped.
pub fn load_ntriples(store: &mut TripleStore, data: &str, strict: bool) -> Result<usize, LoadError> {
    let mut added = 0;
    let mut skipped = 0;
    for (index, line) in data.lines().enumerate() {
        match parse_line(index + 1, line) {
            Ok(Some(triple)) => {
                if store.insert(&triple) {
                    added += 1;
                }
            }
            Ok(None) => {}
            Err(err) if !strict => {
                warn!("Skipping invalid line: {}", err);
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }
    debug!("loaded {} triples, skipped {} lines", added, skipped);
    Ok(added)
}

pub fn load_ntriples_file(path: impl AsRef<Path>, strict: bool) -> Result<TripleStore, LoadError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut store = TripleStore::new();
    load_ntriples(&mut store, &data, strict)?;
    Ok(store)
}
