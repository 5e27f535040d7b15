/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(test)]
mod tests {
    use ontograph::custom_error::LoadError;
    use ontograph::parser::*;
    use shared::store::TripleStore;
    use shared::terms::{Literal, Term};

    #[test]
    fn test_uri_parsing() {
        let result = parse_uri("<http://example.org/Dog> rest");
        assert_eq!(result, Ok((" rest", "http://example.org/Dog")));

        // Whitespace is not allowed inside an IRI
        assert!(parse_uri("<http://example.org/a b>").is_err());
        assert!(parse_uri("http://example.org/Dog").is_err());
    }

    #[test]
    fn test_blank_node_parsing() {
        assert_eq!(parse_blank_node("_:b0 ."), Ok((" .", "b0")));
        assert_eq!(parse_blank_node("_:node.1 ."), Ok((" .", "node.1")));
        // A trailing dot ends the statement, it is not part of the label
        assert_eq!(parse_blank_node("_:b0."), Ok((".", "b0")));
        assert!(parse_blank_node("_: ").is_err());
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(parse_language("@en ."), Ok((" .", "en")));
        assert_eq!(parse_language("@en-GB"), Ok(("", "en-GB")));
        assert!(parse_language("en").is_err());
    }

    #[test]
    fn test_quoted_string_escapes() {
        assert_eq!(parse_quoted(r#""plain" ."#), Ok((" .", "plain".to_string())));
        assert_eq!(
            parse_quoted(r#""tab\there \"quoted\" back\\slash""#),
            Ok(("", "tab\there \"quoted\" back\\slash".to_string()))
        );
        assert_eq!(parse_quoted(r#""café""#), Ok(("", "café".to_string())));
        assert_eq!(parse_quoted(r#""\U0001F436""#), Ok(("", "\u{1F436}".to_string())));
        assert_eq!(parse_quoted(r#""line\nbreak""#), Ok(("", "line\nbreak".to_string())));

        assert!(parse_quoted(r#""unterminated"#).is_err());
        assert!(parse_quoted(r#""bad \q escape""#).is_err());
        assert!(parse_quoted(r#""short \u12""#).is_err());
    }

    #[test]
    fn test_literal_parsing() {
        let (_, plain) = parse_literal(r#""Buddy""#).unwrap();
        assert_eq!(plain, Literal { value: "Buddy".to_string(), datatype: None, language: None });

        let (_, tagged) = parse_literal(r#""chien"@fr"#).unwrap();
        assert_eq!(tagged.language.as_deref(), Some("fr"));
        assert!(tagged.datatype.is_none());

        let (remaining, typed) =
            parse_literal(r#""5"^^<http://www.w3.org/2001/XMLSchema#integer> ."#).unwrap();
        assert_eq!(remaining, " .");
        assert_eq!(typed.value, "5");
        assert_eq!(typed.datatype.as_deref(), Some("http://www.w3.org/2001/XMLSchema#integer"));
    }

    #[test]
    fn test_statement_parsing() {
        let (_, parsed) =
            parse_statement("<http://ex.org/Buddy> <http://ex.org/age> \"5\" .").unwrap();
        let (s, p, o) = parsed.expect("a triple");
        assert_eq!(s, Term::named("http://ex.org/Buddy"));
        assert_eq!(p, Term::named("http://ex.org/age"));
        assert_eq!(o, Term::literal("5"));

        let (_, parsed) = parse_statement("  _:a <http://ex.org/p> _:b.  # trailing").unwrap();
        let (s, _, o) = parsed.expect("a triple");
        assert_eq!(s, Term::blank("a"));
        assert_eq!(o, Term::blank("b"));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_statement(""), Ok(("", None)));
        assert_eq!(parse_statement("   "), Ok(("", None)));
        assert_eq!(parse_statement("# just a comment"), Ok(("", None)));
    }

    #[test]
    fn test_malformed_statements() {
        // missing object
        assert!(parse_statement("<http://ex.org/s> <http://ex.org/p> .").is_err());
        // missing terminating dot
        assert!(parse_statement("<http://ex.org/s> <http://ex.org/p> <http://ex.org/o>").is_err());
        // literal predicate
        assert!(parse_statement("<http://ex.org/s> \"p\" <http://ex.org/o> .").is_err());
        // trailing garbage
        assert!(parse_statement("<http://ex.org/s> <http://ex.org/p> <http://ex.org/o> . x").is_err());
    }

    #[test]
    fn test_parse_document() {
        let data = "# pets\n\
                    <http://ex.org/Dog> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://ex.org/Animal> .\n\
                    \n\
                    <http://ex.org/Buddy> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ex.org/Dog> .\n";
        let triples = parse_ntriples(data).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[1].subject, Term::named("http://ex.org/Buddy"));
    }

    #[test]
    fn test_error_reports_line_and_column() {
        let data = "<http://ex.org/s> <http://ex.org/p> <http://ex.org/o> .\n\
                    \"literal\" <http://ex.org/p> <http://ex.org/o> .\n";
        match parse_ntriples(data) {
            Err(LoadError::Syntax { line, column, message }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 1);
                assert!(message.contains("^ Here"), "message was {}", message);
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }

        let err = parse_ntriples("<s> <p> .").unwrap_err();
        match err {
            LoadError::Syntax { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 9);
            }
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_and_lenient_loading() {
        let data = "<http://ex.org/a> <http://ex.org/p> <http://ex.org/b> .\n\
                    this is not n-triples\n\
                    <http://ex.org/b> <http://ex.org/p> <http://ex.org/c> .\n";

        let mut strict = TripleStore::new();
        assert!(load_ntriples(&mut strict, data, true).is_err());

        let mut lenient = TripleStore::new();
        assert_eq!(load_ntriples(&mut lenient, data, false).unwrap(), 2);
        assert_eq!(lenient.len(), 2);
    }

    #[test]
    fn test_duplicate_lines_count_once() {
        let line = "<http://ex.org/a> <http://ex.org/p> \"x\"@en .\n";
        let mut store = TripleStore::new();
        assert_eq!(load_ntriples(&mut store, &line.repeat(3), true).unwrap(), 1);
        assert_eq!(load_ntriples(&mut store, line, true).unwrap(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_ntriples_file("/nonexistent/ontology.nt", true).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/ontology.nt"));
    }
}
