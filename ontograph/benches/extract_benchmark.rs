/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

extern crate criterion;
extern crate ontograph;

use criterion::*;
use ontograph::parser::load_ntriples;
use ontograph::{extract, extract_many, ExtractorConfig};
use shared::store::TripleStore;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
const OWL: &str = "http://www.w3.org/2002/07/owl#";

// Synthetic taxonomy: a chain of classes, one object and one datatype
// property, and `individuals` typed individuals linked in a ring.
fn synthetic_ntriples(classes: usize, individuals: usize) -> String {
    let ex = "http://example.org/bench#";
    let mut data = String::new();
    data.push_str(&format!("<{ex}knows> <{RDF_TYPE}> <{OWL}ObjectProperty> .\n"));
    data.push_str(&format!("<{ex}score> <{RDF_TYPE}> <{OWL}DatatypeProperty> .\n"));
    for c in 0..classes {
        data.push_str(&format!("<{ex}Class{c}> <{RDF_TYPE}> <{OWL}Class> .\n"));
        if c > 0 {
            data.push_str(&format!("<{ex}Class{c}> <{SUB_CLASS_OF}> <{ex}Class{}> .\n", c - 1));
        }
    }
    for i in 0..individuals {
        data.push_str(&format!("<{ex}ind{i}> <{RDF_TYPE}> <{OWL}NamedIndividual> .\n"));
        data.push_str(&format!("<{ex}ind{i}> <{RDF_TYPE}> <{ex}Class{}> .\n", i % classes));
        data.push_str(&format!("<{ex}ind{i}> <{ex}knows> <{ex}ind{}> .\n", (i + 1) % individuals));
        data.push_str(&format!("<{ex}ind{i}> <{ex}score> \"{}\" .\n", i % 100));
    }
    data
}

fn setup_store(classes: usize, individuals: usize) -> TripleStore {
    let mut store = TripleStore::new();
    load_ntriples(&mut store, &synthetic_ntriples(classes, individuals), true)
        .expect("synthetic data is valid N-Triples");
    store
}

fn load_benchmark(c: &mut Criterion) {
    let data = synthetic_ntriples(100, 10_000);
    c.bench_function("load_ntriples 10K individuals", |b| {
        b.iter(|| {
            let mut store = TripleStore::new();
            load_ntriples(&mut store, black_box(&data), true).unwrap()
        })
    });
}

fn extract_benchmark(c: &mut Criterion) {
    let store = setup_store(100, 10_000);
    c.bench_function("extract 10K individuals", |b| {
        b.iter(|| extract(black_box(&store)))
    });

    let stores: Vec<TripleStore> = (0..8).map(|_| setup_store(50, 2_000)).collect();
    let config = ExtractorConfig::default();
    c.bench_function("extract_many 8 stores", |b| {
        b.iter(|| extract_many(black_box(&stores), &config))
    });
}

criterion_group!(benches, load_benchmark, extract_benchmark);
criterion_main!(benches);
