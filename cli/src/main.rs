/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;
use log::info;
use ontograph::parser::load_ntriples_file;
use ontograph::{extract_many, ExtractorConfig, OntologyGraph};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "ontograph-cli",
    version = "0.1.0",
    author = "Volodymyr Kadzhaia <vkadzhaia@gmail.com>",
    author = "Pieter Bonte <pieter.bonte@kuleuven.be>",
    about = "Extract ontology graphs from N-Triples files",
    long_about = "ontograph CLI - loads one or more N-Triples files and prints the ontology graph of each (classes, properties, individuals, SKOS concepts and literals with the edges between them) as JSON."
)]
struct Args {
    #[arg(short, long, required = true, num_args = 1.., help = "N-Triples file to extract", value_name = "FILE")]
    file: Vec<String>,

    #[arg(short, long, help = "JSON file with extractor settings", value_name = "JSON")]
    config: Option<String>,

    #[arg(long, help = "Use rdfs:label / skos:prefLabel as node labels")]
    labels: bool,

    #[arg(long, help = "Leave out literal nodes and data assertions")]
    no_literals: bool,

    #[arg(long, help = "Sort edges by type, source and target")]
    sort_edges: bool,

    #[arg(long, help = "Skip malformed lines instead of failing")]
    lenient: bool,

    #[arg(long, help = "Pretty-print the JSON output")]
    pretty: bool,

    #[arg(long, help = "Print node and edge counts instead of the graph")]
    stats: bool,
}

impl Args {
    fn extractor_config(&self) -> Result<ExtractorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_json_file(path)?,
            None => ExtractorConfig::default(),
        };
        if self.labels {
            config.use_labels = true;
        }
        if self.no_literals {
            config.include_literals = false;
        }
        if self.sort_edges {
            config.sort_edges = true;
        }
        Ok(config)
    }
}

fn render(graphs: &[OntologyGraph], args: &Args) -> serde_json::Result<String> {
    let value = if args.stats {
        let stats: Vec<_> = graphs.iter().map(OntologyGraph::stats).collect();
        serde_json::to_value(stats)?
    } else {
        serde_json::to_value(graphs)?
    };
    // One input prints a bare object, several print an array.
    let value = match value {
        serde_json::Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    };
    if args.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.extractor_config()?;

    let mut stores = Vec::with_capacity(args.file.len());
    for file in &args.file {
        let store = load_ntriples_file(file, !args.lenient)?;
        info!("loaded {} triples from {}", store.len(), file);
        stores.push(store);
    }

    let graphs = extract_many(&stores, &config);
    println!("{}", render(&graphs, args)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
