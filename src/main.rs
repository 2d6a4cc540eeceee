// Copyright 2026 Modlinker Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod catalog;
mod cli;
mod config;
mod format;
mod model;
mod paginate;
mod request;
mod scan;
mod version;

use std::collections::VecDeque;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::catalog::CatalogQuery;
use crate::catalog::FixtureCatalog;
use crate::cli::Cli;
use crate::cli::Commands;
use crate::config::Config;
use crate::request::ItemKind;
use crate::request::SearchRequest;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Scan(args) => cmd_scan(args.text, args.file, args.json, &config),
        Commands::Reply(args) => cmd_reply(args.text, args.file, &args.fixture, args.json, &config),
        Commands::Url(args) => cmd_url(&args.query, &args.kind, args.version.as_deref(), &config),
    }
}

fn read_comment(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}

/// Scan a comment into requests, preserving the order triggers appear in.
fn parse_comment(comment: &str, config: &Config) -> Vec<SearchRequest> {
    scan::scan_comment(comment)
        .iter()
        .flat_map(|capture| SearchRequest::from_capture(capture, config))
        .collect()
}

fn cmd_scan(
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let comment = read_comment(text, file)?;
    let requests = parse_comment(&comment, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&requests)?);
    } else {
        for request in &requests {
            println!("{request}");
        }
    }
    Ok(())
}

fn cmd_reply(
    text: Option<String>,
    file: Option<PathBuf>,
    fixture: &Path,
    json: bool,
    config: &Config,
) -> Result<()> {
    let comment = read_comment(text, file)?;
    let catalog = FixtureCatalog::load(fixture, config)?;
    let requests = parse_comment(&comment, config);

    let mut blocks = VecDeque::new();
    for request in &requests {
        let items = catalog.search(&CatalogQuery::from_request(request))?;
        blocks.push_back(format::format_results(request, &items, config)?);
    }
    let posts = paginate::paginate(blocks, &config.footer, config.max_length);

    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "posts": posts }))?);
    } else {
        for (index, post) in posts.iter().enumerate() {
            println!("--- post {} ({} chars) ---", index + 1, post.len());
            println!("{post}");
        }
    }
    Ok(())
}

fn cmd_url(query: &str, kind: &str, version_label: Option<&str>, config: &Config) -> Result<()> {
    let kind = ItemKind::from_capture_word(kind);
    let mut tags = Vec::new();
    if let Some(label) = version_label {
        let tag = version::label_to_tag(label)
            .with_context(|| format!("no version digits in label {label:?}"))?;
        tags.push(tag);
    }
    let request = SearchRequest::new(kind, query, 1, tags, config);
    println!("{}", request.workshop_url(config)?);
    Ok(())
}
