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

//! The catalog collaborator boundary. The core never performs catalog I/O
//! itself; it hands an immutable [`CatalogQuery`] to a [`Catalog`]
//! implementation and consumes the resolved [`ResultItem`] list.

use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use tracing::warn;

use crate::config::Config;
use crate::model::ResultItem;
use crate::request::SearchRequest;
use crate::version;

/// Immutable per-call search parameters, built fresh for every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search_text: String,
    pub per_page: usize,
    pub required_tags: Vec<String>,
}

impl CatalogQuery {
    /// Build a query from loose terms.
    pub fn from_terms(query: &str, count: usize, tags: &[String]) -> Self {
        Self {
            search_text: query.to_string(),
            per_page: count,
            required_tags: tags.to_vec(),
        }
    }

    /// Build a query from an already-normalized request.
    pub fn from_request(request: &SearchRequest) -> Self {
        Self {
            search_text: request.query.clone(),
            per_page: request.count,
            required_tags: request.tags.clone(),
        }
    }
}

/// Search interface of the workshop catalog service. Implementations own
/// all transport concerns; results come back in the catalog's relevance
/// order with authors already resolved.
pub trait Catalog {
    fn search(&self, query: &CatalogQuery) -> Result<Vec<ResultItem>>;
}

/// Raw catalog item record, as returned by the file query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopFile {
    pub publishedfileid: String,
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Raw author record, as returned by the player summary endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorSummary {
    pub steamid: String,
    pub personaname: String,
    pub profileurl: String,
}

/// Join files against their authors and derive version labels. A file whose
/// creator is missing from the author list is logged and skipped.
pub fn resolve_items(
    files: &[WorkshopFile],
    authors: &[AuthorSummary],
    config: &Config,
) -> Vec<ResultItem> {
    files
        .iter()
        .filter_map(|file| {
            let Some(author) = authors.iter().find(|author| author.steamid == file.creator)
            else {
                warn!(title = %file.title, creator = %file.creator, "no author found for file");
                return None;
            };
            Some(ResultItem {
                title: file.title.clone(),
                url: config.item_url.replace("{id}", &file.publishedfileid),
                author_name: author.personaname.clone(),
                author_url: author.profileurl.clone(),
                version: version::tag_to_label(&file.tags),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct Fixture {
    files: Vec<WorkshopFile>,
    authors: Vec<AuthorSummary>,
}

/// A catalog backed by a JSON fixture file, standing in for the HTTP client
/// in the CLI and in tests. Fixture order is relevance order.
pub struct FixtureCatalog {
    files: Vec<WorkshopFile>,
    authors: Vec<AuthorSummary>,
    config: Config,
}

impl FixtureCatalog {
    pub fn load(path: &Path, config: &Config) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read fixture {}", path.display()))?;
        let fixture: Fixture = serde_json::from_str(&text)
            .with_context(|| format!("parse fixture {}", path.display()))?;
        Ok(Self {
            files: fixture.files,
            authors: fixture.authors,
            config: config.clone(),
        })
    }
}

impl Catalog for FixtureCatalog {
    fn search(&self, query: &CatalogQuery) -> Result<Vec<ResultItem>> {
        let needle = query.search_text.to_lowercase();
        let matches: Vec<WorkshopFile> = self
            .files
            .iter()
            .filter(|file| file.title.to_lowercase().contains(&needle))
            .filter(|file| {
                query
                    .required_tags
                    .iter()
                    .all(|tag| file.tags.iter().any(|have| have == tag))
            })
            .take(query.per_page)
            .cloned()
            .collect();
        Ok(resolve_items(&matches, &self.authors, &self.config))
    }
}
