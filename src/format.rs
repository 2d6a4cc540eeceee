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

//! Markdown rendering of catalog results: one self-contained block per
//! request. Titles and author names are interpolated verbatim, without
//! markdown escaping.

use anyhow::Result;

use crate::config::Config;
use crate::model::ResultItem;
use crate::request::SearchRequest;
use crate::version;

/// Render one request's results as a single block: a prose line for one
/// item, a `Mod | Author` table for several, and a dedicated message naming
/// the query when nothing was found.
pub fn format_results(
    request: &SearchRequest,
    items: &[ResultItem],
    config: &Config,
) -> Result<String> {
    let request_url = request.workshop_url(config)?;
    let block = match items {
        [] => format!(
            "Sorry, but a search for [`{}`]({}) gave no results. \
             [Looking for a specific version?]({})",
            request.query, request_url, config.help_url
        ),
        [item] => format!(
            "{}\n\n^(Results for) [^(`{}`)]({})^(. I'm showing you the top result, \
             there may be more.)",
            format_item(item, false),
            request.query,
            request_url
        ),
        items => {
            let mut table = String::from("Mod | Author \n :-|-: \n");
            for item in items {
                table.push_str(&format_item(item, true));
                table.push('\n');
            }
            format!(
                "{}\n\n^(Results for) [^(`{}`)]({})^(. I'm showing you the top {} results, \
                 there may be more.)",
                table,
                request.query,
                request_url,
                items.len()
            )
        }
    };
    Ok(block)
}

/// Render one item as a markdown line, prefixing the version label unless
/// the title already encodes the version.
pub fn format_item(item: &ResultItem, tabular: bool) -> String {
    let prefix = match &item.version {
        Some(version) if !title_encodes_version(&item.title, version) => format!("[{version}] "),
        _ => String::new(),
    };
    let separator = if tabular { "| " } else { "" };
    format!(
        "{prefix}[{}]({}) {separator}by [{}]({})",
        item.title, item.url, item.author_name, item.author_url
    )
}

/// Whether a title already textually encodes a version, in either the label
/// form ("A17") or the catalog's dotted form ("0.17"), case-insensitively.
pub fn title_encodes_version(title: &str, label: &str) -> bool {
    let haystack = title.to_lowercase();
    if haystack.contains(&label.to_lowercase()) {
        return true;
    }
    version::label_to_tag(label).is_some_and(|tag| haystack.contains(&tag))
}
