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

//! Trigger captures and the normalized search requests parsed from them.

use std::fmt;

use anyhow::Context;
use anyhow::Result;
use serde::Serialize;
use url::Url;

use crate::config::Config;

/// Whether a request targets a mod or a scenario in the workshop catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Mod,
    Scenario,
}

impl ItemKind {
    /// The catalog filter tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ItemKind::Mod => "Mod",
            ItemKind::Scenario => "Scenario",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Mod => "mod",
            ItemKind::Scenario => "scenario",
        }
    }

    /// Kind word from a trigger capture. Only the exact word "mod" selects
    /// mods; anything else is a scenario.
    pub fn from_capture_word(word: &str) -> Self {
        if word == "mod" {
            ItemKind::Mod
        } else {
            ItemKind::Scenario
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized trigger phrase, already shaped by the scanner. Each variant
/// carries the raw capture text; normalization happens in
/// [`SearchRequest::from_capture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// A bare query string. Defaults to a single mod request.
    Bare(String),
    /// `(kind, query)` from a singular trigger, e.g. `link mod: foo`.
    Kind(String, String),
    /// `(count, kind, comma-separated queries)` from a plural trigger,
    /// e.g. `link 3 mods: foo, bar`.
    CountedMulti(String, String, String),
}

/// One normalized search against the workshop catalog. Constructed once per
/// parsed trigger segment and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub kind: ItemKind,
    pub query: String,
    pub count: usize,
    pub tags: Vec<String>,
}

impl SearchRequest {
    /// Build a request with the count clamped to `1..=max_results` and the
    /// kind's catalog tag appended after any caller-supplied tags.
    pub fn new(
        kind: ItemKind,
        query: impl Into<String>,
        count: usize,
        extra_tags: Vec<String>,
        config: &Config,
    ) -> Self {
        let mut tags = extra_tags;
        tags.push(kind.tag().to_string());
        Self {
            kind,
            query: query.into(),
            count: count.clamp(1, config.max_results),
            tags,
        }
    }

    /// Expand a capture into zero or more requests, in query order.
    ///
    /// Comma-separated query lists are split, trimmed, and stripped of empty
    /// segments; a list of only commas or whitespace yields no requests.
    /// Unparsable counts default to 1 and oversized counts clamp silently.
    pub fn from_capture(capture: &Capture, config: &Config) -> Vec<SearchRequest> {
        match capture {
            Capture::Bare(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Vec::new();
                }
                vec![Self::new(ItemKind::Mod, query, 1, Vec::new(), config)]
            }
            Capture::Kind(kind, query) => {
                let kind = ItemKind::from_capture_word(kind);
                let query = query.trim();
                if query.is_empty() {
                    return Vec::new();
                }
                vec![Self::new(kind, query, 1, Vec::new(), config)]
            }
            Capture::CountedMulti(count, kind, queries) => {
                let kind = ItemKind::from_capture_word(kind);
                let count = parse_count(count);
                queries
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| Self::new(kind, segment, count, Vec::new(), config))
                    .collect()
            }
        }
    }

    /// The catalog's browse URL for this request, with the search text and
    /// required tags urlencoded.
    pub fn workshop_url(&self, config: &Config) -> Result<String> {
        let mut url =
            Url::parse(&config.workshop_search_url).context("parse workshop search url")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("appid", &config.app_id.to_string());
            pairs.append_pair("browsesort", "textsearch");
            for tag in &self.tags {
                pairs.append_pair("requiredtags[]", tag);
            }
            pairs.append_pair("searchtext", &self.query);
        }
        Ok(url.into())
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request for {} {}{} matching `{}`",
            self.count,
            self.kind,
            if self.count == 1 { "" } else { "s" },
            self.query
        )
    }
}

fn parse_count(count: &str) -> usize {
    let count = count.trim();
    if count.is_empty() {
        return 1;
    }
    count.parse().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn bare_capture_defaults_to_single_mod() {
        let requests = SearchRequest::from_capture(&Capture::Bare("floors".into()), &config());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, ItemKind::Mod);
        assert_eq!(requests[0].count, 1);
        assert_eq!(requests[0].query, "floors");
    }

    #[test]
    fn kind_word_selects_mod_only_on_exact_match() {
        let config = config();
        let mods =
            SearchRequest::from_capture(&Capture::Kind("mod".into(), "floors".into()), &config);
        assert_eq!(mods[0].kind, ItemKind::Mod);

        for word in ["scenario", "MOD", "Mod", "mods"] {
            let other =
                SearchRequest::from_capture(&Capture::Kind(word.into(), "floors".into()), &config);
            assert_eq!(other[0].kind, ItemKind::Scenario, "word {word:?}");
        }
    }

    #[test]
    fn counted_multi_splits_and_drops_empty_segments() {
        let capture = Capture::CountedMulti("3".into(), "scenario".into(), "a, b ,, c".into());
        let requests = SearchRequest::from_capture(&capture, &config());
        assert_eq!(requests.len(), 3);
        for (request, query) in requests.iter().zip(["a", "b", "c"]) {
            assert_eq!(request.kind, ItemKind::Scenario);
            assert_eq!(request.count, 3);
            assert_eq!(request.query, query);
        }
    }

    #[test]
    fn comma_only_list_yields_no_requests() {
        let capture = Capture::CountedMulti("2".into(), "mod".into(), " , ,, ".into());
        assert!(SearchRequest::from_capture(&capture, &config()).is_empty());
    }

    #[test]
    fn counts_clamp_and_default() {
        let config = config();
        for (raw, expected) in [("25", 10), ("10", 10), ("0", 1), ("", 1), ("many", 1)] {
            let capture = Capture::CountedMulti(raw.into(), "mod".into(), "floors".into());
            let requests = SearchRequest::from_capture(&capture, &config);
            assert_eq!(requests[0].count, expected, "raw count {raw:?}");
        }
    }

    #[test]
    fn kind_tag_is_appended_and_extra_tags_survive() {
        let config = config();
        let request = SearchRequest::new(
            ItemKind::Scenario,
            "lost tribe",
            1,
            vec!["0.17".to_string()],
            &config,
        );
        assert_eq!(request.tags, vec!["0.17".to_string(), "Scenario".to_string()]);

        let plain = SearchRequest::new(ItemKind::Mod, "floors", 1, Vec::new(), &config);
        assert_eq!(plain.tags, vec!["Mod".to_string()]);
    }

    #[test]
    fn workshop_url_encodes_query_and_tags() {
        let config = config();
        let request = SearchRequest::new(ItemKind::Mod, "more floors", 1, Vec::new(), &config);
        let url = request.workshop_url(&config).expect("url");
        assert!(url.contains("searchtext=more+floors"));
        assert!(url.contains("requiredtags%5B%5D=Mod"));
        assert!(url.contains("appid=294100"));
    }
}
