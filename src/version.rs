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

//! Conversion between user-facing version labels ("A17") and the catalog's
//! dotted tag strings ("0.17"). This is the single point of coupling between
//! the two formats; a missing match is a normal outcome, not an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\.(\d{2})").expect("tag regex"));

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}").expect("label regex"));

/// Scan catalog tags in order and derive a version label from the first tag
/// that starts with a dotted version ("0.17" becomes "A17").
pub fn tag_to_label<S: AsRef<str>>(tags: &[S]) -> Option<String> {
    for tag in tags {
        let tag = tag.as_ref();
        match TAG_RE.captures(tag) {
            Some(caps) => return Some(format!("A{}", &caps[1])),
            None => debug!(tag, "tag does not encode a version"),
        }
    }
    None
}

/// Derive the catalog tag from a version label: the first run of two digits
/// anywhere in the input ("A17" becomes "0.17").
pub fn label_to_tag(label: &str) -> Option<String> {
    let found = LABEL_RE.find(label)?;
    Some(format!("0.{}", found.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips_through_tag() {
        let tag = label_to_tag("A17").expect("tag");
        assert_eq!(tag, "0.17");
        assert_eq!(tag_to_label(&[tag]), Some("A17".to_string()));
    }

    #[test]
    fn tag_to_label_takes_first_match_in_order() {
        let tags = ["Mod", "0.18", "0.17"];
        assert_eq!(tag_to_label(&tags), Some("A18".to_string()));
    }

    #[test]
    fn tag_to_label_matches_prefix_of_longer_tag() {
        assert_eq!(tag_to_label(&["0.17-compatible"]), Some("A17".to_string()));
    }

    #[test]
    fn tag_to_label_requires_two_digit_minor() {
        assert_eq!(tag_to_label(&["1.0"]), None);
        assert_eq!(tag_to_label(&["Mod", "Scenario"]), None);
    }

    #[test]
    fn label_to_tag_accepts_bare_numbers_and_prose() {
        assert_eq!(label_to_tag("17"), Some("0.17".to_string()));
        assert_eq!(label_to_tag("alpha 17 please"), Some("0.17".to_string()));
    }

    #[test]
    fn label_to_tag_misses_without_digit_pair() {
        assert_eq!(label_to_tag("A1"), None);
        assert_eq!(label_to_tag("latest"), None);
    }
}
