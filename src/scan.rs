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

//! The fixed trigger-phrase grammar. Scanning raw comment text produces
//! shaped [`Capture`] values directly, so nothing downstream ever inspects a
//! loose tuple.
//!
//! Recognized forms, case-insensitive, one per occurrence:
//!   - `link mod: <query>` / `link scenario: <query>`
//!   - `link <count> mods: <q1>, <q2>, ...` (count optional)

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::request::Capture;

static COUNTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)link\s*(\d*)\s*(mod|scenario)s\s*:\s*([^\r\n]+)").expect("counted regex")
});

static KIND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)link\s*(mod|scenario)\s*:\s*([^\r\n]+)").expect("kind regex")
});

/// Extract every trigger capture from a comment, in order of appearance.
/// Text without triggers yields an empty list; that is the common case for
/// a comment stream and not an anomaly.
pub fn scan_comment(text: &str) -> Vec<Capture> {
    let mut found: Vec<(usize, Capture)> = Vec::new();

    for caps in COUNTED_RE.captures_iter(text) {
        let start = caps.get(0).map_or(0, |m| m.start());
        found.push((
            start,
            Capture::CountedMulti(
                caps[1].to_string(),
                caps[2].to_lowercase(),
                caps[3].to_string(),
            ),
        ));
    }

    for caps in KIND_RE.captures_iter(text) {
        let start = caps.get(0).map_or(0, |m| m.start());
        found.push((
            start,
            Capture::Kind(caps[1].to_lowercase(), caps[2].to_string()),
        ));
    }

    found.sort_by_key(|(start, _)| *start);
    debug!(captures = found.len(), "scanned comment");
    found.into_iter().map(|(_, capture)| capture).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_trigger_yields_kind_capture() {
        let captures = scan_comment("hey, link mod: more floors please");
        assert_eq!(
            captures,
            vec![Capture::Kind(
                "mod".to_string(),
                "more floors please".to_string()
            )]
        );
    }

    #[test]
    fn plural_trigger_yields_counted_capture() {
        let captures = scan_comment("link 3 scenarios: lost tribe, rich explorer");
        assert_eq!(
            captures,
            vec![Capture::CountedMulti(
                "3".to_string(),
                "scenario".to_string(),
                "lost tribe, rich explorer".to_string()
            )]
        );
    }

    #[test]
    fn plural_trigger_without_count_captures_empty_count() {
        let captures = scan_comment("link mods: a, b");
        assert_eq!(
            captures,
            vec![Capture::CountedMulti(
                String::new(),
                "mod".to_string(),
                "a, b".to_string()
            )]
        );
    }

    #[test]
    fn triggers_are_returned_in_comment_order() {
        let text = "link scenario: lost tribe\nsome prose\nlink 2 mods: floors, walls";
        let captures = scan_comment(text);
        assert_eq!(captures.len(), 2);
        assert!(matches!(captures[0], Capture::Kind(..)));
        assert!(matches!(captures[1], Capture::CountedMulti(..)));
    }

    #[test]
    fn trigger_words_are_case_insensitive() {
        let captures = scan_comment("Link MOD: floors");
        assert_eq!(
            captures,
            vec![Capture::Kind("mod".to_string(), "floors".to_string())]
        );
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert!(scan_comment("no triggers here, just chatter").is_empty());
        assert!(scan_comment("hyperlink: not a trigger").is_empty());
    }
}
