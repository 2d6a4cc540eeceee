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

//! Greedy, order-preserving packing of formatted blocks into posts.

use std::collections::VecDeque;

use tracing::warn;

/// Pack blocks into the fewest posts a single greedy pass allows, appending
/// `footer` to every post and never exceeding `max_length` per post.
///
/// Blocks are never reordered or split. A block that cannot fit even in an
/// empty post is logged and dropped. Termination relies on the footer being
/// shorter than `max_length`, which config loading checks at startup.
pub fn paginate(mut blocks: VecDeque<String>, footer: &str, max_length: usize) -> Vec<String> {
    let mut posts = Vec::new();
    let mut reply = String::new();

    while reply.len() + footer.len() < max_length
        && let Some(block) = blocks.pop_front()
    {
        if block.len() + reply.len() + footer.len() <= max_length {
            reply.push_str("\n\n");
            reply.push_str(&block);
        } else if block.len() + footer.len() > max_length {
            warn!(
                block_len = block.len(),
                footer_len = footer.len(),
                max_length,
                "block too long for any post, dropping"
            );
        } else {
            // Fits in a fresh post. Requeue it and finalize the current one.
            blocks.push_front(block);
            posts.push(format!("{reply}{footer}"));
            reply.clear();
        }
    }

    if !reply.is_empty() {
        posts.push(format!("{reply}{footer}"));
    }

    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOTER: &str = "\n\n*****\n^(footer)";

    fn queue<const N: usize>(blocks: [&str; N]) -> VecDeque<String> {
        blocks.iter().map(|block| block.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_no_posts() {
        assert!(paginate(VecDeque::new(), FOOTER, 100).is_empty());
    }

    #[test]
    fn small_blocks_share_one_post() {
        let posts = paginate(queue(["one", "two", "three"]), FOOTER, 200);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], format!("\n\none\n\ntwo\n\nthree{FOOTER}"));
    }

    #[test]
    fn order_is_preserved_across_posts() {
        let blocks: Vec<String> = (0..6).map(|i| format!("block-{i}-{}", "x".repeat(30))).collect();
        let posts = paginate(blocks.iter().cloned().collect(), FOOTER, 100);
        assert!(posts.len() > 1);

        // Stripping footers and rejoining recovers the original sequence.
        let mut seen = Vec::new();
        for post in &posts {
            assert!(post.len() <= 100);
            assert!(post.ends_with(FOOTER));
            let body = post.strip_suffix(FOOTER).expect("footer");
            for block in body.split("\n\n").filter(|part| !part.is_empty()) {
                seen.push(block.to_string());
            }
        }
        assert_eq!(seen, blocks);
    }

    #[test]
    fn block_that_fits_fresh_post_starts_a_new_one() {
        let footer = "f".repeat(50);
        let first = "A".repeat(100);
        let second = "B".repeat(9850);
        let posts = paginate(queue([&first, &second]), &footer, 9900);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], format!("\n\n{first}{footer}"));
        assert_eq!(posts[1], format!("\n\n{second}{footer}"));
    }

    #[test]
    fn oversized_block_is_dropped() {
        let footer = "f".repeat(50);
        let oversized = "X".repeat(9900);
        let posts = paginate(queue([&oversized]), &footer, 9900);
        assert!(posts.is_empty());
    }

    #[test]
    fn oversized_block_does_not_break_the_stream() {
        let footer = "f".repeat(50);
        let oversized = "X".repeat(9900);
        let posts = paginate(queue(["before", &oversized, "after"]), &footer, 9900);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], format!("\n\nbefore\n\nafter{footer}"));
    }
}
