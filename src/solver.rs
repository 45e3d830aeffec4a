//! The coordinator (spec.md §4.6): fans one worker out per shard, joins
//! them, and merges the per-shard word lists into the externally visible
//! result.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::result::FindResult;
use crate::worker;

/// Runs queries against one loaded `Dictionary`. Cheap to construct;
/// typically one per `Dictionary`, shared across threads (it only borrows).
pub struct Solver {
    dictionary: Dictionary,
}

impl Solver {
    pub fn new(dictionary: Dictionary) -> Solver {
        Solver { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Runs one query (spec.md §4.6). Any board-preparer failure
    /// short-circuits to an empty result with no workers spawned
    /// (spec.md §4.6 "Failure of the sanitize step").
    pub fn find_words(&self, board_bytes: &[u8], width: usize, height: usize) -> FindResult {
        let start = Instant::now();

        let board = match Board::prepare(board_bytes, width, height) {
            Some(board) => board,
            None => return FindResult::empty(),
        };

        let shard_count = self.dictionary.shard_count();
        let outputs: Vec<_> = (0..shard_count)
            .into_par_iter()
            .map(|shard| {
                let (root, words, load) = self.dictionary.snapshot_shard(shard);
                (worker::run_shard(root, &board, &words, load), words)
            })
            .collect();

        let mut words = Vec::with_capacity(outputs.iter().map(|(o, _)| o.word_ids.len()).sum());
        let mut score = 0u32;
        for (output, shard_words) in &outputs {
            score += output.score;
            for &id in &output.word_ids {
                words.push(Arc::clone(&shard_words[id as usize]));
            }
        }

        log::trace!(
            "find_words {}x{} -> {} words, score {} in {:?}",
            width,
            height,
            words.len(),
            score,
            start.elapsed()
        );

        FindResult { words, score }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn solver_for(words: &str) -> Solver {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{words}").unwrap();
        Solver::new(Dictionary::load(f.path(), 4))
    }

    #[test]
    fn empty_board_dims_yield_empty_result() {
        let solver = solver_for("cat\n");
        let result = solver.find_words(b"", 0, 0);
        assert_eq!(result.count(), 0);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn invalid_char_yields_empty_result() {
        let solver = solver_for("cat\n");
        let result = solver.find_words(b"A1B", 1, 3);
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn finds_a_word_on_a_small_board() {
        let solver = solver_for("cat\ndog\nat\n");
        let result = solver.find_words(b"CAT", 3, 1);
        let words: Vec<&str> = result.words.iter().map(|w| w.as_ref()).collect();
        assert!(words.contains(&"CAT"));
        assert_eq!(result.score, 1);
    }
}
