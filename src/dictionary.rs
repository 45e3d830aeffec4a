//! Dictionary store and builder (spec.md §4.2, §3 "Shards"). Owns `S` trie
//! roots and the flat, append-only word list; guarded by an `RwLock` so
//! `find_words` queries can run concurrently with each other while a load
//! or free takes the store exclusively (spec.md §5).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::Error;
use crate::trie::TrieNode;

/// Letters ordered by descending English frequency, used to spread shard
/// assignment evenly instead of the naive `letter_index % S`, which the
/// source acknowledges leaves rare leading letters (`X`, `Z`) idle
/// (spec.md §9 "Shard assignment"). Rank in this table, not the letter's
/// own index, is taken modulo `S`.
const FREQUENCY_ORDER: [u8; ALPHABET_SIZE] = *b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

fn shard_of(first_letter: u8, shard_count: usize) -> usize {
    let rank = FREQUENCY_ORDER
        .iter()
        .position(|&l| l == first_letter)
        .unwrap_or(0);
    rank % shard_count
}

struct Inner {
    shard_roots: Vec<TrieNode>,
    words: Vec<Arc<str>>,
    /// Per-shard accepted-word counts, mirroring the source's
    /// `ThreadInfo::load` tally. Lets a worker reserve its result vector up
    /// front instead of growing it one push at a time (spec.md §4.5 "Setup
    /// per worker").
    shard_loads: Vec<u32>,
}

/// The dictionary store (spec.md §3 "Lifecycles"). Cheap to clone (an `Arc`
/// around the actual storage), so multiple `Solver`s can share one load.
#[derive(Clone)]
pub struct Dictionary {
    inner: Arc<RwLock<Inner>>,
    shard_count: usize,
}

impl Dictionary {
    /// An empty dictionary with `shard_count` shards and no words. Useful as
    /// a baseline before the first `load`, or after `free`.
    pub fn empty(shard_count: usize) -> Dictionary {
        let shard_count = shard_count.max(1);
        Dictionary {
            inner: Arc::new(RwLock::new(Inner {
                shard_roots: (0..shard_count).map(|_| TrieNode::new()).collect(),
                words: Vec::new(),
                shard_loads: vec![0; shard_count],
            })),
            shard_count,
        }
    }

    /// Replaces any prior dictionary with the one read from `path`. Silent
    /// on I/O failure: the store is left empty and queries return zero
    /// results (spec.md §6, §7 `DictLoadOpenFailed`).
    pub fn load(path: impl AsRef<Path>, shard_count: usize) -> Dictionary {
        match Self::try_load(path, shard_count) {
            Ok(dict) => dict,
            Err(err) => {
                log::warn!("dictionary load failed, falling back to empty store: {err}");
                Dictionary::empty(shard_count)
            }
        }
    }

    /// Like `load`, but surfaces the I/O error to the caller instead of
    /// swallowing it (SPEC_FULL.md §4.8).
    pub fn try_load(path: impl AsRef<Path>, shard_count: usize) -> Result<Dictionary, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::DictLoadOpenFailed {
            path: PathBuf::from(path),
            source,
        })?;

        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|source| Error::DictLoadOpenFailed {
                path: PathBuf::from(path),
                source,
            })?;

        let dict = Dictionary::empty(shard_count);
        {
            let mut inner = dict.inner.write().expect("dictionary lock poisoned");
            let mut accepted = 0usize;
            let mut rejected = 0usize;
            for token in tokenize(&text) {
                if insert_word(&mut inner, &token, dict.shard_count) {
                    accepted += 1;
                } else {
                    rejected += 1;
                }
            }
            log::debug!(
                "loaded dictionary from {}: {} words accepted, {} rejected",
                path.display(),
                accepted,
                rejected
            );
        }

        Ok(dict)
    }

    /// Returns to the empty state (spec.md §5 "Resource discipline").
    /// Idempotent and safe without a prior load.
    pub fn free(&mut self) {
        let mut inner = self.inner.write().expect("dictionary lock poisoned");
        inner.shard_roots = (0..self.shard_count).map(|_| TrieNode::new()).collect();
        inner.words.clear();
        inner.shard_loads = vec![0; self.shard_count];
    }

    pub fn shard_count(&self) -> usize {
        self.shard_count
    }

    /// Deep-copies shard `shard` for exclusive use by one worker, and
    /// returns a clone of the shared word list (cheap: `Arc<str>` clones)
    /// plus that shard's accepted-word count, so the worker can reserve its
    /// result vector up front (spec.md §4.5 "Setup per worker").
    pub(crate) fn snapshot_shard(&self, shard: usize) -> (TrieNode, Vec<Arc<str>>, usize) {
        let inner = self.inner.read().expect("dictionary lock poisoned");
        (
            inner.shard_roots[shard].deep_copy(),
            inner.words.clone(),
            inner.shard_loads[shard] as usize,
        )
    }

    #[cfg(test)]
    pub(crate) fn word_count(&self) -> usize {
        self.inner.read().unwrap().words.len()
    }
}

/// Accepts `word` (already uppercase ASCII) iff it is >= 3 letters and obeys
/// the `Qu` rule (spec.md §4.2). Assigns the next `word_id`, inserts the
/// letter path into the appropriate shard (collapsing `Qu` to a single `Q`
/// edge), and sets the terminal node's word id.
fn insert_word(inner: &mut Inner, word: &str, shard_count: usize) -> bool {
    let bytes = word.as_bytes();
    if bytes.len() < 3 || !alphabet::is_alpha_ascii(bytes) || !alphabet::obeys_qu_rule(bytes) {
        return false;
    }

    let shard = shard_of(bytes[0], shard_count);
    let mut node = &mut inner.shard_roots[shard];

    let mut i = 0;
    while i < bytes.len() {
        let index = alphabet::letter_to_index(bytes[i]);
        node = node.add_child(index);
        if bytes[i] == b'Q' {
            // Already validated to be followed by 'U'; skip it so one trie
            // edge represents the whole digraph (spec.md §4.2, §9).
            i += 2;
        } else {
            i += 1;
        }
    }

    let id = inner.words.len() as u32;
    node.set_word(id);
    if node.word_id() == Some(id) {
        inner.words.push(Arc::from(word));
        inner.shard_loads[shard] += 1;
    }
    true
}

/// Splits `text` into maximal runs of ASCII alphabetic characters, case
/// folded to upper, per spec.md §6 "Dictionary file".
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_uppercase())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn missing_file_yields_empty_dictionary() {
        let dict = Dictionary::load("/does/not/exist/at/all.txt", 4);
        assert_eq!(dict.word_count(), 0);
    }

    #[test]
    fn try_load_surfaces_open_error() {
        let err = Dictionary::try_load("/does/not/exist/at/all.txt", 4).unwrap_err();
        assert!(matches!(err, Error::DictLoadOpenFailed { .. }));
    }

    #[test]
    fn short_and_qu_violating_words_are_dropped() {
        let f = write_temp("ab\nabc\nqi\nqueue\n");
        let dict = Dictionary::try_load(f.path(), 4).unwrap();
        assert_eq!(dict.word_count(), 2); // "abc" and "queue"
    }

    #[test]
    fn duplicate_word_counted_once() {
        let f = write_temp("cat\ncat\ncat\n");
        let dict = Dictionary::try_load(f.path(), 4).unwrap();
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn free_returns_to_empty() {
        let f = write_temp("cat\ndog\n");
        let mut dict = Dictionary::try_load(f.path(), 4).unwrap();
        assert_eq!(dict.word_count(), 2);
        dict.free();
        assert_eq!(dict.word_count(), 0);
    }

    #[test]
    fn shard_assignment_spreads_rare_letters() {
        // With only 2 shards, X's frequency rank should not collide with
        // every other letter landing in shard 0.
        assert_eq!(shard_of(b'Q', 26) != shard_of(b'A', 26), true);
    }
}
