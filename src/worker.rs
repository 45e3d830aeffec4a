//! Per-shard DFS traversal (spec.md §4.5), grounded on the teacher's
//! `descend`/`descend_radix` and the original `TraverseBoard`.

use std::sync::Arc;

use crate::bitset::BitSet;
use crate::board::Board;
use crate::score::score_for_length;
use crate::trie::TrieNode;

pub struct WorkerOutput {
    pub word_ids: Vec<u32>,
    pub score: u32,
}

/// Runs one shard's search over the whole board. `root` is the worker's
/// private deep copy (already detached from the shared dictionary lock by
/// the caller); `words` is the shared, clone-cheap word list used only to
/// look up lengths for scoring; `shard_word_count` is this shard's accepted-
/// word count, an upper bound on how many ids `found` can ever hold, used to
/// reserve it up front (spec.md §4.5 "Setup per worker").
pub fn run_shard(
    mut root: TrieNode,
    board: &Board,
    words: &[Arc<str>],
    shard_word_count: usize,
) -> WorkerOutput {
    let mut visited = BitSet::with_len(board.len());
    let mut found = Vec::with_capacity(shard_word_count);

    for start in 0..board.len() {
        if board.is_padding(start) {
            continue;
        }
        let letter = board.tile_at(start);
        if !root.has_child(letter) {
            continue;
        }

        visited.add(start);
        // Safety: `has_child` just confirmed this child exists.
        let child_slot = take_child(&mut root, letter);
        let mut child = child_slot;
        traverse(start, &mut child, board, &mut visited, &mut found);
        put_child(&mut root, letter, child);
        visited.remove(start);
    }

    found.sort_unstable();

    let mut score = 0u32;
    for &id in &found {
        score += score_for_length(words[id as usize].len());
    }

    WorkerOutput {
        word_ids: found,
        score,
    }
}

/// Recursive DFS step (spec.md §4.5 "Recursive step"). `node` is mutated in
/// place (pruning, word-id clearing): safe because it is exclusively owned
/// by this worker for the duration of the query.
fn traverse(pos: usize, node: &mut TrieNode, board: &Board, visited: &mut BitSet, found: &mut Vec<u32>) {
    for neighbor in board.neighbors(pos) {
        if board.is_padding(neighbor) {
            continue;
        }
        let letter = board.tile_at(neighbor);
        if !node.has_child(letter) {
            continue;
        }
        if visited.get(neighbor) {
            continue;
        }

        visited.add(neighbor);
        let mut child = take_child(node, letter);
        traverse(neighbor, &mut child, board, visited, found);
        let is_void = child.is_void();
        put_child(node, letter, child);
        visited.remove(neighbor);

        if is_void {
            node.remove_child(letter);
            if !node.has_children() {
                break;
            }
        }
    }

    if let Some(id) = node.word_id() {
        found.push(id);
        node.clear_word();
    }
}

/// Temporarily detaches the child at `letter` so it can be recursed into
/// via an owned `&mut TrieNode` without holding two mutable borrows of
/// `node` at once; `put_child` reattaches it afterward. `node.has_child`
/// must have already confirmed the slot is populated.
fn take_child(node: &mut TrieNode, letter: u8) -> TrieNode {
    std::mem::take(node.child_mut(letter).expect("child checked present"))
}

fn put_child(node: &mut TrieNode, letter: u8, child: TrieNode) {
    *node.child_mut(letter).expect("child slot still reserved") = child;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn finds_simple_word() {
        let dict = Dictionary::empty(1);
        // Build directly through the public load path using a temp file,
        // since Dictionary has no direct insert API outside load/try_load.
        let f = {
            use std::io::Write;
            let mut f = tempfile::NamedTempFile::new().unwrap();
            writeln!(f, "cat").unwrap();
            f
        };
        let dict = Dictionary::try_load(f.path(), 1).unwrap_or(dict);

        let board = Board::prepare(b"CAT", 3, 1).unwrap();
        let (root, words, load) = dict.snapshot_shard(0);
        let out = run_shard(root, &board, &words, load);
        assert_eq!(out.word_ids.len(), 1);
        assert_eq!(&*words[out.word_ids[0] as usize], "CAT");
        assert_eq!(out.score, 1);
    }
}
