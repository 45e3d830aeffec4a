/* Copyright 2017 Joel Pedraza
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *
 * 1. Redistributions of source code must retain the above copyright notice,
 *    this list of conditions and the following disclaimer.
 *
 * 2. Redistributions in binary form must reproduce the above copyright notice,
 *    this list of conditions and the following disclaimer in the documentation
 *    and/or other materials provided with the distribution.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
 * ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
 * LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
 * CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
 * SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
 * CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
 * ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
 * POSSIBILITY OF SUCH DAMAGE.
 */

//! A radix-26 trie node (spec.md §3, §4.4). One shard root forms one tree;
//! the dictionary store owns `S` of them. Workers deep-copy a root and mutate
//! their private copy freely (pruning exhausted sub-tries) during traversal.

use crate::alphabet::ALPHABET_SIZE;
use crate::bitset::BitSet32;

type Child = Option<Box<TrieNode>>;

#[derive(Debug)]
pub struct TrieNode {
    word_id: Option<u32>,
    children: [Child; ALPHABET_SIZE],
    child_mask: BitSet32,
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode {
            word_id: None,
            children: Default::default(),
            child_mask: BitSet32::new(),
        }
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.child_mask.is_empty()
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.word_id.is_some()
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        !self.has_children() && !self.is_word()
    }

    #[inline]
    pub fn word_id(&self) -> Option<u32> {
        self.word_id
    }

    /// Clears the terminal marker so the word is not re-emitted from another
    /// start path in the same query (spec.md §4.5 step 3).
    #[inline]
    pub fn clear_word(&mut self) {
        self.word_id = None;
    }

    /// True for any letter index with a populated child slot; always false
    /// for the padding sentinel, since its bit position (>= 26) falls outside
    /// the 26-bit mask (spec.md §4.4).
    #[inline]
    pub fn has_child(&self, index: u8) -> bool {
        (index as usize) < ALPHABET_SIZE && self.child_mask.get(index as u32)
    }

    #[inline]
    pub fn child(&self, index: u8) -> Option<&TrieNode> {
        if self.has_child(index) {
            self.children[index as usize].as_deref()
        } else {
            None
        }
    }

    #[inline]
    pub fn child_mut(&mut self, index: u8) -> Option<&mut TrieNode> {
        if self.has_child(index) {
            self.children[index as usize].as_deref_mut()
        } else {
            None
        }
    }

    /// Clears the mask bit for `index`. The slot pointer is left in place:
    /// safe, because the caller is always a private per-worker copy that is
    /// discarded wholesale at the end of the query (spec.md §4.4).
    #[inline]
    pub fn remove_child(&mut self, index: u8) {
        self.child_mask.remove(index as u32);
    }

    /// Returns the existing child for `index`, creating it first if absent.
    /// Only ever called while building the dictionary.
    pub(crate) fn add_child(&mut self, index: u8) -> &mut TrieNode {
        let idx = index as usize;
        if self.children[idx].is_none() {
            self.child_mask.add(index as u32);
            self.children[idx] = Some(Box::new(TrieNode::new()));
        }
        self.children[idx].as_deref_mut().unwrap()
    }

    pub(crate) fn set_word(&mut self, id: u32) {
        // A second insertion of the same full word leaves the id unchanged,
        // per spec.md §4.2 ("duplicate full words are accepted at most once").
        if self.word_id.is_none() {
            self.word_id = Some(id);
        }
    }

    /// Recursively clones this node and every reachable descendant into a
    /// freshly allocated tree, structurally identical but reachable only via
    /// the returned root (spec.md §4.4 `deep_copy`).
    pub fn deep_copy(&self) -> TrieNode {
        let mut node = TrieNode {
            word_id: self.word_id,
            children: Default::default(),
            child_mask: self.child_mask,
        };
        for i in self.child_mask.iter_ones() {
            let child = self.children[i as usize]
                .as_ref()
                .expect("mask bit set implies populated slot");
            node.children[i as usize] = Some(Box::new(child.deep_copy()));
        }
        node
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_node_is_void() {
        let node = TrieNode::new();
        assert!(node.is_void());
        assert!(!node.is_word());
        assert!(!node.has_children());
    }

    #[test]
    fn add_child_then_has_child() {
        let mut node = TrieNode::new();
        assert!(!node.has_child(3));
        node.add_child(3);
        assert!(node.has_child(3));
        assert!(node.has_children());
        assert!(node.is_void()); // not a word yet
    }

    #[test]
    fn set_word_keeps_first_id() {
        let mut node = TrieNode::new();
        node.set_word(5);
        node.set_word(9);
        assert_eq!(node.word_id(), Some(5));
    }

    #[test]
    fn remove_child_clears_mask_bit_only() {
        let mut node = TrieNode::new();
        node.add_child(0);
        assert!(node.has_child(0));
        node.remove_child(0);
        assert!(!node.has_child(0));
        // the slot itself is still allocated, just unreachable via has_child/child
        assert!(node.children[0].is_some());
    }

    #[test]
    fn padding_sentinel_never_has_child() {
        let mut node = TrieNode::new();
        for i in 0..26u8 {
            node.add_child(i);
        }
        assert!(!node.has_child(crate::alphabet::PADDING_TILE));
    }

    #[test]
    fn deep_copy_is_independent() {
        let mut root = TrieNode::new();
        root.add_child(0).set_word(0);

        let mut copy = root.deep_copy();
        copy.remove_child(0);

        assert!(root.has_child(0));
        assert!(!copy.has_child(0));
    }
}
