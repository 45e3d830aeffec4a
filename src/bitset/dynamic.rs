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

//! Growable bitset, addressed by flat row-major cell index, used as each
//! worker's private visited map over the padded grid.

const BITS: usize = 64;
const ALL: u64 = u64::MAX;

#[derive(Debug, Clone)]
pub struct BitSet {
    data: Vec<u64>,
    len: usize,
}

impl BitSet {
    pub fn new() -> Self {
        BitSet {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Pre-sizes the backing storage to hold at least `len` addressable bits,
    /// all clear. Used to size a worker's visited map to the padded grid once,
    /// up front, instead of growing it one `add` at a time during the DFS.
    pub fn with_len(len: usize) -> Self {
        let words = (len + BITS - 1) / BITS;
        BitSet {
            data: vec![0; words],
            len,
        }
    }

    #[inline]
    fn idx(i: usize) -> (usize, u32) {
        (i / BITS, (i % BITS) as u32)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        let (idx, off) = Self::idx(i);
        match self.data.get(idx) {
            Some(word) => word & (0x8000_0000_0000_0000u64 >> off) > 0,
            None => false,
        }
    }

    #[inline]
    pub fn add(&mut self, i: usize) {
        let (idx, off) = Self::idx(i);
        if idx >= self.data.len() {
            self.data.resize(idx + 1, 0);
        }
        self.len = self.len.max(i + 1);
        self.data[idx] |= 0x8000_0000_0000_0000u64 >> off;
    }

    #[inline]
    pub fn remove(&mut self, i: usize) {
        if i < self.len {
            let (idx, off) = Self::idx(i);
            self.data[idx] &= !(0x8000_0000_0000_0000u64 >> off);
        }
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        for word in self.data.iter_mut() {
            *word = 0;
        }
    }

    pub fn iter_ones(&self) -> IndexIter {
        IndexIter::new(self)
    }
}

pub struct IndexIter<'a> {
    bitset: &'a BitSet,
    idx: usize,
    off: u32,
}

impl<'a> IndexIter<'a> {
    fn new(bitset: &'a BitSet) -> Self {
        IndexIter {
            bitset,
            idx: 0,
            off: 0,
        }
    }
}

impl<'a> Iterator for IndexIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let data = &self.bitset.data;

        while self.idx < data.len() {
            match data[self.idx] & (ALL >> self.off) {
                0 => {
                    self.idx += 1;
                    self.off = 0;
                    continue;
                }
                v => {
                    let lz = v.leading_zeros();
                    let found = self.idx * BITS + lz as usize;
                    if lz == 63 {
                        self.idx += 1;
                        self.off = 0;
                    } else {
                        self.off = lz + 1;
                    }
                    return Some(found);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::BitSet;

    #[test]
    fn can_add() {
        let mut bs = BitSet::new();

        assert_eq!(bs.get(0), false);
        bs.add(0);
        assert_eq!(bs.get(0), true);

        assert_eq!(bs.get(256), false);
        bs.add(256);
        assert_eq!(bs.get(256), true);
    }

    #[test]
    fn can_remove() {
        let mut bs = BitSet::new();

        bs.add(0);
        bs.remove(0);
        assert_eq!(bs.get(0), false);
    }

    #[test]
    fn with_len_preallocates_clear() {
        let bs = BitSet::with_len(200);
        assert_eq!(bs.len(), 200);
        for i in 0..200 {
            assert!(!bs.get(i));
        }
    }

    #[test]
    fn can_iter_indices() {
        let mut bs = BitSet::new();

        bs.add(0);

        {
            let mut iter = bs.iter_ones();
            assert_eq!(iter.next(), Some(0));
            assert_eq!(iter.next(), None);
        }

        bs.add(15);
        bs.add(31);

        {
            let mut iter = bs.iter_ones();
            assert_eq!(iter.next(), Some(0));
            assert_eq!(iter.next(), Some(15));
            assert_eq!(iter.next(), Some(31));
            assert_eq!(iter.next(), None);
        }

        bs.remove(31);
        bs.add(127);
        bs.add(587);

        {
            let mut iter = bs.iter_ones();
            assert_eq!(iter.next(), Some(0));
            assert_eq!(iter.next(), Some(15));
            assert_eq!(iter.next(), Some(127));
            assert_eq!(iter.next(), Some(587));
            assert_eq!(iter.next(), None);
        }
    }
}
