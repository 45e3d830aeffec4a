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

//! A Boggle-style word-search solver: given a rectangular grid of letter
//! tiles and a dictionary, enumerates every distinct word reachable by an
//! 8-connected, non-repeating path of tiles, plus its aggregate score.
//!
//! The solver is a sharded prefix trie + per-shard DFS + a rayon-driven
//! coordinator that fans workers out across shards and merges their word
//! lists (see [`dictionary`], [`worker`], [`solver`]).
//!
//! ```no_run
//! use boggle_solver::{Dictionary, Solver, SolverConfig};
//!
//! let config = SolverConfig::default();
//! let dictionary = Dictionary::load("wordlists/enable1.txt", config.shard_count);
//! let solver = Solver::new(dictionary);
//! let result = solver.find_words(b"DZXEAIQUT", 3, 3);
//! println!("{} words, score {}", result.count(), result.score);
//! ```

mod alphabet;
mod bitset;
mod board;
mod config;
mod dictionary;
mod error;
mod result;
mod score;
mod solver;
mod trie;
mod worker;

pub use config::SolverConfig;
pub use dictionary::Dictionary;
pub use error::Error;
pub use result::FindResult;
pub use score::score_for_length;
pub use solver::Solver;
