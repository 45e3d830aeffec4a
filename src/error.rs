//! Internal error taxonomy (spec.md §7 / SPEC_FULL.md §4.8). None of these
//! propagate across the spec-mandated public entry points — `Dictionary::load`
//! and `Solver::find_words` swallow them down to an empty store / empty
//! result, as the C++ original does. They exist for logging and for the
//! `try_*` variants that want to surface the failure to a caller who asks.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open dictionary at {}: {source}", path.display())]
    DictLoadOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("board contains a non-letter byte at index {at}")]
    BoardInvalidChar { at: usize },

    #[error("board is null or has a zero dimension")]
    NullOrEmptyBoard,
}
