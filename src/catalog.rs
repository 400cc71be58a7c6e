//! Track set catalog: model types and the music root scanner.
//!
//! Every immediate subdirectory of the music root is one track set. The
//! catalog is built once and never mutated afterwards; only the enabled
//! state of each set is re-evaluated, on demand, against the filesystem.

mod model;
mod scan;

pub use model::*;

#[cfg(test)]
mod tests;
