//! Amount module - per-currency input grammars and the amount normalizer.

mod amount_grammar;
mod amount_normalizer;

pub use amount_grammar::{validate_amount, AmountGrammar};
pub use amount_normalizer::{normalize, Magnitude};
