//! `crimson-numerals` — Sino-Korean numeral words for document totals.

pub mod korean;

pub use korean::to_korean_numeral;
