//! Menu acquisition and preparation.
//!
//! Turns a dining-center menu page into a plain-text transcript and splits
//! it into bounded chunks for the recommendation engine.

mod chunk;
mod fetch;
mod normalize;

pub use chunk::split_transcript;
pub use fetch::{Fetcher, HttpFetcher};
pub use normalize::normalize_markup;
