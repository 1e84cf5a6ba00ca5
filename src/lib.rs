//! `mctools` is a small toolkit for reading MCNP mctal tally results
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use mctools_mctal as mctal;

#[doc(inline)]
pub use mctools_utils as utils;
