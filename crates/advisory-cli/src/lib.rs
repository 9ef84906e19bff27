//! advisory-cli
//! ============
//!
//! Command-line interface for the `advisory-core` travel-advisory catalog.
//!
//! This crate primarily provides a binary (`advisory`). The library target
//! exists so that docs.rs renders this overview. See the README for full
//! usage examples.
//!
//! Basic usage:
//!
//! ```text
//! advisory --help
//! advisory --offline countries --search land
//! advisory advisory FR
//! advisory zoom us
//! OPENCAGE_API_KEY=... advisory locate DE
//! ```
//!
//! For programmatic access use the [`advisory-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
