//! Core library for devmirror
//!
//! This crate implements the **Functional Core** of the devmirror application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The devmirror project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`devmirror_core`** (this crate): Pure transformation functions with zero I/O
//! - **`devmirror`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`article`]: The in-memory article model and front-matter codec
//! - [`markdown`]: Image reference matching and relative URL rewriting
//! - [`path`]: Path normalization helpers
//! - [`repo`]: Repository references and shorthand parsing
//! - [`tags`]: Tag line parsing and validation
//! - [`scale`]: Human-readable number formatting
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing articles and matches
//! - **Transformation functions**: Pure functions over owned inputs
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use devmirror_core::article::Article;
//! use devmirror_core::markdown::update_relative_image_urls;
//! use devmirror_core::repo::Repository;
//!
//! let article = Article {
//!     file: "posts/hello.md".into(),
//!     data: Default::default(),
//!     content: "![intro](images/intro.png)".into(),
//! };
//!
//! let repo = Repository { user: "me".into(), name: "blog".into() };
//! let updated = update_relative_image_urls(article, &repo, "main");
//!
//! assert!(updated.content.contains("raw.githubusercontent.com"));
//! ```

pub mod article;
pub mod markdown;
pub mod path;
pub mod repo;
pub mod scale;
pub mod tags;
