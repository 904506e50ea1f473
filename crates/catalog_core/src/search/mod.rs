//! Client-side catalog search.
//!
//! # Responsibility
//! - Filter products by case-insensitive name substring.
//! - Keep result summary wording inside core.

pub mod name_filter;
