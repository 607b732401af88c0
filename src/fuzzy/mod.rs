// Copyright 2025-present The talpa authors
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching.
//!
//! One algorithm lives here: a bounded-memory variant of Sellers' dynamic
//! program that finds, for a query pattern, the closest substring anywhere in
//! a field. Location-agnostic by construction, which is exactly what a
//! documentation search box wants.

mod sellers;

pub use sellers::{best_match, FieldMatch};
