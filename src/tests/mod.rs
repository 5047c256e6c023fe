// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level test modules.
//!
//! Unit tests live next to the code they cover; the modules here exercise
//! behavior that spans components, plus the property-based tests for the
//! tree.

pub mod config_tests;

pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
