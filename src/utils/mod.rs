// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Supporting utilities: logging setup and word list loading.

pub mod logging;
pub mod word_list;

pub use word_list::{load_words_file, read_words, WordListStats};
