// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of output lines into errors vs. progress noise.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefixes of lines that are progress or advisory text. These
/// lines still reach the log sink but are excluded from error reports.
pub const NOISE_PREFIXES: &[&str] = &[
    "remote: Enumerating objects:",
    "remote: Counting objects:",
    "remote: Compressing objects:",
    "Filtering content:",
    "hint:",
];

// Literal pattern, cannot fail to compile.
#[allow(clippy::expect_used)]
static PROGRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%").expect("valid progress pattern"));

/// Returns true when a line is recognized progress/advisory output that
/// must not be accumulated into an error message.
pub fn is_noise(line: &str) -> bool {
    NOISE_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) || PROGRESS.is_match(line)
}

#[cfg(test)]
#[path = "noise_tests.rs"]
mod tests;
