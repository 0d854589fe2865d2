//! compare command - Order two version strings numerically

use std::cmp::Ordering;

use anyhow::{Context as _, Result};

use crate::core::version;

/// Compare two version strings and print `<`, `=`, or `>`.
pub fn compare(lhs: &str, rhs: &str) -> Result<()> {
    let ordering = version::compare(lhs, rhs).context("Failed to compare versions")?;

    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{}", symbol);
    Ok(())
}
