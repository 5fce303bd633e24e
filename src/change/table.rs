//! Denomination tables with per-coin supply limits.

use crate::error::{Error, Result};

/// A single denomination: its face value and how many coins of it exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinSpec {
    /// Face value in the currency's smallest unit.
    pub value: usize,
    /// Maximum number of coins available, or `None` for an unlimited supply.
    pub limit: Option<usize>,
}

impl CoinSpec {
    /// A denomination with a finite supply.
    pub fn limited(value: usize, limit: usize) -> Self {
        Self {
            value,
            limit: Some(limit),
        }
    }

    /// A denomination with an unlimited supply.
    pub fn unlimited(value: usize) -> Self {
        Self { value, limit: None }
    }
}

/// An ordered denomination table used for a single change computation.
///
/// Order matters: when two denominations reach an amount with the same coin
/// count, the solver records the one listed first. The table is immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinTable {
    coins: Vec<CoinSpec>,
}

impl CoinTable {
    /// Builds a table from the given denominations.
    ///
    /// Returns an error if the table is empty, a face value is zero, or a
    /// supply limit is zero.
    pub fn new(coins: Vec<CoinSpec>) -> Result<Self> {
        if coins.is_empty() {
            return Err(Error::InvalidInput(
                "coin table must contain at least one denomination".to_string(),
            ));
        }
        for spec in &coins {
            if spec.value == 0 {
                return Err(Error::InvalidInput(
                    "coin face value must be positive".to_string(),
                ));
            }
            if spec.limit == Some(0) {
                return Err(Error::InvalidInput(format!(
                    "denomination {} has a zero supply limit",
                    spec.value
                )));
            }
        }
        Ok(Self { coins })
    }

    /// The standard table: ten 50¢ coins, twenty-five 20¢ coins, and
    /// unlimited 2¢ and 1¢ coins.
    pub fn standard() -> Self {
        // We know this is valid, no need to handle Result
        Self::new(vec![
            CoinSpec::limited(50, 10),
            CoinSpec::limited(20, 25),
            CoinSpec::unlimited(2),
            CoinSpec::unlimited(1),
        ])
        .unwrap()
    }

    /// The denominations in iteration order.
    pub fn coins(&self) -> &[CoinSpec] {
        &self.coins
    }
}
