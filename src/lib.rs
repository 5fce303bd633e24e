//! Minimum-coin change with per-denomination supply limits.
//!
//! Classic change-making assumes an unlimited supply of every denomination.
//! This crate solves the variant where some denominations are scarce: each
//! coin in the table carries an optional supply limit, and the solver finds
//! the fewest coins that sum to the target without overdrawing any of them.

pub mod change;
pub mod error;

pub use change::{greedy_coins, min_coins_with_limits, optimal_coins, CoinSelection};
pub use change::{CoinSpec, CoinTable};
pub use error::{Error, Result};
