//! Minimum-coin change under supply limits.
//!
//! The solver builds the usual minimum-coins table over `0..=amount`, but a
//! limited denomination may only extend a sub-amount while its uses along
//! that sub-amount's recorded optimal path stay below the limit. With scarce
//! large coins the greedy largest-first pick is not always optimal: with ten
//! 50¢, twenty-five 20¢ and unlimited 2¢/1¢ coins, 62¢ is three 20¢ plus one
//! 2¢ (four coins), while grabbing the 50¢ first costs seven.

use log::debug;

use crate::change::table::CoinTable;

/// The coins chosen for one amount, one count per table denomination.
///
/// Counts are kept in the same order as the table the selection was computed
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSelection {
    counts: Vec<(usize, usize)>,
}

impl CoinSelection {
    fn zeroed(table: &CoinTable) -> Self {
        Self {
            counts: table.coins().iter().map(|spec| (spec.value, 0)).collect(),
        }
    }

    /// `(face value, count)` pairs in table order.
    pub fn counts(&self) -> &[(usize, usize)] {
        &self.counts
    }

    /// Number of coins of the given face value, 0 if the table lacks it.
    pub fn count_of(&self, value: usize) -> usize {
        self.counts
            .iter()
            .find(|&&(v, _)| v == value)
            .map_or(0, |&(_, count)| count)
    }

    /// Total number of coins in the selection.
    pub fn total_coins(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// Total face value of the selection.
    pub fn total_value(&self) -> usize {
        self.counts.iter().map(|&(value, count)| value * count).sum()
    }

    /// True if the selection contains no coins at all.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&(_, count)| count == 0)
    }
}

/// Computes the fewest coins that sum to `amount`, honoring each
/// denomination's supply limit.
///
/// For every amount `i` in `1..=amount` each denomination is tried as the
/// last coin on the path to `i`. Before a limited denomination is accepted,
/// its uses along the predecessor's recorded optimal path are tallied and
/// the candidate is rejected once the limit is reached. When several
/// denominations reach `i` with the same coin count, the one listed first
/// in the table is recorded. The tally walks the predecessor chain, so the
/// whole computation is O(amount²) in the worst case; fine for cent-scale
/// amounts.
///
/// Returns the all-zero selection when `amount` is 0 or when no combination
/// of the table's coins reaches `amount` under the limits. A table with an
/// unlimited 1-unit coin always reaches.
///
/// # Examples
///
/// ```
/// use capchange::{min_coins_with_limits, CoinTable};
///
/// let selection = min_coins_with_limits(&CoinTable::standard(), 62);
/// assert_eq!(selection.count_of(20), 3);
/// assert_eq!(selection.count_of(2), 1);
/// assert_eq!(selection.total_coins(), 4);
/// ```
pub fn min_coins_with_limits(table: &CoinTable, amount: usize) -> CoinSelection {
    // best[i] holds the minimum coin count reaching amount i, usize::MAX as
    // the unreachable sentinel.
    let mut best = vec![usize::MAX; amount + 1];
    best[0] = 0;

    // choice[i] = (table index of the last coin, predecessor amount).
    let mut choice: Vec<Option<(usize, usize)>> = vec![None; amount + 1];

    for i in 1..=amount {
        for (idx, spec) in table.coins().iter().enumerate() {
            if spec.value > i {
                continue;
            }
            let prev = i - spec.value;
            if best[prev] == usize::MAX {
                continue;
            }
            if let Some(limit) = spec.limit {
                if uses_on_path(&choice, prev, idx) >= limit {
                    continue;
                }
            }
            // Strict comparison: an earlier denomination keeps the slot on
            // a tie.
            if best[prev] + 1 < best[i] {
                best[i] = best[prev] + 1;
                choice[i] = Some((idx, prev));
            }
        }
    }

    let mut selection = CoinSelection::zeroed(table);

    if best[amount] == usize::MAX {
        debug!("no combination of coins reaches {amount} under the supply limits");
        return selection;
    }

    // Walk the recorded choices back to zero, counting coins as we go.
    let mut at = amount;
    while at > 0 {
        let Some((idx, prev)) = choice[at] else { break };
        selection.counts[idx].1 += 1;
        at = prev;
    }
    selection
}

/// Coins of table index `idx` spent along the recorded path from `at` down
/// to zero.
fn uses_on_path(choice: &[Option<(usize, usize)>], mut at: usize, idx: usize) -> usize {
    let mut used = 0;
    while at > 0 {
        let Some((chosen, prev)) = choice[at] else { break };
        if chosen == idx {
            used += 1;
        }
        at = prev;
    }
    used
}

/// Computes the change for `amount` under the standard table (ten 50¢,
/// twenty-five 20¢, unlimited 2¢ and 1¢).
///
/// # Examples
///
/// ```
/// use capchange::optimal_coins;
///
/// let selection = optimal_coins(123);
/// assert_eq!(selection.count_of(50), 2);
/// assert_eq!(selection.count_of(20), 1);
/// assert_eq!(selection.count_of(2), 1);
/// assert_eq!(selection.count_of(1), 1);
/// ```
pub fn optimal_coins(amount: usize) -> CoinSelection {
    min_coins_with_limits(&CoinTable::standard(), amount)
}

/// Makes change greedily: walk the table in order and at each denomination
/// take as many coins as fit within the remaining amount and the supply
/// limit.
///
/// With a table sorted by descending face value this is the textbook greedy
/// change maker. It may use more coins than [`min_coins_with_limits`] and
/// may fail to reach the amount at all; check [`CoinSelection::total_value`]
/// before trusting the result. Useful as a cheap upper bound and for
/// demonstrating where greedy selection goes wrong.
///
/// # Examples
///
/// ```
/// use capchange::{greedy_coins, CoinTable};
///
/// // Greedy spends the 50¢ coin and pays for it: seven coins where the
/// // optimum needs four.
/// let greedy = greedy_coins(&CoinTable::standard(), 62);
/// assert_eq!(greedy.count_of(50), 1);
/// assert_eq!(greedy.count_of(2), 6);
/// assert_eq!(greedy.total_coins(), 7);
/// ```
pub fn greedy_coins(table: &CoinTable, amount: usize) -> CoinSelection {
    let mut selection = CoinSelection::zeroed(table);
    let mut remaining = amount;
    for (idx, spec) in table.coins().iter().enumerate() {
        let mut take = remaining / spec.value;
        if let Some(limit) = spec.limit {
            take = take.min(limit);
        }
        selection.counts[idx].1 = take;
        remaining -= take * spec.value;
    }
    selection
}
