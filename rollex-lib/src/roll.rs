use itertools::Itertools;
use std::collections::HashSet;

/// Keep a roll expression result: every die thrown and the final total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Result {
    rolls: Vec<i64>,
    total: i64,
}

impl Result {
    pub fn new(rolls: Vec<i64>, total: i64) -> Self {
        Result { rolls, total }
    }

    /// Individual dice, primary term first then the paired term
    pub fn get_rolls(&self) -> &[i64] {
        &self.rolls
    }
    pub fn get_total(&self) -> i64 {
        self.total
    }

}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] = {}", self.rolls.iter().format(", "), self.total)
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Return a value in `[min, max]`, `0` when `min > max`
    fn range(&mut self, min: i64, max: i64) -> i64;

    /// Return `count` values in `[min, max]`.
    ///
    /// With `unique` set the count is clamped to the number of distinct values
    /// available and values are drawn until that many distinct ones were seen,
    /// in the order they first showed up. Degenerate ranges never draw: they
    /// yield zeros (`min > max`) or `min` (`min == max`), a single one of them
    /// when `unique` is set.
    fn n_range(&mut self, count: usize, min: i64, max: i64, unique: bool) -> Vec<i64> {
        if count < 1 {
            return Vec::new();
        }
        if min >= max {
            let value = if min > max { 0 } else { min };
            return if unique {
                vec![value]
            } else {
                vec![value; count]
            };
        }
        if !unique {
            return (0..count).map(|_| self.range(min, max)).collect();
        }
        let available = usize::try_from(max.abs_diff(min))
            .map_or(usize::MAX, |span| span.saturating_add(1));
        let count = count.min(available);
        let mut seen = HashSet::with_capacity(count);
        let mut results = Vec::with_capacity(count);
        while results.len() < count {
            let value = self.range(min, max);
            if seen.insert(value) {
                results.push(value);
            }
        }
        results
    }
}
