use crate::error::Error;
use crate::error::Result;
use crate::roll::Source;
use std::str::FromStr;

/// Operator joining a modifier or a paired term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Checked `lhs op rhs`
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            other => Err(Error::InvalidOperator(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
        }
    }
}

/// Flat amount added to or subtracted from a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub operator: Operator,
    pub value: i64,
}

impl Modifier {
    pub fn apply(&self, total: i64) -> Option<i64> {
        self.operator.apply(total, self.value)
    }
}

/// How many dice with how many sides, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    pub count: i64,
    pub sides: i64,
}

/// One `count d sides [modifier]` unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub spec: Spec,
    pub modifier: Option<Modifier>,
}

/// Most dice thrown by a single term, anything above would only exhaust memory
pub const MAX_DICE_AMOUNT: i64 = 100_000;

fn check(count: i64, sides: i64) -> Result<usize> {
    if sides < 0 {
        return Err(Error::InvalidDieSides(sides));
    }
    if count > MAX_DICE_AMOUNT {
        return Err(Error::InvalidDieCount(count));
    }
    usize::try_from(count).map_err(|_| Error::InvalidDieCount(count))
}

fn sum(rolls: &[i64]) -> Option<i64> {
    rolls.iter().try_fold(0i64, |acc, roll| acc.checked_add(*roll))
}

fn overflow(count: i64, sides: i64) -> Error {
    Error::InvalidExpression(format!("{count}d{sides}"))
}

/// Roll `count` dice of `sides` sides, returns the dice and their sum
pub fn roll<S: Source>(count: i64, sides: i64, source: &mut S) -> Result<(Vec<i64>, i64)> {
    let amount = check(count, sides)?;
    let rolls = source.n_range(amount, 1, sides, false);
    let total = sum(&rolls).ok_or_else(|| overflow(count, sides))?;
    Ok((rolls, total))
}

/// Roll then apply `operator value`, returns the dice, their sum and the modified sum
pub fn roll_and_modify<S: Source>(
    count: i64,
    sides: i64,
    operator: &str,
    value: i64,
    source: &mut S,
) -> Result<(Vec<i64>, i64, i64)> {
    check(count, sides)?;
    let operator = operator.parse::<Operator>()?;
    let (rolls, total) = roll(count, sides, source)?;
    let modified = operator
        .apply(total, value)
        .ok_or_else(|| overflow(count, sides))?;
    Ok((rolls, total, modified))
}

/// Apply `operator amount` to an already rolled value
pub fn modify(value: i64, operator: &str, amount: i64) -> Result<i64> {
    operator
        .parse::<Operator>()?
        .apply(value, amount)
        .ok_or_else(|| Error::InvalidExpression(format!("{value}{operator}{amount}")))
}

/// Roll and keep the highest die, `0` when nothing was rolled
pub fn roll_max<S: Source>(count: i64, sides: i64, source: &mut S) -> Result<(Vec<i64>, i64)> {
    let (rolls, _) = roll(count, sides, source)?;
    let highest = rolls.iter().copied().max().unwrap_or(0);
    Ok((rolls, highest))
}

/// Roll and keep the lowest die, `0` when nothing was rolled
pub fn roll_min<S: Source>(count: i64, sides: i64, source: &mut S) -> Result<(Vec<i64>, i64)> {
    let (rolls, _) = roll(count, sides, source)?;
    let lowest = rolls.iter().copied().min().unwrap_or(0);
    Ok((rolls, lowest))
}
