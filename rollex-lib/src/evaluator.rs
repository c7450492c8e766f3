use crate::dice;
use crate::error::Error;
use crate::error::Result;
use crate::prefix::Prefix;
use crate::roll;
use crate::validator::Expression;
use tracing::debug;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Roll one term, returns its dice and its modified sum
    fn eval_term<S: roll::Source>(
        term: &dice::Term,
        source: &mut S,
        text: &str,
    ) -> Result<(Vec<i64>, i64)> {
        let (rolls, total) = dice::roll(term.spec.count, term.spec.sides, source)?;
        let total = match &term.modifier {
            Some(modifier) => modifier.apply(total).ok_or_else(|| Error::invalid(text))?,
            None => total,
        };
        Ok((rolls, total))
    }

    fn eval_extreme<S: roll::Source>(
        prefix: Prefix,
        term: &dice::Term,
        source: &mut S,
        text: &str,
    ) -> Result<roll::Result> {
        let dice::Spec { count, sides } = term.spec;
        let (rolls, kept) = match prefix {
            Prefix::Max => dice::roll_max(count, sides, source)?,
            _ => dice::roll_min(count, sides, source)?,
        };
        let total = match &term.modifier {
            Some(modifier) => modifier.apply(kept).ok_or_else(|| Error::invalid(text))?,
            None => kept,
        };
        Ok(roll::Result::new(rolls, total))
    }

    /// Compute a whole roll expression, `text` is only used to report errors
    pub(crate) fn eval<S: roll::Source>(
        prefix: Prefix,
        expression: &Expression,
        source: &mut S,
        text: &str,
    ) -> Result<roll::Result> {
        if prefix.is_extreme() && expression.has_pair() {
            return Err(Error::invalid(text));
        }
        if prefix.is_extreme() {
            return Self::eval_extreme(prefix, &expression.primary, source, text);
        }

        let (mut rolls, mut total) = Self::eval_term(&expression.primary, source, text)?;

        // drops only ever look at the primary dice
        let dropped = match prefix {
            Prefix::DropLowest => rolls.iter().copied().min().unwrap_or(0),
            Prefix::DropHighest => rolls.iter().copied().max().unwrap_or(0),
            _ => 0,
        };
        total = total.checked_sub(dropped).ok_or_else(|| Error::invalid(text))?;

        if let Some((operator, secondary)) = &expression.pair {
            let (mut secondary_rolls, secondary_total) = Self::eval_term(secondary, source, text)?;
            total = operator
                .apply(total, secondary_total)
                .ok_or_else(|| Error::invalid(text))?;
            rolls.append(&mut secondary_rolls);
        }

        total = match prefix {
            Prefix::Half => total / 2,
            Prefix::Double => total.checked_mul(2).ok_or_else(|| Error::invalid(text))?,
            _ => total,
        };

        debug!(expression = text, ?rolls, total, "evaluated");
        Ok(roll::Result::new(rolls, total))
    }
}
