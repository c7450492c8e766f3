use crate::dice;
use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::ops::Range;

/// Pest parser
#[derive(Parser)]
#[grammar = "dice.pest"]
pub struct Parser;

impl Parser {
    /// Byte ranges of the first `limit` matches collected by a scanning rule
    pub fn find_all(scan_rule: Rule, text: &str, limit: usize) -> Vec<Range<usize>> {
        <Self as pest::Parser<Rule>>::parse(scan_rule, text).map_or_else(
            |_| Vec::new(),
            |pairs| {
                pairs
                    .filter(|pair| matches!(pair.as_rule(), Rule::occurrence | Rule::braced))
                    .take(limit)
                    .map(|pair| {
                        let span = pair.as_span();
                        span.start()..span.end()
                    })
                    .collect()
            },
        )
    }

    pub fn extract_operator(pair: Pair<Rule>) -> dice::Operator {
        match pair.as_rule() {
            Rule::sub => dice::Operator::Subtract,
            _ => dice::Operator::Add,
        }
    }

    /// Parse a digit token, an empty token gives `empty`
    pub fn extract_number(pair: &Pair<Rule>, empty: i64, expression: &str) -> Result<i64> {
        match pair.as_str() {
            "" => Ok(empty),
            digits => digits.parse::<i64>().map_err(|_| Error::invalid(expression)),
        }
    }
}
