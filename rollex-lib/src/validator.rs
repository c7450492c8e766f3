use crate::dice;
use crate::error::Error;
use crate::error::Result;
use crate::parser::Parser;
use crate::parser::Rule;
use pest::iterators::Pair;
use tracing::debug;

/// A validated roll expression: a primary term and an optional paired term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub primary: dice::Term,
    pub pair: Option<(dice::Operator, dice::Term)>,
}

impl Expression {
    /// Parse an expression that carries no prefix
    pub fn parse(text: &str) -> Result<Self> {
        let pairs = <Parser as pest::Parser<Rule>>::parse(Rule::expression, text).map_err(|e| {
            debug!(expression = text, "rejected: {e}");
            Error::invalid(text)
        })?;
        let mut primary = None;
        let mut pair = None;
        for inner in pairs {
            match inner.as_rule() {
                Rule::term => primary = Some(Self::extract_term(inner, text)?),
                Rule::pair => {
                    let mut inner = inner.into_inner();
                    let (operator, term) = inner
                        .next()
                        .zip(inner.next())
                        .ok_or_else(|| Error::invalid(text))?;
                    pair = Some((
                        Parser::extract_operator(operator),
                        Self::extract_term(term, text)?,
                    ));
                }
                _ => (),
            }
        }
        let primary = primary.ok_or_else(|| Error::invalid(text))?;
        Ok(Expression { primary, pair })
    }

    fn extract_term(term: Pair<Rule>, text: &str) -> Result<dice::Term> {
        let mut count = 1;
        let mut sides = 0;
        let mut modifier = None;
        for inner in term.into_inner() {
            match inner.as_rule() {
                Rule::count => count = Parser::extract_number(&inner, 1, text)?,
                Rule::sides => sides = Parser::extract_number(&inner, 0, text)?,
                Rule::modifier => {
                    let mut inner = inner.into_inner();
                    let (operator, value) = inner
                        .next()
                        .zip(inner.next())
                        .ok_or_else(|| Error::invalid(text))?;
                    modifier = Some(dice::Modifier {
                        operator: Parser::extract_operator(operator),
                        value: Parser::extract_number(&value, 0, text)?,
                    });
                }
                _ => (),
            }
        }
        Ok(dice::Term {
            spec: dice::Spec { count, sides },
            modifier,
        })
    }

    pub fn has_pair(&self) -> bool {
        self.pair.is_some()
    }
}

/// Check that the whole text is a roll expression
pub fn is_valid(text: &str) -> bool {
    <Parser as pest::Parser<Rule>>::parse(Rule::expression, text).is_ok()
}

/// Count the roll expressions found anywhere in free text
pub fn count_occurrences(text: &str) -> usize {
    Parser::find_all(Rule::scan, text, usize::MAX).len()
}
