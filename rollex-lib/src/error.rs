/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bad syntax, a prefix that can't apply to a pair, or a number that doesn't fit
    #[error("`{0}` is not a valid roll expression")]
    InvalidExpression(String),
    #[error("invalid operator `{0}`")]
    InvalidOperator(String),
    #[error("invalid number of dice `{0}`")]
    InvalidDieCount(i64),
    #[error("invalid number of sides `{0}`")]
    InvalidDieSides(i64),
    #[error("you do not have any dice in your set")]
    EmptyDiceSet,
    #[error("you do not have any dice named `{0}` in your set")]
    DiceNotFound(String),
}

impl Error {
    pub(crate) fn invalid(expression: &str) -> Self {
        Self::InvalidExpression(expression.to_owned())
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_test() {
        assert_eq!(
            "`heyo` is not a valid roll expression",
            Error::invalid("heyo").to_string()
        );
        assert_eq!("invalid operator `*`", Error::InvalidOperator("*".into()).to_string());
        assert_eq!(
            "you do not have any dice named `axe` in your set",
            Error::DiceNotFound("axe".into()).to_string()
        );
    }
}
