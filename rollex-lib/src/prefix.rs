/// Leading mode token changing how the total is derived from the dice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Prefix {
    #[default]
    None,
    Max,
    Min,
    Half,
    Double,
    DropLowest,
    DropHighest,
}

/// Recognized tokens, in priority order
const TOKENS: [(&str, Prefix); 6] = [
    ("max:", Prefix::Max),
    ("min:", Prefix::Min),
    ("half:", Prefix::Half),
    ("dub:", Prefix::Double),
    ("dropL:", Prefix::DropLowest),
    ("dropH:", Prefix::DropHighest),
];

impl Prefix {
    /// Split off the leading prefix token, at most one is stripped
    pub fn split(text: &str) -> (Prefix, &str) {
        TOKENS
            .iter()
            .find_map(|(token, prefix)| text.strip_prefix(token).map(|rest| (*prefix, rest)))
            .unwrap_or((Prefix::None, text))
    }

    pub fn token(&self) -> Option<&'static str> {
        TOKENS
            .iter()
            .find(|(_, prefix)| prefix == self)
            .map(|(token, _)| *token)
    }

    /// Only defined over a single term
    pub fn is_extreme(&self) -> bool {
        matches!(self, Prefix::Max | Prefix::Min)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token().unwrap_or(""))
    }
}
