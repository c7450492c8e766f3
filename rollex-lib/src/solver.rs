use crate::error::Error;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::prefix::Prefix;
use crate::roll;
use crate::sampler;
use crate::sampler::Sampler;
use crate::validator::Expression;
use rand::Rng;

/// Dice roller over a borrowed random generator
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn range(&mut self, min: i64, max: i64) -> i64 {
        sampler::uniform(&mut *self.generator, min, max)
    }
}

/// Represent a solver and holds the query string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solver(String);

impl Solver {
    pub fn new(input: &str) -> Self {
        Solver(input.to_owned())
    }

    /// The prefix this query would be evaluated with
    pub fn prefix(&self) -> Prefix {
        Prefix::split(&self.0).0
    }

    /// Check the query without rolling, prefix included
    pub fn is_valid(&self) -> bool {
        let (prefix, rest) = Prefix::split(&self.0);
        Expression::parse(rest)
            .map_or(false, |expression| !(prefix.is_extreme() && expression.has_pair()))
    }

    /// Solve the roll expression with a fresh sampler seeded from the clock
    pub fn solve(&self) -> Result<roll::Result> {
        self.solve_with_source(&mut Sampler::from_clock())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<S: Rng>(&self, generator: &mut S) -> Result<roll::Result> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Result> {
        let (prefix, rest) = Prefix::split(&self.0);
        let expression = Expression::parse(rest).map_err(|_| Error::invalid(&self.0))?;
        Evaluator::eval(prefix, &expression, source, &self.0)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
