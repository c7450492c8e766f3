use crate::error::Result;
use crate::roll;
use crate::sampler::Sampler;
use crate::solver::Solver;

/// Roll an expression against a value to beat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    solver: Solver,
    against: i64,
    equal_succeeds: bool,
    alert_on: Vec<i64>,
}

/// What came out of a challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub result: roll::Result,
    /// Watched values that were rolled, one entry per matching die
    pub found: Vec<i64>,
}

impl Challenge {
    pub fn new(expression: &str, against: i64) -> Self {
        Challenge {
            solver: Solver::new(expression),
            against,
            equal_succeeds: false,
            alert_on: Vec::new(),
        }
    }

    /// Also succeed when the total equals the challenge value
    pub fn equal_succeeds(mut self, equal_succeeds: bool) -> Self {
        self.equal_succeeds = equal_succeeds;
        self
    }

    /// Report these values whenever a die shows one of them
    pub fn alert_on(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.alert_on = values.into_iter().collect();
        self
    }

    pub fn roll(&self) -> Result<Outcome> {
        self.roll_with_source(&mut Sampler::from_clock())
    }

    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> Result<Outcome> {
        let result = self.solver.solve_with_source(source)?;
        let total = result.get_total();
        let succeeded = total > self.against || (self.equal_succeeds && total == self.against);
        let found = result
            .get_rolls()
            .iter()
            .filter_map(|roll| self.alert_on.iter().find(|check| *check == roll).copied())
            .collect();
        Ok(Outcome {
            succeeded,
            result,
            found,
        })
    }
}
