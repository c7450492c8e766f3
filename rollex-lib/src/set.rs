use crate::error::Error;
use crate::error::Result;
use crate::roll;
use crate::sampler::Sampler;
use crate::solver::Solver;
use crate::validator;
use std::collections::BTreeMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;
use tracing::debug;

/// Named dice backed by roll expressions, shared between threads
#[derive(Debug, Default)]
pub struct Set {
    name: String,
    dice: RwLock<BTreeMap<String, String>>,
}

impl Set {
    pub fn new(name: &str) -> Self {
        Set {
            name: name.to_owned(),
            dice: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.dice.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.dice.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store an expression under `name`, replacing any previous one
    pub fn add(&self, name: &str, expression: &str) -> Result<()> {
        if !validator::is_valid(expression) {
            return Err(Error::invalid(expression));
        }
        debug!(set = %self.name, name, expression, "dice added");
        self.write().insert(name.to_owned(), expression.to_owned());
        Ok(())
    }

    /// Forget `name`, returns its expression if it was there
    pub fn remove(&self, name: &str) -> Option<String> {
        let removed = self.write().remove(name);
        if removed.is_some() {
            debug!(set = %self.name, name, "dice removed");
        }
        removed
    }

    /// Roll the named dice with a fresh sampler seeded from the clock
    pub fn roll(&self, name: &str) -> Result<roll::Result> {
        self.roll_with_source(name, &mut Sampler::from_clock())
    }

    pub fn roll_with_source<S: roll::Source>(
        &self,
        name: &str,
        source: &mut S,
    ) -> Result<roll::Result> {
        let solver = {
            let dice = self.read();
            if dice.is_empty() {
                return Err(Error::EmptyDiceSet);
            }
            match dice.get(name) {
                Some(expression) => Solver::new(expression),
                None => return Err(Error::DiceNotFound(name.to_owned())),
            }
        };
        solver.solve_with_source(source)
    }

    /// Every `(name, expression)`, sorted by name
    pub fn list(&self) -> Vec<(String, String)> {
        self.read()
            .iter()
            .map(|(name, expression)| (name.clone(), expression.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl std::fmt::Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice = self.read();
        if dice.is_empty() {
            return write!(f, "no dice");
        }
        dice.iter()
            .try_for_each(|(name, expression)| writeln!(f, "{name} {expression}"))
    }
}
