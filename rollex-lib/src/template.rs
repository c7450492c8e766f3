use crate::parser::Parser;
use crate::parser::Rule;
use crate::roll;
use crate::sampler::Sampler;
use crate::solver::Solver;
use tracing::debug;

/// Most substitutions done in a single text
pub const MAX_SUBSTITUTIONS: usize = 99;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{expression}}` in `text` with its rolled total
pub fn roll_string(text: &str) -> String {
    roll_string_with_source(text, &mut Sampler::from_clock())
}

/// Same as [`roll_string`] with the provided source
pub fn roll_string_with_source<S: roll::Source>(text: &str, source: &mut S) -> String {
    let found = Parser::find_all(Rule::braced_scan, text, MAX_SUBSTITUTIONS);
    if found.is_empty() {
        return text.to_owned();
    }
    let mut rolled = String::with_capacity(text.len());
    let mut last = 0;
    for range in found {
        rolled.push_str(&text[last..range.start]);
        let original = &text[range.clone()];
        let inner = original
            .trim_start_matches(OPEN)
            .trim_end_matches(CLOSE)
            .trim();
        match Solver::new(inner).solve_with_source(source) {
            Ok(res) => rolled.push_str(&res.get_total().to_string()),
            Err(error) => {
                debug!(expression = inner, %error, "left unchanged");
                rolled.push_str(original);
            }
        }
        last = range.end;
    }
    rolled.push_str(&text[last..]);
    rolled
}
