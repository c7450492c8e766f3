use rollex_lib::challenge::Challenge;
use rollex_lib::error::Error;
use rollex_lib::roll;
use rollex_lib::sampler::Sampler;
use rollex_lib::set::Set;
use rollex_lib::solver::Solver;
use rollex_lib::template;
use tracing::debug;

const COMMAND_SIGIL: char = '!';
const EQUAL_FLAG: &str = "=";
const SET_NAME: &str = "session";

pub(crate) const COMMANDS: [&str; 7] = ["!add", "!rm", "!list", "!roll", "!check", "!seed", "!help"];

const HELP: &str = "\
**rollex** *dice roller*
`2d6+3` roll an expression, `d20` is `1d20`, `0d4+8` rolls nothing
`1d12+3-1d8` pair two terms
`max:` `min:` `half:` `dub:` `dropL:` `dropH:` prefix a roll
`Hit for {{2d6+1}} damage` roll every braced expression in a text
`!add name expr` `!rm name` `!list` `!roll name` manage named dice
`!check expr against [=] [watch...]` roll a challenge
`!seed n` replay rolls from a seed";

fn err_msg(err: Error) -> String {
    format!("**error** *{}*", err)
}

fn roll_msg(expression: &str, res: &roll::Result) -> String {
    format!(
        "`{}` {:?} *total* **{}**",
        expression,
        res.get_rolls(),
        res.get_total()
    )
}

/// Everything a REPL session keeps between lines
pub(crate) struct Session {
    sampler: Sampler,
    set: Set,
}

impl Session {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let sampler = seed.map(Sampler::new).unwrap_or_default();
        debug!(seed = sampler.seed(), "session started");
        Session {
            sampler,
            set: Set::new(SET_NAME),
        }
    }

    pub(crate) fn dice_names(&self) -> Vec<String> {
        self.set.list().into_iter().map(|(name, _)| name).collect()
    }

    /// Run one input line, returns markdown to print
    pub(crate) fn run(&mut self, line: &str) -> Result<String, String> {
        let line = line.trim();
        if line.starts_with(COMMAND_SIGIL) {
            self.run_command(line)
        } else if line.contains("{{") {
            Ok(template::roll_string_with_source(line, &mut self.sampler))
        } else {
            Solver::new(line)
                .solve_with_source(&mut self.sampler)
                .map(|res| roll_msg(line, &res))
                .map_err(err_msg)
        }
    }

    fn run_command(&mut self, line: &str) -> Result<String, String> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();
        match (command, args.as_slice()) {
            ("!add", [name, expression]) => self
                .set
                .add(name, expression)
                .map(|_| format!("added `{}` *as* `{}`", name, expression))
                .map_err(err_msg),
            ("!rm", [name]) => match self.set.remove(name) {
                Some(expression) => Ok(format!("removed `{}` *was* `{}`", name, expression)),
                None => Err(err_msg(Error::DiceNotFound(name.to_string()))),
            },
            ("!list", []) => Ok(self.set.to_string()),
            ("!roll", [name]) => self
                .set
                .roll_with_source(name, &mut self.sampler)
                .map(|res| roll_msg(name, &res))
                .map_err(err_msg),
            ("!check", [expression, against, rest @ ..]) => {
                self.run_check(expression, against, rest)
            }
            ("!seed", [seed]) => {
                let seed = seed
                    .parse::<u64>()
                    .map_err(|e| format!("**error** *can't parse seed: {}*", e))?;
                self.sampler.reseed(seed);
                Ok(format!("*seed* **{}**", seed))
            }
            ("!help", []) => Ok(HELP.to_owned()),
            _ => Err(format!("**error** *unknown command* `{}`, try `!help`", line)),
        }
    }

    fn run_check(&mut self, expression: &str, against: &str, rest: &[&str]) -> Result<String, String> {
        let against = against
            .parse::<i64>()
            .map_err(|e| format!("**error** *can't parse challenge value: {}*", e))?;
        let (equal, watch) = match rest {
            [EQUAL_FLAG, watch @ ..] => (true, watch),
            watch => (false, watch),
        };
        let watch = watch
            .iter()
            .map(|value| value.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("**error** *can't parse watched value: {}*", e))?;
        let outcome = Challenge::new(expression, against)
            .equal_succeeds(equal)
            .alert_on(watch)
            .roll_with_source(&mut self.sampler)
            .map_err(err_msg)?;
        let mut msg = format!(
            "{} {}",
            roll_msg(expression, &outcome.result),
            if outcome.succeeded {
                "*success*"
            } else {
                "*failure*"
            }
        );
        if !outcome.found.is_empty() {
            msg.push_str(&format!(" *rolled* {:?}", outcome.found));
        }
        Ok(msg)
    }
}
