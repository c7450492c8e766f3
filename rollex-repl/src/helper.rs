use colored::Colorize;
use rollex_lib::prefix::Prefix;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::highlight::MatchingBracketHighlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use rustyline_derive::Validator;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

const PREFIXES: [Prefix; 6] = [
    Prefix::Max,
    Prefix::Min,
    Prefix::Half,
    Prefix::Double,
    Prefix::DropLowest,
    Prefix::DropHighest,
];

#[derive(Helper, Validator)]
pub(crate) struct ReplHelper {
    pub(crate) highlighter: MatchingBracketHighlighter,
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
    /// Named dice of the session, refreshed after every line
    pub(crate) names: Vec<String>,
}

const ROLL_COMMAND: &str = "!roll ";

impl ReplHelper {
    /// Command word or roll prefix the line starts with
    fn head(line: &str) -> Option<&str> {
        if line.starts_with('!') {
            line.split_whitespace().next()
        } else {
            PREFIXES
                .iter()
                .filter_map(|prefix| prefix.token())
                .find(|token| line.starts_with(token))
        }
    }

    /// Rest of the first dice name completing `!roll <partial>`
    fn name_hint(&self, line: &str, pos: usize) -> Option<String> {
        let partial = line.strip_prefix(ROLL_COMMAND)?;
        if pos < line.len() || partial.is_empty() {
            return None;
        }
        self.names
            .iter()
            .find(|name| name.len() > partial.len() && name.starts_with(partial))
            .map(|name| name[partial.len()..].to_owned())
    }

    fn candidates(&self, line: &str, word: &str) -> Vec<String> {
        let words = if line.starts_with('!') && line.len() > word.len() {
            self.names.clone()
        } else if word.starts_with('!') {
            crate::command::COMMANDS.iter().map(|c| c.to_string()).collect()
        } else {
            PREFIXES.iter().map(|p| p.to_string()).collect()
        };
        words
            .into_iter()
            .filter(|candidate| candidate.starts_with(word))
            .collect()
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let candidates = self
            .candidates(&line[..pos], &line[start..pos])
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.name_hint(line, pos)
            .or_else(|| self.hinter.hint(line, pos, ctx))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        match Self::head(line) {
            Some(head) => Owned(format!("{}{}", head.cyan().bold(), &line[head.len()..])),
            None => self.highlighter.highlight(line, pos),
        }
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        Self::head(line).is_some() || self.highlighter.highlight_char(line, pos)
    }
}
