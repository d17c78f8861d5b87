//! Resolves what the user is typing at the end of a line and offers
//! candidates for it.
//!
//! Only the live argument is ever completed. A line that ends in unquoted
//! whitespace has no live argument, so completion starts a fresh one.

use crate::arg::{parse, Arg};
use crate::trie::Trie;
use crate::utils::longest_common_prefix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub args: Vec<Arg>,
    /// Text of the live argument, empty when a new one is about to start.
    pub word: String,
    /// Index of the live argument among `args`.
    pub position: usize,
}

impl Context {
    pub fn of (line: &str) -> Self {
        let args = parse(line);

        match args.last() {
            Some(last) if last.is_live() => {
                let word = last.text.clone();
                let position = args.len() - 1;
                Self { args, word, position }
            }
            _ => {
                let position = args.len();
                Self { args, word: String::new(), position }
            }
        }
    }

    pub fn live (&self) -> Option<&Arg> {
        self.args.get(self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub word: String,
    pub candidates: Vec<String>,
    pub common: String,
}

impl Completion {
    /// Text to append to the line to reach the common prefix.
    pub fn insertion (&self) -> &str {
        self.common.get(self.word.len()..).unwrap_or("")
    }

    pub fn is_unique (&self) -> bool {
        self.candidates.len() == 1
    }
}

#[derive(Debug, Default)]
pub struct Completer {
    commands: Trie,
    flags: Trie,
}

impl Completer {
    pub fn new () -> Self {
        Self::default()
    }

    pub fn add_commands <T>(&mut self, words: &[T])
    where
        T: AsRef<str>
    {
        for word in words {
            self.commands.insert(word.as_ref());
        }
    }

    /// Registers flag names, without their leading dashes.
    pub fn add_flags <T>(&mut self, names: &[T])
    where
        T: AsRef<str>
    {
        for name in names {
            self.flags.insert(name.as_ref().trim_start_matches('-'));
        }
    }

    pub fn complete (&self, line: &str) -> Completion {
        let context = Context::of(line);

        let candidates: Vec<String> = match context.live() {
            // an empty line would offer every command there is
            _ if context.position == 0 && context.word.is_empty() => Vec::new(),
            _ if context.position == 0 => {
                self.commands
                    .with_prefix(&context.word)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }
            Some(arg) if arg.flag.has_flag() && !arg.flag.has_value() => {
                let dashes = arg.flag.dashes();
                self.flags
                    .with_prefix(arg.flag.name())
                    .into_iter()
                    .map(|name| format!("{dashes}{name}"))
                    .collect()
            }
            _ => Vec::new(),
        };

        log::debug!("{} candidates for {:?} at {}", candidates.len(), context.word, context.position);

        let common = longest_common_prefix(&context.word, &candidates);
        Completion { word: context.word, candidates, common }
    }
}
