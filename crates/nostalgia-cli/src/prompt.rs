//! Line input with command hints.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// Completion and hints for the short commands each screen accepts.
#[derive(Clone, Default)]
pub struct PromptHelper {
    commands: Vec<String>,
}

impl PromptHelper {
    pub fn new(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn is_command(&self, line: &str) -> bool {
        self.commands.iter().any(|cmd| cmd == line)
    }
}

impl Helper for PromptHelper {}

impl Completer for PromptHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for PromptHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for PromptHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for PromptHelper {}

pub type Prompt = Editor<PromptHelper, DefaultHistory>;

pub fn editor(helper: PromptHelper) -> Result<Prompt> {
    let mut editor: Prompt = Editor::new()?;
    editor.set_helper(Some(helper));
    Ok(editor)
}

/// Reads one line. `None` on Ctrl-C or end of input.
pub fn read(editor: &mut Prompt, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                let _ = editor.add_history_entry(line.as_str());
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Swaps the hinted commands for the next screen.
pub fn set_commands(editor: &mut Prompt, commands: &[&str]) {
    editor.set_helper(Some(PromptHelper::new(commands)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_command_matches_whole_line() {
        let helper = PromptHelper::new(&["n", "/saved"]);
        assert!(helper.is_command("/saved"));
        assert!(!helper.is_command("/sav"));
    }
}
