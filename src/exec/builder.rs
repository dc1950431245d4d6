// src/exec/builder.rs

//! Turn chunk pairs into shell command lines.

use std::fmt;

use crate::segment::{Chunk, ChunkPair};

/// One fully rendered invocation of the morph executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphCommand {
    /// Executable path as configured (not checked for existence).
    pub program: String,
    /// Arguments as they appear on the command line (already quoted).
    pub args: Vec<String>,
    line: String,
}

impl MorphCommand {
    /// Build a command from its parts; the line is `program args...`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        let program = program.into();
        let line = std::iter::once(program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        Self { program, args, line }
    }

    /// The string handed to the shell.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for MorphCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Render `exe chunkA chunkB extra_args...`.
///
/// With `quote = true` each joined chunk is wrapped in single quotes so the
/// shell passes it as one argument. Extra arguments are appended verbatim.
pub fn build(
    pair: &ChunkPair<'_>,
    executable: &str,
    extra_args: &[String],
    quote: bool,
) -> MorphCommand {
    let mut args = Vec::with_capacity(2 + extra_args.len());
    args.push(render_chunk(&pair.first, quote));
    args.push(render_chunk(&pair.second, quote));
    args.extend(extra_args.iter().cloned());
    MorphCommand::new(executable, args)
}

fn render_chunk(chunk: &Chunk<'_>, quote: bool) -> String {
    if quote {
        return single_quote(&chunk.joined());
    }
    chunk
        .words()
        .iter()
        .map(|w| {
            if is_shell_safe(w) {
                w.clone()
            } else {
                single_quote(w)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `word` passes through `sh` word splitting unchanged.
fn is_shell_safe(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ',' | ':' | '=' | '+' | '@' | '%'))
}

/// Wrap `s` in single quotes; an embedded `'` becomes `'\''`.
pub fn single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}
