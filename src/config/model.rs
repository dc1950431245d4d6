// src/config/model.rs

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::segment::Phrase;
use crate::types::{ExitStatusPolicy, QuoteMode, RunnerKind, SeparatorMode};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [phrase]
/// text = "we remember not the word but the sound of the word"
///
/// [command]
/// executable = "./target/release/examples/phrase_morph"
///
/// [run]
/// group_sizes = [1, 2]
///
/// [output]
/// path = "poem-two.txt"
/// separator = "between"
/// ```
///
/// This is the unchecked form; convert it with `ConfigFile::try_from`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub phrase: PhraseSection,

    #[serde(default)]
    pub command: CommandSection,

    #[serde(default)]
    pub run: RunSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[phrase]` section. Exactly one of `text` / `words` must be set.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PhraseSection {
    /// Whitespace-separated phrase.
    #[serde(default)]
    pub text: Option<String>,

    /// Pre-split word list.
    #[serde(default)]
    pub words: Option<Vec<String>>,
}

/// `[command]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CommandSection {
    /// Path of the morph executable. Not checked for existence.
    #[serde(default)]
    pub executable: String,

    /// Fixed arguments appended after the two chunks (e.g. a dataset path).
    #[serde(default)]
    pub extra_args: Vec<String>,

    #[serde(default)]
    pub quote: QuoteMode,
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// One pass per entry, in order. `1` is consecutive-word mode.
    #[serde(default = "default_group_sizes")]
    pub group_sizes: Vec<usize>,

    #[serde(default)]
    pub runner: RunnerKind,

    #[serde(default)]
    pub exit_status: ExitStatusPolicy,
}

fn default_group_sizes() -> Vec<usize> {
    vec![1]
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            group_sizes: default_group_sizes(),
            runner: RunnerKind::default(),
            exit_status: ExitStatusPolicy::default(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputSection {
    /// Poem file to write.
    #[serde(default)]
    pub path: String,

    /// Strip leading/trailing whitespace from each captured block.
    #[serde(default)]
    pub trim: bool,

    #[serde(default)]
    pub separator: SeparatorMode,

    /// Keep existing file contents instead of truncating.
    #[serde(default)]
    pub append: bool,
}

/// Validated configuration handed to the pipeline.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub phrase: Phrase,
    pub group_sizes: Vec<NonZeroUsize>,
    pub command: CommandSection,
    pub runner: RunnerKind,
    pub exit_status: ExitStatusPolicy,
    pub output: OutputSection,
}
