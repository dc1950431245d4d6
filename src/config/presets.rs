// src/config/presets.rs

//! Built-in configurations for the two poems this tool was first written for.

use clap::ValueEnum;

use crate::config::model::{
    CommandSection, ConfigFile, OutputSection, PhraseSection, RawConfigFile, RunSection,
};
use crate::errors::Result;
use crate::types::{ExitStatusPolicy, QuoteMode, RunnerKind, SeparatorMode};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// English phrase, single words then word pairs, via `phrase_morph`.
    PoemTwo,
    /// Spanish phrase in groups of four, via `words` and the `es_large` dataset.
    PoemEsEnd,
}

impl Preset {
    pub fn raw_config(self) -> RawConfigFile {
        match self {
            Preset::PoemTwo => RawConfigFile {
                phrase: PhraseSection {
                    text: Some("we remember not the word but the sound of the word".to_string()),
                    words: None,
                },
                command: CommandSection {
                    executable: "./target/release/examples/phrase_morph".to_string(),
                    extra_args: Vec::new(),
                    quote: QuoteMode::Auto,
                },
                run: RunSection {
                    group_sizes: vec![1, 2],
                    runner: RunnerKind::default(),
                    exit_status: ExitStatusPolicy::Ignore,
                },
                output: OutputSection {
                    path: "./poem-two.txt".to_string(),
                    trim: false,
                    separator: SeparatorMode::Between,
                    append: false,
                },
            },
            Preset::PoemEsEnd => RawConfigFile {
                phrase: PhraseSection {
                    text: Some("no recordamos el verbo pero el sonido del verbo".to_string()),
                    words: None,
                },
                command: CommandSection {
                    executable: "./target/release/words".to_string(),
                    extra_args: vec!["data/es_large".to_string()],
                    quote: QuoteMode::Auto,
                },
                run: RunSection {
                    group_sizes: vec![4],
                    runner: RunnerKind::default(),
                    exit_status: ExitStatusPolicy::Ignore,
                },
                output: OutputSection {
                    path: "./poem-es-end.txt".to_string(),
                    trim: true,
                    separator: SeparatorMode::AfterEach,
                    append: false,
                },
            },
        }
    }

    pub fn config(self) -> Result<ConfigFile> {
        ConfigFile::try_from(self.raw_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        let two = Preset::PoemTwo.config().unwrap();
        assert_eq!(two.phrase.len(), 11);
        assert_eq!(
            two.group_sizes.iter().map(|k| k.get()).collect::<Vec<_>>(),
            vec![1, 2]
        );

        let es = Preset::PoemEsEnd.config().unwrap();
        assert_eq!(es.phrase.len(), 9);
        assert!(es.output.trim);
        assert_eq!(es.command.extra_args, vec!["data/es_large".to_string()]);
    }
}
