// src/config/validate.rs

use std::num::NonZeroUsize;

use crate::config::model::{ConfigFile, PhraseSection, RawConfigFile};
use crate::errors::{MorphError, Result};
use crate::segment::Phrase;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = MorphError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let phrase = resolve_phrase(&raw.phrase)?;
        validate_command(&raw)?;
        let group_sizes = validate_group_sizes(&raw.run.group_sizes)?;
        validate_output(&raw)?;

        Ok(ConfigFile {
            phrase,
            group_sizes,
            command: raw.command,
            runner: raw.run.runner,
            exit_status: raw.run.exit_status,
            output: raw.output,
        })
    }
}

fn resolve_phrase(section: &PhraseSection) -> Result<Phrase> {
    match (&section.text, &section.words) {
        (Some(text), None) => Ok(Phrase::parse(text)),
        (None, Some(words)) => {
            if let Some(bad) = words
                .iter()
                .find(|w| w.is_empty() || w.contains(char::is_whitespace))
            {
                return Err(MorphError::ConfigError(format!(
                    "[phrase].words entries must be single non-empty words (got {bad:?})"
                )));
            }
            Ok(Phrase::from_words(words.iter().cloned()))
        }
        (Some(_), Some(_)) => Err(MorphError::ConfigError(
            "[phrase] must set only one of `text` or `words`".to_string(),
        )),
        (None, None) => Err(MorphError::ConfigError(
            "[phrase] must set `text` or `words`".to_string(),
        )),
    }
}

fn validate_command(cfg: &RawConfigFile) -> Result<()> {
    if cfg.command.executable.trim().is_empty() {
        return Err(MorphError::ConfigError(
            "[command].executable must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_group_sizes(sizes: &[usize]) -> Result<Vec<NonZeroUsize>> {
    if sizes.is_empty() {
        return Err(MorphError::ConfigError(
            "[run].group_sizes must contain at least one size".to_string(),
        ));
    }

    sizes
        .iter()
        .map(|&k| {
            NonZeroUsize::new(k).ok_or_else(|| {
                MorphError::ConfigError("[run].group_sizes entries must be >= 1 (got 0)".to_string())
            })
        })
        .collect()
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    if cfg.output.path.trim().is_empty() {
        return Err(MorphError::ConfigError(
            "[output].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{CommandSection, OutputSection, RunSection};

    fn raw(text: &str, sizes: Vec<usize>) -> RawConfigFile {
        RawConfigFile {
            phrase: PhraseSection {
                text: Some(text.to_string()),
                words: None,
            },
            command: CommandSection {
                executable: "morph".to_string(),
                ..CommandSection::default()
            },
            run: RunSection {
                group_sizes: sizes,
                ..RunSection::default()
            },
            output: OutputSection {
                path: "poem.txt".to_string(),
                ..OutputSection::default()
            },
        }
    }

    #[test]
    fn empty_phrase_is_allowed() {
        let cfg = ConfigFile::try_from(raw("", vec![2])).unwrap();
        assert!(cfg.phrase.is_empty());
        assert_eq!(cfg.group_sizes, vec![NonZeroUsize::new(2).unwrap()]);
    }

    #[test]
    fn zero_group_size_is_rejected() {
        let err = ConfigFile::try_from(raw("a b", vec![2, 0])).unwrap_err();
        assert!(matches!(err, MorphError::ConfigError(msg) if msg.contains(">= 1")));
    }

    #[test]
    fn empty_group_sizes_are_rejected() {
        assert!(ConfigFile::try_from(raw("a b", vec![])).is_err());
    }

    #[test]
    fn text_and_words_are_exclusive() {
        let mut cfg = raw("a b", vec![1]);
        cfg.phrase.words = Some(vec!["a".to_string()]);
        assert!(ConfigFile::try_from(cfg).is_err());
    }

    #[test]
    fn words_must_not_contain_whitespace() {
        let mut cfg = raw("", vec![1]);
        cfg.phrase.text = None;
        cfg.phrase.words = Some(vec!["a b".to_string()]);
        assert!(ConfigFile::try_from(cfg).is_err());
    }
}
