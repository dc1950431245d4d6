use morphpoem::config::{
    CommandSection, ConfigFile, OutputSection, PhraseSection, RawConfigFile, RunSection,
};
use morphpoem::types::{ExitStatusPolicy, QuoteMode, RunnerKind, SeparatorMode};

/// Builder for `ConfigFile` to simplify test setup.
///
/// Starts from a valid config: phrase `"a b"`, executable `morph`, a single
/// consecutive-word pass, output `poem.txt`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                phrase: PhraseSection {
                    text: Some("a b".to_string()),
                    words: None,
                },
                command: CommandSection {
                    executable: "morph".to_string(),
                    ..CommandSection::default()
                },
                run: RunSection::default(),
                output: OutputSection {
                    path: "poem.txt".to_string(),
                    ..OutputSection::default()
                },
            },
        }
    }

    pub fn phrase(mut self, text: &str) -> Self {
        self.config.phrase = PhraseSection {
            text: Some(text.to_string()),
            words: None,
        };
        self
    }

    pub fn words(mut self, words: &[&str]) -> Self {
        self.config.phrase = PhraseSection {
            text: None,
            words: Some(words.iter().map(|w| w.to_string()).collect()),
        };
        self
    }

    pub fn executable(mut self, exe: &str) -> Self {
        self.config.command.executable = exe.to_string();
        self
    }

    pub fn extra_arg(mut self, arg: &str) -> Self {
        self.config.command.extra_args.push(arg.to_string());
        self
    }

    pub fn quote(mut self, mode: QuoteMode) -> Self {
        self.config.command.quote = mode;
        self
    }

    pub fn group_sizes(mut self, sizes: &[usize]) -> Self {
        self.config.run.group_sizes = sizes.to_vec();
        self
    }

    pub fn runner(mut self, kind: RunnerKind) -> Self {
        self.config.run.runner = kind;
        self
    }

    pub fn exit_status(mut self, policy: ExitStatusPolicy) -> Self {
        self.config.run.exit_status = policy;
        self
    }

    pub fn output(mut self, path: &str) -> Self {
        self.config.output.path = path.to_string();
        self
    }

    pub fn trim(mut self, val: bool) -> Self {
        self.config.output.trim = val;
        self
    }

    pub fn separator(mut self, mode: SeparatorMode) -> Self {
        self.config.output.separator = mode;
        self
    }

    pub fn append(mut self, val: bool) -> Self {
        self.config.output.append = val;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
