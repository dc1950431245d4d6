// src/pipeline/plan.rs

//! Pure command planning: no processes, no IO.

use std::num::NonZeroUsize;

use crate::config::ConfigFile;
use crate::exec::builder::{build, MorphCommand};
use crate::segment::{consecutive_pairs, ChunkPair};

/// Commands for one grouping pass, in phrase order.
pub fn pass_commands(
    config: &ConfigFile,
    group_size: NonZeroUsize,
) -> impl Iterator<Item = MorphCommand> + '_ {
    let quote = config.command.quote.should_quote(group_size.get());
    consecutive_pairs(config.phrase.chunks(group_size))
        .map(ChunkPair::from)
        .map(move |pair| {
            build(
                &pair,
                &config.command.executable,
                &config.command.extra_args,
                quote,
            )
        })
}

/// Every pass of the run with its commands, for dry runs and tests.
pub fn plan(config: &ConfigFile) -> Vec<(NonZeroUsize, Vec<MorphCommand>)> {
    config
        .group_sizes
        .iter()
        .map(|&k| (k, pass_commands(config, k).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    fn poem_two_plan_matches_script_order() {
        let cfg = Preset::PoemTwo.config().unwrap();
        let passes = plan(&cfg);

        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].1.len(), 10);
        assert_eq!(
            passes[0].1[0].line(),
            "./target/release/examples/phrase_morph we remember"
        );
        assert_eq!(
            passes[0].1[9].line(),
            "./target/release/examples/phrase_morph the word"
        );

        // 11 words in pairs -> 6 chunks -> 5 commands.
        assert_eq!(passes[1].1.len(), 5);
        assert_eq!(
            passes[1].1[4].line(),
            "./target/release/examples/phrase_morph 'of the' 'word'"
        );
    }

    #[test]
    fn poem_es_end_plan_has_dataset_argument() {
        let cfg = Preset::PoemEsEnd.config().unwrap();
        let lines: Vec<String> = plan(&cfg)
            .into_iter()
            .flat_map(|(_, cmds)| cmds)
            .map(|c| c.line().to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "./target/release/words 'no recordamos el verbo' 'pero el sonido del' data/es_large",
                "./target/release/words 'pero el sonido del' 'verbo' data/es_large",
            ]
        );
    }
}
