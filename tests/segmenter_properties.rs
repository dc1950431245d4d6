// tests/segmenter_properties.rs

use std::num::NonZeroUsize;

use proptest::prelude::*;

use morphpoem::pipeline::plan;
use morphpoem::segment::{consecutive_pairs, ChunkPair, Phrase};
use morphpoem_test_utils::builders::ConfigFileBuilder;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn phrase_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..24)
}

proptest! {
    #[test]
    fn chunking_covers_phrase_exactly(words in phrase_strategy(), k in 1usize..7) {
        let phrase = Phrase::from_words(words.clone());
        let size = NonZeroUsize::new(k).unwrap();
        let chunks: Vec<_> = phrase.chunks(size).collect();

        prop_assert_eq!(chunks.len(), words.len().div_ceil(k));

        let rejoined: Vec<String> = chunks
            .iter()
            .flat_map(|c| c.words().iter().cloned())
            .collect();
        prop_assert_eq!(rejoined, words);

        if let Some((last, rest)) = chunks.split_last() {
            prop_assert!(rest.iter().all(|c| c.len() == k));
            prop_assert!(!last.is_empty() && last.len() <= k);
        }
    }

    #[test]
    fn pairs_overlap_by_one_chunk(words in phrase_strategy(), k in 1usize..5) {
        let phrase = Phrase::from_words(words);
        let size = NonZeroUsize::new(k).unwrap();
        let m = phrase.chunks(size).count();

        let pairs: Vec<ChunkPair<'_>> = consecutive_pairs(phrase.chunks(size))
            .map(ChunkPair::from)
            .collect();

        prop_assert_eq!(pairs.len(), m.saturating_sub(1));
        for window in pairs.windows(2) {
            prop_assert_eq!(window[0].second, window[1].first);
        }
    }

    #[test]
    fn planning_is_deterministic(words in phrase_strategy(), sizes in proptest::collection::vec(1usize..5, 1..4)) {
        let text = words.join(" ");
        let cfg = ConfigFileBuilder::new()
            .phrase(&text)
            .group_sizes(&sizes)
            .extra_arg("data/en")
            .build();

        let first: Vec<String> = plan(&cfg)
            .into_iter()
            .flat_map(|(_, cmds)| cmds)
            .map(|c| c.line().to_string())
            .collect();
        let second: Vec<String> = plan(&cfg)
            .into_iter()
            .flat_map(|(_, cmds)| cmds)
            .map(|c| c.line().to_string())
            .collect();

        prop_assert_eq!(first, second);
    }
}

#[test]
fn five_words_in_pairs() {
    let cfg = ConfigFileBuilder::new()
        .words(&["a", "b", "c", "d", "e"])
        .executable("exe")
        .group_sizes(&[2])
        .build();

    let passes = plan(&cfg);
    let lines: Vec<&str> = passes[0].1.iter().map(|c| c.line()).collect();
    assert_eq!(lines, vec!["exe 'a b' 'c d'", "exe 'c d' 'e'"]);
}

#[test]
fn consecutive_word_mode_is_unquoted() {
    let cfg = ConfigFileBuilder::new()
        .words(&["x", "y"])
        .executable("exe")
        .group_sizes(&[1])
        .build();

    let passes = plan(&cfg);
    assert_eq!(passes[0].1.len(), 1);
    assert_eq!(passes[0].1[0].line(), "exe x y");
}
