//! End-to-end round scenarios against small word pools

use evil_hangman::core::{Difficulty, HangmanError, Pattern, RoundConfig, WordPool};
use evil_hangman::engine::{Round, partition, rank_families};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn three_letter_pool() -> WordPool {
    WordPool::new(["dog", "cat", "car"]).unwrap()
}

fn hard_round(pool: &WordPool) -> Round<'_> {
    pool.prepare_round(RoundConfig::new(3, 5, Difficulty::Hard))
        .unwrap()
}

#[test]
fn empty_pool_cannot_be_built() {
    let words: Vec<String> = Vec::new();
    assert_eq!(WordPool::new(words), Err(HangmanError::InvalidConstruction));
}

#[test]
fn hard_round_keeps_larger_family() {
    let pool = three_letter_pool();
    let mut round = hard_round(&pool);

    let sizes = round.make_guess('a').unwrap();

    assert_eq!(sizes.len(), 2);
    assert_eq!(sizes[&Pattern::from("---")], 1);
    assert_eq!(sizes[&Pattern::from("-a-")], 2);
    assert_eq!(round.pattern().to_string(), "-a-");
    assert_eq!(round.candidates(), &["cat", "car"]);
    assert_eq!(round.remaining_guesses(), 5);
}

#[test]
fn wrong_guess_costs_one() {
    let pool = three_letter_pool();
    let mut round = hard_round(&pool);
    round.make_guess('a').unwrap();

    let sizes = round.make_guess('z').unwrap();

    assert_eq!(sizes.len(), 1);
    assert_eq!(sizes[&Pattern::from("-a-")], 2);
    assert_eq!(round.pattern().to_string(), "-a-");
    assert_eq!(round.remaining_guesses(), 4);
    assert_eq!(round.candidate_count(), 2);
    assert_eq!(round.guessed_letters_display(), "[a, z]");
}

#[test]
fn repeated_letter_is_rejected_without_side_effects() {
    let pool = three_letter_pool();
    let mut round = hard_round(&pool);
    round.make_guess('a').unwrap();
    round.make_guess('z').unwrap();

    assert_eq!(round.make_guess('a'), Err(HangmanError::AlreadyGuessed('a')));
    assert_eq!(round.remaining_guesses(), 4);
    assert_eq!(round.candidate_count(), 2);
    assert_eq!(round.pattern().to_string(), "-a-");
    assert_eq!(round.guess_count(), 2);
    assert!(round.already_guessed('a'));
}

#[test]
fn commitment_returns_each_remaining_word() {
    let pool = three_letter_pool();
    let mut round = hard_round(&pool);
    round.make_guess('a').unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let committed: BTreeSet<&str> = (0..200)
        .map(|_| round.commit_secret_word(&mut rng).unwrap())
        .collect();
    assert_eq!(committed, BTreeSet::from(["car", "cat"]));
}

#[test]
fn commitment_is_reproducible_with_same_seed() {
    let pool = three_letter_pool();
    let round = hard_round(&pool);

    let first = round
        .commit_secret_word(&mut StdRng::seed_from_u64(5))
        .unwrap();
    let second = round
        .commit_secret_word(&mut StdRng::seed_from_u64(5))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn pool_counts_are_independent_of_rounds() {
    let pool = WordPool::new(["dog", "cat", "car", "horse", "ox"]).unwrap();
    let mut round = pool
        .prepare_round(RoundConfig::new(3, 5, Difficulty::Easy))
        .unwrap();
    round.make_guess('a').unwrap();

    assert_eq!(round.pool_word_count(3), 3);
    assert_eq!(round.pool_word_count(5), 1);
    assert_eq!(round.pool_word_count(2), 1);
    assert_eq!(pool.word_count(4), 0);
}

#[test]
fn rounds_share_one_pool() {
    let pool = three_letter_pool();
    let mut easy = pool
        .prepare_round(RoundConfig::new(3, 5, Difficulty::Easy))
        .unwrap();
    let mut hard = hard_round(&pool);

    // Easy takes the runner-up on its second guess
    easy.make_guess('z').unwrap();
    easy.make_guess('a').unwrap();
    hard.make_guess('z').unwrap();
    hard.make_guess('a').unwrap();

    assert_eq!(easy.pattern().to_string(), "---");
    assert_eq!(easy.candidates(), &["dog"]);
    assert_eq!(hard.pattern().to_string(), "-a-");
    assert_eq!(hard.candidates(), &["cat", "car"]);
}

#[test]
fn rounds_run_on_separate_threads() {
    let pool = three_letter_pool();

    std::thread::scope(|scope| {
        let handles: Vec<_> = Difficulty::ALL
            .into_iter()
            .map(|difficulty| {
                let pool = &pool;
                scope.spawn(move || {
                    let mut round = pool
                        .prepare_round(RoundConfig::new(3, 5, difficulty))
                        .unwrap();
                    round.make_guess('a').unwrap();
                    round.candidate_count()
                })
            })
            .collect();

        for handle in handles {
            let count = handle.join().unwrap();
            assert!(count == 1 || count == 2);
        }
    });
}

#[test]
fn partition_and_ranking_match_round_choice() {
    let pool = WordPool::new([
        "bead", "bean", "dead", "read", "reed", "seed", "deed", "fish", "east", "mist",
    ])
    .unwrap();
    let mut round = pool
        .prepare_round(RoundConfig::new(4, 8, Difficulty::Medium))
        .unwrap();

    for letter in ['s', 'e', 'd', 'a'] {
        let families = partition(round.candidates().iter().copied(), letter, round.pattern());
        let ranked = rank_families(families, letter);
        let rank = usize::from(round.guess_count() + 1 == 4 && ranked.len() > 1);
        let expected = ranked[rank].words.clone();

        round.make_guess(letter).unwrap();
        assert_eq!(round.candidates(), expected.as_slice());
    }
}

#[test]
fn invalid_round_parameters() {
    let pool = three_letter_pool();
    for (length, guesses) in [(0, 5), (3, 0), (0, 0)] {
        assert!(matches!(
            pool.prepare_round(RoundConfig::new(length, guesses, Difficulty::Hard)),
            Err(HangmanError::InvalidRoundParameters { .. })
        ));
    }
}

#[test]
fn words_containing_the_hidden_marker_stay_consistent() {
    let pool = WordPool::new(["t-shirt", "tabloid"]).unwrap();
    let mut round = pool
        .prepare_round(RoundConfig::new(7, 5, Difficulty::Hard))
        .unwrap();

    for word in round.candidates() {
        assert!(round.is_consistent(word), "{word} reported inconsistent");
    }

    round.make_guess('s').unwrap();
    assert_eq!(round.candidates(), ["tabloid"]);
    round.make_guess('t').unwrap();
    assert_eq!(round.pattern().to_string(), "t------");
    for word in round.candidates() {
        assert!(round.is_consistent(word));
    }
}
