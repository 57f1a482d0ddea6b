//! A single round of adversarial hangman
//!
//! The round never commits to a secret word while play continues. It keeps every
//! pool word that is still consistent with what the player has seen, and on each
//! guess it keeps whichever family of those words is hardest for the player.

use super::partition::{family_sizes, partition};
use super::ranking::rank_families;
use super::selector::select_family;
use crate::core::{Difficulty, GuessedLetters, HangmanError, Pattern, RoundConfig, WordPool};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;

/// Mutable state of one round
///
/// Borrows the shared `WordPool`; many rounds may run against one pool at once,
/// but each round has a single owner.
#[derive(Debug, Clone)]
pub struct Round<'p> {
    pool: &'p WordPool,
    config: RoundConfig,
    remaining_guesses: usize,
    guessed: GuessedLetters,
    pattern: Pattern,
    candidates: Vec<&'p str>,
}

impl<'p> Round<'p> {
    /// Prepare a new round
    ///
    /// The pattern starts all hidden and the candidates are every pool word of
    /// the configured length.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidRoundParameters` if the word length or the
    /// guess budget is zero.
    pub fn new(pool: &'p WordPool, config: RoundConfig) -> Result<Self, HangmanError> {
        config.validate()?;

        let candidates: Vec<&'p str> = pool.words_of_length(config.word_length).collect();

        log::debug!(
            "prepared {} round: length {}, {} guesses, {} candidates",
            config.difficulty,
            config.word_length,
            config.max_wrong_guesses,
            candidates.len()
        );

        Ok(Self {
            pool,
            config,
            remaining_guesses: config.max_wrong_guesses,
            guessed: GuessedLetters::new(),
            pattern: Pattern::hidden(config.word_length),
            candidates,
        })
    }

    /// Guess a letter
    ///
    /// Partitions the candidates by the pattern the letter would reveal, keeps
    /// the family chosen for this round's difficulty and costs one wrong guess
    /// if that family leaves the pattern unchanged.
    ///
    /// Returns the size of every family the guess produced, keyed by pattern.
    /// Win and loss are not detected here; see `is_won` and `is_lost`.
    ///
    /// # Errors
    /// - `HangmanError::AlreadyGuessed` if the letter was guessed before
    /// - `HangmanError::NoCandidatesRemaining` if the pool had no words of
    ///   this round's length
    ///
    /// The round is unchanged when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Difficulty, RoundConfig, WordPool};
    /// use evil_hangman::engine::Round;
    ///
    /// let pool = WordPool::new(["dog", "cat", "car"]).unwrap();
    /// let mut round = Round::new(&pool, RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
    ///
    /// let sizes = round.make_guess('a').unwrap();
    /// assert_eq!(sizes.len(), 2);
    /// assert_eq!(round.pattern().to_string(), "-a-");
    /// assert_eq!(round.remaining_guesses(), 5);
    /// ```
    pub fn make_guess(&mut self, letter: char) -> Result<BTreeMap<Pattern, usize>, HangmanError> {
        if self.guessed.contains(letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }
        if self.candidates.is_empty() {
            return Err(HangmanError::NoCandidatesRemaining);
        }

        self.guessed.insert(letter);

        let families = partition(self.candidates.iter().copied(), letter, &self.pattern);
        let sizes = family_sizes(&families);
        log::trace!("guess '{letter}' partition: {sizes:?}");

        let ranked = rank_families(families, letter);
        let chosen = select_family(ranked, self.config.difficulty, self.guessed.len())
            .ok_or(HangmanError::NoCandidatesRemaining)?;

        if chosen.pattern == self.pattern {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        } else {
            self.pattern = chosen.pattern;
        }
        self.candidates = chosen.words;

        log::debug!(
            "guess '{letter}': {} families, kept {} ({} words), {} guesses left",
            sizes.len(),
            self.pattern,
            self.candidates.len(),
            self.remaining_guesses
        );

        Ok(sizes)
    }

    /// Pick the secret word uniformly at random from the remaining candidates
    ///
    /// Does not change the round, so repeated calls may return different words.
    ///
    /// # Errors
    /// Returns `HangmanError::NoCandidatesRemaining` if no candidates remain.
    pub fn commit_secret_word<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&'p str, HangmanError> {
        self.candidates
            .choose(rng)
            .copied()
            .ok_or(HangmanError::NoCandidatesRemaining)
    }

    /// Current display pattern
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Wrong guesses the player may still make
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.remaining_guesses
    }

    /// Letters guessed so far
    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Guessed letters rendered as `[a, b, c]`
    #[must_use]
    pub fn guessed_letters_display(&self) -> String {
        self.guessed.to_string()
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guessed.len()
    }

    #[inline]
    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        self.guessed.contains(letter)
    }

    /// Number of words still consistent with the round so far
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Words still consistent with the round so far
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'p str] {
        &self.candidates
    }

    /// Number of pool words with `length` characters, independent of this round
    #[must_use]
    pub fn pool_word_count(&self, length: usize) -> usize {
        self.pool.word_count(length)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Every position of the pattern has been revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pattern.is_complete()
    }

    /// The guess budget is spent
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.remaining_guesses == 0
    }

    /// Check whether `word` agrees with the pattern and with every wrong guess
    ///
    /// Each remaining candidate satisfies this by construction.
    #[must_use]
    pub fn is_consistent(&self, word: &str) -> bool {
        self.pattern.matches(word)
            && word
                .chars()
                .all(|ch| !self.guessed.contains(ch) || self.pattern.reveals(ch))
    }
}

impl WordPool {
    /// Prepare a round against this pool
    ///
    /// # Errors
    /// See `Round::new`.
    pub fn prepare_round(&self, config: RoundConfig) -> Result<Round<'_>, HangmanError> {
        Round::new(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ranking::Family;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: [&str; 12] = [
        "bead", "bean", "dead", "read", "reed", "seed", "deed", "fish", "east", "mist", "lamb",
        "ally",
    ];

    fn pool() -> WordPool {
        WordPool::new(WORDS).unwrap()
    }

    #[test]
    fn new_round_starts_hidden_with_all_words_of_length() {
        let pool = WordPool::new(["dog", "cat", "car", "horse"]).unwrap();
        let round = Round::new(&pool, RoundConfig::new(3, 7, Difficulty::Easy)).unwrap();

        assert_eq!(round.pattern().to_string(), "---");
        assert_eq!(round.candidate_count(), 3);
        assert_eq!(round.remaining_guesses(), 7);
        assert_eq!(round.guessed_letters_display(), "[]");
        assert_eq!(round.difficulty(), Difficulty::Easy);
        assert_eq!(round.word_length(), 3);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let pool = pool();
        assert!(matches!(
            Round::new(&pool, RoundConfig::new(0, 5, Difficulty::Hard)),
            Err(HangmanError::InvalidRoundParameters { .. })
        ));
        assert!(matches!(
            pool.prepare_round(RoundConfig::new(4, 0, Difficulty::Hard)),
            Err(HangmanError::InvalidRoundParameters { .. })
        ));
    }

    #[test]
    fn guess_keeps_hardest_family_on_hard() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(4, 6, Difficulty::Hard))
            .unwrap();

        let sizes = round.make_guess('e').unwrap();
        // "-e--": bead bean dead read, "-ee-": reed seed deed, "----": fish mist lamb ally
        assert_eq!(sizes[&Pattern::from("-e--")], 4);
        assert_eq!(sizes[&Pattern::from("-ee-")], 3);
        assert_eq!(sizes[&Pattern::from("----")], 4);
        assert_eq!(sizes[&Pattern::from("e---")], 1);

        // Tie on size 4: "----" reveals nothing, so it is harder
        assert_eq!(round.pattern().to_string(), "----");
        assert_eq!(round.candidates(), &["fish", "mist", "lamb", "ally"]);
        assert_eq!(round.remaining_guesses(), 5);
    }

    #[test]
    fn easy_yields_runner_up_on_even_guess_count() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(4, 6, Difficulty::Easy))
            .unwrap();

        // First guess (count 1): 'z' leaves a single family
        round.make_guess('z').unwrap();
        assert_eq!(round.remaining_guesses(), 5);

        // Second guess (count 2): runner-up "-e--" is kept instead of "----"
        round.make_guess('e').unwrap();
        assert_eq!(round.pattern().to_string(), "-e--");
        assert_eq!(round.candidates(), &["bead", "bean", "dead", "read"]);
        assert_eq!(round.remaining_guesses(), 5);
    }

    #[test]
    fn medium_yields_runner_up_on_fourth_guess() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(4, 10, Difficulty::Medium))
            .unwrap();

        for letter in ['x', 'q', 'j'] {
            round.make_guess(letter).unwrap();
        }
        assert_eq!(round.remaining_guesses(), 7);

        round.make_guess('e').unwrap();
        assert_eq!(round.pattern().to_string(), "-e--");
        assert_eq!(round.remaining_guesses(), 7);
    }

    #[test]
    fn already_guessed_leaves_state_untouched() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(4, 6, Difficulty::Hard))
            .unwrap();
        round.make_guess('e').unwrap();

        let pattern = round.pattern().clone();
        let remaining = round.remaining_guesses();
        let count = round.candidate_count();

        assert_eq!(round.make_guess('e'), Err(HangmanError::AlreadyGuessed('e')));
        assert_eq!(round.pattern(), &pattern);
        assert_eq!(round.remaining_guesses(), remaining);
        assert_eq!(round.candidate_count(), count);
        assert_eq!(round.guess_count(), 1);
    }

    #[test]
    fn guess_without_candidates_fails_cleanly() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(9, 6, Difficulty::Hard))
            .unwrap();
        assert_eq!(round.candidate_count(), 0);
        assert_eq!(round.make_guess('a'), Err(HangmanError::NoCandidatesRemaining));
        assert!(!round.already_guessed('a'));
        assert_eq!(round.remaining_guesses(), 6);
    }

    #[test]
    fn candidates_stay_consistent_and_shrink() {
        for difficulty in Difficulty::ALL {
            let pool = pool();
            let mut round = pool
                .prepare_round(RoundConfig::new(4, 26, difficulty))
                .unwrap();

            for letter in "etaoinshrdlucmfwypvbgkjqxz".chars() {
                let before = round.candidate_count();
                let pattern_before = round.pattern().clone();
                let remaining_before = round.remaining_guesses();

                let sizes = round.make_guess(letter).unwrap();

                assert_eq!(sizes.values().sum::<usize>(), before);
                assert!(round.candidate_count() <= before);
                assert!(round.candidate_count() > 0);
                assert!(round.candidates().iter().all(|w| round.is_consistent(w)));

                if round.pattern() == &pattern_before {
                    assert_eq!(round.remaining_guesses(), remaining_before - 1);
                } else {
                    assert_eq!(round.remaining_guesses(), remaining_before);
                }
            }
        }
    }

    #[test]
    fn hard_always_keeps_rank_zero() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(4, 26, Difficulty::Hard))
            .unwrap();

        for letter in "aeiousdt".chars() {
            let families = partition(round.candidates().iter().copied(), letter, round.pattern());
            let expected: Family<'_> = rank_families(families, letter).remove(0);

            round.make_guess(letter).unwrap();
            assert_eq!(round.candidates(), expected.words.as_slice());
        }
    }

    #[test]
    fn win_and_loss_predicates() {
        let pool = WordPool::new(["ox"]).unwrap();
        let mut round = pool
            .prepare_round(RoundConfig::new(2, 1, Difficulty::Hard))
            .unwrap();
        round.make_guess('o').unwrap();
        assert!(!round.is_won());
        round.make_guess('x').unwrap();
        assert!(round.is_won());
        assert!(!round.is_lost());

        let mut round = pool
            .prepare_round(RoundConfig::new(2, 1, Difficulty::Hard))
            .unwrap();
        round.make_guess('z').unwrap();
        assert!(round.is_lost());
    }

    #[test]
    fn commit_picks_a_remaining_candidate() {
        let pool = WordPool::new(["dog", "cat", "car"]).unwrap();
        let mut round = pool
            .prepare_round(RoundConfig::new(3, 5, Difficulty::Hard))
            .unwrap();
        round.make_guess('a').unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = round.commit_secret_word(&mut rng).unwrap();
            assert!(word == "cat" || word == "car");
        }
        assert_eq!(round.candidate_count(), 2);
    }

    #[test]
    fn commit_without_candidates_fails() {
        let pool = WordPool::new(["dog"]).unwrap();
        let round = pool
            .prepare_round(RoundConfig::new(5, 5, Difficulty::Hard))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            round.commit_secret_word(&mut rng),
            Err(HangmanError::NoCandidatesRemaining)
        );
    }

    #[test]
    fn pool_word_count_ignores_round_state() {
        let pool = pool();
        let mut round = pool
            .prepare_round(RoundConfig::new(4, 6, Difficulty::Hard))
            .unwrap();
        round.make_guess('e').unwrap();
        assert_eq!(round.pool_word_count(4), WORDS.len());
        assert_eq!(round.pool_word_count(3), 0);
    }
}
