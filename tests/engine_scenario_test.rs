//! Guess engine and stats tracker tests against the public API.

use guess::{
    Difficulty, GameConfig, GameError, GuessEngine, GuessResult, RngSource, ScriptedSource,
    StatsTracker,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =========================================================================
// GameConfig
// =========================================================================

#[test]
fn test_config_accepts_only_ordered_ranges() {
    for min in -3..=3 {
        for max in -3..=3 {
            let built = GameConfig::new(min, max, None, true);
            if min < max {
                assert!(built.is_ok(), "{}..{} should be valid", min, max);
            } else {
                assert_eq!(built, Err(GameError::InvalidConfig { min, max }));
            }
        }
    }
}

// =========================================================================
// GuessEngine scenarios
// =========================================================================

#[test]
fn test_round_with_fixed_secret() {
    let config = GameConfig::new(0, 10, None, true).unwrap();
    let mut engine = GuessEngine::new(config, ScriptedSource::fixed(7));

    assert_eq!(engine.evaluate_guess(3), GuessResult::TooLow { delta: 4 });
    assert_eq!(engine.attempts(), 1);
    assert_eq!(engine.evaluate_guess(9), GuessResult::TooHigh { delta: 2 });
    assert_eq!(engine.attempts(), 2);
    assert_eq!(
        engine.evaluate_guess(7),
        GuessResult::Correct { attempts: 3 }
    );
    assert_eq!(engine.history_snapshot(), vec![3, 9, 7]);
}

#[test]
fn test_hard_cap_is_advisory() {
    let config = GameConfig::from_difficulty(Difficulty::Hard);
    let mut engine = GuessEngine::new(config, ScriptedSource::fixed(100));

    for guess in 0..7 {
        assert!(matches!(
            engine.evaluate_guess(guess),
            GuessResult::TooLow { .. }
        ));
    }
    assert_eq!(engine.remaining_attempts(), Some(0));

    // The engine keeps evaluating; stopping is the caller's job.
    assert_eq!(engine.evaluate_guess(50), GuessResult::TooLow { delta: 50 });
    assert_eq!(engine.remaining_attempts(), Some(-1));
}

#[test]
fn test_remaining_is_none_without_cap() {
    for difficulty in [Difficulty::Easy, Difficulty::Normal] {
        let mut engine =
            GuessEngine::new(GameConfig::from_difficulty(difficulty), ScriptedSource::fixed(1));
        engine.evaluate_guess(0);
        assert_eq!(engine.remaining_attempts(), None);
    }
}

#[test]
fn test_out_of_range_leaves_state_alone() {
    let config = GameConfig::from_difficulty(Difficulty::Easy);
    let mut engine = GuessEngine::new(config, ScriptedSource::fixed(25));
    engine.evaluate_guess(10);

    let before = engine.history_snapshot();
    assert_eq!(
        engine.evaluate_guess(51),
        GuessResult::OutOfRange { min: 0, max: 50 }
    );
    assert_eq!(
        engine.evaluate_guess(-1),
        GuessResult::OutOfRange { min: 0, max: 50 }
    );
    assert_eq!(engine.attempts(), 1);
    assert_eq!(engine.history_snapshot(), before);
}

#[test]
fn test_reset_draws_next_secret() {
    let config = GameConfig::new(0, 10, None, true).unwrap();
    let mut engine = GuessEngine::new(config, ScriptedSource::new(vec![1, 2, 3]));
    assert_eq!(engine.reveal_secret(), 1);

    engine.evaluate_guess(5);
    engine.reset();
    assert_eq!(engine.reveal_secret(), 2);
    assert_eq!(engine.attempts(), 0);
    assert!(engine.history_snapshot().is_empty());

    engine.reset();
    assert_eq!(engine.reveal_secret(), 3);
}

#[test]
fn test_binary_search_always_wins_normal_within_seven() {
    let config = GameConfig::from_difficulty(Difficulty::Normal);
    let mut engine = GuessEngine::new(config, RngSource::new(ChaCha8Rng::seed_from_u64(42)));

    for _ in 0..50 {
        let (mut lo, mut hi) = (config.min(), config.max());
        let attempts = loop {
            let guess = lo + (hi - lo) / 2;
            match engine.evaluate_guess(guess) {
                GuessResult::TooLow { .. } => lo = guess + 1,
                GuessResult::TooHigh { .. } => hi = guess - 1,
                GuessResult::Correct { attempts } => break attempts,
                GuessResult::OutOfRange { .. } => panic!("bisection left the range"),
            }
        };
        assert!(attempts <= 7);
        engine.reset();
    }
}

// =========================================================================
// StatsTracker
// =========================================================================

#[test]
fn test_stats_across_rounds() {
    let mut stats = StatsTracker::new();
    stats.on_round_finished(5);
    stats.start_new_round();
    stats.on_round_finished(3);

    assert_eq!(stats.best_attempts(), Some(3));
    assert_eq!(stats.attempts_per_round(), vec![5, 3]);
    assert_eq!(stats.rounds_played(), 2);
    assert!(stats
        .format_session()
        .contains("Attempts per round: 5, 3"));
}

#[test]
fn test_engine_and_stats_together() {
    let config = GameConfig::new(1, 3, None, true).unwrap();
    let mut engine = GuessEngine::new(config, ScriptedSource::new(vec![3, 1]));
    let mut stats = StatsTracker::new();

    for round_secret in [3, 1] {
        let mut guess = 1;
        loop {
            let result = engine.evaluate_guess(guess);
            stats.on_guess(&result);
            if let GuessResult::Correct { attempts } = result {
                assert_eq!(engine.reveal_secret(), round_secret);
                stats.on_round_finished(attempts);
                break;
            }
            guess += 1;
        }
        engine.reset();
        stats.start_new_round();
    }

    assert_eq!(stats.attempts_per_round(), vec![3, 1]);
    assert_eq!(stats.best_attempts(), Some(1));
}
