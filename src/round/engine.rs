//! The round engine.
//!
//! Owns score, clock, deck and the active card, and is the only thing that
//! mutates them. Every action takes `&mut self` and runs to completion, so
//! events are processed strictly one at a time.

use std::num::NonZeroU32;

use tracing::{debug, info, warn};

use super::event::{RoundEvent, RoundOutcome};
use super::state::{RoundPhase, RoundSnapshot};
use super::transcript::Transcript;
use crate::cards::{Card, Catalog};
use crate::classify::{CardMatcher, Verdict};
use crate::clock::{ClockEvent, ClockToken, RoundClock};
use crate::core::{RoundConfig, RoundRng, TabooError, TabooResult};
use crate::deck::Deck;
use crate::hints::{HintGenerator, PhraseBank};
use crate::ports::{PresentationSink, SpeechSink};

/// The card on the table, with its match patterns prepared.
#[derive(Clone, Debug)]
struct ActiveCard {
    card: Card,
    matcher: CardMatcher,
}

impl ActiveCard {
    fn new(card: Card) -> Self {
        let matcher = CardMatcher::new(&card);
        Self { card, matcher }
    }
}

/// One player's session: a catalog, a configuration, and the current round.
///
/// Engines share nothing, so any number can run side by side.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::Catalog;
/// use taboo_engine::core::RoundConfig;
/// use taboo_engine::round::{RoundEngine, RoundOutcome, RoundPhase};
///
/// let config = RoundConfig::new().with_round_seconds(2).with_seed(7);
/// let mut engine = RoundEngine::new(Catalog::default_cards(), config).unwrap();
///
/// engine.start().unwrap();
/// assert_eq!(engine.phase(), RoundPhase::Running);
///
/// engine.mark_correct();
/// assert_eq!(engine.score(), 1);
///
/// engine.on_tick();
/// assert_eq!(engine.on_tick(), RoundOutcome::Expired { final_score: 1 });
/// assert_eq!(engine.mark_correct(), RoundOutcome::Inactive);
/// ```
pub struct RoundEngine {
    catalog: Catalog,
    config: RoundConfig,
    deck_rng: RoundRng,
    deck: Option<Deck>,
    clock: RoundClock,
    phase: RoundPhase,
    score: u32,
    active: Option<ActiveCard>,
    transcript: Transcript,
    hints: HintGenerator,
    /// Ticks since the active card was drawn, for the hint cycle.
    ticks_on_card: u32,
    presentation: Option<Box<dyn PresentationSink>>,
    speech: Option<Box<dyn SpeechSink>>,
}

impl RoundEngine {
    /// Create an idle engine.
    ///
    /// Fails with a configuration error if `config` is invalid.
    pub fn new(catalog: Catalog, config: RoundConfig) -> TabooResult<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(TabooError::configuration("catalog is empty"));
        }

        let rng = match config.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_entropy(),
        };
        debug!(seed = rng.seed(), cards = catalog.len(), "round engine created");

        Ok(Self {
            catalog,
            deck_rng: rng.for_context("deck"),
            deck: None,
            clock: RoundClock::new(),
            phase: RoundPhase::Idle,
            score: 0,
            active: None,
            transcript: Transcript::new(),
            hints: HintGenerator::new(PhraseBank::default_bank(), rng.for_context("hints")),
            ticks_on_card: 0,
            presentation: None,
            speech: None,
            config,
        })
    }

    /// Use a different phrase bank for CPU hints.
    #[must_use]
    pub fn with_phrase_bank(mut self, bank: PhraseBank) -> Self {
        let rng = self.deck_rng.for_context("hints");
        self.hints = HintGenerator::new(bank, rng);
        self
    }

    /// Attach a presentation sink.
    #[must_use]
    pub fn with_presentation(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.presentation = Some(Box::new(sink));
        self
    }

    /// Attach a speech sink for CPU hints.
    #[must_use]
    pub fn with_speech(mut self, sink: impl SpeechSink + 'static) -> Self {
        self.speech = Some(Box::new(sink));
        self
    }

    // === Actions ===

    /// Start a round of the configured length.
    pub fn start(&mut self) -> TabooResult<ClockToken> {
        self.start_round(self.config.round_seconds)
    }

    /// Start a fresh round of `duration` ticks.
    ///
    /// Resets the score and transcript, builds a new deck, draws the first
    /// card and starts the clock. Any round in progress is abandoned.
    /// Returns the token the external timer must tag its ticks with.
    pub fn start_round(&mut self, duration: u32) -> TabooResult<ClockToken> {
        let duration = NonZeroU32::new(duration)
            .ok_or_else(|| TabooError::configuration("round duration must be positive"))?;

        let deck = if self.config.shuffle {
            Deck::shuffled(&self.catalog, &mut self.deck_rng)?
        } else {
            Deck::ordered(&self.catalog)?
        };

        self.deck = Some(deck);
        self.score = 0;
        self.transcript.clear();
        self.draw_next();
        let token = self.clock.start(duration);
        self.phase = RoundPhase::Running;

        info!(duration = duration.get(), "round started");
        self.render();
        Ok(token)
    }

    /// Show the next card without scoring (pass / next).
    pub fn advance_card(&mut self) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        self.draw_next();
        self.render();
        RoundOutcome::CardAdvanced
    }

    /// Penalize one point (never below zero) and advance.
    pub fn mark_buzz(&mut self) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        self.buzz(None)
    }

    /// Award one point and advance.
    pub fn mark_correct(&mut self) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        self.correct()
    }

    /// Classify spoken text against the active card and act on the verdict.
    ///
    /// Target matching follows `RoundConfig::target_match`.
    pub fn submit_utterance(&mut self, text: &str) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        self.apply_utterance(text, self.config.target_match)
    }

    /// Check a typed guess. Typed guesses always match against the target.
    pub fn submit_guess(&mut self, text: &str) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        self.apply_utterance(text, true)
    }

    /// Record a speech recognition result and classify it.
    ///
    /// Interim results are classified too, so a forbidden word is caught as
    /// soon as it shows up in a partial transcript.
    pub fn transcript_update(&mut self, text: &str, is_final: bool) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }

        if is_final {
            self.transcript.push_final(text);
        } else {
            self.transcript.set_interim(text);
        }

        let outcome = self.apply_utterance(text, self.config.target_match);
        if outcome == RoundOutcome::NoEffect {
            self.render();
        }
        outcome
    }

    /// Advance the clock using the current countdown's token.
    pub fn on_tick(&mut self) -> RoundOutcome {
        self.tick(self.clock.token())
    }

    /// Advance the clock by one unit.
    ///
    /// Ticks are ignored when the round is not running or `token` belongs
    /// to an abandoned countdown.
    pub fn tick(&mut self, token: ClockToken) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }

        let mut outcome = RoundOutcome::Inactive;
        for event in self.clock.tick(token) {
            outcome = match event {
                ClockEvent::Remaining(remaining) => RoundOutcome::Ticked { remaining },
                ClockEvent::Expired => self.on_expired(),
            };
        }

        if let RoundOutcome::Ticked { .. } = outcome {
            self.ticks_on_card += 1;
            if let Some(interval) = self.config.hint_interval {
                if self.ticks_on_card % interval == 0 {
                    self.speak_hints();
                }
            }
        }

        if outcome != RoundOutcome::Inactive {
            self.render();
        }
        outcome
    }

    /// Abort the round. The score and card stay as they were.
    pub fn stop_round(&mut self) -> RoundOutcome {
        self.clock.stop();
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        self.phase = RoundPhase::Idle;
        info!(score = self.score, "round stopped");
        self.render();
        RoundOutcome::Stopped
    }

    /// Speak hints for the active card now.
    pub fn request_hints(&mut self) -> RoundOutcome {
        if !self.is_running() {
            return RoundOutcome::Inactive;
        }
        RoundOutcome::HintsSpoken(self.speak_hints())
    }

    /// Dispatch an external event.
    pub fn handle(&mut self, event: RoundEvent) -> RoundOutcome {
        match event {
            RoundEvent::Tick(token) => self.tick(token),
            RoundEvent::TranscriptUpdate { text, is_final } => self.transcript_update(&text, is_final),
            RoundEvent::GuessSubmitted(text) => self.submit_guess(&text),
            RoundEvent::Pass | RoundEvent::Next => self.advance_card(),
            RoundEvent::Buzz => self.mark_buzz(),
            RoundEvent::Correct => self.mark_correct(),
            RoundEvent::Stop => self.stop_round(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.clock.remaining()
    }

    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.active.as_ref().map(|a| &a.card)
    }

    /// Token of the current countdown, for scheduling ticks.
    #[must_use]
    pub fn clock_token(&self) -> ClockToken {
        self.clock.token()
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current state as handed to presentation.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let time_remaining = self.clock.remaining();
        RoundSnapshot {
            score: self.score,
            time_remaining,
            active_card: self.active_card().cloned(),
            phase: self.phase,
            low_time: self.is_running() && time_remaining <= self.config.low_time_threshold,
            transcript: self.transcript.display(),
        }
    }

    // === Internals ===

    fn apply_utterance(&mut self, text: &str, target_match: bool) -> RoundOutcome {
        let Some(active) = self.active.as_ref() else {
            return RoundOutcome::NoEffect;
        };

        match active.matcher.classify(text, target_match) {
            Verdict::TabooHit(word) => {
                self.transcript.mark_buzz(&word);
                self.buzz(Some(word))
            }
            Verdict::TargetMatch => self.correct(),
            Verdict::Neutral => RoundOutcome::NoEffect,
        }
    }

    fn buzz(&mut self, taboo: Option<String>) -> RoundOutcome {
        self.score = self.score.saturating_sub(1);
        debug!(score = self.score, taboo = ?taboo, "buzz");
        self.draw_next();
        self.render();
        RoundOutcome::Buzzed { taboo }
    }

    fn correct(&mut self) -> RoundOutcome {
        self.score = self.score.saturating_add(1);
        let word = self
            .active
            .as_ref()
            .map(|a| a.card.word.clone())
            .unwrap_or_default();
        debug!(score = self.score, %word, "correct");
        self.draw_next();
        self.render();
        RoundOutcome::Correct { word }
    }

    fn on_expired(&mut self) -> RoundOutcome {
        self.phase = RoundPhase::Expired;
        info!(final_score = self.score, "round expired");
        RoundOutcome::Expired {
            final_score: self.score,
        }
    }

    fn draw_next(&mut self) {
        self.ticks_on_card = 0;
        let Some(deck) = self.deck.as_mut() else {
            return;
        };
        match deck.draw(&self.catalog, &mut self.deck_rng) {
            Ok(card) => self.active = Some(ActiveCard::new(card.clone())),
            Err(err) => warn!(%err, "keeping current card"),
        }
    }

    fn speak_hints(&mut self) -> Vec<String> {
        let Some(active) = self.active.as_ref() else {
            return Vec::new();
        };

        let hints = match self.hints.generate(&active.card) {
            Ok(hints) => hints,
            Err(err) => {
                warn!(%err, "using fallback hint");
                vec![self.config.fallback_hint.clone()]
            }
        };

        if let Some(speech) = self.speech.as_mut() {
            for hint in &hints {
                speech.speak(hint);
            }
        }
        hints
    }

    fn render(&mut self) {
        if self.presentation.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(sink) = self.presentation.as_mut() {
            sink.render(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(config: RoundConfig) -> RoundEngine {
        RoundEngine::new(Catalog::default_cards(), config.with_seed(42)).unwrap()
    }

    #[test]
    fn test_new_is_idle() {
        let engine = engine(RoundConfig::new());
        assert_eq!(engine.phase(), RoundPhase::Idle);
        assert!(engine.active_card().is_none());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = RoundEngine::new(Catalog::default_cards(), RoundConfig::new().with_round_seconds(0));
        assert!(matches!(result, Err(TabooError::Configuration { .. })));
    }

    #[test]
    fn test_start_round_zero_duration() {
        let mut engine = engine(RoundConfig::new());
        assert!(matches!(engine.start_round(0), Err(TabooError::Configuration { .. })));
        assert_eq!(engine.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_start_draws_card_and_runs_clock() {
        let mut engine = engine(RoundConfig::new());
        engine.start().unwrap();

        assert_eq!(engine.phase(), RoundPhase::Running);
        assert_eq!(engine.time_remaining(), 60);
        assert!(engine.active_card().is_some());
    }

    #[test]
    fn test_unshuffled_first_card() {
        let mut engine = engine(RoundConfig::new().with_shuffle(false));
        engine.start().unwrap();
        assert_eq!(engine.active_card().unwrap().word, "Birthday");

        engine.advance_card();
        assert_eq!(engine.active_card().unwrap().word, "Pizza");
    }

    #[test]
    fn test_score_floor() {
        let mut engine = engine(RoundConfig::new());
        engine.start().unwrap();

        assert_eq!(engine.mark_buzz(), RoundOutcome::Buzzed { taboo: None });
        assert_eq!(engine.score(), 0);

        engine.mark_correct();
        engine.mark_correct();
        engine.mark_buzz();
        assert_eq!(engine.score(), 1);
    }

    #[test]
    fn test_utterance_taboo_buzzes() {
        let mut engine = engine(RoundConfig::new().with_shuffle(false));
        engine.start().unwrap();
        engine.mark_correct();

        // Second card is Pizza
        let outcome = engine.submit_utterance("lots of melted cheese");
        assert_eq!(outcome, RoundOutcome::Buzzed { taboo: Some("Cheese".into()) });
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.active_card().unwrap().word, "Laptop");
        assert!(engine.transcript().display().contains("[BUZZ: CHEESE]"));
    }

    #[test]
    fn test_utterance_target_respects_config() {
        let mut off = engine(RoundConfig::new().with_shuffle(false));
        off.start().unwrap();
        assert_eq!(off.submit_utterance("happy birthday"), RoundOutcome::NoEffect);
        assert_eq!(off.active_card().unwrap().word, "Birthday");

        let mut on = engine(RoundConfig::new().with_shuffle(false).with_target_match(true));
        on.start().unwrap();
        assert_eq!(
            on.submit_utterance("happy birthday"),
            RoundOutcome::Correct { word: "Birthday".into() }
        );
        assert_eq!(on.score(), 1);
    }

    #[test]
    fn test_typed_guess_always_matches_target() {
        let mut engine = engine(RoundConfig::new().with_shuffle(false));
        engine.start().unwrap();
        assert_eq!(
            engine.submit_guess("Birthday"),
            RoundOutcome::Correct { word: "Birthday".into() }
        );
    }

    #[test]
    fn test_interim_transcript_catches_taboo() {
        let mut engine = engine(RoundConfig::new().with_shuffle(false));
        engine.start().unwrap();

        assert_eq!(engine.transcript_update("you blow out the", false), RoundOutcome::NoEffect);
        assert_eq!(
            engine.transcript_update("you blow out the candles", false),
            RoundOutcome::Buzzed { taboo: Some("Candles".into()) }
        );
        assert_eq!(engine.transcript().display(), "[BUZZ: CANDLES] you blow out the candles");
    }

    #[test]
    fn test_expiry_freezes_state() {
        let mut engine = engine(RoundConfig::new().with_round_seconds(3));
        engine.start().unwrap();
        engine.mark_correct();

        assert_eq!(engine.on_tick(), RoundOutcome::Ticked { remaining: 2 });
        assert_eq!(engine.on_tick(), RoundOutcome::Ticked { remaining: 1 });
        assert_eq!(engine.on_tick(), RoundOutcome::Expired { final_score: 1 });
        assert_eq!(engine.phase(), RoundPhase::Expired);

        let card = engine.active_card().cloned();
        assert_eq!(engine.on_tick(), RoundOutcome::Inactive);
        assert_eq!(engine.mark_correct(), RoundOutcome::Inactive);
        assert_eq!(engine.advance_card(), RoundOutcome::Inactive);
        assert_eq!(engine.submit_utterance("cake"), RoundOutcome::Inactive);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.active_card().cloned(), card);
    }

    #[test]
    fn test_stop_round_silences_everything() {
        let mut engine = engine(RoundConfig::new().with_hint_interval(1));
        let token = engine.start().unwrap();

        assert_eq!(engine.stop_round(), RoundOutcome::Stopped);
        assert_eq!(engine.phase(), RoundPhase::Idle);
        assert_eq!(engine.stop_round(), RoundOutcome::Inactive);
        assert_eq!(engine.tick(token), RoundOutcome::Inactive);
        assert_eq!(engine.request_hints(), RoundOutcome::Inactive);
        assert_eq!(engine.mark_buzz(), RoundOutcome::Inactive);
    }

    #[test]
    fn test_restart_resets_score_and_ignores_old_ticks() {
        let mut engine = engine(RoundConfig::new());
        let old = engine.start().unwrap();
        engine.mark_correct();
        engine.tick(old);

        let new = engine.start_round(10).unwrap();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.time_remaining(), 10);
        assert_eq!(engine.tick(old), RoundOutcome::Inactive);
        assert_eq!(engine.tick(new), RoundOutcome::Ticked { remaining: 9 });
    }

    #[test]
    fn test_low_time_flag() {
        let mut engine = engine(RoundConfig::new().with_round_seconds(12));
        engine.start().unwrap();
        assert!(!engine.snapshot().low_time);

        engine.on_tick();
        assert!(!engine.snapshot().low_time);
        engine.on_tick();
        assert!(engine.snapshot().low_time);
    }

    #[test]
    fn test_handle_dispatch() {
        let mut engine = engine(RoundConfig::new().with_shuffle(false));
        let token = engine.start().unwrap();

        assert_eq!(engine.handle(RoundEvent::Correct), RoundOutcome::Correct { word: "Birthday".into() });
        assert_eq!(engine.handle(RoundEvent::Pass), RoundOutcome::CardAdvanced);
        assert_eq!(engine.handle(RoundEvent::Next), RoundOutcome::CardAdvanced);
        assert_eq!(engine.handle(RoundEvent::Buzz), RoundOutcome::Buzzed { taboo: None });
        assert_eq!(engine.handle(RoundEvent::Tick(token)), RoundOutcome::Ticked { remaining: 59 });
        assert_eq!(engine.handle(RoundEvent::Stop), RoundOutcome::Stopped);
    }
}
