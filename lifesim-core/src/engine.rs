//! The turn engine.
//!
//! [`Game`] owns the player record and the game log, and is the only
//! place state transitions happen: immediate actions, the monthly
//! advance with its scheduled sub-systems, and GM console commands.
//! Every mutation path ends in [`rules::normalize`].
//!
//! Public entry points draw from `thread_rng()`; each has a `_with_rng`
//! twin taking any [`Rng`] so tests can run seeded.

use rand::{Rng, RngCore};

use crate::events;
use crate::gm::{Command, GmError};
use crate::log::GameLog;
use crate::player::{Gender, Player};
use crate::rules;

/// The monthly actions a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Study,
    Work,
    Rest,
    Family,
    Social,
    /// Roll one monthly random event instead of acting.
    Random,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Study => "study",
            Action::Work => "work",
            Action::Rest => "rest",
            Action::Family => "family",
            Action::Social => "social",
            Action::Random => "random",
        }
    }

    pub fn all() -> [Action; 6] {
        [
            Action::Study,
            Action::Work,
            Action::Rest,
            Action::Family,
            Action::Social,
            Action::Random,
        ]
    }

    /// Parse an action identifier.
    pub fn parse(s: &str) -> Option<Action> {
        match s.to_lowercase().as_str() {
            "study" => Some(Action::Study),
            "work" => Some(Action::Work),
            "rest" => Some(Action::Rest),
            "family" => Some(Action::Family),
            "social" => Some(Action::Social),
            "random" | "event" => Some(Action::Random),
            _ => None,
        }
    }
}

/// A running game: the player record plus the game log.
///
/// Operations called with no active player are silent no-ops, so the
/// front-end never has to guard its key handlers.
#[derive(Debug, Default)]
pub struct Game {
    player: Option<Player>,
    log: GameLog,
}

impl Game {
    pub fn new() -> Game {
        Game::default()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn has_player(&self) -> bool {
        self.player.is_some()
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Start a new life, replacing any current player.
    pub fn new_life(&mut self, name: &str, gender: Gender) {
        let p = Player::new(name, gender);
        self.log.push(
            p.age,
            p.month,
            format!("A new life begins: {} ({})", p.name, p.gender),
        );
        self.log.push(
            p.age,
            p.month,
            "Pick actions for the month, then advance to the next month.",
        );
        self.player = Some(p);
    }

    /// Resume from a loaded player record.
    pub fn resume(&mut self, player: Player) {
        self.log.push(
            player.age,
            player.month,
            format!("Save loaded: {} (age {})", player.name, player.age),
        );
        self.player = Some(player);
    }

    /// Drop the current life. The caller erases the save file.
    pub fn reset(&mut self) {
        self.player = None;
    }

    /// Empty the log without touching player state.
    pub fn clear_log(&mut self) {
        self.log.clear();
        if let Some(p) = self.player.as_ref() {
            self.log.push(p.age, p.month, "Log cleared.");
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Resolve one action for the current month.
    pub fn perform(&mut self, action: Action) {
        self.perform_with_rng(action, &mut rand::thread_rng());
    }

    pub fn perform_with_rng<R: Rng>(&mut self, action: Action, rng: &mut R) {
        if let Action::Random = action {
            self.random_event_with_rng(rng);
            return;
        }
        let Some(player) = self.player.as_mut() else {
            return;
        };

        match action {
            Action::Study => {
                if player.school_progress >= 5 {
                    self.log.push(
                        player.age,
                        player.month,
                        "Class progress is already full (5/5). Advance the month or do something else.",
                    );
                    return;
                }
                player.school_progress += 1;
                player.intelligence += rng.gen_range(1..=3);
                player.stamina -= rng.gen_range(2..=5);
                player.status = "Studying hard".to_string();
                self.log.push(
                    player.age,
                    player.month,
                    "You went to class. Intelligence up, stamina down.",
                );
            }
            Action::Work => {
                let earn = rng.gen_range(50..=200i64);
                player.wealth += earn;
                player.stamina -= rng.gen_range(3..=7);
                if rng.gen_bool(0.35) {
                    player.charm += 1;
                }
                player.status = "Working for pay".to_string();
                self.log.push(
                    player.age,
                    player.month,
                    format!("You worked a part-time job and earned {earn} wealth."),
                );
            }
            Action::Rest => {
                player.health += rng.gen_range(2..=6);
                player.stamina += rng.gen_range(6..=12);
                player.status = "Resting up".to_string();
                self.log.push(
                    player.age,
                    player.month,
                    "You took a proper rest. Health and stamina recovered.",
                );
            }
            Action::Family => {
                player.family_favor += rng.gen_range(2..=6);
                player.kindness += rng.gen_range(1..=2);
                player.wealth -= rng.gen_range(10..=40i64);
                player.status = "With family".to_string();
                self.log.push(
                    player.age,
                    player.month,
                    "You spent time with family. Closer, and a little kinder.",
                );
            }
            Action::Social => {
                player.charm += rng.gen_range(1..=3);
                player.sensibility += rng.gen_range(1..=2);
                if rng.gen_bool(0.4) {
                    player.luck += 1;
                }
                player.status = "Out socializing".to_string();
                self.log.push(
                    player.age,
                    player.month,
                    "You went out and met people. Charm up, feelings sharpened.",
                );
            }
            Action::Random => unreachable!("handled above"),
        }

        rules::normalize(player);
    }

    /// Roll one monthly random event.
    pub fn random_event(&mut self) {
        self.random_event_with_rng(&mut rand::thread_rng());
    }

    pub fn random_event_with_rng<R: Rng>(&mut self, rng: &mut R) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let text = events::run_monthly_event(player, rng);
        player.status = "Caught up in events".to_string();
        rules::normalize(player);
        self.log.push(player.age, player.month, text);
    }

    // ========================================================================
    // Monthly advance
    // ========================================================================

    /// Close out the month: natural decay, calendar step, scheduled
    /// sub-systems, cycle cleanup, normalization.
    pub fn advance_month(&mut self) {
        self.advance_month_with_rng(&mut rand::thread_rng());
    }

    pub fn advance_month_with_rng<R: Rng>(&mut self, rng: &mut R) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        // Natural decay; low stamina puts health at risk.
        player.stamina -= rng.gen_range(1..=3);
        if player.stamina < 20 && rng.gen_bool(0.5) {
            player.health -= 1;
        }

        player.month += 1;
        player.flags.did_monthly_event = false;
        if player.month > 12 {
            player.month = 1;
            player.age += 1;
            self.log.push(
                player.age,
                player.month,
                format!("Happy birthday: you turned {}!", player.age),
            );
        }

        exam_check(player, &mut self.log, rng);
        age_segment_event(player, &mut self.log, rng);

        // A full class cycle resets at the end of the month.
        if player.school_progress >= 5 {
            player.school_progress = 0;
            self.log.push(
                player.age,
                player.month,
                "Class cycle complete: progress reset (0/5).",
            );
        }

        rules::normalize(player);
        self.log
            .push(player.age, player.month, "A new month begins.");
    }

    // ========================================================================
    // GM console
    // ========================================================================

    /// Execute a GM console command.
    ///
    /// Parse failures surface to the caller with no state change; a valid
    /// command with no active player is a silent no-op.
    pub fn gm_command(&mut self, input: &str) -> Result<(), GmError> {
        self.gm_command_with_rng(input, &mut rand::thread_rng())
    }

    pub fn gm_command_with_rng<R: Rng>(&mut self, input: &str, rng: &mut R) -> Result<(), GmError> {
        let command = Command::parse(input)?;
        let Some(player) = self.player.as_mut() else {
            return Ok(());
        };

        match command {
            Command::Event => {
                self.log
                    .push(player.age, player.month, "GM: forcing a random event.");
                self.random_event_with_rng(rng);
            }
            Command::Set(field, value) => {
                field.set(player, value);
                rules::normalize(player);
                self.log.push(
                    player.age,
                    player.month,
                    format!("GM: set {field} {value} (now {field}={})", field.get(player)),
                );
            }
            Command::Add(field, delta) => {
                field.add(player, delta);
                rules::normalize(player);
                self.log.push(
                    player.age,
                    player.month,
                    format!("GM: add {field} {delta} (now {field}={})", field.get(player)),
                );
            }
        }
        Ok(())
    }
}

/// Pop-quiz check: fires at most once per monthly advance.
fn exam_check(player: &mut Player, log: &mut GameLog, rng: &mut dyn RngCore) {
    // At 10 the quiz track is done for good.
    if player.exam_progress >= 10 {
        return;
    }

    let chance = 0.15 + if player.school_progress > 0 { 0.25 } else { 0.0 };
    if !rng.gen_bool(chance) {
        return;
    }

    player.exam_progress += 1;
    let score = (rng.gen_range(40..=85) + player.intelligence / 3).clamp(0, 100);
    if score >= 80 {
        player.intelligence += 2;
        player.wealth += 30;
        log.push(
            player.age,
            player.month,
            format!(
                "Pop quiz ({}/10): you aced it ({score} points)! Intelligence +2, wealth +30",
                player.exam_progress
            ),
        );
    } else if score >= 60 {
        player.intelligence += 1;
        log.push(
            player.age,
            player.month,
            format!(
                "Pop quiz ({}/10): a fair result ({score} points). Intelligence +1",
                player.exam_progress
            ),
        );
    } else {
        player.stamina -= 3;
        log.push(
            player.age,
            player.month,
            format!(
                "Pop quiz ({}/10): rough ({score} points). Stamina -3",
                player.exam_progress
            ),
        );
    }
}

/// Bracket event pool plus the unconditional job label for the bracket.
fn age_segment_event(player: &mut Player, log: &mut GameLog, rng: &mut dyn RngCore) {
    if let Some(text) = events::run_segment_pool(player, rng) {
        log.push(player.age, player.month, text);
    }
    player.job = player.bracket().job_title().to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn started_game() -> Game {
        let mut game = Game::new();
        game.new_life("Alice", Gender::Female);
        game
    }

    #[test]
    fn test_actions_without_player_are_noops() {
        let mut game = Game::new();
        game.perform_with_rng(Action::Work, &mut rng());
        game.advance_month_with_rng(&mut rng());
        game.random_event_with_rng(&mut rng());
        assert!(game.player().is_none());
    }

    #[test]
    fn test_study_raises_intelligence_and_progress() {
        let mut game = started_game();
        let mut r = rng();
        game.perform_with_rng(Action::Study, &mut r);

        let p = game.player().unwrap();
        assert_eq!(p.school_progress, 1);
        assert!((11..=13).contains(&p.intelligence));
        assert!((75..=78).contains(&p.stamina));
        assert_eq!(p.status, "Studying hard");
    }

    #[test]
    fn test_study_blocked_at_cap() {
        let mut game = started_game();
        let mut r = rng();
        for _ in 0..20 {
            game.perform_with_rng(Action::Study, &mut r);
        }

        let p = game.player().unwrap();
        assert_eq!(p.school_progress, 5);
        assert!(game
            .log()
            .latest()
            .unwrap()
            .text
            .contains("already full (5/5)"));
    }

    #[test]
    fn test_work_bounds() {
        for seed in 0..40 {
            let mut game = started_game();
            let mut r = StdRng::seed_from_u64(seed);
            game.perform_with_rng(Action::Work, &mut r);

            let p = game.player().unwrap();
            assert!((50..=200).contains(&p.wealth));
            assert!((73..=77).contains(&p.stamina));
            assert!(p.stamina >= 0);
        }
    }

    #[test]
    fn test_family_never_leaves_wealth_negative() {
        let mut game = started_game();
        let mut r = rng();
        game.perform_with_rng(Action::Family, &mut r);

        let p = game.player().unwrap();
        assert_eq!(p.wealth, 0);
        assert!(p.family_favor > 50);
        assert!(p.kindness > 10);
    }

    #[test]
    fn test_rest_is_capped_by_normalizer() {
        let mut game = started_game();
        let mut r = rng();
        for _ in 0..10 {
            game.perform_with_rng(Action::Rest, &mut r);
        }

        let p = game.player().unwrap();
        assert_eq!(p.stamina, 100);
        assert!(p.health <= 100);
    }

    #[test]
    fn test_random_action_fires_exactly_one_event() {
        let mut game = started_game();
        let mut r = rng();
        game.perform_with_rng(Action::Random, &mut r);

        let p = game.player().unwrap();
        assert_eq!(p.status, "Caught up in events");
    }

    #[test]
    fn test_month_rollover_increments_age() {
        let mut game = started_game();
        let mut r = rng();
        for field_fix in ["set month 12", "set stamina 100"] {
            game.gm_command_with_rng(field_fix, &mut r).unwrap();
        }
        game.advance_month_with_rng(&mut r);

        let p = game.player().unwrap();
        assert_eq!(p.month, 1);
        assert_eq!(p.age, 1);
    }

    #[test]
    fn test_advance_assigns_bracket_job() {
        let mut game = started_game();
        let mut r = rng();
        game.advance_month_with_rng(&mut r);
        assert_eq!(game.player().unwrap().job, "Child");

        game.gm_command_with_rng("set age 30", &mut r).unwrap();
        game.advance_month_with_rng(&mut r);
        assert_eq!(game.player().unwrap().job, "Working adult");
    }

    #[test]
    fn test_school_cycle_resets_on_advance() {
        let mut game = started_game();
        let mut r = rng();
        for _ in 0..5 {
            game.perform_with_rng(Action::Study, &mut r);
        }
        assert_eq!(game.player().unwrap().school_progress, 5);

        game.advance_month_with_rng(&mut r);
        assert_eq!(game.player().unwrap().school_progress, 0);
    }

    #[test]
    fn test_exam_cap_disables_quizzes() {
        let mut game = started_game();
        let mut r = rng();
        game.gm_command_with_rng("set exam 10", &mut r).unwrap();

        for _ in 0..60 {
            game.advance_month_with_rng(&mut r);
        }
        let p = game.player().unwrap();
        assert_eq!(p.exam_progress, 10);
        assert!(game.log().entries().all(|e| !e.text.contains("Pop quiz")));
    }

    #[test]
    fn test_invariants_hold_after_many_turns() {
        let mut game = started_game();
        let mut r = rng();
        for i in 0..200 {
            let action = Action::all()[i % 6];
            game.perform_with_rng(action, &mut r);
            game.advance_month_with_rng(&mut r);

            let p = game.player().unwrap();
            assert!((0..=100).contains(&p.health));
            assert!((0..=100).contains(&p.stamina));
            assert!((0..=100).contains(&p.family_favor));
            assert!(p.wealth >= 0);
            assert!(p.intelligence >= 0);
            assert!(p.charm >= 0);
            assert!(p.sensibility >= 0);
            assert!(p.kindness >= 0);
            assert!(p.luck >= 0);
            assert!((1..=12).contains(&p.month));
            assert!(p.school_progress <= 5);
            assert!(p.exam_progress <= 10);
        }
    }

    #[test]
    fn test_gm_set_money() {
        let mut game = started_game();
        let mut r = rng();
        let before = game.player().unwrap().clone();
        game.gm_command_with_rng("set money 500", &mut r).unwrap();

        let p = game.player().unwrap();
        assert_eq!(p.wealth, 500);
        // Nothing else moved.
        assert_eq!(p.health, before.health);
        assert_eq!(p.stamina, before.stamina);
        assert_eq!(p.intelligence, before.intelligence);
        assert_eq!(p.status, before.status);
    }

    #[test]
    fn test_gm_unknown_field_changes_nothing() {
        let mut game = started_game();
        let mut r = rng();
        let before = game.player().unwrap().clone();
        let err = game.gm_command_with_rng("set xyz 5", &mut r).unwrap_err();

        assert!(matches!(err, GmError::UnknownField(_)));
        assert_eq!(game.player().unwrap(), &before);
    }

    #[test]
    fn test_gm_add_normalizes() {
        let mut game = started_game();
        let mut r = rng();
        game.gm_command_with_rng("add hp 500", &mut r).unwrap();
        assert_eq!(game.player().unwrap().health, 100);

        game.gm_command_with_rng("add money -999", &mut r).unwrap();
        assert_eq!(game.player().unwrap().wealth, 0);
    }

    #[test]
    fn test_clear_log_keeps_player() {
        let mut game = started_game();
        let wealth = game.player().unwrap().wealth;
        game.clear_log();

        assert_eq!(game.log().len(), 1);
        assert_eq!(game.log().latest().unwrap().text, "Log cleared.");
        assert_eq!(game.player().unwrap().wealth, wealth);
    }

    #[test]
    fn test_reset_drops_player() {
        let mut game = started_game();
        game.reset();
        assert!(!game.has_player());
    }
}
