//! Range rules applied after every state mutation.

use crate::player::Player;

/// Pull every bounded attribute back into its valid range.
///
/// Health, stamina, and family favor live in 0-100; wealth and the five
/// personality attributes are floored at zero with no ceiling. Idempotent.
pub fn normalize(p: &mut Player) {
    p.health = p.health.clamp(0, 100);
    p.stamina = p.stamina.clamp(0, 100);
    p.family_favor = p.family_favor.clamp(0, 100);

    p.wealth = p.wealth.max(0);
    p.intelligence = p.intelligence.max(0);
    p.charm = p.charm.max(0);
    p.sensibility = p.sensibility.max(0);
    p.kindness = p.kindness.max(0);
    p.luck = p.luck.max(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Gender;

    #[test]
    fn test_normalize_clamps_ranges() {
        let mut p = Player::new("Test", Gender::Other);
        p.health = 180;
        p.stamina = -30;
        p.family_favor = 101;
        p.wealth = -500;
        p.luck = -1;

        normalize(&mut p);

        assert_eq!(p.health, 100);
        assert_eq!(p.stamina, 0);
        assert_eq!(p.family_favor, 100);
        assert_eq!(p.wealth, 0);
        assert_eq!(p.luck, 0);
    }

    #[test]
    fn test_normalize_leaves_valid_state_alone() {
        let mut p = Player::new("Test", Gender::Other);
        let before = p.clone();
        normalize(&mut p);
        assert_eq!(p, before);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut p = Player::new("Test", Gender::Other);
        p.health = -5;
        p.stamina = 999;
        p.wealth = -1;
        p.intelligence = -42;

        normalize(&mut p);
        let once = p.clone();
        normalize(&mut p);
        assert_eq!(p, once);
    }

    #[test]
    fn test_normalize_has_no_upper_bound_on_attributes() {
        let mut p = Player::new("Test", Gender::Other);
        p.wealth = 9_999_999;
        p.intelligence = 4000;
        normalize(&mut p);
        assert_eq!(p.wealth, 9_999_999);
        assert_eq!(p.intelligence, 4000);
    }
}
