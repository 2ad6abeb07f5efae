//! Held-key polling for the window front end.
//!
//! The window has no key events in the loop; instead every key-repeat tick asks
//! which keys are down, so holding a key repeats its action at that rate.

use arrayvec::ArrayVec;
use macroquad::input::KeyCode;

use crate::types::GameAction;

/// Keys per action, in the order actions are applied within one tick.
pub const KEY_BINDINGS: [(GameAction, [KeyCode; 2]); 4] = [
    (GameAction::MoveLeft, [KeyCode::Left, KeyCode::A]),
    (GameAction::MoveRight, [KeyCode::Right, KeyCode::D]),
    (GameAction::RotateCw, [KeyCode::Up, KeyCode::W]),
    (GameAction::SoftDrop, [KeyCode::Down, KeyCode::S]),
];

/// Actions whose keys are currently held, each at most once.
///
/// `is_down` is `macroquad::input::is_key_down` in the game; tests pass a stub.
pub fn held_actions(is_down: impl Fn(KeyCode) -> bool) -> ArrayVec<GameAction, 4> {
    KEY_BINDINGS
        .iter()
        .filter(|(_, keys)| keys.iter().any(|&key| is_down(key)))
        .map(|&(action, _)| action)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_held() {
        assert!(held_actions(|_| false).is_empty());
    }

    #[test]
    fn alias_and_arrow_count_once() {
        let actions = held_actions(|key| matches!(key, KeyCode::Left | KeyCode::A));
        assert_eq!(actions.as_slice(), &[GameAction::MoveLeft]);
    }

    #[test]
    fn actions_follow_binding_order() {
        let actions = held_actions(|key| matches!(key, KeyCode::Down | KeyCode::Up | KeyCode::D));
        assert_eq!(
            actions.as_slice(),
            &[GameAction::MoveRight, GameAction::RotateCw, GameAction::SoftDrop]
        );
    }
}
