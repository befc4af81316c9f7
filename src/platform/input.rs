//! Keyboard and pointer controls

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
    Start,
    Restart,
    Accelerate,
    Decelerate,
}

impl Key {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Logical keys bound to a DOM `KeyboardEvent.code`
    ///
    /// Space both starts a run and jumps.
    pub fn from_code(code: &str) -> &'static [Key] {
        match code {
            "Space" => &[Key::Jump, Key::Start],
            "ArrowUp" => &[Key::Jump],
            "Enter" => &[Key::Start],
            "KeyR" => &[Key::Restart],
            "ArrowRight" => &[Key::Accelerate],
            "ArrowLeft" => &[Key::Decelerate],
            _ => &[],
        }
    }
}

/// Current control state
///
/// Keys act while held, like the game polls them each frame. A pointer press
/// is an edge: it counts for exactly one `take_input`.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    held: u8,
    pointer: bool,
    /// Let the autopilot play
    pub autopilot: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn key_up(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    /// Press every key bound to `code`; returns whether any was bound
    pub fn code_down(&mut self, code: &str) -> bool {
        let keys = Key::from_code(code);
        keys.iter().for_each(|k| self.key_down(*k));
        !keys.is_empty()
    }

    pub fn code_up(&mut self, code: &str) -> bool {
        let keys = Key::from_code(code);
        keys.iter().for_each(|k| self.key_up(*k));
        !keys.is_empty()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// Tap/click: start from the title screen and jump
    pub fn pointer_down(&mut self) {
        self.pointer = true;
    }

    /// Release everything (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held = 0;
        self.pointer = false;
    }

    /// Build this frame's input and clear edge signals
    pub fn take_input(&mut self) -> TickInput {
        let pointer = std::mem::take(&mut self.pointer);
        TickInput {
            jump: self.is_held(Key::Jump) || pointer,
            accelerate: self.is_held(Key::Accelerate),
            decelerate: self.is_held(Key::Decelerate),
            start: self.is_held(Key::Start) || pointer,
            restart: self.is_held(Key::Restart),
            autopilot: self.autopilot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_starts_and_jumps() {
        let mut controls = Controls::new();
        assert!(controls.code_down("Space"));
        let input = controls.take_input();
        assert!(input.start);
        assert!(input.jump);
        assert!(!input.restart);
    }

    #[test]
    fn test_unknown_code_is_ignored() {
        let mut controls = Controls::new();
        assert!(!controls.code_down("KeyQ"));
        let input = controls.take_input();
        assert!(!input.jump && !input.start && !input.restart);
        assert!(!input.accelerate && !input.decelerate);
    }

    #[test]
    fn test_held_keys_persist_until_released() {
        let mut controls = Controls::new();
        controls.code_down("ArrowRight");
        assert!(controls.take_input().accelerate);
        assert!(controls.take_input().accelerate);
        controls.code_up("ArrowRight");
        assert!(!controls.take_input().accelerate);
    }

    #[test]
    fn test_pointer_is_an_edge() {
        let mut controls = Controls::new();
        controls.pointer_down();
        let first = controls.take_input();
        assert!(first.start && first.jump);
        let second = controls.take_input();
        assert!(!second.start && !second.jump);
    }

    #[test]
    fn test_codes_share_the_jump_key() {
        let mut controls = Controls::new();
        controls.code_down("ArrowUp");
        controls.code_down("Space");
        controls.code_up("Space");
        // Both codes share the Jump key, so releasing one releases it
        assert!(!controls.is_held(Key::Jump));
        controls.code_down("ArrowUp");
        assert!(controls.take_input().jump);
    }

    #[test]
    fn test_release_all() {
        let mut controls = Controls::new();
        controls.code_down("KeyR");
        controls.code_down("ArrowLeft");
        controls.pointer_down();
        controls.release_all();
        let input = controls.take_input();
        assert!(!input.restart && !input.decelerate && !input.jump);
    }

    #[test]
    fn test_autopilot_flag_is_forwarded() {
        let mut controls = Controls {
            autopilot: true,
            ..Default::default()
        };
        assert!(controls.take_input().autopilot);
        controls.autopilot = false;
        assert!(!controls.take_input().autopilot);
    }
}
