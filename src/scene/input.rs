//! Logical key model and input snapshot
//!
//! The core never talks to the DOM. It reads an `InputSnapshot` copied from
//! the latest keyboard state once per tick. Shift is a modifier flag, not a
//! distinct key; unknown keys simply report not-held.

/// Logical keys the demo responds to (case-insensitive identity)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Speed multiplier: shift = faster, plain = slower
    H,
    /// Speed multiplier: always slower (with or without shift)
    D,
    /// Shoulder rotation
    S,
    /// Elbow rotation
    E,
    /// Finger + thumb curl
    F,
    /// View orbit around X
    X,
    /// View orbit around Y
    Y,
    /// Finger base axis X
    A,
    /// Finger base axis X, inverted partner of A
    B,
    /// Finger base axis Y
    M,
    /// Finger base axis Y, inverted partner of M
    N,
    /// Toggle wire/solid shape
    T,
    /// Toggle perspective/orthographic projection
    P,
}

/// Number of logical keys (array-indexed storage)
pub const KEY_COUNT: usize = 13;

pub const ALL_KEYS: [Key; KEY_COUNT] = [
    Key::H,
    Key::D,
    Key::S,
    Key::E,
    Key::F,
    Key::X,
    Key::Y,
    Key::A,
    Key::B,
    Key::M,
    Key::N,
    Key::T,
    Key::P,
];

impl Key {
    /// Index into held-state arrays
    pub fn index(self) -> usize {
        match self {
            Key::H => 0,
            Key::D => 1,
            Key::S => 2,
            Key::E => 3,
            Key::F => 4,
            Key::X => 5,
            Key::Y => 6,
            Key::A => 7,
            Key::B => 8,
            Key::M => 9,
            Key::N => 10,
            Key::T => 11,
            Key::P => 12,
        }
    }

    /// Map a DOM `KeyboardEvent.key` string to a logical key.
    ///
    /// Accepts either case ("s" and "S" are the same key; shift arrives
    /// separately). Anything else is not a demo key.
    pub fn from_event_key(key: &str) -> Option<Key> {
        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None; // "Shift", "ArrowUp", etc.
        }
        match c.to_ascii_uppercase() {
            'H' => Some(Key::H),
            'D' => Some(Key::D),
            'S' => Some(Key::S),
            'E' => Some(Key::E),
            'F' => Some(Key::F),
            'X' => Some(Key::X),
            'Y' => Some(Key::Y),
            'A' => Some(Key::A),
            'B' => Some(Key::B),
            'M' => Some(Key::M),
            'N' => Some(Key::N),
            'T' => Some(Key::T),
            'P' => Some(Key::P),
            _ => None,
        }
    }
}

/// Immutable copy of the keyboard state as of the latest sampled frame
#[derive(Clone, Copy, Default)]
pub struct InputSnapshot {
    held: [bool; KEY_COUNT],
    shift: bool,
}

impl InputSnapshot {
    pub fn new(held: [bool; KEY_COUNT], shift: bool) -> Self {
        Self { held, shift }
    }

    /// Is this logical key currently held?
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn shift_held(&self) -> bool {
        self.shift
    }

    /// Snapshot with a single key held (test and doc convenience)
    pub fn single(key: Key, shift: bool) -> Self {
        let mut held = [false; KEY_COUNT];
        held[key.index()] = true;
        Self { held, shift }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_key_mapping_case_insensitive() {
        assert_eq!(Key::from_event_key("s"), Some(Key::S));
        assert_eq!(Key::from_event_key("S"), Some(Key::S));
        assert_eq!(Key::from_event_key("p"), Some(Key::P));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(Key::from_event_key("Shift"), None);
        assert_eq!(Key::from_event_key("q"), None);
        assert_eq!(Key::from_event_key(""), None);
    }

    #[test]
    fn test_snapshot_unset_keys_report_not_held() {
        let snap = InputSnapshot::single(Key::F, true);
        assert!(snap.is_held(Key::F));
        assert!(snap.shift_held());
        assert!(!snap.is_held(Key::S));
    }

    #[test]
    fn test_key_indices_unique() {
        for (i, k) in ALL_KEYS.iter().enumerate() {
            assert_eq!(k.index(), i);
        }
    }
}
