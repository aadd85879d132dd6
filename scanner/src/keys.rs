//! Key press decoding.

use crate::constants::keys::{CODE_MASK, ESCAPE, QUIT, SPACE};

/// What a key press asks the scan loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Space: one-shot depth capture of the current frame
    Capture,
    /// Esc or `q`: stop the loop
    Quit,
    /// Anything else, or no key at all
    Ignore,
}

impl KeyAction {
    /// Decodes the result of a key poll.
    ///
    /// Only the low byte of the code is compared, since some window backends
    /// set modifier flags in the upper bits.
    pub fn from_code(code: Option<i32>) -> Self {
        let Some(code) = code else {
            return KeyAction::Ignore;
        };

        match code & CODE_MASK {
            SPACE => KeyAction::Capture,
            ESCAPE | QUIT => KeyAction::Quit,
            _ => KeyAction::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keys() {
        assert_eq!(KeyAction::from_code(Some(32)), KeyAction::Capture);
        assert_eq!(KeyAction::from_code(Some(27)), KeyAction::Quit);
        assert_eq!(KeyAction::from_code(Some(i32::from(b'q'))), KeyAction::Quit);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(KeyAction::from_code(None), KeyAction::Ignore);
        assert_eq!(KeyAction::from_code(Some(i32::from(b'Q'))), KeyAction::Ignore);
        assert_eq!(KeyAction::from_code(Some(13)), KeyAction::Ignore);
    }

    #[test]
    fn test_modifier_bits_are_masked() {
        assert_eq!(KeyAction::from_code(Some(0x10_0000 | 27)), KeyAction::Quit);
        assert_eq!(KeyAction::from_code(Some(0x10_0000 | 32)), KeyAction::Capture);
    }
}
