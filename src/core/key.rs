//! Canonical input key: a numeric code plus the character it decodes to.
//!
//! Printable and control characters use their code point as the code, so
//! `Key::from('A') == Key::from(65)` and `"^A".parse::<Key>()? == Key::from(1)`.
//! Keys with no character (arrows, paging, resize, ...) live above the
//! Unicode range.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

const SPECIAL: i32 = 0x11_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    code: i32,
    ch: Option<char>,
}

impl Key {
    /// "No key": the synthetic idle event dispatched when no input arrived.
    pub const NONE: Key = Key::new(-1);

    pub const TAB: Key = Key::new(9);
    pub const ENTER: Key = Key::new(10);
    pub const ESC: Key = Key::new(27);
    pub const DEL: Key = Key::new(127);
    /// ^H, sent as backspace by some terminals.
    pub const BS: Key = Key::new(8);

    pub const DOWN: Key = Key::new(SPECIAL + 1);
    pub const UP: Key = Key::new(SPECIAL + 2);
    pub const LEFT: Key = Key::new(SPECIAL + 3);
    pub const RIGHT: Key = Key::new(SPECIAL + 4);
    pub const HOME: Key = Key::new(SPECIAL + 5);
    pub const END: Key = Key::new(SPECIAL + 6);
    pub const PAGE_UP: Key = Key::new(SPECIAL + 7);
    pub const PAGE_DOWN: Key = Key::new(SPECIAL + 8);
    pub const INSERT: Key = Key::new(SPECIAL + 9);
    pub const DELETE: Key = Key::new(SPECIAL + 10);
    pub const BACKSPACE: Key = Key::new(SPECIAL + 11);
    pub const BACK_TAB: Key = Key::new(SPECIAL + 12);
    pub const RESIZE: Key = Key::new(SPECIAL + 13);
    pub const CTRL_HOME: Key = Key::new(SPECIAL + 14);
    pub const CTRL_END: Key = Key::new(SPECIAL + 15);
    pub const ALT_UP: Key = Key::new(SPECIAL + 16);
    pub const ALT_DOWN: Key = Key::new(SPECIAL + 17);

    pub const fn new(code: i32) -> Self {
        let ch = if code < 0 {
            None
        } else {
            char::from_u32(code as u32)
        };
        Self { code, ch }
    }

    /// Control shorthand `^letter`. `letter` must be ASCII alphabetic.
    pub const fn ctrl(letter: char) -> Self {
        let upper = letter.to_ascii_uppercase() as i32;
        Self::new(upper - 'A' as i32 + 1)
    }

    /// Function key `F(n)`.
    pub const fn f(n: u8) -> Self {
        Self::new(SPECIAL + 0x100 + n as i32)
    }

    /// Build a key from a single character or a `^X` control shorthand.
    pub fn parse(spec: &str) -> Result<Self, Error> {
        let mut chars = spec.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(ch), None, _) => Ok(Self::from(ch)),
            (Some('^'), Some(letter), None) if letter.is_ascii_alphabetic() => {
                Ok(Self::ctrl(letter))
            }
            _ => Err(Error::InvalidKeySpec(spec.to_string())),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn ch(&self) -> Option<char> {
        self.ch
    }

    /// Any real key press. `Key::NONE` and other non-positive codes are not.
    pub fn is_pressed(&self) -> bool {
        self.code > 0
    }

    pub fn is_printable(&self) -> bool {
        self.ch.is_some_and(|ch| !ch.is_control())
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<i32> for Key {
    fn from(code: i32) -> Self {
        Self::new(code)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Self {
            code: ch as i32,
            ch: Some(ch),
        }
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        self.code == *other
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, other: &char) -> bool {
        self.ch == Some(*other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        Key::parse(other).is_ok_and(|k| k == *self)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ch {
            Some(ch) => write!(f, "{} ({:?})", self.code, ch),
            None => write!(f, "{} ('')", self.code),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/key.rs"]
mod tests;
