use std::ops::{BitOr, BitOrAssign};

/// Cell attribute bitmask. The engine only ever needs reverse video, bold and dim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Attr(u8);

impl Attr {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const REVERSE: Self = Self(1 << 2);
    /// Highlight attribute, an alias of reverse video.
    pub const STANDOUT: Self = Self::REVERSE;

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `attr` if `cond` holds, else no attribute.
    pub fn when(cond: bool, attr: Self) -> Self {
        if cond {
            attr
        } else {
            Self::NONE
        }
    }
}

impl BitOr for Attr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Attr {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
