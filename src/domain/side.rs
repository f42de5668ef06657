//! Which reserve receives the input of a swap.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// The asset a trader sells into the pool.
///
/// A swap with `Side::AssetX` adds to the X reserve and pays out Y;
/// `Side::AssetY` does the reverse.
///
/// Text parsing is case-sensitive and accepts exactly `"X"` and `"Y"`.
///
/// # Examples
///
/// ```
/// use token_swap::domain::Side;
///
/// assert_eq!("X".parse::<Side>(), Ok(Side::AssetX));
/// assert!("x".parse::<Side>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Sell asset X, receive asset Y.
    AssetX,
    /// Sell asset Y, receive asset X.
    AssetY,
}

impl Side {
    /// Returns the asset paid out for this input side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::AssetX => Self::AssetY,
            Self::AssetY => Self::AssetX,
        }
    }

    /// Returns the single-letter label (`"X"` or `"Y"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AssetX => "X",
            Self::AssetY => "Y",
        }
    }
}

impl FromStr for Side {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::AssetX),
            "Y" => Ok(Self::AssetY),
            _ => Err(AmmError::InvalidSide),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
