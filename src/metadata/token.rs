//! Member identity tokens.
//!
//! Every declared member receives a [`Token`] when its class is built. Tokens only
//! identify a member for lookup and reporting; they carry no ownership.

use std::fmt;

use strum::EnumIter;

/// The kind of entity a [`Token`] refers to, stored in the token's high byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumIter)]
#[repr(u8)]
pub enum TokenKind {
    /// A class definition
    Class = 0x01,
    /// A declared constructor
    Constructor = 0x02,
    /// A declared method
    Method = 0x03,
    /// A declared field
    Field = 0x04,
}

impl TokenKind {
    /// Map a raw kind byte back to its kind, `None` for unknown values
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(TokenKind::Class),
            0x02 => Some(TokenKind::Constructor),
            0x03 => Some(TokenKind::Method),
            0x04 => Some(TokenKind::Field),
            _ => None,
        }
    }
}

/// Identity of a class or a declared member.
///
/// The high byte holds the [`TokenKind`], the low 24 bits the 1-based row in
/// declaration order. Tokens of the same kind order by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u32);

impl Token {
    /// Creates a token for the given kind and row, rows beyond 24 bits are truncated
    #[must_use]
    pub fn from_parts(kind: TokenKind, row: u32) -> Self {
        Token((u32::from(kind as u8) << 24) | (row & 0x00FF_FFFF))
    }

    /// The kind of entity, `None` if the high byte is not a known kind
    #[must_use]
    pub fn kind(&self) -> Option<TokenKind> {
        TokenKind::from_byte((self.0 >> 24) as u8)
    }

    /// The row within its kind
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
