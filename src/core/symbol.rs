//! Directional input symbols and symbol sequences.
//!
//! The input alphabet is finite: four directional symbols, written in their
//! single-character form (`W`, `S`, `A`, `D`) when sequences are displayed
//! or parsed. Everything here is a pure value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One discrete directional input unit.
///
/// Symbols arrive already decoded; how a host maps physical keys onto them
/// is outside this crate.
///
/// # Example
///
/// ```rust
/// use comborec::core::Symbol;
///
/// assert_eq!(Symbol::Up.as_char(), 'W');
/// assert_eq!(Symbol::from_char('A'), Some(Symbol::Left));
/// assert_eq!(Symbol::from_char('X'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    Up,
    Down,
    Left,
    Right,
}

impl Symbol {
    /// Fixed polling order for resolving multi-key-per-tick ties.
    ///
    /// When several symbols are pressed within the same tick, hosts must
    /// deliver them in this order rather than arrival order, so ties are
    /// resolved deterministically.
    pub const POLL_ORDER: [Symbol; 4] = [Symbol::Up, Symbol::Left, Symbol::Down, Symbol::Right];

    /// The single-character form of this symbol.
    pub fn as_char(self) -> char {
        match self {
            Self::Up => 'W',
            Self::Down => 'S',
            Self::Left => 'A',
            Self::Right => 'D',
        }
    }

    /// Decode a symbol from its single-character form.
    ///
    /// Returns `None` for characters outside the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(Self::Up),
            'S' => Some(Self::Down),
            'A' => Some(Self::Left),
            'D' => Some(Self::Right),
            _ => None,
        }
    }

    /// Get the symbol's name for display/logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Arrange a set of symbols pressed within one tick into the fixed
/// polling order, dropping duplicates.
///
/// # Example
///
/// ```rust
/// use comborec::core::{in_poll_order, Symbol};
///
/// let pressed = [Symbol::Right, Symbol::Up, Symbol::Right];
/// assert_eq!(in_poll_order(&pressed), vec![Symbol::Up, Symbol::Right]);
/// ```
pub fn in_poll_order(pressed: &[Symbol]) -> Vec<Symbol> {
    Symbol::POLL_ORDER
        .into_iter()
        .filter(|s| pressed.contains(s))
        .collect()
}

/// Error parsing a sequence from its string form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown symbol character '{character}' at position {position}")]
pub struct ParseSequenceError {
    /// The offending character
    pub character: char,
    /// 0-based position within the input string
    pub position: usize,
}

/// An ordered sequence of symbols.
///
/// Sequences are the currency of the whole engine: catalog keys, queue
/// entries, requirements, and the input buffer are all sequences. They
/// parse from and display as the single-character form, and serialize
/// as that string.
///
/// # Example
///
/// ```rust
/// use comborec::core::{Sequence, Symbol};
///
/// let seq: Sequence = "WSWS".parse().unwrap();
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.get(1), Some(Symbol::Down));
/// assert_eq!(seq.to_string(), "WSWS");
///
/// assert!("WXWS".parse::<Sequence>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of symbols in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the sequence holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the symbol at a 0-based index.
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.0.get(index).copied()
    }

    /// Append one symbol.
    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol);
    }

    /// Reset the sequence to empty.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// View the underlying symbols.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl FromStr for Sequence {
    type Err = ParseSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = Vec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            let symbol = Symbol::from_char(character).ok_or(ParseSequenceError {
                character,
                position,
            })?;
            symbols.push(symbol);
        }
        Ok(Self(symbols))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Sequence {
    type Error = ParseSequenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_char_roundtrip() {
        for symbol in Symbol::POLL_ORDER {
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
        }
    }

    #[test]
    fn unknown_character_is_rejected() {
        assert_eq!(Symbol::from_char('V'), None);
        assert_eq!(Symbol::from_char('w'), None);
    }

    #[test]
    fn poll_order_matches_wasd() {
        let chars: String = Symbol::POLL_ORDER.iter().map(|s| s.as_char()).collect();
        assert_eq!(chars, "WASD");
    }

    #[test]
    fn in_poll_order_is_deterministic() {
        let a = [Symbol::Down, Symbol::Up];
        let b = [Symbol::Up, Symbol::Down];
        assert_eq!(in_poll_order(&a), in_poll_order(&b));
        assert_eq!(in_poll_order(&a), vec![Symbol::Up, Symbol::Down]);
    }

    #[test]
    fn in_poll_order_drops_duplicates() {
        let pressed = [Symbol::Left, Symbol::Left, Symbol::Left];
        assert_eq!(in_poll_order(&pressed), vec![Symbol::Left]);
    }

    #[test]
    fn sequence_parses_from_string_form() {
        let seq: Sequence = "WSAD".parse().unwrap();
        assert_eq!(
            seq.symbols(),
            &[Symbol::Up, Symbol::Down, Symbol::Left, Symbol::Right]
        );
    }

    #[test]
    fn sequence_parse_reports_position() {
        let err = "WSXD".parse::<Sequence>().unwrap_err();
        assert_eq!(err.character, 'X');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn empty_string_parses_to_empty_sequence() {
        let seq: Sequence = "".parse().unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn sequence_display_roundtrip() {
        let seq: Sequence = "DADA".parse().unwrap();
        assert_eq!(seq.to_string(), "DADA");
    }

    #[test]
    fn sequence_push_and_clear() {
        let mut seq = Sequence::new();
        seq.push(Symbol::Up);
        seq.push(Symbol::Down);
        assert_eq!(seq.len(), 2);
        seq.clear();
        assert!(seq.is_empty());
    }

    #[test]
    fn sequence_serializes_as_string() {
        let seq: Sequence = "SSS".parse().unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"SSS\"");
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn invalid_string_fails_deserialization() {
        let result: Result<Sequence, _> = serde_json::from_str("\"V-Pose\"");
        assert!(result.is_err());
    }
}
