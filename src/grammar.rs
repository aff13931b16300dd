//! The Heighway dragon production system.
//!
//! Starting from the axiom `Fa`, every round rewrites each symbol independently:
//!
//! | symbol | successor |
//! |--------|-----------|
//! | `a`    | `aRbFR`   |
//! | `b`    | `LFaLb`   |
//! | `F`, `L`, `R`, other | itself |
//!
//! Expansion is exact up to the safety cutoff configured in
//! [`DragonConfig`]. Callers must read [`Expansion::depth_reached`] rather than
//! assume the requested depth was honored.

use crate::error::{DragonError, Result};
use crate::interpreter::DragonConfig;
use std::collections::HashMap;
use std::fmt;
use symbios::{SymbiosState, SymbolTable};
use tracing::{debug, warn};

/// The depth-0 sequence every expansion starts from.
pub const AXIOM: &str = "Fa";

/// One symbol of the dragon alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Non-terminal `a`. No movement effect.
    A,
    /// Non-terminal `b`. No movement effect.
    B,
    /// `F`: step forward.
    Forward,
    /// `L`: quarter turn counter-clockwise.
    Left,
    /// `R`: quarter turn clockwise.
    Right,
    /// Any character outside the alphabet. Rewrites to itself.
    Other(char),
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        match c {
            'a' => Symbol::A,
            'b' => Symbol::B,
            'F' => Symbol::Forward,
            'L' => Symbol::Left,
            'R' => Symbol::Right,
            other => Symbol::Other(other),
        }
    }
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::A => 'a',
            Symbol::B => 'b',
            Symbol::Forward => 'F',
            Symbol::Left => 'L',
            Symbol::Right => 'R',
            Symbol::Other(c) => c,
        }
    }

    /// Number of symbols produced when this symbol is rewritten.
    pub fn successor_len(self) -> usize {
        match self {
            Symbol::A | Symbol::B => 5,
            Symbol::Forward | Symbol::Left | Symbol::Right | Symbol::Other(_) => 1,
        }
    }

    fn successor_bytes(self) -> usize {
        match self {
            Symbol::Other(c) => c.len_utf8(),
            other => other.successor_len(),
        }
    }

    /// Appends the successor of this symbol to `out`.
    pub fn rewrite_into(self, out: &mut String) {
        match self {
            Symbol::A => out.push_str("aRbFR"),
            Symbol::B => out.push_str("LFaLb"),
            Symbol::Forward => out.push('F'),
            Symbol::Left => out.push('L'),
            Symbol::Right => out.push('R'),
            Symbol::Other(c) => out.push(c),
        }
    }
}

/// An ordered string of [`Symbol`]s.
///
/// Stored as text so that deep expansions cost one byte per symbol; iterate
/// with [`Sequence::symbols`] to get the typed view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    text: String,
    len: usize,
}

impl Sequence {
    /// The depth-0 sequence, `Fa`.
    pub fn axiom() -> Self {
        Self::from(AXIOM)
    }

    /// Length in symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + Clone + '_ {
        self.text.chars().map(Symbol::from)
    }

    /// Number of `F` symbols.
    pub fn forward_count(&self) -> usize {
        self.symbols().filter(|s| *s == Symbol::Forward).count()
    }

    /// Applies one round of the production rules.
    ///
    /// The successor's size is counted symbol by symbol before anything is
    /// written, so the buffer is reserved once. `round` is only used to label
    /// an allocation failure.
    pub fn rewrite(&self, round: u32) -> Result<Sequence> {
        let (len, bytes) = self.symbols().fold((0usize, 0usize), |(len, bytes), s| {
            (len + s.successor_len(), bytes + s.successor_bytes())
        });

        let mut text = String::new();
        text.try_reserve_exact(bytes)
            .map_err(|_| DragonError::Allocation {
                depth: round,
                symbols: len,
            })?;
        for symbol in self.symbols() {
            symbol.rewrite_into(&mut text);
        }

        Ok(Sequence { text, len })
    }

    /// Copies the sequence into a Symbios state, interning each distinct
    /// character in `interner`.
    pub fn to_symbios_state(&self, interner: &mut SymbolTable) -> Result<SymbiosState> {
        let mut ids: HashMap<Symbol, u16> = HashMap::new();
        let mut state = SymbiosState::new();
        let mut buf = [0u8; 4];

        for symbol in self.symbols() {
            let id = match ids.get(&symbol).copied() {
                Some(id) => id,
                None => {
                    let name: &str = symbol.as_char().encode_utf8(&mut buf);
                    interner
                        .intern(name)
                        .map_err(|e| DragonError::Symbios(format!("{e:?}")))?;
                    let id = interner.resolve_id(name).ok_or_else(|| {
                        DragonError::Symbios(format!("symbol {name:?} missing after intern"))
                    })?;
                    ids.insert(symbol, id);
                    id
                }
            };
            state
                .push(id, 0.0, &[])
                .map_err(|e| DragonError::Symbios(format!("{e:?}")))?;
        }

        Ok(state)
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            len: text.chars().count(),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Output of [`DragonGrammar::expand`].
#[derive(Clone, Debug)]
pub struct Expansion {
    /// The sequence after the last round that ran.
    pub sequence: Sequence,
    pub requested_depth: u32,
    /// Lower than `requested_depth` when the safety cutoff fired.
    pub depth_reached: u32,
    /// Sequence length after each round; index 0 is the axiom.
    pub round_lengths: Vec<usize>,
}

impl Expansion {
    pub fn truncated(&self) -> bool {
        self.depth_reached < self.requested_depth
    }
}

/// Expands the dragon grammar under a configurable safety cutoff.
#[derive(Clone, Copy, Debug)]
pub struct DragonGrammar {
    cutoff_length: usize,
    cutoff_round_limit: u32,
}

impl Default for DragonGrammar {
    fn default() -> Self {
        Self::new(&DragonConfig::default())
    }
}

impl DragonGrammar {
    pub fn new(config: &DragonConfig) -> Self {
        Self {
            cutoff_length: config.cutoff_length,
            cutoff_round_limit: config.cutoff_round_limit,
        }
    }

    /// Rewrites the axiom `depth` times.
    ///
    /// If a round numbered below `cutoff_round_limit` leaves more than
    /// `cutoff_length` symbols, expansion stops there and the shorter
    /// sequence is returned.
    pub fn expand(&self, depth: u32) -> Result<Expansion> {
        let mut sequence = Sequence::axiom();
        let mut round_lengths = vec![sequence.len()];
        debug!(round = 0, sequence = %sequence, "dragon round");

        let mut depth_reached = 0;
        for round in 1..=depth {
            sequence = sequence.rewrite(round)?;
            depth_reached = round;
            round_lengths.push(sequence.len());

            if round <= 5 {
                debug!(round, sequence = %sequence, "dragon round");
            } else if round <= 10 {
                debug!(round, length = sequence.len(), "dragon round");
            }

            if round < self.cutoff_round_limit && sequence.len() > self.cutoff_length {
                warn!(
                    round,
                    length = sequence.len(),
                    requested = depth,
                    "sequence exceeded the safety cutoff, stopping early"
                );
                break;
            }
        }

        Ok(Expansion {
            sequence,
            requested_depth: depth,
            depth_reached,
            round_lengths,
        })
    }
}

/// Expands the grammar to `depth` with the default cutoff.
pub fn expand(depth: u32) -> Result<Sequence> {
    Ok(DragonGrammar::default().expand(depth)?.sequence)
}
