//! Bracket alphabets and the per-step symbol slices offered to the walk.

/// Character with no structural role; it only pads the output and is ignored
/// by any balance or depth accounting.
pub const FILLER: char = 'x';

/// Output of a degenerate generation (active threshold of zero).
pub const SENTINEL: &str = "X";

/// A bracket family with a distinct open/close character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    Round,
    Square,
    Curly,
}

impl BracketKind {
    /// All bracket kinds, in the order the multi-type alphabet offers them.
    pub const ALL: [BracketKind; 3] = [BracketKind::Round, BracketKind::Square, BracketKind::Curly];

    /// The opening character of this kind.
    pub fn open(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    /// The closing character of this kind.
    pub fn close(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }
}

/// Which bracket families a generation run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Round brackets only.
    Simple,
    /// Round, square and curly brackets.
    MultiType,
}

impl Alphabet {
    /// The bracket kinds available in this alphabet.
    pub fn kinds(self) -> &'static [BracketKind] {
        match self {
            Alphabet::Simple => &[BracketKind::Round],
            Alphabet::MultiType => &BracketKind::ALL,
        }
    }

    /// Candidates while the open-bracket stack is empty: the filler plus one
    /// opener per kind.
    pub fn start_slice(self) -> Vec<Symbol> {
        let mut slice = vec![Symbol::Filler];
        slice.extend(self.kinds().iter().map(|&kind| Symbol::Open(kind)));
        slice
    }

    /// Candidates while the stack is non-empty and the threshold is not yet
    /// met: the filler, every opener, and the closer matching the current top
    /// of the stack.
    pub fn pre_threshold_slice(self, top: BracketKind) -> Vec<Symbol> {
        let mut slice = self.start_slice();
        slice.push(Symbol::Close(top));
        slice
    }

    /// Candidates once the threshold is met: only the matching closer and the
    /// filler, so the walk converges toward an empty stack.
    pub fn post_threshold_slice(self, top: BracketKind) -> Vec<Symbol> {
        vec![Symbol::Close(top), Symbol::Filler]
    }
}

/// One drawable step of the walk, tagged with the bracket kind it affects.
///
/// Closers are only ever constructed for the kind currently on top of the
/// stack, so a `Close` never mismatches by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Filler,
    Open(BracketKind),
    Close(BracketKind),
}

impl Symbol {
    /// The character this symbol appends to the output.
    pub fn emit(self) -> char {
        match self {
            Symbol::Filler => FILLER,
            Symbol::Open(kind) => kind.open(),
            Symbol::Close(kind) => kind.close(),
        }
    }
}
