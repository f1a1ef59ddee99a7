// src/grammar/mod.rs
//
// LL(1) grammar support: the unified symbol model over terminals and
// non-terminals, production collection, and the FIRST/FOLLOW set
// computations a table builder consumes. The computations are pure
// functions of the production set; the language's own productions and
// their process-wide caches live in `rules`.

pub mod rules;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::token::{LEAF_UPPER_LIMIT, Leaf};

/// The non-terminals of the Damson grammar. Values start at
/// [`LEAF_UPPER_LIMIT`], which keeps them disjoint from every [`Leaf`]
/// inside a shared [`Symbol`] space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum Root {
    Document = LEAF_UPPER_LIMIT,
    DocBody,
    Includes,
    Import,
    Module,
    Variable,
    VarType,
    Object,
    ObjBody,
    ObjCont,
    IdChain,
    AccChain,
}

/// A grammar symbol: a signed 16-bit value that is a terminal below
/// [`LEAF_UPPER_LIMIT`] and a non-terminal at or above it.
///
/// Two sentinels share the space: [`Symbol::EPSILON`] marks an empty
/// production body and [`Symbol::END`] the end of input. Both compare as
/// terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(i16);

impl Symbol {
    /// The empty production, `ε`.
    pub const EPSILON: Symbol = Symbol(-1);
    /// The end-of-input sentinel, `$`.
    pub const END: Symbol = Symbol(-2);

    pub const fn new(value: i16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i16 {
        self.0
    }

    /// Whether the symbol is a terminal.
    pub const fn is_leaf(self) -> bool {
        self.0 < LEAF_UPPER_LIMIT
    }
}

impl From<Leaf> for Symbol {
    fn from(leaf: Leaf) -> Self {
        Symbol(leaf as i16)
    }
}

impl From<Root> for Symbol {
    fn from(root: Root) -> Self {
        Symbol(root as i16)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::EPSILON => f.write_str("ε"),
            Symbol::END => f.write_str("$"),
            Symbol(value) => write!(f, "{value}"),
        }
    }
}

/// Productions keyed by head. A head may have several alternative bodies;
/// bodies keep their declaration order.
pub type ProdSets = BTreeMap<Symbol, Vec<Vec<Symbol>>>;

/// FIRST or FOLLOW sets keyed by non-terminal.
pub type SymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// A grammar rule: one unit of the grammar contributing productions, the
/// way a lexical rule contributes one token family.
pub trait GrammarRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)>;
}

/// Merge the productions of every rule into one production set.
pub fn collect_productions(rules: &[&dyn GrammarRule]) -> ProdSets {
    let mut sets = ProdSets::new();
    for rule in rules {
        for (head, body) in rule.productions() {
            sets.entry(head).or_default().push(body);
        }
    }
    sets
}

/// FIRST of a symbol sequence.
///
/// Walks the sequence left to right: a terminal contributes itself and
/// stops; a non-terminal contributes its FIRST set minus `ε` and stops
/// unless it is nullable. A sequence whose every symbol is nullable (or an
/// empty sequence) contributes `ε`.
pub fn first_of(sequence: &[Symbol], firsts: &SymbolSets) -> BTreeSet<Symbol> {
    let mut result = BTreeSet::new();
    for symbol in sequence {
        if symbol.is_leaf() {
            result.insert(*symbol);
            return result;
        }

        let Some(set) = firsts.get(symbol) else {
            return result;
        };
        result.extend(set.iter().copied().filter(|s| *s != Symbol::EPSILON));
        if !set.contains(&Symbol::EPSILON) {
            return result;
        }
    }
    result.insert(Symbol::EPSILON);
    result
}

/// Compute the FIRST set of every head in the production set.
///
/// Runs to a fix-point, iterating the productions in reverse order each
/// pass; the reverse order converges faster on grammars written top-down
/// but is not load-bearing.
pub fn first_sets(prods: &ProdSets) -> SymbolSets {
    let mut firsts: SymbolSets = prods.keys().map(|head| (*head, BTreeSet::new())).collect();

    let mut changed = true;
    while changed {
        changed = false;
        for (head, bodies) in prods.iter().rev() {
            for body in bodies {
                let first = first_of(body, &firsts);
                let set = firsts.entry(*head).or_default();
                for symbol in first {
                    changed |= set.insert(symbol);
                }
            }
        }
    }
    firsts
}

/// Compute the FOLLOW set of every head in the production set.
///
/// Seeds `FOLLOW(start) = {$}` and runs the usual propagation to a
/// fix-point: for each production `H → α N β`, `FOLLOW(N)` gains
/// `FIRST(β) \ {ε}`, plus `FOLLOW(H)` when `β` is nullable.
pub fn follow_sets(prods: &ProdSets, start: Symbol, firsts: &SymbolSets) -> SymbolSets {
    let mut follows: SymbolSets = prods.keys().map(|head| (*head, BTreeSet::new())).collect();
    follows.entry(start).or_default().insert(Symbol::END);

    let mut changed = true;
    while changed {
        changed = false;
        for (head, bodies) in prods.iter().rev() {
            for body in bodies {
                for (index, symbol) in body.iter().enumerate() {
                    if symbol.is_leaf() {
                        continue;
                    }

                    let tail_first = first_of(&body[index + 1..], firsts);
                    let mut additions: BTreeSet<Symbol> = tail_first
                        .iter()
                        .copied()
                        .filter(|s| *s != Symbol::EPSILON)
                        .collect();
                    if tail_first.contains(&Symbol::EPSILON)
                        && let Some(head_follows) = follows.get(head)
                    {
                        additions.extend(head_follows.iter().copied());
                    }

                    let set = follows.entry(*symbol).or_default();
                    for addition in additions {
                        changed |= set.insert(addition);
                    }
                }
            }
        }
    }
    follows
}
