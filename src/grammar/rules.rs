// src/grammar/rules.rs
//
// The Damson document grammar as reusable static data. These productions
// cover the declaration skeleton the recursive-descent parsers walk (the
// statement and expression levels join once their grammar settles); a
// table-driven parser builds its LL(1) table from the cached FIRST and
// FOLLOW sets below.

use std::sync::OnceLock;

use crate::token::Leaf;

use super::{
    GrammarRule, ProdSets, Root, Symbol, SymbolSets, collect_productions, first_sets as firsts_of,
    follow_sets as follows_of,
};

fn leaf(l: Leaf) -> Symbol {
    l.into()
}

fn root(r: Root) -> Symbol {
    r.into()
}

/// `document -> includes docbody`
pub struct DocumentRule;

impl GrammarRule for DocumentRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![(
            root(Root::Document),
            vec![root(Root::Includes), root(Root::DocBody)],
        )]
    }
}

/// `includes -> import includes | ε`
pub struct IncludesRule;

impl GrammarRule for IncludesRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![
            (
                root(Root::Includes),
                vec![root(Root::Import), root(Root::Includes)],
            ),
            (root(Root::Includes), vec![Symbol::EPSILON]),
        ]
    }
}

/// `import -> 'using' idchain ';'`
pub struct ImportRule;

impl GrammarRule for ImportRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![(
            root(Root::Import),
            vec![leaf(Leaf::KwUsing), root(Root::IdChain), leaf(Leaf::Semicolon)],
        )]
    }
}

/// `idchain -> identifier accchain` with
/// `accchain -> '.' identifier accchain | ε`
pub struct IdChainRule;

impl GrammarRule for IdChainRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![
            (
                root(Root::IdChain),
                vec![leaf(Leaf::Identifier), root(Root::AccChain)],
            ),
            (
                root(Root::AccChain),
                vec![leaf(Leaf::Dot), leaf(Leaf::Identifier), root(Root::AccChain)],
            ),
            (root(Root::AccChain), vec![Symbol::EPSILON]),
        ]
    }
}

/// `docbody -> module docbody | variable docbody | object docbody | ε` with
/// `module -> 'module' idchain ';'`
pub struct DocBodyRule;

impl GrammarRule for DocBodyRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![
            (
                root(Root::DocBody),
                vec![root(Root::Module), root(Root::DocBody)],
            ),
            (
                root(Root::DocBody),
                vec![root(Root::Variable), root(Root::DocBody)],
            ),
            (
                root(Root::DocBody),
                vec![root(Root::Object), root(Root::DocBody)],
            ),
            (root(Root::DocBody), vec![Symbol::EPSILON]),
            (
                root(Root::Module),
                vec![leaf(Leaf::KwModule), root(Root::IdChain), leaf(Leaf::Semicolon)],
            ),
        ]
    }
}

/// `variable -> 'var' identifier vartype ';'` with
/// `vartype -> ':' idchain | ε`
pub struct VariableRule;

impl GrammarRule for VariableRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![
            (
                root(Root::Variable),
                vec![
                    leaf(Leaf::KwVar),
                    leaf(Leaf::Identifier),
                    root(Root::VarType),
                    leaf(Leaf::Semicolon),
                ],
            ),
            (
                root(Root::VarType),
                vec![leaf(Leaf::Colon), root(Root::IdChain)],
            ),
            (root(Root::VarType), vec![Symbol::EPSILON]),
        ]
    }
}

/// `object -> 'object' identifier objbody` with
/// `objbody -> '{' objcont '}'` and `objcont -> variable objcont | ε`
pub struct ObjectRule;

impl GrammarRule for ObjectRule {
    fn productions(&self) -> Vec<(Symbol, Vec<Symbol>)> {
        vec![
            (
                root(Root::Object),
                vec![leaf(Leaf::KwObject), leaf(Leaf::Identifier), root(Root::ObjBody)],
            ),
            (
                root(Root::ObjBody),
                vec![leaf(Leaf::LBrace), root(Root::ObjCont), leaf(Leaf::RBrace)],
            ),
            (
                root(Root::ObjCont),
                vec![root(Root::Variable), root(Root::ObjCont)],
            ),
            (root(Root::ObjCont), vec![Symbol::EPSILON]),
        ]
    }
}

/// The merged production set of the document grammar. Rule order matches
/// declaration order above.
pub fn prod_sets() -> &'static ProdSets {
    static CACHE: OnceLock<ProdSets> = OnceLock::new();
    CACHE.get_or_init(|| {
        let rules: [&dyn GrammarRule; 7] = [
            &DocumentRule,
            &IncludesRule,
            &ImportRule,
            &IdChainRule,
            &DocBodyRule,
            &VariableRule,
            &ObjectRule,
        ];
        collect_productions(&rules)
    })
}

/// FIRST sets of the document grammar. Computed once per process; the
/// returned reference is immutable and safe to share across threads.
pub fn first_sets() -> &'static SymbolSets {
    static CACHE: OnceLock<SymbolSets> = OnceLock::new();
    CACHE.get_or_init(|| firsts_of(prod_sets()))
}

/// FOLLOW sets of the document grammar, seeded from the `document` start
/// symbol. Same caching contract as [`first_sets`].
pub fn follow_sets() -> &'static SymbolSets {
    static CACHE: OnceLock<SymbolSets> = OnceLock::new();
    CACHE.get_or_init(|| follows_of(prod_sets(), Root::Document.into(), first_sets()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(symbols: &[Symbol]) -> BTreeSet<Symbol> {
        symbols.iter().copied().collect()
    }

    #[test]
    fn production_set_covers_every_root() {
        let prods = prod_sets();
        for root in [
            Root::Document,
            Root::DocBody,
            Root::Includes,
            Root::Import,
            Root::Module,
            Root::Variable,
            Root::VarType,
            Root::Object,
            Root::ObjBody,
            Root::ObjCont,
            Root::IdChain,
            Root::AccChain,
        ] {
            assert!(
                prods.contains_key(&Symbol::from(root)),
                "no production for {root:?}"
            );
        }
    }

    #[test]
    fn import_first_set_is_the_using_keyword() {
        let firsts = first_sets();
        assert_eq!(
            firsts[&Symbol::from(Root::Import)],
            set(&[Leaf::KwUsing.into()])
        );
        assert_eq!(
            firsts[&Symbol::from(Root::Includes)],
            set(&[Leaf::KwUsing.into(), Symbol::EPSILON])
        );
    }

    #[test]
    fn document_first_set_unions_its_parts() {
        let firsts = first_sets();
        assert_eq!(
            firsts[&Symbol::from(Root::Document)],
            set(&[
                Leaf::KwUsing.into(),
                Leaf::KwModule.into(),
                Leaf::KwVar.into(),
                Leaf::KwObject.into(),
                Symbol::EPSILON,
            ])
        );
    }

    #[test]
    fn idchain_follow_set_is_the_terminator() {
        let follows = follow_sets();
        assert_eq!(
            follows[&Symbol::from(Root::IdChain)],
            set(&[Leaf::Semicolon.into()])
        );
        assert_eq!(
            follows[&Symbol::from(Root::AccChain)],
            set(&[Leaf::Semicolon.into()])
        );
    }

    #[test]
    fn document_follow_set_is_end_of_input() {
        let follows = follow_sets();
        assert_eq!(follows[&Symbol::from(Root::Document)], set(&[Symbol::END]));
        assert_eq!(follows[&Symbol::from(Root::DocBody)], set(&[Symbol::END]));
    }

    #[test]
    fn variable_follow_set_spans_both_contexts() {
        // A variable ends inside a document body or an object body.
        let follows = follow_sets();
        assert_eq!(
            follows[&Symbol::from(Root::Variable)],
            set(&[
                Leaf::KwModule.into(),
                Leaf::KwVar.into(),
                Leaf::KwObject.into(),
                Leaf::RBrace.into(),
                Symbol::END,
            ])
        );
    }

    #[test]
    fn cached_accessors_return_the_same_instance() {
        assert!(std::ptr::eq(prod_sets(), prod_sets()));
        assert!(std::ptr::eq(first_sets(), first_sets()));
        assert!(std::ptr::eq(follow_sets(), follow_sets()));
    }
}
