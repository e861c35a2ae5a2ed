use std::fmt;

use oxlens_syntax::TextRange;

use crate::model::{NamedEntity, SourceIndex};

/// Label used for declarations the builder could not name.
pub const ANONYMOUS: &str = "<anonymous>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Struct,
    Enum,
    Impl,
    TraitImpl,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Function => "fn",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Impl => "impl",
            Self::TraitImpl => "trait impl",
        };
        f.write_str(label)
    }
}

/// One entry of a file outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub range: TextRange,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.kind, self.name, self.range)
    }
}

impl SourceIndex {
    /// Flat outline of every declaration, ordered by start offset.
    ///
    /// Doc comments are not part of the outline.
    pub fn symbols(&self) -> Vec<Symbol> {
        let functions = self.functions.iter().map(|function| Symbol {
            kind: SymbolKind::Function,
            name: function.name().unwrap_or(ANONYMOUS).to_string(),
            range: function.range,
        });
        let entities = [
            (SymbolKind::Struct, &self.structs),
            (SymbolKind::Enum, &self.enums),
            (SymbolKind::Impl, &self.impls),
            (SymbolKind::TraitImpl, &self.trait_impls),
        ]
        .into_iter()
        .flat_map(|(kind, entities)| {
            entities
                .iter()
                .map(move |entity| entity_symbol(kind, entity))
        });

        let mut symbols: Vec<_> = functions.chain(entities).collect();
        // Stable: enclosing declarations sharing a start keep their relative order.
        symbols.sort_by_key(|symbol| symbol.range.start);
        symbols
    }
}

fn entity_symbol(kind: SymbolKind, entity: &NamedEntity) -> Symbol {
    Symbol {
        kind,
        name: entity.name().unwrap_or(ANONYMOUS).to_string(),
        range: entity.range,
    }
}
