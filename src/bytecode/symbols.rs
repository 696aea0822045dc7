use std::collections::HashMap;

/// Where a symbol lives at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolScope {
    /// Top-level binding; addressed through the globals array.
    Global,
    /// Function parameter or body binding; addressed relative to the
    /// call frame's base pointer.
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub scope: SymbolScope,
    pub index: usize,
}

/// One frame of the lexical symbol-table chain.
///
/// The root frame defines `Global` symbols; enclosed frames (one per
/// function literal being compiled) define `Local` symbols. Indices are
/// dense and 0-based per frame. Lookup walks outward.
#[derive(Debug, Default)]
pub struct SymbolTable {
    outer: Option<Box<SymbolTable>>,
    store: HashMap<String, Symbol>,
    num_defs: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// A fresh frame enclosing `outer`; definitions in it are `Local`.
    pub fn enclosed(outer: SymbolTable) -> Self {
        SymbolTable {
            outer: Some(Box::new(outer)),
            store: HashMap::new(),
            num_defs: 0,
        }
    }

    /// Gives back the enclosing frame, discarding this one.
    pub fn into_outer(self) -> Option<SymbolTable> {
        self.outer.map(|boxed| *boxed)
    }

    /// Number of definitions made in this frame; for a function's frame
    /// this is its final `num_locals`.
    pub fn num_definitions(&self) -> usize {
        self.num_defs
    }

    pub fn define(&mut self, name: &str) -> Symbol {
        let scope = if self.outer.is_none() {
            SymbolScope::Global
        } else {
            SymbolScope::Local
        };
        let symbol = Symbol {
            name: name.to_string(),
            scope,
            index: self.num_defs,
        };
        self.store.insert(name.to_string(), symbol.clone());
        self.num_defs += 1;
        symbol
    }

    /// Searches this frame, then each enclosing frame in turn.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        match self.store.get(name) {
            Some(symbol) => Some(symbol),
            None => self.outer.as_deref().and_then(|outer| outer.resolve(name)),
        }
    }
}
