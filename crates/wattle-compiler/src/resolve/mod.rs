//! Name resolution: replaces every symbolic `$id` reference with its
//! numeric index.
//!
//! Resolution is two passes over the expanded field list. The register
//! pass assigns each definition its index in the proper namespace, in
//! field order, with unnamed definitions still advancing the counter. The
//! resolve pass then rewrites every reference in place. Running register
//! to completion first is what lets references point forward.

mod expr;

#[cfg(test)]
mod resolver_tests;

use indexmap::IndexMap;
use wattle_ast::{
    DataKind, ElemKind, ElemPayload, ExportKind, FuncKind, FunctionType, GlobalKind, Id,
    ImportItem, Index, ModuleField, TypeUse,
};

use expr::ExprResolver;

/// The distinct index namespaces of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ns {
    Data,
    Elem,
    Func,
    Global,
    Memory,
    Table,
    Type,
}

impl Ns {
    const COUNT: usize = 7;

    fn name(self) -> &'static str {
        match self {
            Ns::Data => "data",
            Ns::Elem => "elem",
            Ns::Func => "func",
            Ns::Global => "global",
            Ns::Memory => "memory",
            Ns::Table => "table",
            Ns::Type => "type",
        }
    }
}

/// Errors raised while resolving symbolic references.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// A `$id` reference has no definition in its namespace.
    #[error("namespace {kind} can not resolve index ${id}")]
    UnresolvedIndex { kind: &'static str, id: String },

    /// A branch names a label no enclosing block carries.
    #[error("failed to resolve label ${0}")]
    UnresolvedLabel(String),

    /// An `end` or `else` repeats a label that differs from its block's.
    #[error("mismatching labels between block and end")]
    LabelMismatch,
}

/// One namespace: the name-to-index map plus the running definition count.
#[derive(Debug)]
struct Namespace {
    kind: &'static str,
    names: IndexMap<Id, u32>,
    count: u32,
}

impl Namespace {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            names: IndexMap::new(),
            count: 0,
        }
    }

    fn register(&mut self, id: Option<&Id>) {
        if let Some(id) = id {
            self.names.insert(id.clone(), self.count);
        }
        self.count += 1;
    }

    fn resolve(&self, index: &mut Index) -> Result<(), ResolveError> {
        let Index::Id(id) = index else {
            return Ok(());
        };
        match self.names.get(id) {
            Some(&num) => {
                *index = Index::Num(num);
                Ok(())
            }
            None => Err(ResolveError::UnresolvedIndex {
                kind: self.kind,
                id: id.as_str().to_owned(),
            }),
        }
    }
}

/// Resolves all symbolic references in a module's fields.
pub struct NameResolver {
    ns: [Namespace; Ns::COUNT],
    /// Signatures of the `Type` fields in index order, used to fill in
    /// type uses that reference a type without restating its signature.
    types: Vec<FunctionType>,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver {
    pub fn new() -> Self {
        Self {
            ns: [
                Namespace::new(Ns::Data.name()),
                Namespace::new(Ns::Elem.name()),
                Namespace::new(Ns::Func.name()),
                Namespace::new(Ns::Global.name()),
                Namespace::new(Ns::Memory.name()),
                Namespace::new(Ns::Table.name()),
                Namespace::new(Ns::Type.name()),
            ],
            types: Vec::new(),
        }
    }

    fn ns(&self, ns: Ns) -> &Namespace {
        &self.ns[ns as usize]
    }

    fn ns_mut(&mut self, ns: Ns) -> &mut Namespace {
        &mut self.ns[ns as usize]
    }

    /// Record one field's definition in its namespace.
    pub fn register(&mut self, field: &ModuleField) {
        match field {
            ModuleField::Type(ty) => {
                self.ns_mut(Ns::Type).register(ty.name.as_ref());
                self.types.push(ty.func.clone());
            }
            ModuleField::Import(import) => {
                let ns = match import.item {
                    ImportItem::Func(_) => Ns::Func,
                    ImportItem::Table(_) => Ns::Table,
                    ImportItem::Memory(_) => Ns::Memory,
                    ImportItem::Global(_) => Ns::Global,
                };
                self.ns_mut(ns).register(import.id.as_ref());
            }
            ModuleField::Func(func) => self.ns_mut(Ns::Func).register(func.name.as_ref()),
            ModuleField::Table(table) => self.ns_mut(Ns::Table).register(table.name.as_ref()),
            ModuleField::Memory(memory) => self.ns_mut(Ns::Memory).register(memory.name.as_ref()),
            ModuleField::Global(global) => self.ns_mut(Ns::Global).register(global.name.as_ref()),
            ModuleField::Elem(elem) => self.ns_mut(Ns::Elem).register(elem.name.as_ref()),
            ModuleField::Data(data) => self.ns_mut(Ns::Data).register(data.name.as_ref()),
            ModuleField::Export(_) | ModuleField::Start(_) => {}
        }
    }

    pub(crate) fn resolve_idx(&self, index: &mut Index, ns: Ns) -> Result<(), ResolveError> {
        self.ns(ns).resolve(index)
    }

    pub(crate) fn has_type(&self, index: u32) -> bool {
        (index as usize) < self.types.len()
    }

    /// Resolve a type use's index and, when the use site restates no
    /// signature at all, copy the referenced type's signature into it so
    /// later consumers see the parameter list.
    pub(crate) fn resolve_type_use(&self, type_use: &mut TypeUse) -> Result<(), ResolveError> {
        if let Some(index) = &mut type_use.index {
            self.ns(Ns::Type).resolve(index)?;
        }
        let needs_fill = type_use.ty.params.is_empty() && type_use.ty.results.is_empty();
        if needs_fill
            && let Some(Index::Num(num)) = &type_use.index
            && let Some(func) = self.types.get(*num as usize)
        {
            type_use.ty = func.clone();
        }
        Ok(())
    }

    /// Rewrite every reference in one field.
    pub fn resolve_field(&self, field: &mut ModuleField) -> Result<(), ResolveError> {
        match field {
            ModuleField::Import(import) => {
                if let ImportItem::Func(type_use) = &mut import.item {
                    self.resolve_type_use(type_use)?;
                }
                Ok(())
            }
            ModuleField::Func(func) => {
                self.resolve_type_use(&mut func.ty)?;
                if let FuncKind::Inline { locals, expr } = &mut func.kind {
                    let mut resolver = ExprResolver::new(self);
                    for param in &func.ty.ty.params {
                        resolver.declare_local(param.id.as_ref());
                    }
                    for local in locals.iter() {
                        resolver.declare_local(local.id.as_ref());
                    }
                    resolver.resolve(&mut expr.instrs)?;
                }
                Ok(())
            }
            ModuleField::Global(global) => {
                if let GlobalKind::Inline(expr) = &mut global.kind {
                    ExprResolver::new(self).resolve(&mut expr.instrs)?;
                }
                Ok(())
            }
            ModuleField::Export(export) => {
                let ns = match export.kind {
                    ExportKind::Func => Ns::Func,
                    ExportKind::Table => Ns::Table,
                    ExportKind::Memory => Ns::Memory,
                    ExportKind::Global => Ns::Global,
                };
                self.resolve_idx(&mut export.index, ns)
            }
            ModuleField::Start(start) => self.resolve_idx(&mut start.index, Ns::Func),
            ModuleField::Elem(elem) => {
                if let ElemKind::Active { table, offset } = &mut elem.kind {
                    self.resolve_idx(table, Ns::Table)?;
                    ExprResolver::new(self).resolve(&mut offset.instrs)?;
                }
                match &mut elem.payload {
                    ElemPayload::Indices(indices) => {
                        for index in indices {
                            self.resolve_idx(index, Ns::Func)?;
                        }
                    }
                    ElemPayload::Exprs { exprs, .. } => {
                        for expr in exprs.iter_mut().flatten() {
                            self.resolve_idx(expr, Ns::Func)?;
                        }
                    }
                }
                Ok(())
            }
            ModuleField::Data(data) => {
                if let DataKind::Active { memory, offset } = &mut data.kind {
                    self.resolve_idx(memory, Ns::Memory)?;
                    ExprResolver::new(self).resolve(&mut offset.instrs)?;
                }
                Ok(())
            }
            ModuleField::Type(_) | ModuleField::Table(_) | ModuleField::Memory(_) => Ok(()),
        }
    }
}
