//! Resolution inside instruction sequences: locals, labels, and every
//! index immediate.

use wattle_ast::{BlockType, Id, Index, Instruction};

use super::{NameResolver, Namespace, Ns, ResolveError};

/// Per-expression resolution state. Locals get their own namespace seeded
/// from the enclosing function's parameters and declarations; labels live
/// on a stack that mirrors block nesting, innermost last.
pub(crate) struct ExprResolver<'a> {
    resolver: &'a NameResolver,
    locals: Namespace,
    labels: Vec<Option<Id>>,
}

impl<'a> ExprResolver<'a> {
    pub(crate) fn new(resolver: &'a NameResolver) -> Self {
        Self {
            resolver,
            locals: Namespace::new("local"),
            labels: Vec::new(),
        }
    }

    pub(crate) fn declare_local(&mut self, id: Option<&Id>) {
        self.locals.register(id);
    }

    pub(crate) fn resolve(&mut self, instrs: &mut [Instruction]) -> Result<(), ResolveError> {
        for instr in instrs {
            self.resolve_instr(instr)?;
        }
        Ok(())
    }

    fn resolve_instr(&mut self, instr: &mut Instruction) -> Result<(), ResolveError> {
        use Instruction::*;
        match instr {
            Block(bt) | If(bt) | Loop(bt) => {
                self.resolve_block_type(bt)?;
                self.labels.push(bt.label.clone());
                Ok(())
            }
            End(id) => {
                let opened = self.labels.pop().flatten();
                check_label(opened.as_ref(), id.as_ref())
            }
            Else(id) => {
                let opened = self.labels.last().cloned().flatten();
                check_label(opened.as_ref(), id.as_ref())
            }
            Br(index) | BrIf(index) => self.resolve_label(index),
            BrTable(indices) => {
                for label in &mut indices.labels {
                    self.resolve_label(label)?;
                }
                self.resolve_label(&mut indices.default)
            }
            Call(index) | ReturnCall(index) | RefFunc(index) => {
                self.resolver.resolve_idx(index, Ns::Func)
            }
            CallIndirect(inner) | ReturnCallIndirect(inner) => {
                self.resolver.resolve_idx(&mut inner.table, Ns::Table)?;
                self.resolver.resolve_type_use(&mut inner.ty)
            }
            LocalGet(index) | LocalSet(index) | LocalTee(index) => self.locals.resolve(index),
            GlobalGet(index) | GlobalSet(index) => self.resolver.resolve_idx(index, Ns::Global),
            TableGet(index) | TableSet(index) | TableFill(index) | TableSize(index)
            | TableGrow(index) => self.resolver.resolve_idx(index, Ns::Table),
            DataDrop(index) => self.resolver.resolve_idx(index, Ns::Data),
            ElemDrop(index) => self.resolver.resolve_idx(index, Ns::Elem),
            _ => Ok(()),
        }
    }

    /// Resolve a block's type index, fill its signature in, and collapse
    /// back to the compact form when the signature allows it. An index
    /// outside the registered type table is kept and emitted as-is rather
    /// than collapsed over an empty back-fill.
    fn resolve_block_type(&self, bt: &mut BlockType) -> Result<(), ResolveError> {
        self.resolver.resolve_type_use(&mut bt.ty)?;
        if let Some(Index::Num(num)) = &bt.ty.index
            && !self.resolver.has_type(*num)
        {
            return Ok(());
        }
        if bt.ty.ty.params.is_empty() && bt.ty.ty.results.len() <= 1 {
            bt.ty.index = None;
        }
        Ok(())
    }

    /// A symbolic label resolves to its relative depth: zero is the
    /// innermost enclosing block.
    fn resolve_label(&self, index: &mut Index) -> Result<(), ResolveError> {
        let Index::Id(id) = index else {
            return Ok(());
        };
        for (depth, label) in self.labels.iter().rev().enumerate() {
            if label.as_ref() == Some(id) {
                *index = Index::Num(depth as u32);
                return Ok(());
            }
        }
        Err(ResolveError::UnresolvedLabel(id.as_str().to_owned()))
    }
}

/// A repeated label on `end`/`else` must match the block that opened it.
fn check_label(opened: Option<&Id>, closing: Option<&Id>) -> Result<(), ResolveError> {
    match closing {
        None => Ok(()),
        Some(id) if opened == Some(id) => Ok(()),
        Some(_) => Err(ResolveError::LabelMismatch),
    }
}
