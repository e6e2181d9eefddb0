//! Type-use expansion: gives every function signature in the module an
//! explicit type index, synthesizing deduplicated `Type` fields for inline
//! signatures that have none.


use indexmap::IndexMap;
use wattle_ast::{
    BlockType, FunctionType, GlobalKind, ImportItem, Index, Instruction, ModuleField, TypeField,
    TypeKey, TypeUse,
};

/// Walks the field list and assigns a numeric type index to every type use
/// that lacks one. Signatures are deduplicated by their parameter/result
/// byte strings, so parameter names never split a type.
///
/// Synthesized `Type` fields are spliced in immediately before the field
/// that first needed them, which keeps index assignment order equal to
/// field order. Run this after `Type` fields have been moved to the front,
/// so explicit types claim the low indices.
#[derive(Debug, Default)]
pub struct TypeExpander {
    to_prepend: Vec<ModuleField>,
    types: IndexMap<TypeKey, u32>,
    ntypes: u32,
}

impl TypeExpander {
    pub fn process(&mut self, fields: &mut Vec<ModuleField>) {
        let mut cur = 0;
        while cur < fields.len() {
            self.expand_field(&mut fields[cur]);
            let prepended = std::mem::take(&mut self.to_prepend);
            let advance = prepended.len() + 1;
            fields.splice(cur..cur, prepended);
            cur += advance;
        }
    }

    fn expand_field(&mut self, field: &mut ModuleField) {
        match field {
            ModuleField::Type(ty) => self.register_type(&ty.func),
            ModuleField::Import(import) => {
                if let ImportItem::Func(type_use) = &mut import.item {
                    self.expand_type_use(type_use);
                }
            }
            ModuleField::Func(func) => {
                self.expand_type_use(&mut func.ty);
                if let wattle_ast::FuncKind::Inline { expr, .. } = &mut func.kind {
                    self.expand_expr(&mut expr.instrs);
                }
            }
            ModuleField::Global(global) => {
                if let GlobalKind::Inline(expr) = &mut global.kind {
                    self.expand_expr(&mut expr.instrs);
                }
            }
            ModuleField::Elem(elem) => {
                if let wattle_ast::ElemKind::Active { offset, .. } = &mut elem.kind {
                    self.expand_expr(&mut offset.instrs);
                }
            }
            ModuleField::Data(data) => {
                if let wattle_ast::DataKind::Active { offset, .. } = &mut data.kind {
                    self.expand_expr(&mut offset.instrs);
                }
            }
            _ => {}
        }
    }

    /// An explicit `Type` field claims the next index. A duplicate
    /// signature does not re-register its key but still occupies the slot,
    /// since it is emitted into the type section regardless.
    fn register_type(&mut self, ty: &FunctionType) {
        let key = ty.key();
        if !self.types.contains_key(&key) {
            self.types.insert(key, self.ntypes);
        }
        self.ntypes += 1;
    }

    fn expand_expr(&mut self, instrs: &mut [Instruction]) {
        for instr in instrs {
            match instr {
                Instruction::Block(bt) | Instruction::If(bt) | Instruction::Loop(bt) => {
                    self.expand_block_type(bt);
                }
                Instruction::CallIndirect(inner) | Instruction::ReturnCallIndirect(inner) => {
                    self.expand_type_use(&mut inner.ty);
                }
                _ => {}
            }
        }
    }

    /// Block types stay in the compact single-byte form when the signature
    /// has no parameters and at most one result.
    fn expand_block_type(&mut self, bt: &mut BlockType) {
        if bt.ty.index.is_some() {
            return;
        }
        if bt.ty.ty.params.is_empty() && bt.ty.ty.results.len() <= 1 {
            return;
        }
        self.expand_type_use(&mut bt.ty);
    }

    fn expand_type_use(&mut self, type_use: &mut TypeUse) {
        if type_use.index.is_some() {
            return;
        }
        let key = type_use.ty.key();
        let index = match self.types.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.ntypes;
                self.to_prepend.push(ModuleField::Type(TypeField {
                    name: None,
                    func: FunctionType::from_key(&key),
                }));
                self.types.insert(key, index);
                self.ntypes += 1;
                index
            }
        };
        type_use.index = Some(Index::Num(index));
    }
}
