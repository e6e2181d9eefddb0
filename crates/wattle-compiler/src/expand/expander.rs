//! The splice-and-advance field rewriter.

use wattle_ast::{
    Data, DataKind, Elem, ElemKind, Export, ExportKind, Expression, FuncKind, GlobalKind, Import,
    ImportItem, Index, Instruction, Limits, MemoryKind, MemoryType, ModuleField, TableKind,
    TableType,
};

const PAGE_SIZE: u64 = 1 << 16;

/// Rewrites fields one at a time, splicing any synthesized fields in
/// immediately after the field that produced them and advancing past the
/// splice so synthesized fields are never re-processed.
///
/// The per-kind counters track the next index in each entity's namespace
/// and are shared across the import and export passes: after the import
/// pass they hold the import counts, which is exactly where definition
/// indices start.
#[derive(Debug, Default)]
pub struct Expander {
    to_append: Vec<ModuleField>,
    funcs: u32,
    memories: u32,
    tables: u32,
    globals: u32,
}

impl Expander {
    /// Run one rewrite function over the whole field list.
    pub fn process(&mut self, fields: &mut Vec<ModuleField>, rewrite: fn(&mut Self, &mut ModuleField)) {
        let mut cur = 0;
        while cur < fields.len() {
            rewrite(self, &mut fields[cur]);
            let appended = std::mem::take(&mut self.to_append);
            let advance = appended.len() + 1;
            fields.splice(cur + 1..cur + 1, appended);
            cur += advance;
        }
    }

    /// Turn inline-import sugar into canonical `Import` fields, synthesizing
    /// an `Export` per attached export name at the entity's next index.
    /// Plain `Import` fields only advance the matching counter.
    pub fn expand_import(&mut self, field: &mut ModuleField) {
        match field {
            ModuleField::Func(func) => {
                let FuncKind::Import { module, field: name } = &func.kind else {
                    return;
                };
                self.push_exports(&func.exports.names, ExportKind::Func, self.funcs);
                let import = Import {
                    module: module.clone(),
                    field: name.clone(),
                    id: func.name.take(),
                    item: ImportItem::Func(std::mem::take(&mut func.ty)),
                };
                self.funcs += 1;
                *field = ModuleField::Import(import);
            }
            ModuleField::Memory(memory) => {
                let MemoryKind::Import { module, field: name, ty } = &memory.kind else {
                    return;
                };
                self.push_exports(&memory.exports.names, ExportKind::Memory, self.memories);
                let import = Import {
                    module: module.clone(),
                    field: name.clone(),
                    id: memory.name.take(),
                    item: ImportItem::Memory(*ty),
                };
                self.memories += 1;
                *field = ModuleField::Import(import);
            }
            ModuleField::Table(table) => {
                let TableKind::Import { module, field: name, ty } = &table.kind else {
                    return;
                };
                self.push_exports(&table.exports.names, ExportKind::Table, self.tables);
                let import = Import {
                    module: module.clone(),
                    field: name.clone(),
                    id: table.name.take(),
                    item: ImportItem::Table(*ty),
                };
                self.tables += 1;
                *field = ModuleField::Import(import);
            }
            ModuleField::Global(global) => {
                let GlobalKind::Import { module, field: name } = &global.kind else {
                    return;
                };
                self.push_exports(&global.exports.names, ExportKind::Global, self.globals);
                let import = Import {
                    module: module.clone(),
                    field: name.clone(),
                    id: global.name.take(),
                    item: ImportItem::Global(global.ty),
                };
                self.globals += 1;
                *field = ModuleField::Import(import);
            }
            ModuleField::Import(import) => {
                match import.item {
                    ImportItem::Func(_) => self.funcs += 1,
                    ImportItem::Memory(_) => self.memories += 1,
                    ImportItem::Table(_) => self.tables += 1,
                    ImportItem::Global(_) => self.globals += 1,
                }
            }
            _ => {}
        }
    }

    /// Synthesize `Export` fields for attached export names, and rewrite
    /// inline data/element payloads into normal limits plus an active
    /// segment at offset zero.
    pub fn expand_export(&mut self, field: &mut ModuleField) {
        match field {
            ModuleField::Func(func) => {
                self.push_exports(&func.exports.names, ExportKind::Func, self.funcs);
                self.funcs += 1;
            }
            ModuleField::Memory(memory) => {
                self.push_exports(&memory.exports.names, ExportKind::Memory, self.memories);
                if let MemoryKind::Inline(chunks) = &mut memory.kind {
                    let data_len: u64 = chunks.iter().map(|c| c.len() as u64).sum();
                    let pages = data_len.div_ceil(PAGE_SIZE) as u32;
                    let val = std::mem::take(chunks);
                    memory.kind = MemoryKind::Normal(MemoryType {
                        limits: Limits {
                            min: pages,
                            max: Some(pages),
                        },
                    });
                    self.to_append.push(ModuleField::Data(Data {
                        name: None,
                        kind: DataKind::Active {
                            memory: Index::Num(self.memories),
                            offset: Expression::one(Instruction::I32Const(0)),
                        },
                        val,
                    }));
                }
                self.memories += 1;
            }
            ModuleField::Table(table) => {
                self.push_exports(&table.exports.names, ExportKind::Table, self.tables);
                if let TableKind::Inline { elem, payload } = &mut table.kind {
                    let length = payload.len() as u32;
                    let elem = *elem;
                    let payload = std::mem::replace(payload, wattle_ast::ElemPayload::Indices(Vec::new()));
                    table.kind = TableKind::Normal(TableType {
                        elem,
                        limits: Limits {
                            min: length,
                            max: Some(length),
                        },
                    });
                    self.to_append.push(ModuleField::Elem(Elem {
                        name: None,
                        kind: ElemKind::Active {
                            table: Index::Num(self.tables),
                            offset: Expression::one(Instruction::I32Const(0)),
                        },
                        payload,
                        force_non_zero: false,
                    }));
                }
                self.tables += 1;
            }
            ModuleField::Global(global) => {
                self.push_exports(&global.exports.names, ExportKind::Global, self.globals);
                self.globals += 1;
            }
            _ => {}
        }
    }

    fn push_exports(&mut self, names: &[String], kind: ExportKind, index: u32) {
        for name in names {
            self.to_append.push(ModuleField::Export(Export {
                name: name.clone(),
                kind,
                index: Index::Num(index),
            }));
        }
    }
}
