//! The module tree: an ordered list of fields, each a closed enum variant.
//!
//! Fields arrive from the external text parser still carrying sugar
//! (inline imports, inline exports, inline data/element payloads). The
//! expansion passes in `wattle-compiler` rewrite them into the canonical
//! forms the encoder accepts.

use crate::instr::Instruction;
use crate::sink::BinarySink;
use crate::token::{Id, Index};
use crate::types::{FunctionType, GlobalType, MemoryType, RefType, TableType, TypeUse};
use crate::EncodeError;

/// A single module, either already binary or an ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: Option<Id>,
    pub kind: ModuleKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleKind {
    /// A pre-resolved binary module; resolution is a no-op and the byte
    /// chunks are emitted verbatim after the header.
    Binary(Vec<Vec<u8>>),
    /// A textual module owning its field sequence.
    Text(Vec<ModuleField>),
}

impl Module {
    pub fn text(fields: Vec<ModuleField>) -> Self {
        Self {
            id: None,
            kind: ModuleKind::Text(fields),
        }
    }
}

/// One top-level field of a textual module.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleField {
    Type(TypeField),
    Import(Import),
    Func(Func),
    Table(Table),
    Memory(Memory),
    Global(Global),
    Export(Export),
    Start(Start),
    Elem(Elem),
    Data(Data),
}

/// An explicit `(type ...)` definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeField {
    pub name: Option<Id>,
    pub func: FunctionType,
}

/// Export names attached inline to a definition, e.g. `(func (export "f") ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineExport {
    pub names: Vec<String>,
}

impl InlineExport {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A canonical import: host module/field names plus one item descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub module: String,
    pub field: String,
    pub id: Option<Id>,
    pub item: ImportItem,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportItem {
    Func(TypeUse),
    Table(TableType),
    Memory(MemoryType),
    Global(GlobalType),
}

impl Import {
    /// Names, kind discriminant byte, then the kind-specific descriptor.
    pub fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        sink.write_str(&self.module);
        sink.write_str(&self.field);
        match &self.item {
            ImportItem::Func(type_use) => {
                sink.write_byte(0x00);
                match &type_use.index {
                    Some(index) => index.encode(sink)?,
                    None => return Err(EncodeError::MissingTypeIndex),
                }
            }
            ImportItem::Table(table) => {
                sink.write_byte(0x01);
                table.encode(sink);
            }
            ImportItem::Memory(memory) => {
                sink.write_byte(0x02);
                memory.encode(sink);
            }
            ImportItem::Global(global) => {
                sink.write_byte(0x03);
                global.encode(sink);
            }
        }
        Ok(())
    }
}

/// A function definition or inline function import.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    pub name: Option<Id>,
    pub exports: InlineExport,
    pub ty: TypeUse,
    pub kind: FuncKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FuncKind {
    /// Inline import sugar: `(func (import "m" "f") ...)`.
    Import { module: String, field: String },
    /// A body defined in the module.
    Inline {
        locals: Vec<Local>,
        expr: Expression,
    },
}

/// A declared local variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub id: Option<Id>,
    pub ty: crate::types::ValType,
}

/// A table definition, inline table import, or inline element sugar.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: Option<Id>,
    pub exports: InlineExport,
    pub kind: TableKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableKind {
    Import {
        module: String,
        field: String,
        ty: TableType,
    },
    Normal(TableType),
    /// `(table funcref (elem ...))`: limits are derived from the payload
    /// and an active element segment is synthesized at offset zero.
    Inline {
        elem: RefType,
        payload: ElemPayload,
    },
}

/// A memory definition, inline memory import, or inline data sugar.
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    pub name: Option<Id>,
    pub exports: InlineExport,
    pub kind: MemoryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemoryKind {
    Import {
        module: String,
        field: String,
        ty: MemoryType,
    },
    Normal(MemoryType),
    /// `(memory (data ...))`: limits cover the data and an active data
    /// segment is synthesized at offset zero.
    Inline(Vec<Vec<u8>>),
}

/// A global definition or inline global import.
#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    pub name: Option<Id>,
    pub exports: InlineExport,
    pub ty: GlobalType,
    pub kind: GlobalKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlobalKind {
    Import { module: String, field: String },
    Inline(Expression),
}

/// An `(export "name" (kind idx))` field.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub name: String,
    pub kind: ExportKind,
    pub index: Index,
}

/// Entity kind tag of an export, also its binary discriminant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Func = 0x00,
    Table = 0x01,
    Memory = 0x02,
    Global = 0x03,
}

impl Export {
    pub fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        sink.write_str(&self.name);
        sink.write_byte(self.kind as u8);
        self.index.encode(sink)
    }
}

/// The `(start $f)` field.
#[derive(Debug, Clone, PartialEq)]
pub struct Start {
    pub index: Index,
}

/// A table element segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Elem {
    pub name: Option<Id>,
    pub kind: ElemKind,
    pub payload: ElemPayload,
    /// Forces the explicit-table binary flavor even when the table index
    /// is logically zero. Preserved for round-trip fidelity; no textual
    /// form sets it.
    pub force_non_zero: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElemKind {
    Active { table: Index, offset: Expression },
    Passive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElemPayload {
    /// A plain function-index list.
    Indices(Vec<Index>),
    /// An expression list; `None` entries are `ref.null`.
    Exprs {
        ty: RefType,
        exprs: Vec<Option<Index>>,
    },
}

impl ElemPayload {
    pub fn len(&self) -> usize {
        match self {
            ElemPayload::Indices(indices) => indices.len(),
            ElemPayload::Exprs { exprs, .. } => exprs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A memory data segment. Multiple source chunks are concatenated under a
/// single combined length prefix when encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    pub name: Option<Id>,
    pub kind: DataKind,
    pub val: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataKind {
    Active { memory: Index, offset: Expression },
    Passive,
}

/// An instruction sequence. Encoding appends the terminating `end` byte,
/// so synthesized offset expressions carry only their payload instruction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    pub instrs: Vec<Instruction>,
}

impl Expression {
    pub fn one(instr: Instruction) -> Self {
        Self {
            instrs: vec![instr],
        }
    }

    pub fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        for instr in &self.instrs {
            instr.encode(sink)?;
        }
        sink.write_byte(0x0b);
        Ok(())
    }
}
