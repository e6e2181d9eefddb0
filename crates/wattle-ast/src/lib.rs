//! Module AST and binary encoding primitives for Wattle.
//!
//! This crate contains:
//! - The data model for a parsed text-format module (`module`, `types`, `token`)
//! - The instruction set with per-instruction opcode encoding (`instr`)
//! - The append-only binary sink all encoders write through (`sink`)
//!
//! Resolution passes and whole-module encoding live in `wattle-compiler`;
//! this crate only knows how to serialize individual items once their
//! indices are numeric.

pub mod instr;
pub mod module;
pub mod sink;
pub mod token;
pub mod types;

#[cfg(test)]
mod sink_tests;

pub use instr::{BrTableIndices, CallIndirectInner, Instruction};
pub use module::{
    Data, DataKind, Elem, ElemKind, ElemPayload, Export, ExportKind, Expression, Func, FuncKind,
    Global, GlobalKind, Import, ImportItem, InlineExport, Local, Memory, MemoryKind, Module,
    ModuleKind, ModuleField, Start, Table, TableKind, TypeField,
};
pub use sink::BinarySink;
pub use token::{Id, Index};
pub use types::{
    BlockType, Float32, Float64, FuncParam, FunctionType, GlobalType, Limits, MemArg, MemoryType,
    RefType, TableType, TypeKey, TypeUse, ValType,
};

/// Defect-tier encoding failures.
///
/// These indicate that an upstream pass was skipped or buggy: well-formed
/// input that went through expansion and resolution can never trigger them.
/// They are deliberately a separate type from the user-input errors raised
/// by the resolution passes.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EncodeError {
    /// An `Index` was still symbolic when its bytes were requested.
    #[error("unresolved index in emission: ${0}")]
    UnresolvedIndex(String),

    /// A field kind that the expansion passes rewrite away survived to
    /// the encoder (e.g. an inline-import function body).
    #[error("{0} was not expanded before encoding")]
    UnexpandedField(&'static str),

    /// A type use reached the function section without an assigned index.
    #[error("type use has no index in emission")]
    MissingTypeIndex,
}
