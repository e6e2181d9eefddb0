//! Value, function, table, memory and global types, with their single-byte
//! and varint binary encodings.

use crate::sink::BinarySink;
use crate::token::{Id, Index};
use crate::EncodeError;

/// A WebAssembly value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValType {
    I32,
    I64,
    F32,
    F64,
    V128,
    Funcref,
    Anyref,
}

impl ValType {
    pub fn to_byte(self) -> u8 {
        match self {
            ValType::I32 => 0x7f,
            ValType::I64 => 0x7e,
            ValType::F32 => 0x7d,
            ValType::F64 => 0x7c,
            ValType::V128 => 0x7b,
            ValType::Funcref => 0x70,
            ValType::Anyref => 0x6f,
        }
    }

    fn from_byte(byte: u8) -> Self {
        match byte {
            0x7f => ValType::I32,
            0x7e => ValType::I64,
            0x7d => ValType::F32,
            0x7c => ValType::F64,
            0x7b => ValType::V128,
            0x70 => ValType::Funcref,
            0x6f => ValType::Anyref,
            _ => unreachable!("invalid value type byte in signature key"),
        }
    }

    pub fn encode(self, sink: &mut BinarySink) {
        sink.write_byte(self.to_byte());
    }
}

/// A table element reference type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefType {
    Funcref,
    Anyref,
}

impl RefType {
    pub fn to_val_type(self) -> ValType {
        match self {
            RefType::Funcref => ValType::Funcref,
            RefType::Anyref => ValType::Anyref,
        }
    }

    pub fn encode(self, sink: &mut BinarySink) {
        self.to_val_type().encode(sink);
    }
}

/// Table or memory size bounds.
///
/// Encodes a flag byte (0x00 = min only, 0x01 = min and max) followed by
/// the bounds as varints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min: u32,
    pub max: Option<u32>,
}

impl Limits {
    pub fn encode(&self, sink: &mut BinarySink) {
        match self.max {
            None => {
                sink.write_byte(0x00);
                sink.write_u32(self.min);
            }
            Some(max) => {
                sink.write_byte(0x01);
                sink.write_u32(self.min);
                sink.write_u32(max);
            }
        }
    }
}

/// A named function parameter. The name never affects the signature key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncParam {
    pub id: Option<Id>,
    pub ty: ValType,
}

/// A function signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionType {
    pub params: Vec<FuncParam>,
    pub results: Vec<ValType>,
}

/// Canonical byte-sequence form of a signature, used as the deduplication
/// key by the type-use expander. Parameter names are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    params: Vec<u8>,
    results: Vec<u8>,
}

impl FunctionType {
    pub fn new(params: Vec<ValType>, results: Vec<ValType>) -> Self {
        Self {
            params: params
                .into_iter()
                .map(|ty| FuncParam { id: None, ty })
                .collect(),
            results,
        }
    }

    pub fn key(&self) -> TypeKey {
        TypeKey {
            params: self.params.iter().map(|p| p.ty.to_byte()).collect(),
            results: self.results.iter().map(|r| r.to_byte()).collect(),
        }
    }

    /// Rebuild an anonymous signature from a deduplication key.
    pub fn from_key(key: &TypeKey) -> Self {
        Self {
            params: key
                .params
                .iter()
                .map(|&b| FuncParam {
                    id: None,
                    ty: ValType::from_byte(b),
                })
                .collect(),
            results: key.results.iter().map(|&b| ValType::from_byte(b)).collect(),
        }
    }

    /// `0x60`, then the parameter and result type vectors.
    pub fn encode(&self, sink: &mut BinarySink) {
        sink.write_byte(0x60);
        sink.write_u32(self.params.len() as u32);
        for param in &self.params {
            param.ty.encode(sink);
        }
        sink.write_u32(self.results.len() as u32);
        for result in &self.results {
            result.encode(sink);
        }
    }
}

/// A reference to a function signature: an explicit type index, an inline
/// parameter/result list, or both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeUse {
    pub index: Option<Index>,
    pub ty: FunctionType,
}

impl TypeUse {
    pub fn from_index(index: Index) -> Self {
        Self {
            index: Some(index),
            ty: FunctionType::default(),
        }
    }

    pub fn inline(ty: FunctionType) -> Self {
        Self { index: None, ty }
    }
}

/// A global's value type and mutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalType {
    pub ty: ValType,
    pub mutable: bool,
}

impl GlobalType {
    pub fn encode(&self, sink: &mut BinarySink) {
        self.ty.encode(sink);
        sink.write_byte(self.mutable as u8);
    }
}

/// A table's element type and limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableType {
    pub elem: RefType,
    pub limits: Limits,
}

impl TableType {
    pub fn encode(&self, sink: &mut BinarySink) {
        self.elem.encode(sink);
        self.limits.encode(sink);
    }
}

/// A memory's limits, in 64 KiB pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryType {
    pub limits: Limits,
}

impl MemoryType {
    pub fn encode(&self, sink: &mut BinarySink) {
        self.limits.encode(sink);
    }
}

/// Memory instruction immediate. `align` is a byte count and must be a
/// power of two; it is encoded as its log2 exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemArg {
    pub align: u32,
    pub offset: u32,
}

impl MemArg {
    pub fn encode(&self, sink: &mut BinarySink) {
        debug_assert!(
            self.align.is_power_of_two(),
            "memarg alignment must be a power of two, got {}",
            self.align
        );
        sink.write_u32(self.align.trailing_zeros());
        sink.write_u32(self.offset);
    }
}

/// The label and signature of a structured control construct.
///
/// Signatures with no parameters and at most one result stay in the
/// compact form: a value type byte, or `0x40` when there is no result.
/// Anything richer carries a type index encoded as a signed varint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockType {
    pub label: Option<Id>,
    pub ty: TypeUse,
}

impl BlockType {
    pub fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        if let Some(index) = &self.ty.index {
            return match index {
                Index::Num(n) => {
                    sink.write_sleb128(i64::from(*n));
                    Ok(())
                }
                Index::Id(id) => Err(EncodeError::UnresolvedIndex(id.as_str().to_owned())),
            };
        }
        match self.ty.ty.results.as_slice() {
            [] => sink.write_byte(0x40),
            [result] => result.encode(sink),
            // Multi-value block types are expanded to an index upstream.
            _ => return Err(EncodeError::MissingTypeIndex),
        }
        Ok(())
    }
}

/// A 32-bit float literal, kept as its bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float32 {
    pub bits: u32,
}

impl Float32 {
    pub fn encode(&self, sink: &mut BinarySink) {
        sink.write_f32_bits(self.bits);
    }
}

/// A 64-bit float literal, kept as its bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float64 {
    pub bits: u64,
}

impl Float64 {
    pub fn encode(&self, sink: &mut BinarySink) {
        sink.write_f64_bits(self.bits);
    }
}
