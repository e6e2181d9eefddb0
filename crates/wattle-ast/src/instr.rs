//! The instruction set as one closed enum.
//!
//! Each variant owns its fixed opcode bytes (plain opcodes, plus the
//! 0xfc / 0xfd / 0xfe prefixed families) and knows how to encode its own
//! operands. The table is large but mechanical; the resolution passes in
//! `wattle-compiler` match only the index-bearing and structured-control
//! variants and fall through for everything else.

use crate::sink::BinarySink;
use crate::token::{Id, Index};
use crate::types::{BlockType, Float32, Float64, MemArg, TypeUse};
use crate::EncodeError;

/// `call_indirect` / `return_call_indirect` immediates.
#[derive(Debug, Clone, PartialEq)]
pub struct CallIndirectInner {
    pub table: Index,
    pub ty: TypeUse,
}

impl CallIndirectInner {
    fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        match &self.ty.index {
            Some(index) => index.encode(sink)?,
            None => return Err(EncodeError::MissingTypeIndex),
        }
        self.table.encode(sink)
    }
}

/// `br_table` immediates: the label vector and the default label.
#[derive(Debug, Clone, PartialEq)]
pub struct BrTableIndices {
    pub labels: Vec<Index>,
    pub default: Index,
}

impl BrTableIndices {
    fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        sink.write_u32(self.labels.len() as u32);
        for label in &self.labels {
            label.encode(sink)?;
        }
        self.default.encode(sink)
    }
}

/// A single typed instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Block(BlockType),
    If(BlockType),
    Else(Option<Id>),
    Loop(BlockType),
    End(Option<Id>),
    Unreachable,
    Nop,
    Br(Index),
    BrIf(Index),
    BrTable(BrTableIndices),
    Return,
    Call(Index),
    CallIndirect(CallIndirectInner),
    ReturnCall(Index),
    ReturnCallIndirect(CallIndirectInner),
    Drop,
    Select,
    LocalGet(Index),
    LocalSet(Index),
    LocalTee(Index),
    GlobalGet(Index),
    GlobalSet(Index),
    TableGet(Index),
    TableSet(Index),
    I32Load(MemArg),
    I64Load(MemArg),
    F32Load(MemArg),
    F64Load(MemArg),
    I32Load8S(MemArg),
    I32Load8U(MemArg),
    I32Load16S(MemArg),
    I32Load16U(MemArg),
    I64Load8S(MemArg),
    I64Load8U(MemArg),
    I64Load16S(MemArg),
    I64Load16U(MemArg),
    I64Load32S(MemArg),
    I64Load32U(MemArg),
    I32Store(MemArg),
    I64Store(MemArg),
    F32Store(MemArg),
    F64Store(MemArg),
    I32Store8(MemArg),
    I32Store16(MemArg),
    I64Store8(MemArg),
    I64Store16(MemArg),
    I64Store32(MemArg),
    MemorySize,
    MemoryGrow,
    MemoryCopy,
    MemoryFill,
    DataDrop(Index),
    ElemDrop(Index),
    TableCopy,
    TableFill(Index),
    TableSize(Index),
    TableGrow(Index),
    RefNull,
    RefIsNull,
    RefHost(u32),
    RefFunc(Index),
    I32Const(i32),
    I64Const(i64),
    F32Const(Float32),
    F64Const(Float64),
    I32Clz,
    I32Ctz,
    I32Popcnt,
    I32Add,
    I32Sub,
    I32Mul,
    I32DivS,
    I32DivU,
    I32RemS,
    I32RemU,
    I32And,
    I32Or,
    I32Xor,
    I32Shl,
    I32ShrS,
    I32ShrU,
    I32Rotl,
    I32Rotr,
    I64Clz,
    I64Ctz,
    I64Popcnt,
    I64Add,
    I64Sub,
    I64Mul,
    I64DivS,
    I64DivU,
    I64RemS,
    I64RemU,
    I64And,
    I64Or,
    I64Xor,
    I64Shl,
    I64ShrS,
    I64ShrU,
    I64Rotl,
    I64Rotr,
    F32Abs,
    F32Neg,
    F32Ceil,
    F32Floor,
    F32Trunc,
    F32Nearest,
    F32Sqrt,
    F32Add,
    F32Sub,
    F32Mul,
    F32Div,
    F32Min,
    F32Max,
    F32Copysign,
    F64Abs,
    F64Neg,
    F64Ceil,
    F64Floor,
    F64Trunc,
    F64Nearest,
    F64Sqrt,
    F64Add,
    F64Sub,
    F64Mul,
    F64Div,
    F64Min,
    F64Max,
    F64Copysign,
    I32Eqz,
    I32Eq,
    I32Ne,
    I32LtS,
    I32LtU,
    I32GtS,
    I32GtU,
    I32LeS,
    I32LeU,
    I32GeS,
    I32GeU,
    I64Eqz,
    I64Eq,
    I64Ne,
    I64LtS,
    I64LtU,
    I64GtS,
    I64GtU,
    I64LeS,
    I64LeU,
    I64GeS,
    I64GeU,
    F32Eq,
    F32Ne,
    F32Lt,
    F32Gt,
    F32Le,
    F32Ge,
    F64Eq,
    F64Ne,
    F64Lt,
    F64Gt,
    F64Le,
    F64Ge,
    I32WrapI64,
    I32TruncF32S,
    I32TruncF32U,
    I32TruncF64S,
    I32TruncF64U,
    I64ExtendI32S,
    I64ExtendI32U,
    I64TruncF32S,
    I64TruncF32U,
    I64TruncF64S,
    I64TruncF64U,
    F32ConvertI32S,
    F32ConvertI32U,
    F32ConvertI64S,
    F32ConvertI64U,
    F32DemoteF64,
    F64ConvertI32S,
    F64ConvertI32U,
    F64ConvertI64S,
    F64ConvertI64U,
    F64PromoteF32,
    I32ReinterpretF32,
    I64ReinterpretF64,
    F32ReinterpretI32,
    F64ReinterpretI64,
    I32TruncSatF32S,
    I32TruncSatF32U,
    I32TruncSatF64S,
    I32TruncSatF64U,
    I64TruncSatF32S,
    I64TruncSatF32U,
    I64TruncSatF64S,
    I64TruncSatF64U,
    I32Extend8S,
    I32Extend16S,
    I64Extend8S,
    I64Extend16S,
    I64Extend32S,
    AtomicNotify(MemArg),
    I32AtomicWait(MemArg),
    I64AtomicWait(MemArg),
    AtomicFence,
    I32AtomicLoad(MemArg),
    I64AtomicLoad(MemArg),
    I32AtomicLoad8U(MemArg),
    I32AtomicLoad16U(MemArg),
    I64AtomicLoad8U(MemArg),
    I64AtomicLoad16U(MemArg),
    I64AtomicLoad32U(MemArg),
    I32AtomicStore(MemArg),
    I64AtomicStore(MemArg),
    I32AtomicStore8(MemArg),
    I32AtomicStore16(MemArg),
    I64AtomicStore8(MemArg),
    I64AtomicStore16(MemArg),
    I64AtomicStore32(MemArg),
    I32AtomicRmwAdd(MemArg),
    I64AtomicRmwAdd(MemArg),
    I32AtomicRmw8AddU(MemArg),
    I32AtomicRmw16AddU(MemArg),
    I64AtomicRmw8AddU(MemArg),
    I64AtomicRmw16AddU(MemArg),
    I64AtomicRmw32AddU(MemArg),
    I32AtomicRmwSub(MemArg),
    I64AtomicRmwSub(MemArg),
    I32AtomicRmw8SubU(MemArg),
    I32AtomicRmw16SubU(MemArg),
    I64AtomicRmw8SubU(MemArg),
    I64AtomicRmw16SubU(MemArg),
    I64AtomicRmw32SubU(MemArg),
    I32AtomicRmwAnd(MemArg),
    I64AtomicRmwAnd(MemArg),
    I32AtomicRmw8AndU(MemArg),
    I32AtomicRmw16AndU(MemArg),
    I64AtomicRmw8AndU(MemArg),
    I64AtomicRmw16AndU(MemArg),
    I64AtomicRmw32AndU(MemArg),
    I32AtomicRmwOr(MemArg),
    I64AtomicRmwOr(MemArg),
    I32AtomicRmw8OrU(MemArg),
    I32AtomicRmw16OrU(MemArg),
    I64AtomicRmw8OrU(MemArg),
    I64AtomicRmw16OrU(MemArg),
    I64AtomicRmw32OrU(MemArg),
    I32AtomicRmwXor(MemArg),
    I64AtomicRmwXor(MemArg),
    I32AtomicRmw8XorU(MemArg),
    I32AtomicRmw16XorU(MemArg),
    I64AtomicRmw8XorU(MemArg),
    I64AtomicRmw16XorU(MemArg),
    I64AtomicRmw32XorU(MemArg),
    I32AtomicRmwXchg(MemArg),
    I64AtomicRmwXchg(MemArg),
    I32AtomicRmw8XchgU(MemArg),
    I32AtomicRmw16XchgU(MemArg),
    I64AtomicRmw8XchgU(MemArg),
    I64AtomicRmw16XchgU(MemArg),
    I64AtomicRmw32XchgU(MemArg),
    I32AtomicRmwCmpxchg(MemArg),
    I64AtomicRmwCmpxchg(MemArg),
    I32AtomicRmw8CmpxchgU(MemArg),
    I32AtomicRmw16CmpxchgU(MemArg),
    I64AtomicRmw8CmpxchgU(MemArg),
    I64AtomicRmw16CmpxchgU(MemArg),
    I64AtomicRmw32CmpxchgU(MemArg),
    V128Load(MemArg),
    V128Store(MemArg),
    I8x16Eq,
    I8x16Ne,
    I8x16LtS,
    I8x16LtU,
    I8x16GtS,
    I8x16GtU,
    I8x16LeS,
    I8x16LeU,
    I8x16GeS,
    I8x16GeU,
    I16x8Eq,
    I16x8Ne,
    I16x8LtS,
    I16x8LtU,
    I16x8GtS,
    I16x8GtU,
    I16x8LeS,
    I16x8LeU,
    I16x8GeS,
    I16x8GeU,
    I32x4Eq,
    I32x4Ne,
    I32x4LtS,
    I32x4LtU,
    I32x4GtS,
    I32x4GtU,
    I32x4LeS,
    I32x4LeU,
    I32x4GeS,
    I32x4GeU,
    F32x4Eq,
    F32x4Ne,
    F32x4Lt,
    F32x4Gt,
    F32x4Le,
    F32x4Ge,
    F64x2Eq,
    F64x2Ne,
    F64x2Lt,
    F64x2Gt,
    F64x2Le,
    F64x2Ge,
    V128Not,
    V128And,
    V128Or,
    V128Xor,
    V128Bitselect,
    I8x16Neg,
    I8x16AnyTrue,
    I8x16AllTrue,
    I8x16Shl,
    I8x16ShrS,
    I8x16ShrU,
    I8x16Add,
    I8x16AddSaturateS,
    I8x16AddSaturateU,
    I8x16Sub,
    I8x16SubSaturateS,
    I8x16SubSaturateU,
    I8x16Mul,
    I16x8Neg,
    I16x8AnyTrue,
    I16x8AllTrue,
    I16x8Shl,
    I16x8ShrS,
    I16x8ShrU,
    I16x8Add,
    I16x8AddSaturateS,
    I16x8AddSaturateU,
    I16x8Sub,
    I16x8SubSaturateS,
    I16x8SubSaturateU,
    I16x8Mul,
    I32x4Neg,
    I32x4AnyTrue,
    I32x4AllTrue,
    I32x4Shl,
    I32x4ShrS,
    I32x4ShrU,
    I32x4Add,
    I32x4Sub,
    I32x4Mul,
    I64x2Neg,
    I64x2AnyTrue,
    I64x2AllTrue,
    I64x2Shl,
    I64x2ShrS,
    I64x2ShrU,
    I64x2Add,
    I64x2Sub,
    I64x2Mul,
    F32x4Abs,
    F32x4Neg,
    F32x4Sqrt,
    F32x4Add,
    F32x4Sub,
    F32x4Mul,
    F32x4Div,
    F32x4Min,
    F32x4Max,
    F64x2Abs,
    F64x2Neg,
    F64x2Sqrt,
    F64x2Add,
    F64x2Sub,
    F64x2Mul,
    F64x2Div,
    F64x2Min,
    F64x2Max,
    I32x4TruncSatF32x4S,
    I32x4TruncSatF32x4U,
    I64x2TruncSatF64x2S,
    I64x2TruncSatF64x2U,
    F32x4ConvertI32x4S,
    F32x4ConvertI32x4U,
    F64x2ConvertI64x2S,
    F64x2ConvertI64x2U,
    V8x16Swizzle,
    V8x16LoadSplat(MemArg),
    V16x8LoadSplat(MemArg),
    V32x4LoadSplat(MemArg),
    V64x2LoadSplat(MemArg),
    I8x16NarrowI16x8S,
    I8x16NarrowI16x8U,
    I16x8NarrowI32x4S,
    I16x8NarrowI32x4U,
    I16x8WidenLowI8x16S,
    I16x8WidenHighI8x16S,
    I16x8WidenLowI8x16U,
    I16x8WidenHighI8x16U,
    I32x4WidenLowI16x8S,
    I32x4WidenHighI16x8S,
    I32x4WidenLowI16x8U,
    I32x4WidenHighI16x8U,
    I16x8Load8x8S(MemArg),
    I16x8Load8x8U(MemArg),
    I32x4Load16x4S(MemArg),
    I32x4Load16x4U(MemArg),
    I64x2Load32x2S(MemArg),
    I64x2Load32x2U(MemArg),
    V128Andnot,
}

impl Instruction {
    /// Write the opcode bytes followed by the operand encoding.
    pub fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        use Instruction as I;
        match self {
            I::Block(block_type) => {
                sink.write_byte(0x02);
                block_type.encode(sink)?;
            }
            I::If(block_type) => {
                sink.write_byte(0x04);
                block_type.encode(sink)?;
            }
            I::Else(_) => sink.write_byte(0x05),
            I::Loop(block_type) => {
                sink.write_byte(0x03);
                block_type.encode(sink)?;
            }
            I::End(_) => sink.write_byte(0x0b),
            I::Unreachable => sink.write_byte(0x00),
            I::Nop => sink.write_byte(0x01),
            I::Br(index) => {
                sink.write_byte(0x0c);
                index.encode(sink)?;
            }
            I::BrIf(index) => {
                sink.write_byte(0x0d);
                index.encode(sink)?;
            }
            I::BrTable(indices) => {
                sink.write_byte(0x0e);
                indices.encode(sink)?;
            }
            I::Return => sink.write_byte(0x0f),
            I::Call(index) => {
                sink.write_byte(0x10);
                index.encode(sink)?;
            }
            I::CallIndirect(inner) => {
                sink.write_byte(0x11);
                inner.encode(sink)?;
            }
            I::ReturnCall(index) => {
                sink.write_byte(0x12);
                index.encode(sink)?;
            }
            I::ReturnCallIndirect(inner) => {
                sink.write_byte(0x13);
                inner.encode(sink)?;
            }
            I::Drop => sink.write_byte(0x1a),
            I::Select => sink.write_byte(0x1b),
            I::LocalGet(index) => {
                sink.write_byte(0x20);
                index.encode(sink)?;
            }
            I::LocalSet(index) => {
                sink.write_byte(0x21);
                index.encode(sink)?;
            }
            I::LocalTee(index) => {
                sink.write_byte(0x22);
                index.encode(sink)?;
            }
            I::GlobalGet(index) => {
                sink.write_byte(0x23);
                index.encode(sink)?;
            }
            I::GlobalSet(index) => {
                sink.write_byte(0x24);
                index.encode(sink)?;
            }
            I::TableGet(index) => {
                sink.write_byte(0x25);
                index.encode(sink)?;
            }
            I::TableSet(index) => {
                sink.write_byte(0x26);
                index.encode(sink)?;
            }
            I::I32Load(memarg) => {
                sink.write_byte(0x28);
                memarg.encode(sink);
            }
            I::I64Load(memarg) => {
                sink.write_byte(0x29);
                memarg.encode(sink);
            }
            I::F32Load(memarg) => {
                sink.write_byte(0x2a);
                memarg.encode(sink);
            }
            I::F64Load(memarg) => {
                sink.write_byte(0x2b);
                memarg.encode(sink);
            }
            I::I32Load8S(memarg) => {
                sink.write_byte(0x2c);
                memarg.encode(sink);
            }
            I::I32Load8U(memarg) => {
                sink.write_byte(0x2d);
                memarg.encode(sink);
            }
            I::I32Load16S(memarg) => {
                sink.write_byte(0x2e);
                memarg.encode(sink);
            }
            I::I32Load16U(memarg) => {
                sink.write_byte(0x2f);
                memarg.encode(sink);
            }
            I::I64Load8S(memarg) => {
                sink.write_byte(0x30);
                memarg.encode(sink);
            }
            I::I64Load8U(memarg) => {
                sink.write_byte(0x31);
                memarg.encode(sink);
            }
            I::I64Load16S(memarg) => {
                sink.write_byte(0x32);
                memarg.encode(sink);
            }
            I::I64Load16U(memarg) => {
                sink.write_byte(0x33);
                memarg.encode(sink);
            }
            I::I64Load32S(memarg) => {
                sink.write_byte(0x34);
                memarg.encode(sink);
            }
            I::I64Load32U(memarg) => {
                sink.write_byte(0x35);
                memarg.encode(sink);
            }
            I::I32Store(memarg) => {
                sink.write_byte(0x36);
                memarg.encode(sink);
            }
            I::I64Store(memarg) => {
                sink.write_byte(0x37);
                memarg.encode(sink);
            }
            I::F32Store(memarg) => {
                sink.write_byte(0x38);
                memarg.encode(sink);
            }
            I::F64Store(memarg) => {
                sink.write_byte(0x39);
                memarg.encode(sink);
            }
            I::I32Store8(memarg) => {
                sink.write_byte(0x3a);
                memarg.encode(sink);
            }
            I::I32Store16(memarg) => {
                sink.write_byte(0x3b);
                memarg.encode(sink);
            }
            I::I64Store8(memarg) => {
                sink.write_byte(0x3c);
                memarg.encode(sink);
            }
            I::I64Store16(memarg) => {
                sink.write_byte(0x3d);
                memarg.encode(sink);
            }
            I::I64Store32(memarg) => {
                sink.write_byte(0x3e);
                memarg.encode(sink);
            }
            I::MemorySize => sink.write_bytes(&[0x3f, 0x00]),
            I::MemoryGrow => sink.write_bytes(&[0x40, 0x00]),
            I::MemoryCopy => sink.write_bytes(&[0xfc, 0x0a, 0x00, 0x00]),
            I::MemoryFill => sink.write_bytes(&[0xfc, 0x0b, 0x00]),
            I::DataDrop(index) => {
                sink.write_bytes(&[0xfc, 0x09]);
                index.encode(sink)?;
            }
            I::ElemDrop(index) => {
                sink.write_bytes(&[0xfc, 0x0d]);
                index.encode(sink)?;
            }
            I::TableCopy => sink.write_bytes(&[0xfc, 0x0e, 0x00, 0x00]),
            I::TableFill(index) => {
                sink.write_bytes(&[0xfc, 0x11]);
                index.encode(sink)?;
            }
            I::TableSize(index) => {
                sink.write_bytes(&[0xfc, 0x10]);
                index.encode(sink)?;
            }
            I::TableGrow(index) => {
                sink.write_bytes(&[0xfc, 0x0f]);
                index.encode(sink)?;
            }
            I::RefNull => sink.write_byte(0xd0),
            I::RefIsNull => sink.write_byte(0xd1),
            I::RefHost(value) => {
                sink.write_byte(0xff);
                sink.write_sleb128(i64::from(*value as i32));
            }
            I::RefFunc(index) => {
                sink.write_byte(0xd2);
                index.encode(sink)?;
            }
            I::I32Const(value) => {
                sink.write_byte(0x41);
                sink.write_sleb128(i64::from(*value));
            }
            I::I64Const(value) => {
                sink.write_byte(0x42);
                sink.write_sleb128(*value);
            }
            I::F32Const(value) => {
                sink.write_byte(0x43);
                value.encode(sink);
            }
            I::F64Const(value) => {
                sink.write_byte(0x44);
                value.encode(sink);
            }
            I::I32Clz => sink.write_byte(0x67),
            I::I32Ctz => sink.write_byte(0x68),
            I::I32Popcnt => sink.write_byte(0x69),
            I::I32Add => sink.write_byte(0x6a),
            I::I32Sub => sink.write_byte(0x6b),
            I::I32Mul => sink.write_byte(0x6c),
            I::I32DivS => sink.write_byte(0x6d),
            I::I32DivU => sink.write_byte(0x6e),
            I::I32RemS => sink.write_byte(0x6f),
            I::I32RemU => sink.write_byte(0x70),
            I::I32And => sink.write_byte(0x71),
            I::I32Or => sink.write_byte(0x72),
            I::I32Xor => sink.write_byte(0x73),
            I::I32Shl => sink.write_byte(0x74),
            I::I32ShrS => sink.write_byte(0x75),
            I::I32ShrU => sink.write_byte(0x76),
            I::I32Rotl => sink.write_byte(0x77),
            I::I32Rotr => sink.write_byte(0x78),
            I::I64Clz => sink.write_byte(0x79),
            I::I64Ctz => sink.write_byte(0x7a),
            I::I64Popcnt => sink.write_byte(0x7b),
            I::I64Add => sink.write_byte(0x7c),
            I::I64Sub => sink.write_byte(0x7d),
            I::I64Mul => sink.write_byte(0x7e),
            I::I64DivS => sink.write_byte(0x7f),
            I::I64DivU => sink.write_byte(0x80),
            I::I64RemS => sink.write_byte(0x81),
            I::I64RemU => sink.write_byte(0x82),
            I::I64And => sink.write_byte(0x83),
            I::I64Or => sink.write_byte(0x84),
            I::I64Xor => sink.write_byte(0x85),
            I::I64Shl => sink.write_byte(0x86),
            I::I64ShrS => sink.write_byte(0x87),
            I::I64ShrU => sink.write_byte(0x88),
            I::I64Rotl => sink.write_byte(0x89),
            I::I64Rotr => sink.write_byte(0x8a),
            I::F32Abs => sink.write_byte(0x8b),
            I::F32Neg => sink.write_byte(0x8c),
            I::F32Ceil => sink.write_byte(0x8d),
            I::F32Floor => sink.write_byte(0x8e),
            I::F32Trunc => sink.write_byte(0x8f),
            I::F32Nearest => sink.write_byte(0x90),
            I::F32Sqrt => sink.write_byte(0x91),
            I::F32Add => sink.write_byte(0x92),
            I::F32Sub => sink.write_byte(0x93),
            I::F32Mul => sink.write_byte(0x94),
            I::F32Div => sink.write_byte(0x95),
            I::F32Min => sink.write_byte(0x96),
            I::F32Max => sink.write_byte(0x97),
            I::F32Copysign => sink.write_byte(0x98),
            I::F64Abs => sink.write_byte(0x99),
            I::F64Neg => sink.write_byte(0x9a),
            I::F64Ceil => sink.write_byte(0x9b),
            I::F64Floor => sink.write_byte(0x9c),
            I::F64Trunc => sink.write_byte(0x9d),
            I::F64Nearest => sink.write_byte(0x9e),
            I::F64Sqrt => sink.write_byte(0x9f),
            I::F64Add => sink.write_byte(0xa0),
            I::F64Sub => sink.write_byte(0xa1),
            I::F64Mul => sink.write_byte(0xa2),
            I::F64Div => sink.write_byte(0xa3),
            I::F64Min => sink.write_byte(0xa4),
            I::F64Max => sink.write_byte(0xa5),
            I::F64Copysign => sink.write_byte(0xa6),
            I::I32Eqz => sink.write_byte(0x45),
            I::I32Eq => sink.write_byte(0x46),
            I::I32Ne => sink.write_byte(0x47),
            I::I32LtS => sink.write_byte(0x48),
            I::I32LtU => sink.write_byte(0x49),
            I::I32GtS => sink.write_byte(0x4a),
            I::I32GtU => sink.write_byte(0x4b),
            I::I32LeS => sink.write_byte(0x4c),
            I::I32LeU => sink.write_byte(0x4d),
            I::I32GeS => sink.write_byte(0x4e),
            I::I32GeU => sink.write_byte(0x4f),
            I::I64Eqz => sink.write_byte(0x50),
            I::I64Eq => sink.write_byte(0x51),
            I::I64Ne => sink.write_byte(0x52),
            I::I64LtS => sink.write_byte(0x53),
            I::I64LtU => sink.write_byte(0x54),
            I::I64GtS => sink.write_byte(0x55),
            I::I64GtU => sink.write_byte(0x56),
            I::I64LeS => sink.write_byte(0x57),
            I::I64LeU => sink.write_byte(0x58),
            I::I64GeS => sink.write_byte(0x59),
            I::I64GeU => sink.write_byte(0x5a),
            I::F32Eq => sink.write_byte(0x5b),
            I::F32Ne => sink.write_byte(0x5c),
            I::F32Lt => sink.write_byte(0x5d),
            I::F32Gt => sink.write_byte(0x5e),
            I::F32Le => sink.write_byte(0x5f),
            I::F32Ge => sink.write_byte(0x60),
            I::F64Eq => sink.write_byte(0x61),
            I::F64Ne => sink.write_byte(0x62),
            I::F64Lt => sink.write_byte(0x63),
            I::F64Gt => sink.write_byte(0x64),
            I::F64Le => sink.write_byte(0x65),
            I::F64Ge => sink.write_byte(0x66),
            I::I32WrapI64 => sink.write_byte(0xa7),
            I::I32TruncF32S => sink.write_byte(0xa8),
            I::I32TruncF32U => sink.write_byte(0xa9),
            I::I32TruncF64S => sink.write_byte(0xaa),
            I::I32TruncF64U => sink.write_byte(0xab),
            I::I64ExtendI32S => sink.write_byte(0xac),
            I::I64ExtendI32U => sink.write_byte(0xad),
            I::I64TruncF32S => sink.write_byte(0xae),
            I::I64TruncF32U => sink.write_byte(0xaf),
            I::I64TruncF64S => sink.write_byte(0xb0),
            I::I64TruncF64U => sink.write_byte(0xb1),
            I::F32ConvertI32S => sink.write_byte(0xb2),
            I::F32ConvertI32U => sink.write_byte(0xb3),
            I::F32ConvertI64S => sink.write_byte(0xb4),
            I::F32ConvertI64U => sink.write_byte(0xb5),
            I::F32DemoteF64 => sink.write_byte(0xb6),
            I::F64ConvertI32S => sink.write_byte(0xb7),
            I::F64ConvertI32U => sink.write_byte(0xb8),
            I::F64ConvertI64S => sink.write_byte(0xb9),
            I::F64ConvertI64U => sink.write_byte(0xba),
            I::F64PromoteF32 => sink.write_byte(0xbb),
            I::I32ReinterpretF32 => sink.write_byte(0xbc),
            I::I64ReinterpretF64 => sink.write_byte(0xbd),
            I::F32ReinterpretI32 => sink.write_byte(0xbe),
            I::F64ReinterpretI64 => sink.write_byte(0xbf),
            I::I32TruncSatF32S => sink.write_bytes(&[0xfc, 0x00]),
            I::I32TruncSatF32U => sink.write_bytes(&[0xfc, 0x01]),
            I::I32TruncSatF64S => sink.write_bytes(&[0xfc, 0x02]),
            I::I32TruncSatF64U => sink.write_bytes(&[0xfc, 0x03]),
            I::I64TruncSatF32S => sink.write_bytes(&[0xfc, 0x04]),
            I::I64TruncSatF32U => sink.write_bytes(&[0xfc, 0x05]),
            I::I64TruncSatF64S => sink.write_bytes(&[0xfc, 0x06]),
            I::I64TruncSatF64U => sink.write_bytes(&[0xfc, 0x07]),
            I::I32Extend8S => sink.write_byte(0xc0),
            I::I32Extend16S => sink.write_byte(0xc1),
            I::I64Extend8S => sink.write_byte(0xc2),
            I::I64Extend16S => sink.write_byte(0xc3),
            I::I64Extend32S => sink.write_byte(0xc4),
            I::AtomicNotify(memarg) => {
                sink.write_bytes(&[0xfe, 0x00]);
                memarg.encode(sink);
            }
            I::I32AtomicWait(memarg) => {
                sink.write_bytes(&[0xfe, 0x01]);
                memarg.encode(sink);
            }
            I::I64AtomicWait(memarg) => {
                sink.write_bytes(&[0xfe, 0x02]);
                memarg.encode(sink);
            }
            I::AtomicFence => sink.write_bytes(&[0xfe, 0x03]),
            I::I32AtomicLoad(memarg) => {
                sink.write_bytes(&[0xfe, 0x10]);
                memarg.encode(sink);
            }
            I::I64AtomicLoad(memarg) => {
                sink.write_bytes(&[0xfe, 0x11]);
                memarg.encode(sink);
            }
            I::I32AtomicLoad8U(memarg) => {
                sink.write_bytes(&[0xfe, 0x12]);
                memarg.encode(sink);
            }
            I::I32AtomicLoad16U(memarg) => {
                sink.write_bytes(&[0xfe, 0x13]);
                memarg.encode(sink);
            }
            I::I64AtomicLoad8U(memarg) => {
                sink.write_bytes(&[0xfe, 0x14]);
                memarg.encode(sink);
            }
            I::I64AtomicLoad16U(memarg) => {
                sink.write_bytes(&[0xfe, 0x15]);
                memarg.encode(sink);
            }
            I::I64AtomicLoad32U(memarg) => {
                sink.write_bytes(&[0xfe, 0x16]);
                memarg.encode(sink);
            }
            I::I32AtomicStore(memarg) => {
                sink.write_bytes(&[0xfe, 0x17]);
                memarg.encode(sink);
            }
            I::I64AtomicStore(memarg) => {
                sink.write_bytes(&[0xfe, 0x18]);
                memarg.encode(sink);
            }
            I::I32AtomicStore8(memarg) => {
                sink.write_bytes(&[0xfe, 0x19]);
                memarg.encode(sink);
            }
            I::I32AtomicStore16(memarg) => {
                sink.write_bytes(&[0xfe, 0x1a]);
                memarg.encode(sink);
            }
            I::I64AtomicStore8(memarg) => {
                sink.write_bytes(&[0xfe, 0x1b]);
                memarg.encode(sink);
            }
            I::I64AtomicStore16(memarg) => {
                sink.write_bytes(&[0xfe, 0x1c]);
                memarg.encode(sink);
            }
            I::I64AtomicStore32(memarg) => {
                sink.write_bytes(&[0xfe, 0x1d]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwAdd(memarg) => {
                sink.write_bytes(&[0xfe, 0x1e]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwAdd(memarg) => {
                sink.write_bytes(&[0xfe, 0x1f]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8AddU(memarg) => {
                sink.write_bytes(&[0xfe, 0x20]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16AddU(memarg) => {
                sink.write_bytes(&[0xfe, 0x21]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8AddU(memarg) => {
                sink.write_bytes(&[0xfe, 0x22]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16AddU(memarg) => {
                sink.write_bytes(&[0xfe, 0x23]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32AddU(memarg) => {
                sink.write_bytes(&[0xfe, 0x24]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwSub(memarg) => {
                sink.write_bytes(&[0xfe, 0x25]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwSub(memarg) => {
                sink.write_bytes(&[0xfe, 0x26]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8SubU(memarg) => {
                sink.write_bytes(&[0xfe, 0x27]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16SubU(memarg) => {
                sink.write_bytes(&[0xfe, 0x28]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8SubU(memarg) => {
                sink.write_bytes(&[0xfe, 0x29]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16SubU(memarg) => {
                sink.write_bytes(&[0xfe, 0x2a]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32SubU(memarg) => {
                sink.write_bytes(&[0xfe, 0x2b]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwAnd(memarg) => {
                sink.write_bytes(&[0xfe, 0x2c]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwAnd(memarg) => {
                sink.write_bytes(&[0xfe, 0x2d]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8AndU(memarg) => {
                sink.write_bytes(&[0xfe, 0x2e]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16AndU(memarg) => {
                sink.write_bytes(&[0xfe, 0x2f]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8AndU(memarg) => {
                sink.write_bytes(&[0xfe, 0x30]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16AndU(memarg) => {
                sink.write_bytes(&[0xfe, 0x31]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32AndU(memarg) => {
                sink.write_bytes(&[0xfe, 0x32]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwOr(memarg) => {
                sink.write_bytes(&[0xfe, 0x33]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwOr(memarg) => {
                sink.write_bytes(&[0xfe, 0x34]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8OrU(memarg) => {
                sink.write_bytes(&[0xfe, 0x35]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16OrU(memarg) => {
                sink.write_bytes(&[0xfe, 0x36]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8OrU(memarg) => {
                sink.write_bytes(&[0xfe, 0x37]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16OrU(memarg) => {
                sink.write_bytes(&[0xfe, 0x38]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32OrU(memarg) => {
                sink.write_bytes(&[0xfe, 0x39]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwXor(memarg) => {
                sink.write_bytes(&[0xfe, 0x3a]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwXor(memarg) => {
                sink.write_bytes(&[0xfe, 0x3b]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8XorU(memarg) => {
                sink.write_bytes(&[0xfe, 0x3c]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16XorU(memarg) => {
                sink.write_bytes(&[0xfe, 0x3d]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8XorU(memarg) => {
                sink.write_bytes(&[0xfe, 0x3e]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16XorU(memarg) => {
                sink.write_bytes(&[0xfe, 0x3f]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32XorU(memarg) => {
                sink.write_bytes(&[0xfe, 0x40]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwXchg(memarg) => {
                sink.write_bytes(&[0xfe, 0x41]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwXchg(memarg) => {
                sink.write_bytes(&[0xfe, 0x42]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8XchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x43]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16XchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x44]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8XchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x45]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16XchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x46]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32XchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x47]);
                memarg.encode(sink);
            }
            I::I32AtomicRmwCmpxchg(memarg) => {
                sink.write_bytes(&[0xfe, 0x48]);
                memarg.encode(sink);
            }
            I::I64AtomicRmwCmpxchg(memarg) => {
                sink.write_bytes(&[0xfe, 0x49]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw8CmpxchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x4a]);
                memarg.encode(sink);
            }
            I::I32AtomicRmw16CmpxchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x4b]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw8CmpxchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x4c]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw16CmpxchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x4d]);
                memarg.encode(sink);
            }
            I::I64AtomicRmw32CmpxchgU(memarg) => {
                sink.write_bytes(&[0xfe, 0x4e]);
                memarg.encode(sink);
            }
            I::V128Load(memarg) => {
                sink.write_bytes(&[0xfd, 0x00]);
                memarg.encode(sink);
            }
            I::V128Store(memarg) => {
                sink.write_bytes(&[0xfd, 0x01]);
                memarg.encode(sink);
            }
            I::I8x16Eq => sink.write_bytes(&[0xfd, 0x18]),
            I::I8x16Ne => sink.write_bytes(&[0xfd, 0x19]),
            I::I8x16LtS => sink.write_bytes(&[0xfd, 0x1a]),
            I::I8x16LtU => sink.write_bytes(&[0xfd, 0x1b]),
            I::I8x16GtS => sink.write_bytes(&[0xfd, 0x1c]),
            I::I8x16GtU => sink.write_bytes(&[0xfd, 0x1d]),
            I::I8x16LeS => sink.write_bytes(&[0xfd, 0x1e]),
            I::I8x16LeU => sink.write_bytes(&[0xfd, 0x1f]),
            I::I8x16GeS => sink.write_bytes(&[0xfd, 0x20]),
            I::I8x16GeU => sink.write_bytes(&[0xfd, 0x21]),
            I::I16x8Eq => sink.write_bytes(&[0xfd, 0x22]),
            I::I16x8Ne => sink.write_bytes(&[0xfd, 0x23]),
            I::I16x8LtS => sink.write_bytes(&[0xfd, 0x24]),
            I::I16x8LtU => sink.write_bytes(&[0xfd, 0x25]),
            I::I16x8GtS => sink.write_bytes(&[0xfd, 0x26]),
            I::I16x8GtU => sink.write_bytes(&[0xfd, 0x27]),
            I::I16x8LeS => sink.write_bytes(&[0xfd, 0x28]),
            I::I16x8LeU => sink.write_bytes(&[0xfd, 0x29]),
            I::I16x8GeS => sink.write_bytes(&[0xfd, 0x2a]),
            I::I16x8GeU => sink.write_bytes(&[0xfd, 0x2b]),
            I::I32x4Eq => sink.write_bytes(&[0xfd, 0x2c]),
            I::I32x4Ne => sink.write_bytes(&[0xfd, 0x2d]),
            I::I32x4LtS => sink.write_bytes(&[0xfd, 0x2e]),
            I::I32x4LtU => sink.write_bytes(&[0xfd, 0x2f]),
            I::I32x4GtS => sink.write_bytes(&[0xfd, 0x30]),
            I::I32x4GtU => sink.write_bytes(&[0xfd, 0x31]),
            I::I32x4LeS => sink.write_bytes(&[0xfd, 0x32]),
            I::I32x4LeU => sink.write_bytes(&[0xfd, 0x33]),
            I::I32x4GeS => sink.write_bytes(&[0xfd, 0x34]),
            I::I32x4GeU => sink.write_bytes(&[0xfd, 0x35]),
            I::F32x4Eq => sink.write_bytes(&[0xfd, 0x40]),
            I::F32x4Ne => sink.write_bytes(&[0xfd, 0x41]),
            I::F32x4Lt => sink.write_bytes(&[0xfd, 0x42]),
            I::F32x4Gt => sink.write_bytes(&[0xfd, 0x43]),
            I::F32x4Le => sink.write_bytes(&[0xfd, 0x44]),
            I::F32x4Ge => sink.write_bytes(&[0xfd, 0x45]),
            I::F64x2Eq => sink.write_bytes(&[0xfd, 0x46]),
            I::F64x2Ne => sink.write_bytes(&[0xfd, 0x47]),
            I::F64x2Lt => sink.write_bytes(&[0xfd, 0x48]),
            I::F64x2Gt => sink.write_bytes(&[0xfd, 0x49]),
            I::F64x2Le => sink.write_bytes(&[0xfd, 0x4a]),
            I::F64x2Ge => sink.write_bytes(&[0xfd, 0x4b]),
            I::V128Not => sink.write_bytes(&[0xfd, 0x4c]),
            I::V128And => sink.write_bytes(&[0xfd, 0x4d]),
            I::V128Or => sink.write_bytes(&[0xfd, 0x4e]),
            I::V128Xor => sink.write_bytes(&[0xfd, 0x4f]),
            I::V128Bitselect => sink.write_bytes(&[0xfd, 0x50]),
            I::I8x16Neg => sink.write_bytes(&[0xfd, 0x51]),
            I::I8x16AnyTrue => sink.write_bytes(&[0xfd, 0x52]),
            I::I8x16AllTrue => sink.write_bytes(&[0xfd, 0x53]),
            I::I8x16Shl => sink.write_bytes(&[0xfd, 0x54]),
            I::I8x16ShrS => sink.write_bytes(&[0xfd, 0x55]),
            I::I8x16ShrU => sink.write_bytes(&[0xfd, 0x56]),
            I::I8x16Add => sink.write_bytes(&[0xfd, 0x57]),
            I::I8x16AddSaturateS => sink.write_bytes(&[0xfd, 0x58]),
            I::I8x16AddSaturateU => sink.write_bytes(&[0xfd, 0x59]),
            I::I8x16Sub => sink.write_bytes(&[0xfd, 0x5a]),
            I::I8x16SubSaturateS => sink.write_bytes(&[0xfd, 0x5b]),
            I::I8x16SubSaturateU => sink.write_bytes(&[0xfd, 0x5c]),
            I::I8x16Mul => sink.write_bytes(&[0xfd, 0x5d]),
            I::I16x8Neg => sink.write_bytes(&[0xfd, 0x62]),
            I::I16x8AnyTrue => sink.write_bytes(&[0xfd, 0x63]),
            I::I16x8AllTrue => sink.write_bytes(&[0xfd, 0x64]),
            I::I16x8Shl => sink.write_bytes(&[0xfd, 0x65]),
            I::I16x8ShrS => sink.write_bytes(&[0xfd, 0x66]),
            I::I16x8ShrU => sink.write_bytes(&[0xfd, 0x67]),
            I::I16x8Add => sink.write_bytes(&[0xfd, 0x68]),
            I::I16x8AddSaturateS => sink.write_bytes(&[0xfd, 0x69]),
            I::I16x8AddSaturateU => sink.write_bytes(&[0xfd, 0x6a]),
            I::I16x8Sub => sink.write_bytes(&[0xfd, 0x6b]),
            I::I16x8SubSaturateS => sink.write_bytes(&[0xfd, 0x6c]),
            I::I16x8SubSaturateU => sink.write_bytes(&[0xfd, 0x6d]),
            I::I16x8Mul => sink.write_bytes(&[0xfd, 0x6e]),
            I::I32x4Neg => sink.write_bytes(&[0xfd, 0x73]),
            I::I32x4AnyTrue => sink.write_bytes(&[0xfd, 0x74]),
            I::I32x4AllTrue => sink.write_bytes(&[0xfd, 0x75]),
            I::I32x4Shl => sink.write_bytes(&[0xfd, 0x76]),
            I::I32x4ShrS => sink.write_bytes(&[0xfd, 0x77]),
            I::I32x4ShrU => sink.write_bytes(&[0xfd, 0x78]),
            I::I32x4Add => sink.write_bytes(&[0xfd, 0x79]),
            I::I32x4Sub => sink.write_bytes(&[0xfd, 0x7c]),
            I::I32x4Mul => sink.write_bytes(&[0xfd, 0x7f]),
            I::I64x2Neg => sink.write_bytes(&[0xfd, 0x84]),
            I::I64x2AnyTrue => sink.write_bytes(&[0xfd, 0x85]),
            I::I64x2AllTrue => sink.write_bytes(&[0xfd, 0x86]),
            I::I64x2Shl => sink.write_bytes(&[0xfd, 0x87]),
            I::I64x2ShrS => sink.write_bytes(&[0xfd, 0x88]),
            I::I64x2ShrU => sink.write_bytes(&[0xfd, 0x89]),
            I::I64x2Add => sink.write_bytes(&[0xfd, 0x8a]),
            I::I64x2Sub => sink.write_bytes(&[0xfd, 0x8d]),
            I::I64x2Mul => sink.write_bytes(&[0xfd, 0x90]),
            I::F32x4Abs => sink.write_bytes(&[0xfd, 0x95]),
            I::F32x4Neg => sink.write_bytes(&[0xfd, 0x96]),
            I::F32x4Sqrt => sink.write_bytes(&[0xfd, 0x97]),
            I::F32x4Add => sink.write_bytes(&[0xfd, 0x9a]),
            I::F32x4Sub => sink.write_bytes(&[0xfd, 0x9b]),
            I::F32x4Mul => sink.write_bytes(&[0xfd, 0x9c]),
            I::F32x4Div => sink.write_bytes(&[0xfd, 0x9d]),
            I::F32x4Min => sink.write_bytes(&[0xfd, 0x9e]),
            I::F32x4Max => sink.write_bytes(&[0xfd, 0x9f]),
            I::F64x2Abs => sink.write_bytes(&[0xfd, 0xa0]),
            I::F64x2Neg => sink.write_bytes(&[0xfd, 0xa1]),
            I::F64x2Sqrt => sink.write_bytes(&[0xfd, 0xa2]),
            I::F64x2Add => sink.write_bytes(&[0xfd, 0xa5]),
            I::F64x2Sub => sink.write_bytes(&[0xfd, 0xa6]),
            I::F64x2Mul => sink.write_bytes(&[0xfd, 0xa7]),
            I::F64x2Div => sink.write_bytes(&[0xfd, 0xa8]),
            I::F64x2Min => sink.write_bytes(&[0xfd, 0xa9]),
            I::F64x2Max => sink.write_bytes(&[0xfd, 0xaa]),
            I::I32x4TruncSatF32x4S => sink.write_bytes(&[0xfd, 0xab]),
            I::I32x4TruncSatF32x4U => sink.write_bytes(&[0xfd, 0xac]),
            I::I64x2TruncSatF64x2S => sink.write_bytes(&[0xfd, 0xad]),
            I::I64x2TruncSatF64x2U => sink.write_bytes(&[0xfd, 0xae]),
            I::F32x4ConvertI32x4S => sink.write_bytes(&[0xfd, 0xaf]),
            I::F32x4ConvertI32x4U => sink.write_bytes(&[0xfd, 0xb0]),
            I::F64x2ConvertI64x2S => sink.write_bytes(&[0xfd, 0xb1]),
            I::F64x2ConvertI64x2U => sink.write_bytes(&[0xfd, 0xb2]),
            I::V8x16Swizzle => sink.write_bytes(&[0xfd, 0xc0]),
            I::V8x16LoadSplat(memarg) => {
                sink.write_bytes(&[0xfd, 0xc2]);
                memarg.encode(sink);
            }
            I::V16x8LoadSplat(memarg) => {
                sink.write_bytes(&[0xfd, 0xc3]);
                memarg.encode(sink);
            }
            I::V32x4LoadSplat(memarg) => {
                sink.write_bytes(&[0xfd, 0xc4]);
                memarg.encode(sink);
            }
            I::V64x2LoadSplat(memarg) => {
                sink.write_bytes(&[0xfd, 0xc5]);
                memarg.encode(sink);
            }
            I::I8x16NarrowI16x8S => sink.write_bytes(&[0xfd, 0xc6]),
            I::I8x16NarrowI16x8U => sink.write_bytes(&[0xfd, 0xc7]),
            I::I16x8NarrowI32x4S => sink.write_bytes(&[0xfd, 0xc8]),
            I::I16x8NarrowI32x4U => sink.write_bytes(&[0xfd, 0xc9]),
            I::I16x8WidenLowI8x16S => sink.write_bytes(&[0xfd, 0xca]),
            I::I16x8WidenHighI8x16S => sink.write_bytes(&[0xfd, 0xcb]),
            I::I16x8WidenLowI8x16U => sink.write_bytes(&[0xfd, 0xcc]),
            I::I16x8WidenHighI8x16U => sink.write_bytes(&[0xfd, 0xcd]),
            I::I32x4WidenLowI16x8S => sink.write_bytes(&[0xfd, 0xce]),
            I::I32x4WidenHighI16x8S => sink.write_bytes(&[0xfd, 0xcf]),
            I::I32x4WidenLowI16x8U => sink.write_bytes(&[0xfd, 0xd0]),
            I::I32x4WidenHighI16x8U => sink.write_bytes(&[0xfd, 0xd1]),
            I::I16x8Load8x8S(memarg) => {
                sink.write_bytes(&[0xfd, 0xd2]);
                memarg.encode(sink);
            }
            I::I16x8Load8x8U(memarg) => {
                sink.write_bytes(&[0xfd, 0xd3]);
                memarg.encode(sink);
            }
            I::I32x4Load16x4S(memarg) => {
                sink.write_bytes(&[0xfd, 0xd4]);
                memarg.encode(sink);
            }
            I::I32x4Load16x4U(memarg) => {
                sink.write_bytes(&[0xfd, 0xd5]);
                memarg.encode(sink);
            }
            I::I64x2Load32x2S(memarg) => {
                sink.write_bytes(&[0xfd, 0xd6]);
                memarg.encode(sink);
            }
            I::I64x2Load32x2U(memarg) => {
                sink.write_bytes(&[0xfd, 0xd7]);
                memarg.encode(sink);
            }
            I::V128Andnot => sink.write_bytes(&[0xfd, 0xd8]),
        }
        Ok(())
    }
}
