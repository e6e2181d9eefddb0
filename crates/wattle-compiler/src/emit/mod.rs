//! Binary emission: serializes a resolved module into the container
//! format, section by section.
//!
//! Every reference must already be numeric and every field in canonical
//! form; violations surface as `EncodeError`, which marks an upstream
//! pass defect rather than bad user input. Empty sections are omitted
//! entirely. Each non-empty section is built in a scratch sink first so
//! its byte length can be prefixed.

#[cfg(test)]
mod emit_tests;

use wattle_ast::{
    BinarySink, Data, DataKind, Elem, ElemKind, ElemPayload, EncodeError, Export, Func, FuncKind,
    Global, GlobalKind, Import, Index, Local, Memory, MemoryKind, Module, ModuleField, ModuleKind,
    RefType, Start, Table, TableKind, TypeField,
};

const HEADER: [u8; 8] = [0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00];

const SECTION_TYPE: u8 = 1;
const SECTION_IMPORT: u8 = 2;
const SECTION_FUNCTION: u8 = 3;
const SECTION_TABLE: u8 = 4;
const SECTION_MEMORY: u8 = 5;
const SECTION_GLOBAL: u8 = 6;
const SECTION_EXPORT: u8 = 7;
const SECTION_START: u8 = 8;
const SECTION_ELEM: u8 = 9;
const SECTION_CODE: u8 = 10;
const SECTION_DATA: u8 = 11;

/// Serialize a resolved module to bytes.
///
/// Binary-kind modules emit the header followed by their chunks verbatim.
pub fn encode(module: &Module) -> Result<Vec<u8>, EncodeError> {
    let mut out = BinarySink::new();
    out.write_bytes(&HEADER);

    let fields = match &module.kind {
        ModuleKind::Binary(chunks) => {
            for chunk in chunks {
                out.write_bytes(chunk);
            }
            return Ok(out.into_bytes());
        }
        ModuleKind::Text(fields) => fields,
    };

    let mut types: Vec<&TypeField> = Vec::new();
    let mut imports: Vec<&Import> = Vec::new();
    let mut funcs: Vec<&Func> = Vec::new();
    let mut tables: Vec<&Table> = Vec::new();
    let mut memories: Vec<&Memory> = Vec::new();
    let mut globals: Vec<&Global> = Vec::new();
    let mut exports: Vec<&Export> = Vec::new();
    let mut start: Option<&Start> = None;
    let mut elems: Vec<&Elem> = Vec::new();
    let mut datas: Vec<&Data> = Vec::new();
    for field in fields {
        match field {
            ModuleField::Type(ty) => types.push(ty),
            ModuleField::Import(import) => imports.push(import),
            ModuleField::Func(func) => funcs.push(func),
            ModuleField::Table(table) => tables.push(table),
            ModuleField::Memory(memory) => memories.push(memory),
            ModuleField::Global(global) => globals.push(global),
            ModuleField::Export(export) => exports.push(export),
            ModuleField::Start(field) => start = start.or(Some(field)),
            ModuleField::Elem(elem) => elems.push(elem),
            ModuleField::Data(data) => datas.push(data),
        }
    }

    encode_section(&mut out, SECTION_TYPE, &types, |ty, sink| {
        ty.func.encode(sink);
        Ok(())
    })?;
    encode_section(&mut out, SECTION_IMPORT, &imports, |import, sink| {
        import.encode(sink)
    })?;
    encode_section(&mut out, SECTION_FUNCTION, &funcs, |func, sink| {
        match &func.ty.index {
            Some(index) => index.encode(sink),
            None => Err(EncodeError::MissingTypeIndex),
        }
    })?;
    encode_section(&mut out, SECTION_TABLE, &tables, |table, sink| {
        let TableKind::Normal(ty) = &table.kind else {
            return Err(EncodeError::UnexpandedField("table"));
        };
        ty.encode(sink);
        Ok(())
    })?;
    encode_section(&mut out, SECTION_MEMORY, &memories, |memory, sink| {
        let MemoryKind::Normal(ty) = &memory.kind else {
            return Err(EncodeError::UnexpandedField("memory"));
        };
        ty.encode(sink);
        Ok(())
    })?;
    encode_section(&mut out, SECTION_GLOBAL, &globals, |global, sink| {
        let GlobalKind::Inline(expr) = &global.kind else {
            return Err(EncodeError::UnexpandedField("global"));
        };
        global.ty.encode(sink);
        expr.encode(sink)
    })?;
    encode_section(&mut out, SECTION_EXPORT, &exports, |export, sink| {
        export.encode(sink)
    })?;
    if let Some(start) = start {
        let mut scratch = BinarySink::new();
        start.index.encode(&mut scratch)?;
        out.write_byte(SECTION_START);
        out.write_var_bytes(scratch.bytes());
    }
    encode_section(&mut out, SECTION_ELEM, &elems, encode_elem)?;
    encode_section(&mut out, SECTION_CODE, &funcs, encode_code)?;
    encode_section(&mut out, SECTION_DATA, &datas, encode_data)?;

    Ok(out.into_bytes())
}

/// Item-count sections share one shape: the section id, then the
/// length-prefixed body holding the count and the items. Empty sections
/// are not written at all.
fn encode_section<T>(
    out: &mut BinarySink,
    id: u8,
    items: &[&T],
    encode_item: impl Fn(&T, &mut BinarySink) -> Result<(), EncodeError>,
) -> Result<(), EncodeError> {
    if items.is_empty() {
        return Ok(());
    }
    let mut scratch = BinarySink::with_capacity(items.len() * 8);
    scratch.write_u32(items.len() as u32);
    for &item in items {
        encode_item(item, &mut scratch)?;
    }
    out.write_byte(id);
    out.write_var_bytes(scratch.bytes());
    Ok(())
}

fn numeric(index: &Index) -> Result<u32, EncodeError> {
    match index {
        Index::Num(num) => Ok(*num),
        Index::Id(id) => Err(EncodeError::UnresolvedIndex(id.as_str().to_owned())),
    }
}

/// Element segments pick their binary flavor from activeness, payload
/// shape, and table index. Table zero with a plain index list stays in
/// the compact MVP form unless the segment forces the explicit one.
fn encode_elem(elem: &Elem, sink: &mut BinarySink) -> Result<(), EncodeError> {
    match (&elem.kind, &elem.payload) {
        (ElemKind::Active { table, offset }, ElemPayload::Indices(indices)) => {
            let table = numeric(table)?;
            if table == 0 && !elem.force_non_zero {
                sink.write_byte(0x00);
                offset.encode(sink)?;
            } else {
                sink.write_byte(0x02);
                sink.write_u32(table);
                offset.encode(sink)?;
                // elemkind: funcref
                sink.write_byte(0x00);
            }
            encode_elem_indices(indices, sink)?;
        }
        (ElemKind::Passive, ElemPayload::Indices(indices)) => {
            sink.write_byte(0x01);
            sink.write_byte(0x00);
            encode_elem_indices(indices, sink)?;
        }
        (ElemKind::Active { table, offset }, ElemPayload::Exprs { ty, exprs }) => {
            let table = numeric(table)?;
            if table == 0 && !elem.force_non_zero && *ty == RefType::Funcref {
                sink.write_byte(0x04);
                offset.encode(sink)?;
            } else {
                sink.write_byte(0x06);
                sink.write_u32(table);
                offset.encode(sink)?;
                ty.encode(sink);
            }
            encode_elem_exprs(exprs, sink)?;
        }
        (ElemKind::Passive, ElemPayload::Exprs { ty, exprs }) => {
            sink.write_byte(0x05);
            ty.encode(sink);
            encode_elem_exprs(exprs, sink)?;
        }
    }
    Ok(())
}

fn encode_elem_indices(indices: &[Index], sink: &mut BinarySink) -> Result<(), EncodeError> {
    sink.write_u32(indices.len() as u32);
    for index in indices {
        index.encode(sink)?;
    }
    Ok(())
}

/// Expression-form entries are tiny constant expressions: `ref.func n`
/// for a function, `ref.null` for a hole.
fn encode_elem_exprs(exprs: &[Option<Index>], sink: &mut BinarySink) -> Result<(), EncodeError> {
    sink.write_u32(exprs.len() as u32);
    for expr in exprs {
        match expr {
            Some(index) => {
                sink.write_byte(0xd2);
                index.encode(sink)?;
            }
            None => sink.write_byte(0xd0),
        }
        sink.write_byte(0x0b);
    }
    Ok(())
}

/// A code entry is the length-prefixed pair of the local declarations,
/// run-length grouped by type, and the body expression.
fn encode_code(func: &Func, sink: &mut BinarySink) -> Result<(), EncodeError> {
    let FuncKind::Inline { locals, expr } = &func.kind else {
        return Err(EncodeError::UnexpandedField("function"));
    };
    let mut scratch = BinarySink::new();
    encode_locals(locals, &mut scratch);
    expr.encode(&mut scratch)?;
    sink.write_var_bytes(scratch.bytes());
    Ok(())
}

fn encode_locals(locals: &[Local], sink: &mut BinarySink) {
    let mut runs: Vec<(u32, wattle_ast::ValType)> = Vec::new();
    for local in locals {
        match runs.last_mut() {
            Some((count, ty)) if *ty == local.ty => *count += 1,
            _ => runs.push((1, local.ty)),
        }
    }
    sink.write_u32(runs.len() as u32);
    for (count, ty) in runs {
        sink.write_u32(count);
        ty.encode(sink);
    }
}

/// Data segments are a flag byte, the placement for active segments, and
/// the chunks concatenated under one combined length prefix.
fn encode_data(data: &Data, sink: &mut BinarySink) -> Result<(), EncodeError> {
    match &data.kind {
        DataKind::Active { memory, offset } => {
            let memory = numeric(memory)?;
            if memory == 0 {
                sink.write_byte(0x00);
            } else {
                sink.write_byte(0x02);
                sink.write_u32(memory);
            }
            offset.encode(sink)?;
        }
        DataKind::Passive => sink.write_byte(0x01),
    }
    let total: usize = data.val.iter().map(Vec::len).sum();
    sink.write_u32(total as u32);
    for chunk in &data.val {
        sink.write_bytes(chunk);
    }
    Ok(())
}
