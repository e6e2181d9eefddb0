use wattle_ast::{
    Data, DataKind, Elem, ElemKind, ElemPayload, EncodeError, Export, ExportKind, Expression,
    Func, FuncKind, FunctionType, Global, GlobalKind, GlobalType, Id, Import, ImportItem, Index,
    Limits, Local, Memory, MemoryKind, MemoryType, Module, ModuleField, ModuleKind, RefType,
    Start, Table, TableKind, TableType, TypeField, TypeUse, ValType,
};
use wattle_ast::Instruction;

use super::*;

fn add_func_fields() -> Vec<ModuleField> {
    vec![
        ModuleField::Type(TypeField {
            name: None,
            func: FunctionType::new(vec![ValType::I32, ValType::I32], vec![ValType::I32]),
        }),
        ModuleField::Func(Func {
            name: None,
            exports: Default::default(),
            ty: TypeUse::from_index(Index::Num(0)),
            kind: FuncKind::Inline {
                locals: Vec::new(),
                expr: Expression {
                    instrs: vec![
                        Instruction::LocalGet(Index::Num(0)),
                        Instruction::LocalGet(Index::Num(1)),
                        Instruction::I32Add,
                    ],
                },
            },
        }),
    ]
}

#[test]
fn empty_module_is_just_the_header() {
    let bytes = encode(&Module::text(Vec::new())).unwrap();
    assert_eq!(bytes, HEADER);
}

#[test]
fn add_function_end_to_end() {
    let bytes = encode(&Module::text(add_func_fields())).unwrap();
    #[rustfmt::skip]
    let expected = vec![
        0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00,
        0x01, 0x07, 0x01, 0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f,
        0x03, 0x02, 0x01, 0x00,
        0x0a, 0x09, 0x01, 0x07, 0x00, 0x20, 0x00, 0x20, 0x01, 0x6a, 0x0b,
    ];
    assert_eq!(bytes, expected);
}

#[test]
fn binary_module_chunks_pass_through() {
    let module = Module {
        id: None,
        kind: ModuleKind::Binary(vec![vec![0x01, 0x02], vec![0x03]]),
    };
    let bytes = encode(&module).unwrap();
    assert_eq!(&bytes[..8], &HEADER);
    assert_eq!(&bytes[8..], &[0x01, 0x02, 0x03]);
}

#[test]
fn import_section_bytes() {
    let fields = vec![
        ModuleField::Type(TypeField {
            name: None,
            func: FunctionType::default(),
        }),
        ModuleField::Import(Import {
            module: "a".into(),
            field: "b".into(),
            id: None,
            item: ImportItem::Func(TypeUse::from_index(Index::Num(0))),
        }),
    ];
    let bytes = encode(&Module::text(fields)).unwrap();
    // type section, then: id 2, size 7, count 1, "a", "b", kind 0, typeidx 0
    let import_section = &bytes[8 + 6..];
    assert_eq!(
        import_section,
        &[0x02, 0x07, 0x01, 0x01, b'a', 0x01, b'b', 0x00, 0x00]
    );
}

#[test]
fn memory_and_active_data_at_memory_zero() {
    let fields = vec![
        ModuleField::Memory(Memory {
            name: None,
            exports: Default::default(),
            kind: MemoryKind::Normal(MemoryType {
                limits: Limits {
                    min: 1,
                    max: Some(1),
                },
            }),
        }),
        ModuleField::Data(Data {
            name: None,
            kind: DataKind::Active {
                memory: Index::Num(0),
                offset: Expression::one(Instruction::I32Const(8)),
            },
            val: vec![b"ab".to_vec(), b"c".to_vec()],
        }),
    ];
    let bytes = encode(&Module::text(fields)).unwrap();
    #[rustfmt::skip]
    let expected = [
        0x05, 0x04, 0x01, 0x01, 0x01, 0x01,
        0x0b, 0x09, 0x01, 0x00, 0x41, 0x08, 0x0b, 0x03, b'a', b'b', b'c',
    ];
    assert_eq!(&bytes[8..], expected);
}

#[test]
fn active_data_at_explicit_memory_uses_flag_two() {
    let fields = vec![ModuleField::Data(Data {
        name: None,
        kind: DataKind::Active {
            memory: Index::Num(3),
            offset: Expression::one(Instruction::I32Const(0)),
        },
        val: vec![b"x".to_vec()],
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(
        &bytes[8..],
        &[0x0b, 0x08, 0x01, 0x02, 0x03, 0x41, 0x00, 0x0b, 0x01, b'x']
    );
}

#[test]
fn passive_data_uses_flag_one() {
    let fields = vec![ModuleField::Data(Data {
        name: None,
        kind: DataKind::Passive,
        val: vec![b"p".to_vec()],
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(&bytes[8..], &[0x0b, 0x04, 0x01, 0x01, 0x01, b'p']);
}

#[test]
fn active_index_elem_at_table_zero_is_compact() {
    let fields = vec![ModuleField::Elem(Elem {
        name: None,
        kind: ElemKind::Active {
            table: Index::Num(0),
            offset: Expression::one(Instruction::I32Const(1)),
        },
        payload: ElemPayload::Indices(vec![Index::Num(2)]),
        force_non_zero: false,
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(
        &bytes[8..],
        &[0x09, 0x07, 0x01, 0x00, 0x41, 0x01, 0x0b, 0x01, 0x02]
    );
}

#[test]
fn forced_elem_carries_the_table_index() {
    let fields = vec![ModuleField::Elem(Elem {
        name: None,
        kind: ElemKind::Active {
            table: Index::Num(0),
            offset: Expression::one(Instruction::I32Const(0)),
        },
        payload: ElemPayload::Indices(vec![Index::Num(1)]),
        force_non_zero: true,
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(
        &bytes[8..],
        &[0x09, 0x09, 0x01, 0x02, 0x00, 0x41, 0x00, 0x0b, 0x00, 0x01, 0x01]
    );
}

#[test]
fn passive_expr_elem_writes_ref_expressions() {
    let fields = vec![ModuleField::Elem(Elem {
        name: None,
        kind: ElemKind::Passive,
        payload: ElemPayload::Exprs {
            ty: RefType::Funcref,
            exprs: vec![Some(Index::Num(4)), None],
        },
        force_non_zero: false,
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(
        &bytes[8..],
        &[0x09, 0x09, 0x01, 0x05, 0x70, 0x02, 0xd2, 0x04, 0x0b, 0xd0, 0x0b]
    );
}

#[test]
fn active_funcref_exprs_at_table_zero_use_flavor_four() {
    let fields = vec![ModuleField::Elem(Elem {
        name: None,
        kind: ElemKind::Active {
            table: Index::Num(0),
            offset: Expression::one(Instruction::I32Const(0)),
        },
        payload: ElemPayload::Exprs {
            ty: RefType::Funcref,
            exprs: vec![None],
        },
        force_non_zero: false,
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(
        &bytes[8..],
        &[0x09, 0x07, 0x01, 0x04, 0x41, 0x00, 0x0b, 0x01, 0xd0, 0x0b]
    );
}

#[test]
fn locals_are_run_length_grouped() {
    let local = |ty| Local { id: None, ty };
    let fields = vec![
        ModuleField::Type(TypeField {
            name: None,
            func: FunctionType::default(),
        }),
        ModuleField::Func(Func {
            name: None,
            exports: Default::default(),
            ty: TypeUse::from_index(Index::Num(0)),
            kind: FuncKind::Inline {
                locals: vec![local(ValType::I32), local(ValType::I32), local(ValType::I64)],
                expr: Expression::default(),
            },
        }),
    ];
    let bytes = encode(&Module::text(fields)).unwrap();
    let code_section_start = bytes.len() - 10;
    assert_eq!(
        &bytes[code_section_start..],
        &[0x0a, 0x08, 0x01, 0x06, 0x02, 0x02, 0x7f, 0x01, 0x7e, 0x0b]
    );
}

#[test]
fn start_global_and_export_sections() {
    let fields = vec![
        ModuleField::Type(TypeField {
            name: None,
            func: FunctionType::default(),
        }),
        ModuleField::Func(Func {
            name: None,
            exports: Default::default(),
            ty: TypeUse::from_index(Index::Num(0)),
            kind: FuncKind::Inline {
                locals: Vec::new(),
                expr: Expression::default(),
            },
        }),
        ModuleField::Global(Global {
            name: None,
            exports: Default::default(),
            ty: GlobalType {
                ty: ValType::I32,
                mutable: true,
            },
            kind: GlobalKind::Inline(Expression::one(Instruction::I32Const(5))),
        }),
        ModuleField::Export(Export {
            name: "go".into(),
            kind: ExportKind::Func,
            index: Index::Num(0),
        }),
        ModuleField::Start(Start {
            index: Index::Num(0),
        }),
    ];
    let bytes = encode(&Module::text(fields)).unwrap();
    let tail = &bytes[8..];
    // global: id 6, size 6, count 1, i32 mut, i32.const 5 end
    let global = [0x06, 0x06, 0x01, 0x7f, 0x01, 0x41, 0x05, 0x0b];
    // export: id 7, size 6, count 1, "go", kind func, index 0
    let export = [0x07, 0x06, 0x01, 0x02, b'g', b'o', 0x00, 0x00];
    // start: id 8, size 1, funcidx 0
    let start = [0x08, 0x01, 0x00];
    let pos = tail
        .windows(global.len())
        .position(|w| w == global)
        .expect("global section present");
    assert_eq!(&tail[pos + global.len()..pos + global.len() + export.len()], export);
    assert_eq!(
        &tail[pos + global.len() + export.len()..pos + global.len() + export.len() + start.len()],
        start
    );
}

#[test]
fn table_section_bytes() {
    let fields = vec![ModuleField::Table(Table {
        name: None,
        exports: Default::default(),
        kind: TableKind::Normal(TableType {
            elem: RefType::Funcref,
            limits: Limits { min: 2, max: None },
        }),
    })];
    let bytes = encode(&Module::text(fields)).unwrap();
    assert_eq!(&bytes[8..], &[0x04, 0x04, 0x01, 0x70, 0x00, 0x02]);
}

#[test]
fn unexpanded_table_import_is_a_defect() {
    let fields = vec![ModuleField::Table(Table {
        name: None,
        exports: Default::default(),
        kind: TableKind::Import {
            module: "a".into(),
            field: "t".into(),
            ty: TableType {
                elem: RefType::Funcref,
                limits: Limits { min: 0, max: None },
            },
        },
    })];
    let err = encode(&Module::text(fields)).unwrap_err();
    assert!(matches!(err, EncodeError::UnexpandedField("table")));
}

#[test]
fn symbolic_index_is_a_defect() {
    let fields = vec![ModuleField::Start(Start {
        index: Index::Id(Id::new("main")),
    })];
    let err = encode(&Module::text(fields)).unwrap_err();
    assert!(matches!(err, EncodeError::UnresolvedIndex(name) if name == "main"));
}

#[test]
fn missing_type_index_is_a_defect() {
    let fields = vec![ModuleField::Func(Func {
        name: None,
        exports: Default::default(),
        ty: TypeUse::inline(FunctionType::default()),
        kind: FuncKind::Inline {
            locals: Vec::new(),
            expr: Expression::default(),
        },
    })];
    let err = encode(&Module::text(fields)).unwrap_err();
    assert!(matches!(err, EncodeError::MissingTypeIndex));
}
