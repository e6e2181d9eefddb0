use wattle_ast::{
    BlockType, BrTableIndices, DataKind, Elem, ElemKind, ElemPayload, Export, ExportKind,
    Expression, Func, FuncKind, FuncParam, FunctionType, GlobalKind, Id, Index, Instruction, Local,
    ModuleField, Start, TypeField, TypeUse, ValType,
};

use super::*;

fn id(name: &str) -> Id {
    Id::new(name)
}

fn func_field(name: Option<&str>, ty: TypeUse, locals: Vec<Local>, instrs: Vec<Instruction>) -> ModuleField {
    ModuleField::Func(Func {
        name: name.map(Id::new),
        exports: Default::default(),
        ty,
        kind: FuncKind::Inline {
            locals,
            expr: Expression { instrs },
        },
    })
}

fn resolver_for(fields: &[ModuleField]) -> NameResolver {
    let mut resolver = NameResolver::new();
    for field in fields {
        resolver.register(field);
    }
    resolver
}

fn body_of(field: &ModuleField) -> &[Instruction] {
    let ModuleField::Func(func) = field else {
        panic!("expected func");
    };
    let FuncKind::Inline { expr, .. } = &func.kind else {
        panic!("expected inline body");
    };
    &expr.instrs
}

#[test]
fn forward_calls_resolve() {
    let mut fields = vec![
        func_field(
            None,
            TypeUse::from_index(Index::Num(0)),
            Vec::new(),
            vec![Instruction::Call(Index::Id(id("later")))],
        ),
        func_field(
            Some("later"),
            TypeUse::from_index(Index::Num(0)),
            Vec::new(),
            Vec::new(),
        ),
    ];
    let resolver = resolver_for(&fields);
    for field in &mut fields {
        resolver.resolve_field(field).unwrap();
    }

    assert_eq!(body_of(&fields[0]), &[Instruction::Call(Index::Num(1))]);
}

#[test]
fn unnamed_definitions_advance_the_counter() {
    let fields = vec![
        func_field(None, TypeUse::from_index(Index::Num(0)), Vec::new(), Vec::new()),
        func_field(Some("f"), TypeUse::from_index(Index::Num(0)), Vec::new(), Vec::new()),
    ];
    let resolver = resolver_for(&fields);

    let mut index = Index::Id(id("f"));
    resolver.resolve_idx(&mut index, Ns::Func).unwrap();
    assert_eq!(index, Index::Num(1));
}

#[test]
fn unknown_name_reports_its_namespace() {
    let resolver = NameResolver::new();
    let mut index = Index::Id(id("nope"));
    let err = resolver.resolve_idx(&mut index, Ns::Func).unwrap_err();
    assert_eq!(err.to_string(), "namespace func can not resolve index $nope");
}

#[test]
fn label_depth_counts_from_innermost() {
    let block = |name: &str| {
        Instruction::Block(BlockType {
            label: Some(id(name)),
            ty: TypeUse::inline(FunctionType::default()),
        })
    };
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![
            block("outer"),
            block("inner"),
            Instruction::Br(Index::Id(id("inner"))),
            Instruction::Br(Index::Id(id("outer"))),
            Instruction::End(None),
            Instruction::End(None),
        ],
    )];
    let resolver = resolver_for(&fields);
    resolver.resolve_field(&mut fields[0]).unwrap();

    let body = body_of(&fields[0]);
    assert_eq!(body[2], Instruction::Br(Index::Num(0)));
    assert_eq!(body[3], Instruction::Br(Index::Num(1)));
}

#[test]
fn shadowed_labels_pick_the_nearest() {
    let block = || {
        Instruction::Block(BlockType {
            label: Some(id("l")),
            ty: TypeUse::inline(FunctionType::default()),
        })
    };
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![
            block(),
            block(),
            Instruction::Br(Index::Id(id("l"))),
            Instruction::End(Some(id("l"))),
            Instruction::End(Some(id("l"))),
        ],
    )];
    let resolver = resolver_for(&fields);
    resolver.resolve_field(&mut fields[0]).unwrap();

    assert_eq!(body_of(&fields[0])[2], Instruction::Br(Index::Num(0)));
}

#[test]
fn br_table_resolves_every_target() {
    let block = |name: &str| {
        Instruction::Block(BlockType {
            label: Some(id(name)),
            ty: TypeUse::inline(FunctionType::default()),
        })
    };
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![
            block("a"),
            block("b"),
            Instruction::BrTable(BrTableIndices {
                labels: vec![Index::Id(id("a")), Index::Id(id("b"))],
                default: Index::Id(id("a")),
            }),
            Instruction::End(None),
            Instruction::End(None),
        ],
    )];
    let resolver = resolver_for(&fields);
    resolver.resolve_field(&mut fields[0]).unwrap();

    let Instruction::BrTable(indices) = &body_of(&fields[0])[2] else {
        panic!("expected br_table");
    };
    assert_eq!(indices.labels, vec![Index::Num(1), Index::Num(0)]);
    assert_eq!(indices.default, Index::Num(1));
}

#[test]
fn unknown_label_is_an_error() {
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![Instruction::Br(Index::Id(id("ghost")))],
    )];
    let resolver = resolver_for(&fields);
    let err = resolver.resolve_field(&mut fields[0]).unwrap_err();
    assert!(matches!(err, ResolveError::UnresolvedLabel(label) if label == "ghost"));
}

#[test]
fn end_label_must_match_block_label() {
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![
            Instruction::Block(BlockType {
                label: Some(id("a")),
                ty: TypeUse::inline(FunctionType::default()),
            }),
            Instruction::End(Some(id("b"))),
        ],
    )];
    let resolver = resolver_for(&fields);
    let err = resolver.resolve_field(&mut fields[0]).unwrap_err();
    assert!(matches!(err, ResolveError::LabelMismatch));
}

#[test]
fn else_repeats_the_if_label() {
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![
            Instruction::I32Const(1),
            Instruction::If(BlockType {
                label: Some(id("cond")),
                ty: TypeUse::inline(FunctionType::default()),
            }),
            Instruction::Else(Some(id("cond"))),
            Instruction::End(Some(id("cond"))),
        ],
    )];
    let resolver = resolver_for(&fields);
    resolver.resolve_field(&mut fields[0]).unwrap();
}

#[test]
fn named_params_and_locals_resolve() {
    let ty = TypeUse::inline(FunctionType {
        params: vec![FuncParam {
            id: Some(id("x")),
            ty: ValType::I32,
        }],
        results: vec![],
    });
    let mut ty = ty;
    ty.index = Some(Index::Num(0));
    let mut fields = vec![func_field(
        None,
        ty,
        vec![Local {
            id: Some(id("tmp")),
            ty: ValType::I64,
        }],
        vec![
            Instruction::LocalGet(Index::Id(id("x"))),
            Instruction::LocalGet(Index::Id(id("tmp"))),
        ],
    )];
    let resolver = resolver_for(&fields);
    resolver.resolve_field(&mut fields[0]).unwrap();

    let body = body_of(&fields[0]);
    assert_eq!(body[0], Instruction::LocalGet(Index::Num(0)));
    assert_eq!(body[1], Instruction::LocalGet(Index::Num(1)));
}

#[test]
fn type_use_signature_is_filled_from_the_type_field() {
    let mut fields = vec![
        ModuleField::Type(TypeField {
            name: Some(id("sig")),
            func: FunctionType {
                params: vec![FuncParam {
                    id: Some(id("n")),
                    ty: ValType::I32,
                }],
                results: vec![ValType::I32],
            },
        }),
        func_field(
            None,
            TypeUse::from_index(Index::Id(id("sig"))),
            Vec::new(),
            vec![Instruction::LocalGet(Index::Id(id("n")))],
        ),
    ];
    let resolver = resolver_for(&fields);
    for field in &mut fields {
        resolver.resolve_field(field).unwrap();
    }

    let ModuleField::Func(func) = &fields[1] else {
        panic!("expected func");
    };
    assert_eq!(func.ty.index, Some(Index::Num(0)));
    assert_eq!(func.ty.ty.params.len(), 1);
    assert_eq!(body_of(&fields[1]), &[Instruction::LocalGet(Index::Num(0))]);
}

#[test]
fn block_type_collapses_when_signature_is_compact() {
    let mut fields = vec![
        ModuleField::Type(TypeField {
            name: Some(id("ret")),
            func: FunctionType::new(vec![], vec![ValType::I32]),
        }),
        func_field(
            None,
            TypeUse::from_index(Index::Num(0)),
            Vec::new(),
            vec![
                Instruction::Block(BlockType {
                    label: None,
                    ty: TypeUse::from_index(Index::Id(id("ret"))),
                }),
                Instruction::End(None),
            ],
        ),
    ];
    let resolver = resolver_for(&fields);
    for field in &mut fields {
        resolver.resolve_field(field).unwrap();
    }

    let Instruction::Block(bt) = &body_of(&fields[1])[0] else {
        panic!("expected block");
    };
    assert_eq!(bt.ty.index, None);
    assert_eq!(bt.ty.ty.results, vec![ValType::I32]);
}

#[test]
fn out_of_range_block_type_index_is_kept() {
    let mut fields = vec![func_field(
        None,
        TypeUse::from_index(Index::Num(0)),
        Vec::new(),
        vec![
            Instruction::Block(BlockType {
                label: None,
                ty: TypeUse::from_index(Index::Num(9)),
            }),
            Instruction::End(None),
        ],
    )];
    let resolver = resolver_for(&fields);
    resolver.resolve_field(&mut fields[0]).unwrap();

    let Instruction::Block(bt) = &body_of(&fields[0])[0] else {
        panic!("expected block");
    };
    assert_eq!(bt.ty.index, Some(Index::Num(9)));
}

#[test]
fn exports_and_start_resolve_in_their_namespaces() {
    let mut fields = vec![
        func_field(Some("main"), TypeUse::from_index(Index::Num(0)), Vec::new(), Vec::new()),
        ModuleField::Export(Export {
            name: "main".into(),
            kind: ExportKind::Func,
            index: Index::Id(id("main")),
        }),
        ModuleField::Start(Start {
            index: Index::Id(id("main")),
        }),
    ];
    let resolver = resolver_for(&fields);
    for field in &mut fields {
        resolver.resolve_field(field).unwrap();
    }

    let ModuleField::Export(export) = &fields[1] else {
        panic!("expected export");
    };
    assert_eq!(export.index, Index::Num(0));
    let ModuleField::Start(start) = &fields[2] else {
        panic!("expected start");
    };
    assert_eq!(start.index, Index::Num(0));
}

#[test]
fn element_segments_resolve_function_names() {
    let mut fields = vec![
        func_field(Some("f"), TypeUse::from_index(Index::Num(0)), Vec::new(), Vec::new()),
        ModuleField::Elem(Elem {
            name: None,
            kind: ElemKind::Active {
                table: Index::Num(0),
                offset: Expression::one(Instruction::I32Const(0)),
            },
            payload: ElemPayload::Indices(vec![Index::Id(id("f"))]),
            force_non_zero: false,
        }),
    ];
    let resolver = resolver_for(&fields);
    for field in &mut fields {
        resolver.resolve_field(field).unwrap();
    }

    let ModuleField::Elem(elem) = &fields[1] else {
        panic!("expected elem");
    };
    assert_eq!(elem.payload, ElemPayload::Indices(vec![Index::Num(0)]));
}

#[test]
fn global_references_resolve_in_offset_expressions() {
    let mut fields = vec![
        ModuleField::Global(wattle_ast::Global {
            name: Some(id("base")),
            exports: Default::default(),
            ty: wattle_ast::GlobalType {
                ty: ValType::I32,
                mutable: false,
            },
            kind: GlobalKind::Inline(Expression::one(Instruction::I32Const(16))),
        }),
        ModuleField::Data(wattle_ast::Data {
            name: None,
            kind: DataKind::Active {
                memory: Index::Num(0),
                offset: Expression::one(Instruction::GlobalGet(Index::Id(id("base")))),
            },
            val: vec![b"hi".to_vec()],
        }),
    ];
    let resolver = resolver_for(&fields);
    for field in &mut fields {
        resolver.resolve_field(field).unwrap();
    }

    let ModuleField::Data(data) = &fields[1] else {
        panic!("expected data");
    };
    let DataKind::Active { offset, .. } = &data.kind else {
        panic!("expected active data");
    };
    assert_eq!(offset.instrs, vec![Instruction::GlobalGet(Index::Num(0))]);
}
