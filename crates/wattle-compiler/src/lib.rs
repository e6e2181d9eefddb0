//! Wattle compiler: sugar expansion, name resolution, and binary emission.
//!
//! The pipeline takes an already-parsed module tree and produces bytes in
//! the WebAssembly binary container format:
//! - `expand` - rewrites inline import/export/data/element sugar into
//!   canonical fields and normalizes field order
//! - `typeuse` - deduplicates function signatures into explicit types
//! - `resolve` - turns every symbolic identifier into a numeric index
//! - `emit` - serializes the resolved field list section by section
//!
//! Text tokenization, operand grammar, and file handling are external
//! collaborators; a module arrives here fully structured.

pub mod emit;
pub mod expand;
pub mod resolve;
pub mod typeuse;


use wattle_ast::{Module, ModuleKind};

pub use emit::encode;
pub use expand::{ExpandError, Expander};
pub use resolve::{NameResolver, Ns, ResolveError};
pub use typeuse::TypeExpander;

/// Errors surfaced by the pipeline. Expansion and resolution failures are
/// user-input problems; `Encode` failures indicate an upstream pass was
/// skipped or buggy and are never caused by well-formed input that passed
/// the earlier stages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Encode(#[from] wattle_ast::EncodeError),
}

/// Run every expansion and resolution pass over a module in place.
///
/// After this returns `Ok`, no field carries inline sugar and every index
/// in the tree is numeric. Binary-kind modules pass through untouched.
pub fn resolve(module: &mut Module) -> Result<(), Error> {
    let ModuleKind::Text(fields) = &mut module.kind else {
        return Ok(());
    };

    let mut expander = Expander::default();
    expander.process(fields, Expander::expand_import);
    expander.process(fields, Expander::expand_export);
    expand::check_import_ordering(fields)?;

    expand::move_types_first(fields);
    let mut type_expander = TypeExpander::default();
    type_expander.process(fields);
    expand::move_imports_first(fields);

    let mut resolver = NameResolver::new();
    for field in fields.iter() {
        resolver.register(field);
    }
    for field in fields.iter_mut() {
        resolver.resolve_field(field)?;
    }

    Ok(())
}

/// Resolve a module and serialize it to the binary container format.
pub fn compile(module: &mut Module) -> Result<Vec<u8>, Error> {
    resolve(module)?;
    Ok(encode(module)?)
}
