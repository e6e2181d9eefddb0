//! Field expansion: rewrites inline import/export sugar into canonical
//! `Import`/`Export` fields and normalizes field order.

mod expander;


pub use expander::Expander;

use wattle_ast::ModuleField;

/// Structural errors detected during field expansion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExpandError {
    /// An import appeared after a function/table/memory/global definition.
    #[error("wrong import ordering: import after definition")]
    ImportAfterDefinition,
}

/// Imports must precede definitions. Scanning the expanded list, any
/// `Import` immediately preceded by a definition field is a violation.
pub fn check_import_ordering(fields: &[ModuleField]) -> Result<(), ExpandError> {
    for window in fields.windows(2) {
        if !matches!(window[1], ModuleField::Import(_)) {
            continue;
        }
        match window[0] {
            ModuleField::Memory(_)
            | ModuleField::Func(_)
            | ModuleField::Table(_)
            | ModuleField::Global(_) => return Err(ExpandError::ImportAfterDefinition),
            _ => continue,
        }
    }
    Ok(())
}

/// Stably move all `Type` fields before everything else.
pub fn move_types_first(fields: &mut [ModuleField]) {
    fields.sort_by_key(|field| !matches!(field, ModuleField::Type(_)));
}

/// Stably move all `Import` fields before all non-import fields.
pub fn move_imports_first(fields: &mut [ModuleField]) {
    fields.sort_by_key(|field| !matches!(field, ModuleField::Import(_)));
}
