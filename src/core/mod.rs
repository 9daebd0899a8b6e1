pub mod namer;
pub mod particle;
pub mod rescattering;
pub mod truth;

pub use crate::domain::model::{CodeKind, NamedCode, Origin, RescatterCategory};
pub use crate::domain::ports::ConfigProvider;

/// Fallback name for a code the table has no entry for: `"<label> (<code>)"`.
pub(crate) fn unrecognized(kind: CodeKind, code: i32, label: &str) -> String {
    trace_unrecognized(kind, code);
    format!("{} ({})", label, code)
}

pub(crate) fn trace_unrecognized(kind: CodeKind, code: i32) {
    tracing::trace!(kind = %kind, code, "no name for code, using fallback");
}
