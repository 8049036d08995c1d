mod cursor;
mod error;
mod expr;
mod field;
mod path;
mod structure;
mod value;

/// Error and result aliases.
pub use error::{PvError, Result, SchemaError, TypeError};
/// Schema expression parser.
pub use expr::parse_schema_expr;
/// Field descriptors and canonical scalar kinds.
pub use field::{Field, FieldKind, FieldRef, Scalar, ScalarKind};
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Structure descriptor and member types.
pub use structure::{ResolvedField, Structure, StructureMember};
/// Typed value containers.
pub use value::{ScalarType, ScalarValue, StructureValue, ValueHandle, ValueNode};
