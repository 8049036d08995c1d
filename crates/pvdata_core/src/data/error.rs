use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PvError>;

/// Failures raised while building or navigating descriptors and value trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
	/// Parallel name and field lists differ in length.
	#[error("structure arity mismatch: {names} names, {fields} fields")]
	ArityMismatch {
		/// Number of member names supplied.
		names: usize,
		/// Number of field descriptors supplied.
		fields: usize,
	},
	/// Accumulated bit width no longer fits in `usize`.
	#[error("bit width overflow in structure {id:?}")]
	WidthOverflow {
		/// Id of the structure being built.
		id: String,
	},
	/// A member name repeats within one structure.
	#[error("duplicate field name: {name}")]
	DuplicateName {
		/// First repeated name in declaration order.
		name: String,
	},
	/// Positional lookup past the end of the member sequence.
	#[error("index out of range: index={index}, len={len}")]
	IndexOutOfRange {
		/// Requested position.
		index: usize,
		/// Number of members available.
		len: usize,
	},
	/// Strict lookup of a name the structure does not declare.
	#[error("member not found: {name}")]
	MemberNotFound {
		/// Requested member name.
		name: String,
	},
	/// Structure-only operation applied to a scalar descriptor.
	#[error("not a structure: {id}")]
	NotAStructure {
		/// Type id of the offending descriptor.
		id: String,
	},
}

/// Failures raised by typed reads and writes on value nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
	/// Requested representation does not match the node's bound type.
	#[error("unsupported conversion: requested {requested}, node holds {actual}")]
	UnsupportedConversion {
		/// Representation type id the caller asked for.
		requested: &'static str,
		/// Type id of the field the node is bound to.
		actual: String,
	},
}

/// Umbrella error for composite operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PvError {
	/// Descriptor construction or navigation failure.
	#[error(transparent)]
	Schema(#[from] SchemaError),
	/// Typed access failure.
	#[error(transparent)]
	Type(#[from] TypeError),
	/// Field path expression syntax is invalid.
	#[error("invalid field path {path:?} at byte {at}: {reason}")]
	InvalidFieldPath {
		/// Original path string.
		path: String,
		/// Byte offset where parsing stopped.
		at: usize,
		/// Short description of what was expected.
		reason: &'static str,
	},
	/// Schema expression syntax is invalid.
	#[error("invalid schema expression at byte {at}: {reason}")]
	InvalidSchemaExpr {
		/// Original expression text.
		expr: String,
		/// Byte offset where parsing stopped.
		at: usize,
		/// Short description of what was expected.
		reason: &'static str,
	},
	/// Text literal cannot be read as the target scalar kind.
	#[error("invalid {kind} literal: {text:?}")]
	InvalidLiteral {
		/// Target scalar type id.
		kind: &'static str,
		/// Offending literal text.
		text: String,
	},
}
