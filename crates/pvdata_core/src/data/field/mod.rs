use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::data::{SchemaError, Structure};

/// Shared handle to an immutable field descriptor.
pub type FieldRef = Arc<Field>;

/// Coarse shape of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	/// Terminal descriptor holding one primitive value.
	Scalar,
	/// Composite descriptor with ordered named members.
	Structure,
}

/// Primitive kinds a scalar descriptor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	/// UTF-8 text.
	String,
	/// 32-bit signed integer.
	Int,
	/// 64-bit IEEE float.
	Double,
}

const SCALAR_IDS: [&str; 3] = ["string", "int", "double"];

impl ScalarKind {
	/// Every kind, in table order.
	pub const ALL: [ScalarKind; 3] = [ScalarKind::String, ScalarKind::Int, ScalarKind::Double];

	/// Stable type id for this kind.
	pub fn id(self) -> &'static str {
		SCALAR_IDS[self as usize]
	}

	/// Look up a kind by its type id.
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.id() == id)
	}
}

impl fmt::Display for ScalarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Terminal field descriptor.
///
/// Two scalars are equal exactly when their kinds match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scalar {
	kind: ScalarKind,
}

impl Scalar {
	/// Abstract width of one scalar instance.
	pub const BIT_WIDTH: usize = 1;

	/// Create a scalar descriptor of the given kind.
	pub fn new(kind: ScalarKind) -> Self {
		Self { kind }
	}

	/// Primitive kind carried by this descriptor.
	pub fn scalar_kind(&self) -> ScalarKind {
		self.kind
	}

	/// Type id, taken from the fixed kind table.
	pub fn id(&self) -> &'static str {
		self.kind.id()
	}
}

/// Immutable descriptor of a type's shape.
///
/// Descriptors are shared through [`FieldRef`]; any number of value trees and
/// structure members may hold the same one.
#[derive(Debug, PartialEq)]
pub enum Field {
	/// Terminal descriptor.
	Scalar(Scalar),
	/// Composite descriptor.
	Structure(Structure),
}

// Canonical per-kind descriptors; they live for the whole process.
static CANONICAL_SCALARS: LazyLock<[FieldRef; 3]> = LazyLock::new(|| ScalarKind::ALL.map(|kind| Arc::new(Field::Scalar(Scalar::new(kind)))));

impl Field {
	/// Shared canonical descriptor for a scalar kind.
	pub fn scalar(kind: ScalarKind) -> FieldRef {
		Arc::clone(&CANONICAL_SCALARS[kind as usize])
	}

	/// Shared `string` scalar descriptor.
	pub fn string() -> FieldRef {
		Self::scalar(ScalarKind::String)
	}

	/// Shared `int` scalar descriptor.
	pub fn int() -> FieldRef {
		Self::scalar(ScalarKind::Int)
	}

	/// Shared `double` scalar descriptor.
	pub fn double() -> FieldRef {
		Self::scalar(ScalarKind::Double)
	}

	/// Build a structure descriptor from parallel name and field lists.
	///
	/// See [`Structure::build`].
	pub fn structure<S: AsRef<str>>(id: &str, names: &[S], fields: &[FieldRef]) -> Result<FieldRef, SchemaError> {
		Structure::build(id, names, fields)
	}

	/// Coarse shape of this descriptor.
	pub fn kind(&self) -> FieldKind {
		match self {
			Self::Scalar(_) => FieldKind::Scalar,
			Self::Structure(_) => FieldKind::Structure,
		}
	}

	/// Stable type id.
	pub fn id(&self) -> &str {
		match self {
			Self::Scalar(scalar) => scalar.id(),
			Self::Structure(structure) => structure.id(),
		}
	}

	/// Abstract serialized width of one instance.
	pub fn bit_width(&self) -> usize {
		match self {
			Self::Scalar(_) => Scalar::BIT_WIDTH,
			Self::Structure(structure) => structure.bit_width(),
		}
	}

	/// Scalar view, if this is a scalar descriptor.
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(scalar) => Some(scalar),
			Self::Structure(_) => None,
		}
	}

	/// Structure view, if this is a structure descriptor.
	pub fn as_structure(&self) -> Option<&Structure> {
		match self {
			Self::Structure(structure) => Some(structure),
			Self::Scalar(_) => None,
		}
	}

	/// Scalar kind, if this is a scalar descriptor.
	pub fn scalar_kind(&self) -> Option<ScalarKind> {
		self.as_scalar().map(Scalar::scalar_kind)
	}
}

/// Renders the schema expression form.
///
/// The output parses back with
/// [`parse_schema_expr`](crate::data::parse_schema_expr) only when every
/// structure id and member name is a non-empty identifier (`[A-Za-z0-9_]+`).
impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Scalar(scalar) => f.write_str(scalar.id()),
			Self::Structure(structure) => {
				write!(f, "{}{{", structure.id())?;
				for (idx, member) in structure.members().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}:{}", member.name(), member.field())?;
				}
				f.write_str("}")
			}
		}
	}
}
