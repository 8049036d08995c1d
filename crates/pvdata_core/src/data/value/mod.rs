use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::data::{Field, FieldKind, FieldPath, FieldRef, PathStep, Result, ScalarKind, SchemaError, TypeError};

/// Shared handle to a mutable value node.
///
/// Handles are single-threaded; a tree used from several threads needs an
/// external lock.
pub type ValueHandle = Rc<RefCell<ValueNode>>;

mod sealed {
	pub trait Sealed {}
	impl Sealed for String {}
	impl Sealed for i32 {}
	impl Sealed for f64 {}
}

/// Rust representation of a [`ScalarKind`].
///
/// Implemented for `String`, `i32` and `f64` only. Typed access succeeds only
/// when the requested representation is exactly the node's own; there is no
/// widening and no string conversion.
pub trait ScalarType: Clone + Default + PartialEq + fmt::Debug + sealed::Sealed + 'static {
	/// Scalar kind this representation stores.
	const KIND: ScalarKind;

	/// Borrow the matching scalar container out of a node.
	fn node_ref(node: &ValueNode) -> Option<&ScalarValue<Self>>;

	/// Mutably borrow the matching scalar container out of a node.
	fn node_mut(node: &mut ValueNode) -> Option<&mut ScalarValue<Self>>;

	/// Wrap a scalar container as a node.
	fn into_node(value: ScalarValue<Self>) -> ValueNode;
}

macro_rules! scalar_type {
	($ty:ty, $kind:ident) => {
		impl ScalarType for $ty {
			const KIND: ScalarKind = ScalarKind::$kind;

			fn node_ref(node: &ValueNode) -> Option<&ScalarValue<Self>> {
				match node {
					ValueNode::$kind(value) => Some(value),
					_ => None,
				}
			}

			fn node_mut(node: &mut ValueNode) -> Option<&mut ScalarValue<Self>> {
				match node {
					ValueNode::$kind(value) => Some(value),
					_ => None,
				}
			}

			fn into_node(value: ScalarValue<Self>) -> ValueNode {
				ValueNode::$kind(value)
			}
		}
	};
}

scalar_type!(String, String);
scalar_type!(i32, Int);
scalar_type!(f64, Double);

/// Leaf container holding one datum of representation `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue<T> {
	field: FieldRef,
	value: T,
}

impl<T: ScalarType> ScalarValue<T> {
	/// Create a container bound to `field`, holding `T::default()`.
	///
	/// Fails unless `field` is a scalar descriptor of kind `T::KIND`.
	pub fn new(field: FieldRef) -> std::result::Result<Self, TypeError> {
		if field.scalar_kind() != Some(T::KIND) {
			return Err(TypeError::UnsupportedConversion {
				requested: T::KIND.id(),
				actual: field.id().to_owned(),
			});
		}
		Ok(Self { field, value: T::default() })
	}

	/// Create a container bound to the canonical descriptor for `T`.
	pub fn canonical() -> Self {
		Self {
			field: Field::scalar(T::KIND),
			value: T::default(),
		}
	}

	/// Bound descriptor.
	pub fn field(&self) -> &FieldRef {
		&self.field
	}

	/// Copy of the held value.
	pub fn get(&self) -> T {
		self.value.clone()
	}

	/// Borrow the held value.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Replace the held value.
	pub fn put(&mut self, value: T) {
		self.value = value;
	}
}

/// Mutable typed container bound to exactly one field descriptor.
#[derive(Debug, PartialEq)]
pub enum ValueNode {
	/// `string` scalar.
	String(ScalarValue<String>),
	/// `int` scalar.
	Int(ScalarValue<i32>),
	/// `double` scalar.
	Double(ScalarValue<f64>),
	/// Nested structure.
	Structure(StructureValue),
}

impl ValueNode {
	/// Instantiate the container matching a descriptor.
	///
	/// Each scalar kind maps to its own representation; structures become a
	/// [`StructureValue`] with one child per member.
	pub fn from_field(field: &FieldRef) -> Self {
		match &**field {
			Field::Scalar(scalar) => match scalar.scalar_kind() {
				ScalarKind::String => Self::String(ScalarValue::bound(field)),
				ScalarKind::Int => Self::Int(ScalarValue::bound(field)),
				ScalarKind::Double => Self::Double(ScalarValue::bound(field)),
			},
			Field::Structure(_) => Self::Structure(StructureValue::instantiate(field)),
		}
	}

	/// Bound descriptor.
	pub fn field(&self) -> &FieldRef {
		match self {
			Self::String(value) => value.field(),
			Self::Int(value) => value.field(),
			Self::Double(value) => value.field(),
			Self::Structure(value) => value.field(),
		}
	}

	/// Coarse shape of the bound descriptor.
	pub fn kind(&self) -> FieldKind {
		match self {
			Self::Structure(_) => FieldKind::Structure,
			_ => FieldKind::Scalar,
		}
	}

	/// Read the held value as `T`.
	pub fn read<T: ScalarType>(&self) -> std::result::Result<T, TypeError> {
		T::node_ref(self).map(ScalarValue::get).ok_or_else(|| self.mismatch::<T>())
	}

	/// Overwrite the held value with a `T`.
	pub fn assign<T: ScalarType>(&mut self, value: T) -> std::result::Result<(), TypeError> {
		match T::node_mut(self) {
			Some(slot) => {
				slot.put(value);
				Ok(())
			}
			None => Err(self.mismatch::<T>()),
		}
	}

	/// Scalar container view when the node holds a `T`.
	pub fn as_scalar<T: ScalarType>(&self) -> Option<&ScalarValue<T>> {
		T::node_ref(self)
	}

	/// Structure view.
	pub fn as_structure(&self) -> Option<&StructureValue> {
		match self {
			Self::Structure(value) => Some(value),
			_ => None,
		}
	}

	/// Move the node behind a shared handle.
	pub fn into_handle(self) -> ValueHandle {
		Rc::new(RefCell::new(self))
	}

	fn mismatch<T: ScalarType>(&self) -> TypeError {
		TypeError::UnsupportedConversion {
			requested: T::KIND.id(),
			actual: self.field().id().to_owned(),
		}
	}
}

impl<T: ScalarType> From<ScalarValue<T>> for ValueNode {
	fn from(value: ScalarValue<T>) -> Self {
		T::into_node(value)
	}
}

impl<T: ScalarType> ScalarValue<T> {
	// Caller has already matched the descriptor kind.
	fn bound(field: &FieldRef) -> Self {
		Self {
			field: FieldRef::clone(field),
			value: T::default(),
		}
	}
}

/// Composite container mirroring a [`Structure`](crate::data::Structure).
///
/// Children sit in member declaration order and are reachable by name or
/// position. The shape never changes after construction.
#[derive(Debug)]
pub struct StructureValue {
	field: FieldRef,
	children: IndexMap<Box<str>, ValueHandle>,
}

impl StructureValue {
	/// Build a value tree for a structure descriptor.
	///
	/// Fails with [`SchemaError::NotAStructure`] for scalar descriptors.
	pub fn new(field: &FieldRef) -> std::result::Result<Self, SchemaError> {
		if field.as_structure().is_none() {
			return Err(SchemaError::NotAStructure { id: field.id().to_owned() });
		}
		let value = Self::instantiate(field);
		tracing::debug!(id = field.id(), children = value.len(), bit_width = field.bit_width(), "instantiated value tree");
		Ok(value)
	}

	fn instantiate(field: &FieldRef) -> Self {
		let children = field
			.as_structure()
			.into_iter()
			.flat_map(|structure| structure.members())
			.map(|member| (Box::from(member.name()), ValueNode::from_field(member.field()).into_handle()))
			.collect();
		Self {
			field: FieldRef::clone(field),
			children,
		}
	}

	/// Bound structure descriptor.
	pub fn field(&self) -> &FieldRef {
		&self.field
	}

	/// Number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Whether the structure has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Children with their member names, in declaration order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ValueHandle)> + '_ {
		self.children.iter().map(|(name, child)| (name.as_ref(), child))
	}

	/// Look up a child by name; `None` is the absent marker, not a failure.
	pub fn lookup(&self, name: &str) -> Option<&ValueHandle> {
		self.children.get(name)
	}

	/// Look up a child by declaration position.
	pub fn lookup_index(&self, index: usize) -> std::result::Result<&ValueHandle, SchemaError> {
		self.children.get_index(index).map(|(_, child)| child).ok_or(SchemaError::IndexOutOfRange {
			index,
			len: self.children.len(),
		})
	}

	/// Look up a child by name, failing when it is absent.
	pub fn member(&self, name: &str) -> std::result::Result<&ValueHandle, SchemaError> {
		self.lookup(name).ok_or_else(|| SchemaError::MemberNotFound { name: name.to_owned() })
	}

	/// Read a named scalar child as `T`.
	pub fn get<T: ScalarType>(&self, name: &str) -> Result<T> {
		Ok(self.member(name)?.borrow().read::<T>()?)
	}

	/// Assign a named scalar child from a `T`.
	pub fn put<T: ScalarType>(&self, name: &str, value: T) -> Result<()> {
		Ok(self.member(name)?.borrow_mut().assign(value)?)
	}

	/// Follow a field path through nested structure values.
	pub fn resolve(&self, path: &FieldPath) -> Result<ValueHandle> {
		let mut steps = path.steps.iter();
		let first = steps.next().ok_or_else(|| path.empty_error())?;
		let mut current = ValueHandle::clone(self.step(first)?);

		for step in steps {
			let next = {
				let node = current.borrow();
				let structure = node.as_structure().ok_or_else(|| SchemaError::NotAStructure {
					id: node.field().id().to_owned(),
				})?;
				ValueHandle::clone(structure.step(step)?)
			};
			current = next;
		}

		Ok(current)
	}

	fn step(&self, step: &PathStep) -> std::result::Result<&ValueHandle, SchemaError> {
		match step {
			PathStep::Field(name) => self.member(name),
			PathStep::Index(index) => self.lookup_index(*index),
		}
	}
}

/// Structural equality: bound descriptors compare by value, then children
/// compare pairwise in declaration order.
impl PartialEq for StructureValue {
	fn eq(&self, other: &Self) -> bool {
		if std::ptr::eq(self, other) {
			return true;
		}
		self.field == other.field
			&& self.children.len() == other.children.len()
			&& self
				.children
				.iter()
				.zip(&other.children)
				.all(|((lhs_name, lhs), (rhs_name, rhs))| lhs_name == rhs_name && (Rc::ptr_eq(lhs, rhs) || *lhs.borrow() == *rhs.borrow()))
	}
}
