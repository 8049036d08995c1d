use std::sync::{Arc, Weak};

use indexmap::IndexMap;

use crate::data::{Field, FieldPath, FieldRef, PathStep, Result, SchemaError};

/// Composite field descriptor: ordered, uniquely named members.
///
/// Bit offset 0 marks the structure's own presence, so the first member sits
/// at offset 1 and `bit_width == 1 + sum(member widths)`.
#[derive(Debug)]
pub struct Structure {
	id: Box<str>,
	members: IndexMap<Box<str>, StructureMember>,
	bit_width: usize,
}

/// Named slot inside a [`Structure`].
///
/// Equality looks at the name and the field descriptor only; offsets and
/// parent identity are ignored.
#[derive(Debug)]
pub struct StructureMember {
	parent: Weak<Field>,
	bit_offset: usize,
	name: Box<str>,
	field: FieldRef,
}

/// Descriptor found at the end of a field path.
#[derive(Debug, Clone)]
pub struct ResolvedField {
	/// Descriptor at the path target.
	pub field: FieldRef,
	/// Offset of the target relative to the root structure's marker.
	pub bit_offset: usize,
}

impl Structure {
	/// Build a structure descriptor from parallel name and field lists.
	///
	/// Fails with [`SchemaError::ArityMismatch`] when the lists differ in
	/// length, with [`SchemaError::DuplicateName`] on the first repeated
	/// name in declaration order, and with [`SchemaError::WidthOverflow`] when
	/// the total bit width does not fit in `usize`.
	pub fn build<S: AsRef<str>>(id: &str, names: &[S], fields: &[FieldRef]) -> std::result::Result<FieldRef, SchemaError> {
		if names.len() != fields.len() {
			return Err(SchemaError::ArityMismatch {
				names: names.len(),
				fields: fields.len(),
			});
		}

		let mut layout: IndexMap<Box<str>, (usize, FieldRef)> = IndexMap::with_capacity(names.len());
		let mut bits = 1_usize;
		for (name, field) in names.iter().zip(fields) {
			let name = name.as_ref();
			if layout.contains_key(name) {
				return Err(SchemaError::DuplicateName { name: name.to_owned() });
			}
			layout.insert(name.into(), (bits, Arc::clone(field)));
			bits = bits
				.checked_add(field.bit_width())
				.ok_or_else(|| SchemaError::WidthOverflow { id: id.to_owned() })?;
		}

		let built = Arc::new_cyclic(|parent: &Weak<Field>| {
			let members = layout
				.into_iter()
				.map(|(name, (bit_offset, field))| {
					let member = StructureMember {
						parent: parent.clone(),
						bit_offset,
						name: name.clone(),
						field,
					};
					(name, member)
				})
				.collect();
			Field::Structure(Self {
				id: id.into(),
				members,
				bit_width: bits,
			})
		});

		tracing::trace!(id, members = names.len(), bit_width = bits, "built structure descriptor");
		Ok(built)
	}

	/// Declared type id.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Abstract serialized width, including the presence marker.
	pub fn bit_width(&self) -> usize {
		self.bit_width
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Whether the structure declares no members.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Members in declaration order.
	pub fn members(&self) -> impl ExactSizeIterator<Item = &StructureMember> + '_ {
		self.members.values()
	}

	/// Look up a member by name; `None` is the absent marker, not a failure.
	pub fn lookup(&self, name: &str) -> Option<&StructureMember> {
		self.members.get(name)
	}

	/// Look up a member by declaration position.
	pub fn lookup_index(&self, index: usize) -> std::result::Result<&StructureMember, SchemaError> {
		self.members.get_index(index).map(|(_, member)| member).ok_or(SchemaError::IndexOutOfRange {
			index,
			len: self.members.len(),
		})
	}

	/// Look up a member by name, failing when it is absent.
	pub fn member(&self, name: &str) -> std::result::Result<&StructureMember, SchemaError> {
		self.lookup(name).ok_or_else(|| SchemaError::MemberNotFound { name: name.to_owned() })
	}

	/// Declaration position of a named member.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.members.get_index_of(name)
	}

	/// Follow a field path through nested structures.
	pub fn resolve(&self, path: &FieldPath) -> Result<ResolvedField> {
		let mut current = self;
		let mut bit_offset = 0_usize;
		let mut found: Option<&StructureMember> = None;

		for step in &path.steps {
			if let Some(member) = found {
				current = member.field.as_structure().ok_or_else(|| SchemaError::NotAStructure {
					id: member.field.id().to_owned(),
				})?;
			}
			let member = match step {
				PathStep::Field(name) => current.member(name)?,
				PathStep::Index(index) => current.lookup_index(*index)?,
			};
			// Offsets sum to less than the root width, which build() checked.
			bit_offset += member.bit_offset;
			found = Some(member);
		}

		let member = found.ok_or_else(|| path.empty_error())?;
		Ok(ResolvedField {
			field: Arc::clone(&member.field),
			bit_offset,
		})
	}
}

impl PartialEq for Structure {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
			|| (self.id == other.id
				&& self.bit_width == other.bit_width
				&& self.members.len() == other.members.len()
				&& self.members.values().zip(other.members.values()).all(|(lhs, rhs)| lhs == rhs))
	}
}

impl StructureMember {
	/// Owning structure descriptor.
	///
	/// The back-reference does not keep the parent alive; it yields `None`
	/// once the last handle to the parent is dropped.
	pub fn parent(&self) -> Option<FieldRef> {
		self.parent.upgrade()
	}

	/// Offset within the parent's bit layout.
	pub fn bit_offset(&self) -> usize {
		self.bit_offset
	}

	/// Member name, unique within the parent.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Member's field descriptor.
	pub fn field(&self) -> &FieldRef {
		&self.field
	}
}

impl PartialEq for StructureMember {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other) || (self.name == other.name && (Arc::ptr_eq(&self.field, &other.field) || self.field == other.field))
	}
}
