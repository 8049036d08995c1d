#![allow(missing_docs)]

use std::sync::Arc;

use pvdata::data::{Field, PvError, SchemaError, StructureValue, TypeError, ValueNode};

#[test]
fn simple_structure_layout_and_access() {
	let schema = Field::structure("simpleID", &["a", "b"], &[Field::double(), Field::double()]).expect("structure builds");
	assert_eq!(schema.bit_width(), 3);

	let structure = schema.as_structure().expect("structure descriptor");
	assert_eq!(structure.lookup("a").expect("a exists").bit_offset(), 1);
	assert_eq!(structure.lookup("b").expect("b exists").bit_offset(), 2);

	let tree = StructureValue::new(&schema).expect("value tree builds");
	tree.put("a", 12.3_f64).expect("put a");
	assert_eq!(tree.get::<f64>("a").expect("get a"), 12.3);

	let a = tree.lookup("a").expect("a child exists");
	a.borrow_mut().assign(12.4_f64).expect("assign through handle");
	assert_eq!(a.borrow().read::<f64>().expect("read through handle"), 12.4);

	assert!(tree.lookup("c").is_none());
	assert!(matches!(
		tree.lookup_index(tree.len()),
		Err(SchemaError::IndexOutOfRange { index: 2, len: 2 })
	));
}

#[test]
fn value_tree_keeps_schema_alive() {
	let schema = Field::structure("simpleID", &["a"], &[Field::double()]).expect("structure builds");
	let weak = Arc::downgrade(&schema);
	let tree = StructureValue::new(&schema).expect("value tree builds");
	drop(schema);

	assert!(weak.upgrade().is_some(), "value tree holds the descriptor");
	assert_eq!(tree.field().id(), "simpleID");
	drop(tree);
	assert!(weak.upgrade().is_none());
}

#[test]
fn wrong_representation_is_reported_not_coerced() {
	let schema = Field::structure("mixed", &["n", "s"], &[Field::int(), Field::string()]).expect("structure builds");
	let tree = StructureValue::new(&schema).expect("value tree builds");

	let err = tree.put("n", 1.0_f64).expect_err("double into int member");
	assert_eq!(
		err,
		PvError::Type(TypeError::UnsupportedConversion {
			requested: "double",
			actual: "int".to_owned(),
		})
	);
	let err = tree.get::<i32>("s").expect_err("int out of string member");
	assert!(matches!(err, PvError::Type(_)));

	tree.put("n", 42_i32).expect("int put");
	let node = tree.member("n").expect("n exists");
	assert!(matches!(*node.borrow(), ValueNode::Int(ref value) if value.get() == 42));
}
