#![allow(missing_docs)]

use std::sync::Arc;

use pvdata::data::{Field, FieldPath, PvError, SchemaError, StructureValue, parse_schema_expr};
use pvdata_testkit::read_fixture;

#[test]
fn marker_fixture_layout() {
	let schema = parse_schema_expr(&read_fixture("marker.pvs")).expect("fixture parses");
	assert_eq!(schema.id(), "marker");
	assert_eq!(schema.bit_width(), 6);

	let structure = schema.as_structure().expect("structure descriptor");
	let y = structure.resolve(&FieldPath::parse("at.y").expect("path parses")).expect("path resolves");
	assert_eq!(y.bit_offset, 4);
	assert_eq!(y.field.id(), "double");
}

#[test]
fn marker_fixture_values_round_trip() {
	let schema = parse_schema_expr(&read_fixture("marker.pvs")).expect("fixture parses");
	let tree = StructureValue::new(&schema).expect("value tree builds");

	tree.put("label", "home".to_owned()).expect("label put");
	tree.put("count", 3_i32).expect("count put");
	let x = tree.resolve(&FieldPath::parse("at.x").expect("path parses")).expect("path resolves");
	x.borrow_mut().assign(0.5_f64).expect("x assign");

	let at = tree.member("at").expect("at exists").borrow();
	let point = at.as_structure().expect("nested value");
	assert_eq!(point.get::<f64>("x").expect("x get"), 0.5);
	assert_eq!(point.get::<f64>("y").expect("y get"), 0.0);
	assert_eq!(tree.get::<String>("label").expect("label get"), "home");
}

#[test]
fn duplicate_fixture_is_rejected() {
	let err = parse_schema_expr(&read_fixture("duplicate.pvs")).expect_err("duplicate should fail");
	assert_eq!(err, PvError::Schema(SchemaError::DuplicateName { name: "a".to_owned() }));
}

#[test]
fn simple_fixture_matches_built_structure() {
	let parsed = parse_schema_expr(&read_fixture("simple.pvs")).expect("fixture parses");
	let built = Field::structure("simpleID", &["a", "b"], &[Field::double(), Field::double()]).expect("builds");
	assert_eq!(parsed, built);
	assert!(!Arc::ptr_eq(&parsed, &built));
}
