use crate::data::{FieldPath, PathStep, PvError};

#[test]
fn parses_dotted_members_with_indices() {
	let path = FieldPath::parse("outer.inner[1][0].x").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Field("outer".to_owned()),
			PathStep::Field("inner".to_owned()),
			PathStep::Index(1),
			PathStep::Index(0),
			PathStep::Field("x".to_owned()),
		]
	);
	assert_eq!(path.to_string(), "outer.inner[1][0].x");
}

#[test]
fn reports_syntax_errors_with_offset() {
	let cases = [
		("", 0, "empty path"),
		(".a", 0, "expected member name"),
		("[0]", 0, "expected member name"),
		("a.", 2, "expected member name"),
		("a..b", 2, "expected member name"),
		("a[", 2, "expected index"),
		("a[]", 2, "expected index"),
		("a[x]", 2, "expected index"),
		("a[1", 3, "expected ']'"),
		("a[1]x", 4, "expected '.' or '['"),
		("a-b", 1, "expected '.' or '['"),
		("a[99999999999999999999999]", 2, "index too large"),
	];
	for (input, at, reason) in cases {
		let err = FieldPath::parse(input).expect_err("malformed path should fail");
		assert_eq!(
			err,
			PvError::InvalidFieldPath {
				path: input.to_owned(),
				at,
				reason,
			},
			"input {input:?}"
		);
	}
}
