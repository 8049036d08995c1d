#![allow(missing_docs)]

use std::process::{Command, Output};

use pvdata_testkit::{fixture_path, parse_json_stdout};
use serde_json::Value;

#[test]
fn schema_json_reports_layout() {
	let json = run_json(&["schema", "simpleID{a:double,b:double}", "--json"]);

	assert_eq!(json["id"], "simpleID");
	assert_eq!(json["bit_width"], 3);
	assert_eq!(json["members"][0]["name"], "a");
	assert_eq!(json["members"][0]["bit_offset"], 1);
	assert_eq!(json["members"][1]["bit_offset"], 2);
}

#[test]
fn schema_from_fixture_file() {
	let path = fixture_path("marker.pvs").display().to_string();
	let json = run_json(&["schema", "--file", &path, "--json"]);

	assert_eq!(json["id"], "marker");
	assert_eq!(json["bit_width"], 6);
	assert_eq!(json["members"][1]["id"], "point");
	assert_eq!(json["members"][1]["members"][1]["name"], "y");
}

#[test]
fn value_json_applies_assignments() {
	let json = run_json(&["value", "simpleID{a:double,b:double}", "--set", "a=12.3", "--json"]);

	assert_eq!(json["schema"], "simpleID{a:double,b:double}");
	assert_eq!(json["value"]["a"], 12.3);
	assert_eq!(json["value"]["b"], 0.0);
	assert!(json.get("path").is_none());
}

#[test]
fn value_json_selects_nested_path() {
	let path = fixture_path("marker.pvs").display().to_string();
	let json = run_json(&["value", "--file", &path, "--set", "at.y=-2.5", "--set", "label=home", "--get", "at", "--json"]);

	assert_eq!(json["path"], "at");
	assert_eq!(json["value"]["x"], 0.0);
	assert_eq!(json["value"]["y"], -2.5);
}

#[test]
fn value_text_output_renders_tree() {
	let output = run(&["value", "p{x:int,s:string}", "--set", "x=7", "--set", "s=hi"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout), "p {\n  x: 7\n  s: \"hi\"\n}\n");
}

#[test]
fn type_mismatch_fails_with_message() {
	let output = run(&["value", "p{x:int}", "--set", "x=1.5"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: invalid int literal"), "stderr: {stderr}");
}

#[test]
fn duplicate_fixture_fails() {
	let path = fixture_path("duplicate.pvs").display().to_string();
	let output = run(&["schema", "--file", &path]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate field name: a"));
}

#[test]
fn missing_member_is_an_error() {
	let output = run(&["value", "p{x:int}", "--get", "y"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("member not found: y"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_pvdata")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"pvdata command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	parse_json_stdout(&output.stdout)
}
