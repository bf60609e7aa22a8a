#![allow(missing_docs)]

use std::fs::File;
use std::io::BufReader;

use ubjson::codec::{Precision, Value, decode, decode_at, decode_reader, encode};
use ubjson_testkit::fixture_path;

fn sample_bytes() -> Vec<u8> {
	std::fs::read(fixture_path("sample.ubj")).expect("sample fixture exists")
}

#[test]
fn sample_fixture_decodes_to_expected_tree() {
	let value = decode(&sample_bytes()).expect("sample decodes");
	let map = value.as_map().expect("top-level object");

	let keys: Vec<&str> = map.keys().map(String::as_str).collect();
	assert_eq!(keys, ["name", "count", "big", "ratio", "tags", "nested", "wide", "negative"]);

	assert_eq!(map["name"], Value::from("Test!"));
	assert_eq!(map["count"], Value::Int8(42));
	assert_eq!(map["big"], Value::Precision(Precision::from(9_223_372_036_854_775_808_u64)));
	assert_eq!(map["ratio"], Value::Float64(12.375));
	assert_eq!(map["tags"], Value::from(vec![Value::from("a"), Value::from("b")]));
	assert_eq!(map["wide"], Value::Int32(50000));
	assert_eq!(map["negative"], Value::Int16(-129));

	let nested = map["nested"].as_map().expect("nested object");
	assert_eq!(nested["empty"], Value::List(Vec::new()));
	assert_eq!(nested["flag"], Value::Bool(true));
	assert_eq!(nested["nothing"], Value::Null);
}

#[test]
fn sample_fixture_reencodes_byte_for_byte() {
	let bytes = sample_bytes();
	let value = decode(&bytes).expect("sample decodes");

	assert_eq!(encode(&value), bytes);
}

#[test]
fn sample_fixture_decodes_identically_from_file_reader() {
	let file = File::open(fixture_path("sample.ubj")).expect("sample fixture opens");
	let from_reader = decode_reader(BufReader::new(file)).expect("reader decode succeeds");

	assert_eq!(from_reader, decode(&sample_bytes()).expect("slice decode succeeds"));
}

#[test]
fn concatenated_samples_decode_in_sequence() {
	let one = sample_bytes();
	let mut stream = one.clone();
	stream.extend_from_slice(&one);

	let mut pos = 0;
	let first = decode_at(&stream, &mut pos).expect("first value decodes");
	assert_eq!(pos, one.len());
	let second = decode_at(&stream, &mut pos).expect("second value decodes");
	assert_eq!(pos, stream.len());
	assert_eq!(first, second);
}
