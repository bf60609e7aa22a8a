use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use ubjson_testkit::wire::{self, concat};

use crate::codec::{Encoder, Map, Precision, UbjError, Value, decode, encode, encode_noop, encode_precision, encode_to_writer};

mod scalars {
	use super::*;

	#[test]
	fn encodes_null_bool_and_noop() {
		assert_eq!(encode(&Value::Null), wire::NULL);
		assert_eq!(encode(&None::<i32>), wire::NULL);
		assert_eq!(encode(&true), wire::TRUE);
		assert_eq!(encode(&false), wire::FALSE);
		assert_eq!(encode_noop(), wire::NOOP);
	}

	#[test]
	fn selects_narrowest_integer_marker() {
		assert_eq!(encode(&42_i8), wire::INT8);
		assert_eq!(encode(&-42_i32), wire::NEG_INT8);
		assert_eq!(encode(&200_u8), wire::UINT8);
		assert_eq!(encode(&31234_i16), wire::INT16);
		assert_eq!(encode(&2_123_456_789_i32), wire::INT32);
		assert_eq!(encode(&9_123_456_789_123_456_789_i64), wire::INT64);
	}

	#[test]
	fn wide_types_holding_small_values_narrow() {
		assert_eq!(encode(&42_i64), wire::INT8);
		assert_eq!(encode(&Value::Int64(42)), wire::INT8);
		assert_eq!(encode(&200_u64), wire::UINT8);
		assert_eq!(encode(&Value::Int16(200)), wire::UINT8);
	}

	#[test]
	fn unsigned_values_promote_to_next_signed_width() {
		assert_eq!(encode(&50000_u16), [b'l', 0x00, 0x00, 0xC3, 0x50]);
		assert_eq!(encode(&3_123_456_789_u32), [b'L', 0x00, 0x00, 0x00, 0x00, 0xBA, 0x2C, 0x2B, 0x15]);
	}

	#[test]
	fn range_boundaries() {
		assert_eq!(encode(&127), [b'i', 0x7F]);
		assert_eq!(encode(&128), [b'U', 0x80]);
		assert_eq!(encode(&255), [b'U', 0xFF]);
		assert_eq!(encode(&256), [b'I', 0x01, 0x00]);
		assert_eq!(encode(&-128), [b'i', 0x80]);
		assert_eq!(encode(&-129), [b'I', 0xFF, 0x7F]);
		assert_eq!(encode(&32768), [b'l', 0x00, 0x00, 0x80, 0x00]);
		assert_eq!(encode(&2_147_483_648_i64), [b'L', 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00]);
	}

	#[test]
	fn writes_integers_big_endian() {
		assert_eq!(encode(&1_234_567_890), [b'l', 0x49, 0x96, 0x02, 0xD2]);
		assert_eq!(encode(&12_345_678), [b'l', 0x00, 0xBC, 0x61, 0x4E]);
	}

	#[test]
	fn values_beyond_i64_become_precision() {
		assert_eq!(encode(&9_223_372_036_854_775_808_u64), wire::ULONG_PRECISION);
		assert_eq!(encode(&u128::MAX)[0], b'H');
		assert_eq!(decode(&encode(&u128::MAX)).expect("precision"), Value::Precision(Precision::from(u128::MAX)));
		assert_eq!(decode(&encode(&i128::MIN)).expect("precision"), Value::Precision(Precision::from(i128::MIN)));
	}

	#[test]
	fn floats_keep_declared_width() {
		assert_eq!(encode(&12.375_f32), wire::FLOAT32);
		assert_eq!(encode(&12.375_f64), wire::FLOAT64);
		assert_eq!(encode(&2.0_f64)[0], b'D');
		assert_eq!(encode(&Value::Float32(1.0))[0], b'd');
	}

	#[test]
	fn small_char_uses_char_marker() {
		assert_eq!(encode(&'*'), wire::SMALL_CHAR);
		assert_eq!(encode(&'\u{e9}'), [b'C', 0xE9]);
	}

	#[test]
	fn wide_char_becomes_int16() {
		assert_eq!(encode(&'\u{30A2}'), wire::BIG_CHAR);
		assert_eq!(encode(&Value::Char('\u{30A2}')), wire::BIG_CHAR);
	}

	#[test]
	fn astral_char_becomes_width_selected_integer() {
		assert_eq!(encode(&'\u{1F600}'), [b'l', 0x00, 0x01, 0xF6, 0x00]);
	}

	#[test]
	fn encodes_strings_with_minimal_length_prefix() {
		assert_eq!(encode("Test!"), wire::STRING);
		assert_eq!(encode(&String::new()), [b'S', b'i', 0x00]);

		let long = "x".repeat(200);
		let bytes = encode(long.as_str());
		assert_eq!(&bytes[..3], [b'S', b'U', 200]);
		assert_eq!(bytes.len(), 3 + 200);
	}

	#[test]
	fn encodes_precision() {
		assert_eq!(encode_precision("300.5").expect("decimal"), wire::DECIMAL_PRECISION);
		assert_eq!(encode(&Precision::parse("300.5").expect("decimal")), wire::DECIMAL_PRECISION);
	}

	#[test]
	fn encode_precision_rejects_non_decimal() {
		let err = encode_precision("12abc").expect_err("not a decimal");
		assert!(matches!(err, UbjError::InvalidPrecision { .. }));
	}
}

mod containers {
	use super::untyped_key::Key;
	use super::*;

	#[test]
	fn encodes_lists() {
		assert_eq!(encode(&Value::List(Vec::new())), b"[]");
		assert_eq!(encode(&Vec::<i32>::new()), b"[]");
		let expected = concat(&[wire::ARRAY_START, wire::SMALL_CHAR, wire::INT64, wire::ARRAY_END]);
		let value = Value::List(vec![Value::Char('*'), Value::Int64(9_123_456_789_123_456_789)]);
		assert_eq!(encode(&value), expected);
		assert_eq!(encode(&[1_u8, 2, 3]), b"[i\x01i\x02i\x03]");
	}

	#[test]
	fn integer_keyed_map_matches_untyped_map() {
		let mut typed: BTreeMap<i8, i64> = BTreeMap::new();
		typed.insert(42, 9_123_456_789_123_456_789);

		let mut untyped: IndexMap<Key, Value> = IndexMap::new();
		untyped.insert(Key::Int(42), Value::Int64(9_123_456_789_123_456_789));

		let expected = concat(&[wire::OBJECT_START, wire::INT8, wire::INT64, wire::OBJECT_END]);
		assert_eq!(encode(&typed), expected);
		assert_eq!(encode(&untyped), expected);
	}

	#[test]
	fn map_values_are_width_selected() {
		let mut entries: HashMap<i8, i64> = HashMap::new();
		entries.insert(42, 42);
		let expected = concat(&[wire::OBJECT_START, wire::INT8, wire::INT8, wire::OBJECT_END]);
		assert_eq!(encode(&entries), expected);
	}

	#[test]
	fn encodes_entries_in_map_order() {
		let mut entries: IndexMap<i64, i64> = IndexMap::new();
		entries.insert(42, 9_123_456_789_123_456_789);
		entries.insert(43, 2_123_456_789);
		let expected = concat(&[wire::OBJECT_START, wire::INT8, wire::INT64, &[b'i', 43], wire::INT32, wire::OBJECT_END]);
		assert_eq!(encode(&entries), expected);
	}

	#[test]
	fn encodes_map_of_map() {
		let mut inner: IndexMap<i8, i64> = IndexMap::new();
		inner.insert(42, 9_123_456_789_123_456_789);
		inner.insert(43, 2_123_456_789);
		let mut outer: IndexMap<i8, IndexMap<i8, i64>> = IndexMap::new();
		outer.insert(42, inner);

		let expected = concat(&[
			wire::OBJECT_START,
			wire::INT8,
			wire::OBJECT_START,
			wire::INT8,
			wire::INT64,
			&[b'i', 43],
			wire::INT32,
			wire::OBJECT_END,
			wire::OBJECT_END,
		]);
		assert_eq!(encode(&outer), expected);
	}

	#[test]
	fn value_map_keys_encode_as_strings() {
		let value: Value = [("a", Value::Int8(1))].into_iter().collect();
		assert_eq!(encode(&value), b"{Si\x01ai\x01}");
	}

	#[test]
	fn manual_framing_matches_value_encoding() {
		let mut encoder = Encoder::new();
		encoder.begin_object();
		encoder.write_str("a");
		encoder.begin_array();
		encoder.write_int(2);
		encoder.write_int(3);
		encoder.end_array();
		encoder.end_object();

		let value: Value = [("a", Value::List(vec![Value::Int8(2), Value::Int8(3)]))].into_iter().collect();
		assert_eq!(encoder.as_bytes(), encode(&value).as_slice());
	}

	#[test]
	fn encodes_very_deep_value_tree() {
		const DEPTH: usize = 100_000;
		let mut value = Value::Null;
		for _ in 0..DEPTH {
			value = Value::List(vec![value]);
		}
		let bytes = encode(&value);
		assert_eq!(bytes.len(), DEPTH * 2 + 1);
		assert!(bytes[..DEPTH].iter().all(|byte| *byte == b'['));
		assert_eq!(bytes[DEPTH], b'Z');
		assert!(decode(&bytes).expect("deep tree decodes") == value);
	}

	#[test]
	fn writes_to_io_sink() {
		let mut sink = Vec::new();
		encode_to_writer(&mut sink, "Test!").expect("vec sink");
		assert_eq!(sink, wire::STRING);
	}
}

mod round_trip {
	use super::*;

	#[test]
	fn scalars_survive_round_trip() {
		let values = [
			Value::Null,
			Value::Bool(true),
			Value::Bool(false),
			Value::Int8(-42),
			Value::UInt8(200),
			Value::Int16(31234),
			Value::Int32(-2_123_456_789),
			Value::Int64(9_123_456_789_123_456_789),
			Value::Float32(12.375),
			Value::Float64(-0.1),
			Value::Precision(Precision::parse("300.5").expect("decimal")),
			Value::from("h\u{e9}llo \u{30A2}"),
			Value::Char('*'),
		];
		for value in values {
			assert_eq!(decode(&encode(&value)).expect("decodes"), value);
		}
	}

	#[test]
	fn integers_round_trip_by_value() {
		for raw in [0_i64, 1, -1, 127, 128, 255, 256, -32768, 32767, 50000, i64::from(i32::MIN), i64::MAX, i64::MIN] {
			let decoded = decode(&encode(&Value::Int64(raw))).expect("decodes");
			assert_eq!(decoded, Value::integer(i128::from(raw)));
			assert_eq!(decoded.as_i64(), Some(raw));
		}
	}

	#[test]
	fn empty_and_nested_containers_round_trip() {
		let empty = Value::List(Vec::new());
		assert_eq!(decode(&encode(&empty)).expect("empty list"), empty);

		let mut entries = Map::new();
		entries.insert("a".to_owned(), Value::Int8(1));
		entries.insert("b".to_owned(), Value::List(vec![Value::Int8(2), Value::Int8(3)]));
		let value = Value::Map(entries);
		let decoded = decode(&encode(&value)).expect("map");
		assert_eq!(decoded, value);
		let keys: Vec<&String> = decoded.as_map().expect("map").keys().collect();
		assert_eq!(keys, ["a", "b"]);
	}

	#[test]
	fn three_deep_map_round_trips() {
		let inner: Value = [("k3", Value::Int64(9_123_456_789_123_456_789))].into_iter().collect();
		let middle: Value = [("k2", inner)].into_iter().collect();
		let outer: Value = [("k1", middle)].into_iter().collect();
		assert_eq!(decode(&encode(&outer)).expect("nested map"), outer);
	}
}

mod untyped_key {
	use crate::codec::{Encode, Encoder};

	/// Heterogeneous key type standing in for an untyped object key.
	#[derive(Debug, PartialEq, Eq, Hash)]
	pub enum Key {
		Int(i64),
		Text(String),
	}

	impl Encode for Key {
		fn encode(&self, encoder: &mut Encoder) {
			match self {
				Self::Int(value) => value.encode(encoder),
				Self::Text(value) => value.encode(encoder),
			}
		}
	}

	#[test]
	fn text_keys_encode_as_strings() {
		assert_eq!(crate::codec::encode(&Key::Text("a".into())), b"Si\x01a");
	}
}
