use proptest::prelude::*;
use xdr_types::{
    Bool, Double, EncodingFormat, Error, FixedArray, FixedOpaque, Float, Hyper, Int, Optional,
    UnsignedHyper, UnsignedInt, VarArray, VarOpaque, Void, Xdr, XdrString, XdrType,
};

fn raw<T: XdrType>(def: &T, value: &T::Value) -> Vec<u8> {
    def.to_xdr(value, "raw").unwrap().into_bytes()
}

#[test]
fn test_int_layout() {
    assert_eq!(raw(&Int, &-1), [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(raw(&Int, &i32::MIN), [0x80, 0, 0, 0]);
    assert_eq!(raw(&UnsignedInt, &0xDEADBEEF), [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_hyper_layout() {
    assert_eq!(raw(&UnsignedHyper, &0x0102030405060708), [1, 2, 3, 4, 5, 6, 7, 8]);
    let v: i64 = -9_000_000_000;
    assert_eq!(Hyper.from_xdr(raw(&Hyper, &v), "raw").unwrap(), v);
}

#[test]
fn test_float_bits_survive() {
    for v in [std::f32::consts::PI, f32::INFINITY, f32::NAN, 0.0, -0.0] {
        let decoded = Float.from_xdr(raw(&Float, &v), "raw").unwrap();
        assert_eq!(v.to_bits(), decoded.to_bits());
    }
    let e = std::f64::consts::E;
    let hex = Double.to_xdr(&e, "hex").unwrap();
    assert_eq!(Double.from_xdr(&hex, "hex").unwrap().to_bits(), e.to_bits());
}

#[test]
fn test_bool_layout_and_rejection() {
    assert_eq!(raw(&Bool, &true), [0, 0, 0, 1]);
    assert_eq!(raw(&Bool, &false), [0, 0, 0, 0]);
    assert_eq!(Bool.from_xdr([0u8, 0, 0, 2], "raw"), Err(Error::InvalidBool(2)));
    assert!(!bool::validate_xdr([0u8, 0, 0, 2], "raw"));
}

#[test]
fn test_void_is_empty() {
    assert!(raw(&Void, &()).is_empty());
    assert_eq!(Void.from_xdr([0u8; 0], "raw"), Ok(()));
    assert_eq!(
        Void.from_xdr([0u8], "raw"),
        Err(Error::TrailingBytes { remaining: 1 })
    );
    assert!(().to_xdr("hex").unwrap().is_empty());
}

#[test]
fn test_string_padding() {
    for (s, total) in [("", 4usize), ("A", 8), ("AB", 8), ("ABC", 8), ("ABCD", 8), ("ABCDE", 12)] {
        let bytes = raw(&XdrString::unbounded(), &s.to_string());
        assert_eq!(bytes.len(), total, "string {:?}", s);
        for &b in &bytes[4 + s.len()..] {
            assert_eq!(b, 0, "non-zero pad for {:?}", s);
        }
        assert_eq!(String::from_xdr(&bytes, "raw").unwrap(), s);
    }
}

#[test]
fn test_string_max_length() {
    let name = XdrString::new(3);
    assert!(name.is_valid(&"abc".to_string()));
    assert!(!name.is_valid(&"abcd".to_string()));
    assert_eq!(
        name.to_xdr(&"abcd".to_string(), "raw"),
        Err(Error::LengthOverflow { max: 3, got: 4 })
    );

    let long = raw(&XdrString::unbounded(), &"abcd".to_string());
    assert_eq!(
        name.from_xdr(&long, "raw"),
        Err(Error::LengthOverflow { max: 3, got: 4 })
    );
    assert!(!name.validate_xdr(&long, "raw"));
}

#[test]
fn test_string_rejects_invalid_utf8() {
    let bytes = [0u8, 0, 0, 2, 0xC3, 0x28, 0, 0];
    assert_eq!(String::from_xdr(bytes, "raw"), Err(Error::InvalidString));
}

#[test]
fn test_nonzero_padding_rejected() {
    let bytes = [0u8, 0, 0, 1, b'A', 0, 0, 1];
    assert_eq!(String::from_xdr(bytes, "raw"), Err(Error::InvalidPadding));
    assert!(!VarOpaque::unbounded().validate_xdr(bytes, "raw"));
}

#[test]
fn test_fixed_opaque_no_length_prefix() {
    let handle = FixedOpaque::new(5);
    let bytes = raw(&handle, &vec![1, 2, 3, 4, 5]);
    assert_eq!(bytes, [1, 2, 3, 4, 5, 0, 0, 0]);
    assert_eq!(handle.from_xdr(&bytes, "raw").unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_fixed_opaque_length_mismatch() {
    let cookie = FixedOpaque::new(4);
    assert!(!cookie.is_valid(&vec![1, 2, 3]));
    assert_eq!(
        cookie.to_xdr(&vec![1, 2, 3], "raw"),
        Err(Error::LengthMismatch { expected: 4, got: 3 })
    );
    assert_eq!(cookie.from_xdr([1u8, 2, 3], "raw"), Err(Error::UnexpectedEof));
}

#[test]
fn test_fixed_opaque_all_sizes_1_through_16() {
    for n in 1..=16u32 {
        let def = FixedOpaque::new(n);
        let data = vec![0xABu8; n as usize];
        let bytes = raw(&def, &data);
        assert_eq!(bytes.len() % 4, 0, "size {n} not 4-byte aligned");
        assert_eq!(bytes.len(), (n as usize).div_ceil(4) * 4, "size {n}");
        assert_eq!(&bytes[..n as usize], &data[..]);
        assert!(bytes[n as usize..].iter().all(|&b| b == 0));
        assert_eq!(def.from_xdr(&bytes, "raw").unwrap(), data, "roundtrip size {n}");
    }
}

#[test]
fn test_var_opaque_bounds() {
    let blob = VarOpaque::new(2);
    assert_eq!(raw(&blob, &vec![7, 8]), [0, 0, 0, 2, 7, 8, 0, 0]);
    assert_eq!(
        blob.to_xdr(&vec![1, 2, 3], "raw"),
        Err(Error::LengthOverflow { max: 2, got: 3 })
    );
    assert!(blob.is_valid(&vec![]));
}

#[test]
fn test_fixed_array() {
    let triple = FixedArray::new(UnsignedInt, 3);
    let bytes = raw(&triple, &vec![1, 2, 3]);
    assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]);
    assert_eq!(triple.from_xdr(&bytes, "raw").unwrap(), vec![1, 2, 3]);
    assert_eq!(
        triple.to_xdr(&vec![1, 2], "raw"),
        Err(Error::LengthMismatch { expected: 3, got: 2 })
    );
    assert!(!triple.is_valid(&vec![1, 2]));
}

#[test]
fn test_fixed_array_checks_elements() {
    let names = FixedArray::new(XdrString::new(2), 2);
    assert!(names.is_valid(&vec!["ab".into(), "c".into()]));
    assert!(!names.is_valid(&vec!["ab".into(), "cde".into()]));
}

#[test]
fn test_var_array() {
    let ids = VarArray::new(Int, 4);
    let bytes = raw(&ids, &vec![5, -5]);
    assert_eq!(&bytes[..4], [0, 0, 0, 2]);
    assert_eq!(bytes.len(), 12);
    assert_eq!(ids.from_xdr(&bytes, "raw").unwrap(), vec![5, -5]);
    assert_eq!(
        ids.to_xdr(&vec![0; 5], "raw"),
        Err(Error::LengthOverflow { max: 4, got: 5 })
    );
}

#[test]
fn test_var_array_huge_count_is_eof_not_allocation() {
    let bytes = [0xFFu8, 0xFF, 0xFF, 0xFF, 0, 0, 0, 1];
    assert_eq!(Vec::<u32>::from_xdr(bytes, "raw"), Err(Error::UnexpectedEof));
}

#[test]
fn test_optional() {
    let maybe = Optional::new(UnsignedInt);
    assert_eq!(raw(&maybe, &None), [0, 0, 0, 0]);
    assert_eq!(raw(&maybe, &Some(42)), [0, 0, 0, 1, 0, 0, 0, 42]);
    assert_eq!(maybe.from_xdr([0u8, 0, 0, 1, 0, 0, 0, 42], "raw").unwrap(), Some(42));
    assert_eq!(maybe.from_xdr([0u8, 0, 0, 2], "raw"), Err(Error::InvalidOption(2)));

    let bounded = Optional::new(XdrString::new(1));
    assert!(bounded.is_valid(&None));
    assert!(!bounded.is_valid(&Some("xy".into())));
}

#[test]
fn test_value_surface_for_containers() {
    let v: Vec<Option<u64>> = vec![Some(1), None, Some(u64::MAX)];
    for format in EncodingFormat::ALL {
        let encoded = v.to_xdr(format).unwrap();
        assert_eq!(Vec::<Option<u64>>::from_xdr(&encoded, format).unwrap(), v);
    }

    let s: Option<String> = Some("hello".into());
    assert_eq!(
        s.to_xdr("hex").unwrap(),
        "000000010000000568656c6c6f000000"
    );
    assert!(s.is_valid_xdr());
}

#[test]
fn test_nested_reencode_is_stable() {
    let def = VarArray::new(Optional::new(FixedArray::new(Hyper, 2)), 8);
    let value = vec![Some(vec![1, -1]), None, Some(vec![i64::MIN, i64::MAX])];
    let first = def.to_xdr(&value, "base64").unwrap();
    let decoded = def.from_xdr(&first, "base64").unwrap();
    assert_eq!(decoded, value);
    assert_eq!(def.to_xdr(&decoded, "base64").unwrap(), first);
}

proptest! {
    #[test]
    fn prop_int_roundtrip(v in any::<i32>(), index in 0usize..3) {
        let format = EncodingFormat::ALL[index];
        let encoded = v.to_xdr(format).unwrap();
        prop_assert_eq!(i32::from_xdr(&encoded, format).unwrap(), v);
        prop_assert!(i32::validate_xdr(&encoded, format));
    }

    #[test]
    fn prop_strings_reencode_identically(s in ".{0,40}", index in 0usize..3) {
        let format = EncodingFormat::ALL[index];
        let encoded = s.to_xdr(format).unwrap();
        let decoded = String::from_xdr(&encoded, format).unwrap();
        prop_assert_eq!(&decoded, &s);
        prop_assert_eq!(decoded.to_xdr(format).unwrap(), encoded);
    }

    #[test]
    fn prop_trailing_byte_always_rejected(v in proptest::collection::vec(any::<u32>(), 0..16), extra in any::<u8>()) {
        let mut bytes = v.to_xdr("raw").unwrap().into_bytes();
        bytes.push(extra);
        prop_assert!(!Vec::<u32>::validate_xdr(&bytes, "raw"));
    }
}
