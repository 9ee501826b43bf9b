use proptest::prelude::*;
use std::borrow::Cow;
use xdr_types::{Encoded, EncodingFormat, Error};

#[test]
fn test_parse_literal_tags() {
    assert_eq!("raw".parse::<EncodingFormat>().unwrap(), EncodingFormat::Raw);
    assert_eq!("hex".parse::<EncodingFormat>().unwrap(), EncodingFormat::Hex);
    assert_eq!(
        EncodingFormat::try_from("base64").unwrap(),
        EncodingFormat::Base64
    );
    assert_eq!(EncodingFormat::default(), EncodingFormat::Raw);
}

#[test]
fn test_parse_rejects_unknown_tags() {
    for tag in ["bogus", "", "HEX", "Base64", "raw "] {
        let err = tag.parse::<EncodingFormat>().unwrap_err();
        assert_eq!(err, Error::InvalidFormat(tag.to_string()));
        assert!(err.is_format_error());
    }
}

#[test]
fn test_display_matches_tag() {
    for format in EncodingFormat::ALL {
        assert_eq!(format.to_string(), format.as_str());
        assert_eq!(format.as_str().parse::<EncodingFormat>().unwrap(), format);
    }
}

#[test]
fn test_present_raw_is_identity() {
    let buffer = vec![0xDE, 0xAD, 0xBE, 0xEF];
    assert_eq!(
        EncodingFormat::Raw.present(buffer.clone()),
        Encoded::Raw(buffer)
    );
}

#[test]
fn test_present_hex_is_lowercase() {
    let hex = EncodingFormat::Hex.present(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(hex, Encoded::Text("deadbeef".into()));
}

#[test]
fn test_present_base64_is_standard_padded() {
    let b64 = EncodingFormat::Base64.present(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(b64, "3q2+7w==");
    assert_eq!(EncodingFormat::Base64.present(vec![0xFB, 0xFF]), "+/8=");
}

#[test]
fn test_present_empty_buffer() {
    for format in EncodingFormat::ALL {
        let presented = format.present(Vec::new());
        assert!(presented.is_empty());
        assert!(format.materialize(&presented).unwrap().is_empty());
    }
}

#[test]
fn test_materialize_raw_borrows() {
    let input = [1u8, 2, 3];
    let out = EncodingFormat::Raw.materialize(&input).unwrap();
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(&*out, &input);
}

#[test]
fn test_materialize_hex_accepts_uppercase() {
    let out = EncodingFormat::Hex.materialize("DEADbeef").unwrap();
    assert_eq!(&*out, &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_materialize_malformed_hex() {
    for input in ["zz", "abc", "0x00"] {
        let err = EncodingFormat::Hex.materialize(input).unwrap_err();
        assert!(
            matches!(err, Error::MalformedInput { format: EncodingFormat::Hex, .. }),
            "{input}: {err:?}"
        );
        assert!(!err.is_format_error());
    }
}

#[test]
fn test_materialize_malformed_base64() {
    for input in ["!!!!", "AAAAAQ", "AAA=A"] {
        let err = EncodingFormat::Base64.materialize(input).unwrap_err();
        assert!(
            matches!(err, Error::MalformedInput { format: EncodingFormat::Base64, .. }),
            "{input}: {err:?}"
        );
    }
}

#[test]
fn test_encoded_accessors() {
    let raw = Encoded::Raw(vec![1, 2]);
    assert_eq!(raw.as_bytes(), [1, 2]);
    assert_eq!(raw.as_text(), None);
    assert!(!raw.is_text());
    assert_eq!(Vec::from(raw), vec![1, 2]);

    let text = Encoded::Text("0102".into());
    assert_eq!(text.as_bytes(), b"0102");
    assert_eq!(text.as_text(), Some("0102"));
    assert_eq!(text.clone().into_text(), Some("0102".to_string()));
    assert_eq!(text.into_bytes(), b"0102".to_vec());
}

proptest! {
    #[test]
    fn prop_present_then_materialize_is_identity(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        index in 0usize..3,
    ) {
        let format = EncodingFormat::ALL[index];
        let presented = format.present(bytes.clone());
        let restored = format.materialize(&presented).unwrap();
        prop_assert_eq!(&*restored, bytes.as_slice());
    }

    #[test]
    fn prop_text_formats_are_ascii(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        for format in [EncodingFormat::Hex, EncodingFormat::Base64] {
            let presented = format.present(bytes.clone());
            prop_assert!(presented.as_text().is_some_and(|t| t.is_ascii()));
        }
    }
}
