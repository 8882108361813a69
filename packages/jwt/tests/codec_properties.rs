//! Base64url codec behaviour: padding tolerance, alphabet, round trips

use jwsig_jwt::{JwtError, base64url_decode, base64url_decode_str, base64url_encode};
use proptest::prelude::*;

#[test]
fn test_padding_tolerance() {
    let cases: [(&str, &str, &[u8]); 4] = [
        ("YQ", "YQ==", b"a"),
        ("YWI", "YWI=", b"ab"),
        ("YWJj", "YWJj", b"abc"),
        ("YWJjZA", "YWJjZA==", b"abcd"),
    ];

    for (unpadded, padded, expected) in cases {
        let from_unpadded = base64url_decode_str(unpadded).expect("unpadded input should decode");
        let from_padded = base64url_decode_str(padded).expect("padded input should decode");
        assert_eq!(from_unpadded, expected);
        assert_eq!(from_padded, expected);
    }
}

#[test]
fn test_partially_padded_input() {
    // One of two pad characters present
    let decoded = base64url_decode(b"YQ=").expect("partially padded input should decode");
    assert_eq!(decoded, b"a");
}

#[test]
fn test_surplus_padding_tolerated() {
    let decoded = base64url_decode(b"YQ===").expect("over-padded input should decode");
    assert_eq!(decoded, b"a");
    let decoded = base64url_decode_str("YWI==").expect("over-padded input should decode");
    assert_eq!(decoded, b"ab");
    let decoded = base64url_decode(b"YWJj==").expect("padding after a full quantum should decode");
    assert_eq!(decoded, b"abc");
}

#[test]
fn test_padding_cannot_complete_a_lone_symbol() {
    assert!(matches!(base64url_decode(b"Y=="), Err(JwtError::Decode(_))));
    assert!(matches!(base64url_decode(b"YWJjZ==="), Err(JwtError::Decode(_))));
}

#[test]
fn test_encode_strips_padding() {
    assert_eq!(base64url_encode(b"a"), "YQ");
    assert_eq!(base64url_encode(b"ab"), "YWI");
    assert_eq!(base64url_encode(b"abc"), "YWJj");
}

#[test]
fn test_jwt_header_and_payload_literals() {
    let header = br#"{"alg":"HS256","typ":"JWT"}"#;
    let payload = br#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#;

    assert_eq!(base64url_encode(header), "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    assert_eq!(
        base64url_encode(payload),
        "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ"
    );
    assert_eq!(
        base64url_decode_str("eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ")
            .expect("payload literal should decode"),
        payload
    );
}

#[test]
fn test_invalid_characters_rejected() {
    assert!(matches!(base64url_decode(b"YW*j"), Err(JwtError::Decode(_))));
    assert!(matches!(base64url_decode(b"YW/j"), Err(JwtError::Decode(_))));
    assert!(matches!(base64url_decode(b"Y Wj"), Err(JwtError::Decode(_))));
}

#[test]
fn test_invalid_length_rejected() {
    // A single leftover symbol cannot encode a whole byte
    assert!(matches!(base64url_decode(b"Y"), Err(JwtError::Decode(_))));
    assert!(matches!(base64url_decode(b"YWJjZ"), Err(JwtError::Decode(_))));
}

#[test]
fn test_non_ascii_text_rejected() {
    assert_eq!(base64url_decode_str("YWJj\u{e9}"), Err(JwtError::NonAsciiInput));
}

#[test]
fn test_non_ascii_bytes_are_decode_errors() {
    assert!(matches!(base64url_decode(&[0x59, 0x57, 0xc3, 0xa9]), Err(JwtError::Decode(_))));
}

#[test]
fn test_trailing_bits_tolerated() {
    // "YR" has non-zero bits after the single encoded byte
    let decoded = base64url_decode(b"YR").expect("trailing bits should be tolerated");
    assert_eq!(decoded, b"a");
}

proptest! {
    #[test]
    fn prop_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = base64url_encode(&bytes);
        prop_assert_eq!(base64url_decode_str(&encoded).expect("encoder output should decode"), bytes);
    }

    #[test]
    fn prop_output_unpadded_and_url_safe(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = base64url_encode(&bytes);
        prop_assert!(encoded
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn prop_missing_padding_matches_padded(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let unpadded = base64url_encode(&bytes);
        let mut padded = unpadded.clone();
        while padded.len() % 4 != 0 {
            padded.push('=');
        }
        prop_assert_eq!(
            base64url_decode_str(&unpadded).expect("unpadded should decode"),
            base64url_decode_str(&padded).expect("padded should decode")
        );
    }
}
