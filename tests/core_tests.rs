use assert_matches::assert_matches;
use multidigest::{
    parse_digest_string, parse_multiple_digest_string, Algorithm, Digest, DigestError,
    MultipleDigestParser, VerifyingDigest,
};
use proptest::prelude::*;

const SHA1: &str = "07e1306432667f916639d47481edc4f2ca456454";
const SHA256: &str = "b1e66f505465c28d705cf587b041a6506cfe749f7aa4159d8a3f45cc53f1fb23";
const SHA512: &str = "6f06a0c6c3827d827145b077cd8c8b7a15c75eb2bed809569296e6502ef0872c8e7ef91307a6994fcd2be235d3c41e09bfe1b6023df45697d88111df4349d64a";

#[test]
fn test_parse_digest_each_algorithm() {
    for (alg, value) in [
        (Algorithm::Sha1, SHA1),
        (Algorithm::Sha256, SHA256),
        (Algorithm::Sha512, SHA512),
    ] {
        let digest = parse_digest_string(&format!("{}:{}", alg, value)).unwrap();
        assert_eq!(digest.algorithm(), alg);
        assert_eq!(digest.value(), value);
    }
}

#[test]
fn test_parse_digest_default_sha1() {
    let digest = parse_digest_string(SHA1).unwrap();
    assert_eq!(digest.algorithm(), Algorithm::Sha1);
    assert_eq!(digest.value(), SHA1);
}

#[test]
fn test_parse_digest_unrecognized() {
    let err = parse_digest_string("unrecognized:something").unwrap_err();
    assert_matches!(err, DigestError::UnrecognizedAlgorithm(ref name) if name == "unrecognized");
    assert_eq!(
        err.to_string(),
        "Unrecognized digest algorithm: unrecognized. Supported algorithms: sha1, sha256, sha512"
    );
}

#[test]
fn test_parse_digest_uppercase_prefix() {
    let digest = parse_digest_string(&format!("SHA256:{}", SHA256)).unwrap();
    assert_eq!(digest.algorithm(), Algorithm::Sha256);
    assert_eq!(digest.to_string(), format!("sha256:{}", SHA256));
}

#[test]
fn test_multiple_single_digest_verifies() {
    let expected = parse_multiple_digest_string(&format!("sha1:{}", SHA1)).unwrap();
    let actual = parse_digest_string(&format!("sha1:{}", SHA1)).unwrap();
    assert!(expected.verify(&actual).is_ok());
}

#[test]
fn test_multiple_bare_digest_verifies() {
    let expected = parse_multiple_digest_string(SHA1).unwrap();
    let actual = Digest::with_name("sha1", SHA1).unwrap();
    assert!(expected.verify(&actual).is_ok());
}

#[test]
fn test_parse_digest_empty_rejected() {
    assert_matches!(parse_digest_string(""), Err(DigestError::InvalidFormat(_)));
    assert_matches!(parse_digest_string("sha1:"), Err(DigestError::InvalidFormat(_)));
}

#[test]
fn test_multiple_empty_set_survives_serde() {
    let empty = MultipleDigestParser::new().with_allow_empty(true).parse(";").unwrap();
    let json = serde_json::to_string(&empty).unwrap();
    let back: multidigest::MultipleDigest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, empty);
}

#[test]
fn test_multiple_verifies_each_algorithm() {
    let expected = parse_multiple_digest_string(&format!("sha1:{};sha256:{}", SHA1, SHA256)).unwrap();

    assert!(expected.verify(&Digest::new(Algorithm::Sha1, SHA1)).is_ok());
    assert!(expected.verify(&Digest::new(Algorithm::Sha256, SHA256)).is_ok());
}

#[test]
fn test_multiple_weak_algorithm_still_verifies() {
    // Any value is fine for the sha256 entry; only the sha1 entry is consulted.
    let expected = parse_multiple_digest_string(&format!("sha1:{};sha256:deadbeef", SHA1)).unwrap();
    assert_eq!(expected.preferred_algorithm().unwrap(), Algorithm::Sha256);
    assert!(expected.verify(&Digest::new(Algorithm::Sha1, SHA1)).is_ok());
}

#[test]
fn test_multiple_value_mismatch() {
    let expected = parse_multiple_digest_string(&format!("sha1:{};sha256:{}", SHA1, SHA256)).unwrap();
    let err = expected.verify(&Digest::new(Algorithm::Sha256, SHA1)).unwrap_err();
    assert_matches!(err, DigestError::DigestMismatch { ref expected, ref actual } => {
        assert_eq!(expected, &format!("sha256:{}", SHA256));
        assert_eq!(actual, &format!("sha256:{}", SHA1));
    });
}

#[test]
fn test_multiple_no_algorithm_overlap() {
    let expected = parse_multiple_digest_string(&format!("sha256:{}", SHA256)).unwrap();
    let err = expected.verify(&Digest::new(Algorithm::Sha1, SHA1)).unwrap_err();
    assert_matches!(err, DigestError::NoDigestAlgorithmOverlap { algorithm: Algorithm::Sha1, .. });
}

#[test]
fn test_preferred_algorithm_strongest() {
    let multiple =
        parse_multiple_digest_string(&format!("sha1:{};sha256:{};", SHA1, SHA256)).unwrap();
    assert_eq!(multiple.preferred_algorithm().unwrap(), Algorithm::Sha256);

    let reversed =
        parse_multiple_digest_string(&format!("sha256:{};sha1:{}", SHA256, SHA1)).unwrap();
    assert_eq!(reversed.preferred_algorithm().unwrap(), Algorithm::Sha256);
}

#[test]
fn test_preferred_algorithm_single_with_trailing_delimiter() {
    let multiple = parse_multiple_digest_string(&format!("sha1:{};", SHA1)).unwrap();
    assert_eq!(multiple.preferred_algorithm().unwrap(), Algorithm::Sha1);
    assert_eq!(multiple.len(), 1);
}

#[test]
fn test_multiple_rendering() {
    let input = format!("sha512:{};sha1:{};sha512:{}", SHA512, SHA1, SHA512);
    let multiple = parse_multiple_digest_string(&input).unwrap();
    assert_eq!(multiple.to_string(), format!("sha512:{};sha1:{}", SHA512, SHA1));
}

#[test]
fn test_multiple_parse_is_all_or_nothing() {
    let input = format!("sha1:{};bogus:{}", SHA1, SHA256);
    assert_matches!(
        parse_multiple_digest_string(&input),
        Err(DigestError::UnrecognizedAlgorithm(_))
    );
}

#[test]
fn test_multiple_empty_policy() {
    assert_matches!(parse_multiple_digest_string(""), Err(DigestError::NoDigestsProvided));
    assert_matches!(parse_multiple_digest_string(";;"), Err(DigestError::NoDigestsProvided));

    let lenient = MultipleDigestParser::new().with_allow_empty(true);
    assert!(lenient.parse("").unwrap().is_empty());
    assert!(lenient.parse(";;").unwrap().is_empty());
    assert_eq!(lenient.parse(&format!(";sha1:{};", SHA1)).unwrap().len(), 1);
}

#[test]
fn test_digest_in_manifest() {
    #[derive(serde::Deserialize)]
    struct Package {
        name: String,
        sha1: multidigest::MultipleDigest,
    }

    let json = format!(r#"{{"name": "pkg", "sha1": "sha1:{};sha256:{}"}}"#, SHA1, SHA256);
    let package: Package = serde_json::from_str(&json).unwrap();
    assert_eq!(package.name, "pkg");
    assert_eq!(package.sha1.preferred_algorithm().unwrap(), Algorithm::Sha256);
}

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Sha1),
        Just(Algorithm::Sha256),
        Just(Algorithm::Sha512),
    ]
}

proptest! {
    #[test]
    fn prop_digest_string_round_trips(alg in any_algorithm(), value in "[0-9a-fA-F]{1,128}") {
        let digest = Digest::new(alg, value);
        let parsed = parse_digest_string(&digest.to_string()).unwrap();
        prop_assert_eq!(parsed, digest);
    }
}
