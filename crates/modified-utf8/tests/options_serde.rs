#![allow(missing_docs)]
#![cfg(feature = "serde")]

use modified_utf8::{DecodeOptions, DecoderOptions};

#[test]
fn decoder_options_from_camel_case() {
    let options: DecoderOptions =
        serde_json::from_str(r#"{"fatal":true,"ignoreBom":true}"#).unwrap();
    assert_eq!(
        options,
        DecoderOptions {
            fatal: true,
            ignore_bom: true,
            strict: false,
        }
    );
}

#[test]
fn missing_fields_use_defaults() {
    let options: DecoderOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, DecoderOptions::default());

    let options: DecodeOptions = serde_json::from_str(r#"{"stream":true}"#).unwrap();
    assert_eq!(options, DecodeOptions::STREAM);
}

#[test]
fn decoder_options_serialize() {
    let json = serde_json::to_string(&DecoderOptions {
        strict: true,
        ..Default::default()
    })
    .unwrap();
    assert_eq!(json, r#"{"fatal":false,"ignoreBom":false,"strict":true}"#);
}
