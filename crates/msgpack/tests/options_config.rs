use msgpack_value::{decode_first, DecodeOptions, MsgPackDecoder, MsgPackError, Value};
use serde::Deserialize;

#[derive(Deserialize)]
struct HostConfig {
    #[serde(default)]
    msgpack: DecodeOptions,
}

#[test]
fn options_load_from_toml() {
    let options: DecodeOptions = toml::from_str(
        r#"
        compatibility = true
        max_depth = 8
        "#,
    )
    .unwrap();
    assert_eq!(options, DecodeOptions::new().compatibility(true).max_depth(8));
}

#[test]
fn missing_fields_take_defaults() {
    let options: DecodeOptions = toml::from_str("compatibility = true").unwrap();
    assert!(options.compatibility);
    assert_eq!(options.max_depth, 512);

    let options: DecodeOptions = toml::from_str("").unwrap();
    assert_eq!(options, DecodeOptions::default());
}

#[test]
fn options_nest_in_host_config() {
    let config: HostConfig = toml::from_str(
        r#"
        [msgpack]
        max_depth = 1
        "#,
    )
    .unwrap();
    let decoder = MsgPackDecoder::with_options(config.msgpack);
    assert_eq!(decoder.options().max_depth, 1);
    assert!(decoder.decode(&[0x91, 0x01]).is_ok());
    assert_eq!(
        decoder.decode(&[0x91, 0x91, 0x01]),
        Err(MsgPackError::DepthLimitExceeded(1))
    );

    let config: HostConfig = toml::from_str("").unwrap();
    assert_eq!(config.msgpack, DecodeOptions::default());
}

#[test]
fn options_roundtrip_through_toml() {
    let options = DecodeOptions::new().max_depth(64);
    let text = toml::to_string(&options).unwrap();
    let back: DecodeOptions = toml::from_str(&text).unwrap();
    assert_eq!(back, options);
}

#[test]
fn configured_compatibility_changes_string_decoding() {
    let options: DecodeOptions = toml::from_str("compatibility = true").unwrap();
    assert_eq!(
        decode_first(&[0xa2, b'h', b'i', 0xc0], options),
        Ok(Value::Binary(b"hi".to_vec()))
    );
}
