use beatix::prelude::*;
use pretty_assertions::assert_eq;

fn put_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// A valid header up to and including the audio blob size field.
fn header_with_audio_size(audio_blob_size: i32) -> Vec<u8> {
    let mut buf = vec![0x62];
    put_i32(&mut buf, 1); // version
    put_i32(&mut buf, audio_blob_size);
    buf
}

#[test]
fn negative_audio_size_is_malformed() {
    let bytes = header_with_audio_size(-1);

    let err = ChartFile::parse(&bytes).unwrap_err();
    assert!(matches!(err.error_kind(), DecodeErrorKind::MalformedSize(-1)));
    // the error points at the size field itself
    assert_eq!(err.position(), 5);
}

#[test]
fn negative_cover_size_is_malformed() {
    let mut bytes = header_with_audio_size(0);
    put_i32(&mut bytes, -44100); // cover blob size

    let err = ChartFile::parse(&bytes).unwrap_err();
    assert!(matches!(
        err.error_kind(),
        DecodeErrorKind::MalformedSize(-44100)
    ));
    assert_eq!(err.position(), 9);
}

#[test]
fn audio_size_beyond_the_buffer_is_truncation() {
    let mut bytes = header_with_audio_size(1024);
    bytes.extend_from_slice(&[0u8; 16]); // far fewer than promised

    let err = ChartFile::parse(&bytes).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn cover_size_beyond_the_buffer_is_truncation() {
    let mut bytes = header_with_audio_size(0);
    put_i32(&mut bytes, i32::MAX); // cover blob size
    put_i32(&mut bytes, 0); // texture format
    put_i32(&mut bytes, 64); // width
    put_i32(&mut bytes, 64); // height

    let err = ChartFile::parse(&bytes).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn invalid_utf8_in_metadata() {
    let mut bytes = header_with_audio_size(0);
    put_i32(&mut bytes, 0); // cover blob size
    put_i32(&mut bytes, 0); // texture format
    put_i32(&mut bytes, 0); // width
    put_i32(&mut bytes, 0); // height
    bytes.push(2); // id length
    bytes.extend_from_slice(&[0xFF, 0xFE]); // not UTF-8

    let err = ChartFile::parse(&bytes).unwrap_err();
    assert!(matches!(
        err.error_kind(),
        DecodeErrorKind::TextDecoding(_)
    ));
}

#[test]
fn a_length_byte_with_no_text_behind_it_is_truncation() {
    let mut bytes = header_with_audio_size(0);
    put_i32(&mut bytes, 0); // cover blob size
    put_i32(&mut bytes, 0); // texture format
    put_i32(&mut bytes, 0); // width
    put_i32(&mut bytes, 0); // height
    bytes.push(10); // id length, but the buffer ends here

    let err = ChartFile::parse(&bytes).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn errors_format_with_their_position() {
    let err = ChartFile::parse(&header_with_audio_size(-1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Decoding at position 5, Malformed blob size (-1)"
    );
}
