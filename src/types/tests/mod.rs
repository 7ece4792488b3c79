mod encoding;
mod node_id;
mod serde;

use std::fmt::Debug;

use crate::types::*;

/// Encodes the value into an exactly sized buffer. This checks that the reported byte length
/// and the bytes consumed by the encoder agree, i.e. that nothing remains of the buffer.
pub fn serialize_as_bytes<T>(value: &T) -> Vec<u8>
where
    T: BinaryEncoder + Debug,
{
    let byte_len = value.byte_len();
    let mut buffer = vec![0u8; byte_len];
    let remainder = value.encode(&mut buffer).unwrap();
    assert_eq!(remainder.len(), 0);
    println!("value = {:?}", value);
    println!("encoded bytes = {:?}", buffer);
    buffer
}

pub fn serialize_test_and_return_expected<T>(value: T, expected_value: T) -> T
where
    T: BinaryEncoder + Debug + PartialEq,
{
    let bytes = serialize_as_bytes(&value);
    let (remainder, new_value) = T::decode(&bytes).unwrap();
    // The decoder must consume exactly the bytes the encoder produced
    assert_eq!(remainder.len(), 0);
    println!("new value = {:?}", new_value);
    assert_eq!(expected_value, new_value);
    new_value
}

pub fn serialize_test_and_return<T>(value: T) -> T
where
    T: BinaryEncoder + Debug + PartialEq + Clone,
{
    serialize_test_and_return_expected(value.clone(), value)
}

pub fn serialize_test<T>(value: T)
where
    T: BinaryEncoder + Debug + PartialEq + Clone,
{
    let _ = serialize_test_and_return(value);
}

pub fn serialize_test_expected<T>(value: T, expected_value: T)
where
    T: BinaryEncoder + Debug + PartialEq,
{
    let _ = serialize_test_and_return_expected(value, expected_value);
}

pub fn serialize_and_compare<T>(value: T, expected: &[u8])
where
    T: BinaryEncoder + Debug + PartialEq,
{
    assert_eq!(value.byte_len(), expected.len());
    let actual = serialize_as_bytes(&value);
    assert_eq!(actual, expected);
}

/// Encoding into any buffer shorter than the value's byte length must fail with a capacity
/// error and must not touch anything past the end of the supplied slice.
pub fn ensure_capacity_error<T>(value: &T)
where
    T: BinaryEncoder + Debug,
{
    let byte_len = value.byte_len();
    for len in 0..byte_len {
        let mut buffer = vec![0u8; len];
        let err = value.encode(&mut buffer).unwrap_err();
        assert!(
            matches!(err, EncodingError::BufferTooSmall { .. }),
            "expected a capacity error encoding {:?} into {} bytes, got {:?}",
            value,
            len,
            err
        );
    }
}

/// Decoding any strict prefix of a value's encoding must fail.
pub fn ensure_decode_fails_truncated<T>(value: &T)
where
    T: BinaryEncoder + Debug,
{
    let bytes = serialize_as_bytes(value);
    for len in 0..bytes.len() {
        assert!(
            T::decode(&bytes[..len]).is_err(),
            "expected a decode failure for {:?} truncated to {} bytes",
            value,
            len
        );
    }
}
