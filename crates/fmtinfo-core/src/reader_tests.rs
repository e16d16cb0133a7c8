use crate::{DataReader, ReadError};

#[test]
fn read_u8_advances() {
    let mut reader = DataReader::new(&[1, 2]);

    assert_eq!(reader.read_u8(), Ok(1));
    assert_eq!(reader.index(), 1);
    assert_eq!(reader.read_u8(), Ok(2));
    assert!(!reader.can_read());
    assert_eq!(reader.read_u8(), Err(ReadError::Truncated(2)));
}

#[test]
fn sixth_group_is_rejected() {
    let mut reader = DataReader::new(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]);
    assert_eq!(reader.read_compressed_u32(), Err(ReadError::VarintOverflow(0)));
}

#[test]
fn fifth_group_above_32_bits_is_rejected() {
    let mut reader = DataReader::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F]);
    assert_eq!(reader.read_compressed_u32(), Err(ReadError::VarintOverflow(0)));
}

#[test]
fn unterminated_varint_is_truncated() {
    let mut reader = DataReader::new(&[0x80, 0x80]);
    assert_eq!(reader.read_compressed_u32(), Err(ReadError::Truncated(2)));
}

#[test]
fn set_index_replays_bytes() {
    let data = [0x05, 0xAC, 0x02, 0x07];
    let mut reader = DataReader::new(&data);

    assert_eq!(reader.read_u8(), Ok(5));
    assert_eq!(reader.read_compressed_u32(), Ok(300));
    let resume = reader.index();

    reader.set_index(1);
    assert_eq!(reader.read_compressed_u32(), Ok(300));

    reader.set_index(resume);
    assert_eq!(reader.read_u8(), Ok(7));
    assert!(!reader.can_read());
}

#[test]
fn ascii_string() {
    let data = [3, b'a', b'd', b'd', 0];
    let mut reader = DataReader::with_max_string_len(&data, 3);

    assert_eq!(reader.read_ascii_string().as_deref(), Ok("add"));
    assert_eq!(reader.read_ascii_string().as_deref(), Ok(""));
    assert!(!reader.can_read());
}

#[test]
fn ascii_string_longer_than_scratch() {
    let data = [4, b'f', b'a', b'd', b'd'];
    let mut reader = DataReader::with_max_string_len(&data, 3);

    assert_eq!(
        reader.read_ascii_string(),
        Err(ReadError::StringTooLong {
            offset: 0,
            len: 4,
            max: 3
        })
    );
}

#[test]
fn ascii_string_truncated() {
    let data = [3, b'a'];
    let mut reader = DataReader::with_max_string_len(&data, 8);
    assert_eq!(reader.read_ascii_string(), Err(ReadError::Truncated(2)));
}
