//! Primitive field encoding shared by both file formats
//!
//! Every multi-byte value is big-endian. Strings are an `i32` byte count
//! followed by that many UTF-8 bytes, with no terminator. Colors are three
//! unsigned bytes.

use super::error::{CodecError, CodecResult};
use crate::plan::Rgb;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

pub fn write_i32<W: Write>(writer: &mut W, value: i32) -> CodecResult<()> {
    writer.write_i32::<BigEndian>(value)?;
    Ok(())
}

pub fn write_f32<W: Write>(writer: &mut W, value: f32) -> CodecResult<()> {
    writer.write_f32::<BigEndian>(value)?;
    Ok(())
}

pub fn write_u8<W: Write>(writer: &mut W, value: u8) -> CodecResult<()> {
    writer.write_u8(value)?;
    Ok(())
}

/// Write a collection length or string byte count
pub fn write_len<W: Write>(writer: &mut W, len: usize) -> CodecResult<()> {
    let len = i32::try_from(len)
        .map_err(|_| CodecError::malformed(format!("length {} does not fit in 32 bits", len)))?;
    write_i32(writer, len)
}

pub fn write_string<W: Write>(writer: &mut W, value: &str) -> CodecResult<()> {
    let bytes = value.as_bytes();
    write_len(writer, bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}

pub fn write_rgb<W: Write>(writer: &mut W, color: Rgb) -> CodecResult<()> {
    writer.write_all(&[color.r, color.g, color.b])?;
    Ok(())
}

pub fn read_i32<R: Read>(reader: &mut R) -> CodecResult<i32> {
    Ok(reader.read_i32::<BigEndian>()?)
}

pub fn read_f32<R: Read>(reader: &mut R) -> CodecResult<f32> {
    Ok(reader.read_f32::<BigEndian>()?)
}

pub fn read_u8<R: Read>(reader: &mut R) -> CodecResult<u8> {
    Ok(reader.read_u8()?)
}

/// Read a length prefix, rejecting negative values
pub fn read_len<R: Read>(reader: &mut R, what: &str) -> CodecResult<usize> {
    let len = read_i32(reader)?;
    usize::try_from(len).map_err(|_| CodecError::malformed(format!("negative {} length {}", what, len)))
}

pub fn read_string<R: Read>(reader: &mut R) -> CodecResult<String> {
    let len = read_len(reader, "string")?;

    // take() keeps a bogus prefix from allocating ahead of the data
    let mut bytes = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() != len {
        return Err(CodecError::Truncated);
    }

    Ok(String::from_utf8(bytes)?)
}

pub fn read_rgb<R: Read>(reader: &mut R) -> CodecResult<Rgb> {
    let mut channels = [0u8; 3];
    reader.read_exact(&mut channels)?;
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_big_endian_layout() {
        let mut buffer = Vec::new();
        write_i32(&mut buffer, 0x0102_0304).unwrap();
        write_f32(&mut buffer, 1.0).unwrap();
        assert_eq!(buffer, vec![1, 2, 3, 4, 0x3f, 0x80, 0, 0]);
    }

    #[test]
    fn test_string_prefix_counts_bytes() {
        let mut buffer = Vec::new();
        write_string(&mut buffer, "Bühne").unwrap();
        assert_eq!(&buffer[..4], &[0, 0, 0, 6]);
        let read = read_string(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(read, "Bühne");
    }

    #[test]
    fn test_high_channels_stay_unsigned() {
        let mut buffer = Vec::new();
        write_rgb(&mut buffer, Rgb::new(64, 128, 192)).unwrap();
        assert_eq!(buffer, vec![64, 128, 192]);
        assert_eq!(read_rgb(&mut Cursor::new(buffer)).unwrap(), Rgb::new(64, 128, 192));
    }

    #[test]
    fn test_short_string_is_truncated() {
        let mut buffer = Vec::new();
        write_i32(&mut buffer, 10).unwrap();
        buffer.extend_from_slice(b"abc");
        let err = read_string(&mut Cursor::new(buffer)).unwrap_err();
        assert!(matches!(err, CodecError::Truncated));
    }

    #[test]
    fn test_negative_length_is_malformed() {
        let mut buffer = Vec::new();
        write_i32(&mut buffer, -1).unwrap();
        let err = read_string(&mut Cursor::new(buffer)).unwrap_err();
        assert!(matches!(err, CodecError::Malformed(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut buffer = Vec::new();
        write_i32(&mut buffer, 2).unwrap();
        buffer.extend_from_slice(&[0xff, 0xfe]);
        let err = read_string(&mut Cursor::new(buffer)).unwrap_err();
        assert!(matches!(err, CodecError::InvalidUtf8(_)));
    }
}
