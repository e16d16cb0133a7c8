//! Little-endian base-128 integers.
//!
//! Each byte carries 7 payload bits, low group first. Bit 7 set means another
//! byte follows. A `u32` takes at most [`MAX_LEN`] bytes, and the last of those
//! may only use its low 4 payload bits.

/// Longest encoding of a `u32`.
pub const MAX_LEN: usize = 5;

/// Continuation flag.
pub const CONTINUE: u8 = 0x80;

/// Payload bits of the fifth group that still fit in 32 bits.
pub(crate) const LAST_GROUP_MASK: u8 = 0x0F;

/// Append the encoding of `value` to `out`.
pub fn write(out: &mut Vec<u8>, mut value: u32) {
    loop {
        let group = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(group);
            return;
        }
        out.push(group | CONTINUE);
    }
}

/// Encode `value` into a fresh buffer.
pub fn encode(value: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_LEN);
    write(&mut out, value);
    out
}

/// Number of bytes [`write`] produces for `value`.
pub fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}
