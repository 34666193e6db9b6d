// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::buffer::ByteBuffer;
use crate::error::BufferError;

#[test]
fn test_push_appends_in_order() {
    let mut buffer = ByteBuffer::new();
    buffer.push(0x61);
    buffer.push(0x62);
    buffer.push(0x63);

    assert_eq!(buffer.as_slice(), b"abc");
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_push_u32_be() {
    let mut buffer = ByteBuffer::new();
    buffer.push_u32_be(0x0102_0304);

    assert_eq!(buffer.as_slice(), &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_push_u64_be() {
    let mut buffer = ByteBuffer::new();
    buffer.push_u64_be(0x0000_0000_0000_0018);

    assert_eq!(buffer.as_slice(), &[0, 0, 0, 0, 0, 0, 0, 0x18]);
}

#[test]
fn test_get_and_set_in_range() {
    let mut buffer = ByteBuffer::from_slice(&[1, 2, 3]);

    buffer.set(1, 0xAA).expect("Failed to set(..)");

    assert_eq!(buffer.get(0), Ok(1));
    assert_eq!(buffer.get(1), Ok(0xAA));
    assert_eq!(buffer.get(2), Ok(3));
}

#[test]
fn test_get_out_of_bounds() {
    let buffer = ByteBuffer::from_slice(&[1, 2, 3]);

    assert_eq!(
        buffer.get(3),
        Err(BufferError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_set_out_of_bounds() {
    let mut buffer = ByteBuffer::new();

    assert_eq!(
        buffer.set(0, 0xFF),
        Err(BufferError::IndexOutOfBounds { index: 0, len: 0 })
    );
    assert!(buffer.is_empty());
}

#[test]
fn test_resize_zeroed_grows_with_zeros() {
    let mut buffer = ByteBuffer::from_slice(&[0xFF]);
    buffer.resize_zeroed(4);

    assert_eq!(buffer.as_slice(), &[0xFF, 0, 0, 0]);
}

#[test]
fn test_resize_zeroed_never_shrinks() {
    let mut buffer = ByteBuffer::from_slice(&[1, 2, 3, 4]);
    buffer.resize_zeroed(2);

    assert_eq!(buffer.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_read_array_in_range() {
    let data: Vec<u8> = (0..128).collect();
    let buffer = ByteBuffer::from_slice(&data);

    let block: &[u8; 64] = buffer.read_array(64).expect("Failed to read_array(..)");

    assert_eq!(block[0], 64);
    assert_eq!(block[63], 127);
}

#[test]
fn test_read_array_past_end() {
    let buffer = ByteBuffer::from_slice(&[0u8; 100]);

    let result = buffer.read_array::<64>(64);

    assert_eq!(
        result,
        Err(BufferError::ReadPastEnd {
            offset: 64,
            size: 64,
            len: 100
        })
    );
}

#[test]
fn test_read_array_offset_overflow() {
    let buffer = ByteBuffer::from_slice(&[0u8; 8]);

    assert!(buffer.read_array::<4>(usize::MAX).is_err());
}

#[test]
fn test_copy_from_replaces_contents() {
    let source = ByteBuffer::from_slice(b"fresh");
    let mut target = ByteBuffer::from_slice(b"stale contents");

    target.copy_from(&source);

    assert_eq!(target.as_slice(), b"fresh");
}

#[test]
fn test_clear_empties_buffer() {
    let mut buffer = ByteBuffer::from_slice(&[0xAB; 32]);
    buffer.clear();

    assert!(buffer.is_empty());
    assert_eq!(buffer.get(0), Err(BufferError::IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_debug_redacts_contents() {
    let buffer = ByteBuffer::from_slice(b"secret key");
    let rendered = format!("{buffer:?}");

    assert!(rendered.contains("len: 10"));
    assert!(!rendered.contains("secret"));
}

proptest! {
    #[test]
    fn prop_appends_preserve_prefix(prefix in proptest::collection::vec(any::<u8>(), 0..200), word in any::<u32>(), length in any::<u64>()) {
        let mut buffer = ByteBuffer::from_slice(&prefix);
        buffer.push_u32_be(word);
        buffer.push_u64_be(length);

        prop_assert_eq!(buffer.len(), prefix.len() + 12);
        prop_assert_eq!(&buffer.as_slice()[..prefix.len()], prefix.as_slice());
        prop_assert_eq!(&buffer.as_slice()[prefix.len()..prefix.len() + 4], &word.to_be_bytes()[..]);
        prop_assert_eq!(&buffer.as_slice()[prefix.len() + 4..], &length.to_be_bytes()[..]);
    }
}
