// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::{bsig0, bsig1, ch, maj, rotr, ssig0, ssig1};

const TEST_VALUES: [u32; 6] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_F0F0,
    0x8000_0001,
];

#[test]
fn rotr_matches_rotate_right() {
    for &x in &TEST_VALUES {
        for n in 1..32 {
            assert_eq!(rotr(x, n), x.rotate_right(n), "ROTR mismatch for x={x:#010x}, n={n}");
        }
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "ROTR is only defined")]
fn rotr_rejects_zero_shift() {
    let _ = rotr(0x1234_5678, 0);
}

#[test]
fn ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (!x & z);
                assert_eq!(
                    ch(x, y, z),
                    expected,
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn ch_selects_by_x_bits() {
    assert_eq!(ch(0xFFFF_FFFF, 0x1234_5678, 0x9ABC_DEF0), 0x1234_5678);
    assert_eq!(ch(0x0000_0000, 0x1234_5678, 0x9ABC_DEF0), 0x9ABC_DEF0);
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (x & z) ^ (y & z);
                assert_eq!(
                    maj(x, y, z),
                    expected,
                    "Maj mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn bsig0_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22);
        assert_eq!(bsig0(x), expected, "BSIG0 mismatch for x={x:#010x}");
    }
}

#[test]
fn bsig1_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25);
        assert_eq!(bsig1(x), expected, "BSIG1 mismatch for x={x:#010x}");
    }
}

#[test]
fn ssig0_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3);
        assert_eq!(ssig0(x), expected, "SSIG0 mismatch for x={x:#010x}");
    }
}

#[test]
fn ssig1_matches_reference() {
    for &x in &TEST_VALUES {
        let expected = x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10);
        assert_eq!(ssig1(x), expected, "SSIG1 mismatch for x={x:#010x}");
    }
}

#[test]
fn small_sigmas_shift_in_zeros() {
    // The SHR term drops the top bits instead of rotating them around
    assert_eq!(ssig0(0x0000_0001), 0x0000_0001u32.rotate_right(7) ^ 0x0000_0001u32.rotate_right(18));
    assert_eq!(ssig1(0x0000_0001), 0x0000_0001u32.rotate_right(17) ^ 0x0000_0001u32.rotate_right(19));
}
