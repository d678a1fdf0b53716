//! Morton (Z-order) codes for 16-bit cell coordinates.
//!
//! `x` occupies the even bits of the code and `y` the odd bits, so the two
//! lowest bits select the quadrant at the finest level and every further pair
//! of bits selects the quadrant one level up.

use common::shapes::{Point, Rect};

/// Bits per axis in a 32-bit code.
pub const AXIS_BITS: u32 = 16;

/// Spreads the 16 bits of `value` into the even bit positions of the result.
#[inline(always)]
pub fn interleave(value: u16) -> u32 {
    let mut x = u32::from(value);
    x = (x | (x << 8)) & 0x00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333;
    x = (x | (x << 1)) & 0x5555_5555;
    x
}

/// Inverse of [`interleave`]: gathers the even bits of `code`.
#[inline(always)]
pub fn compact(code: u32) -> u16 {
    let mut x = code & 0x5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF;
    x as u16
}

#[inline(always)]
pub fn encode(x: u16, y: u16) -> u32 {
    interleave(x) | (interleave(y) << 1)
}

#[inline(always)]
pub fn decode(code: u32) -> (u16, u16) {
    (compact(code), compact(code >> 1))
}

/// Code of the finest cell holding `point`.
///
/// Points outside `region` are folded onto the nearest boundary cell. The cell
/// is also capped at `2^depth - 1` per axis, which matters when the region
/// extent is not a multiple of `section_size`.
#[inline]
pub fn encode_point(region: &Rect, section_size: Point, point: Point, depth: usize) -> u32 {
    debug_assert!(depth as u32 <= AXIS_BITS);
    let local = point.saturating_sub(region.top_left());
    let clamped = local.clamp(Point::ZERO, region.size().saturating_sub(Point::ONE));
    let last_cell = ((1u32 << depth) - 1) as i32;
    let cell = clamped
        .div(section_size)
        .clamp(Point::ZERO, Point::splat(last_cell));
    encode(cell.x as u16, cell.y as u16)
}
