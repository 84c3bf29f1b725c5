//! Pixel-level access to the frame buffer
//!
//! The buffer is `WINDOW_WIDTH * WINDOW_HEIGHT * 4` bytes, row-major,
//! laid out `[R, G, B, unused]`. The fourth byte is owned by the host.

use crate::consts::*;
use crate::sim::Colour;

/// Allocate a frame buffer with every pixel opaque black
pub fn new_buffer() -> Vec<u8> {
    [0u8, 0, 0, 255].repeat(BUFFER_LEN / BYTES_PER_PIXEL)
}

/// Zero every byte
pub fn clear(pixels: &mut [u8]) {
    pixels.fill(0);
}

/// Write one pixel's colour, silently ignoring anything off screen
#[inline]
pub fn put_pixel(pixels: &mut [u8], x: i32, y: i32, colour: Colour) {
    if !(0..WINDOW_WIDTH).contains(&x) || !(0..WINDOW_HEIGHT).contains(&y) {
        return;
    }
    let index = (y as i64 * WINDOW_WIDTH as i64 + x as i64) * BYTES_PER_PIXEL as i64;
    let limit = pixels.len() as i64 - BYTES_PER_PIXEL as i64;
    if index < 0 || index >= limit {
        return;
    }

    let index = index as usize;
    pixels[index] = colour.red;
    pixels[index + 1] = colour.green;
    pixels[index + 2] = colour.blue;
}
