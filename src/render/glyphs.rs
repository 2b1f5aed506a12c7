//! Block-pixel digit font
//!
//! Each digit is a 3x5 grid of small quads. `cell` is the nominal pixel size;
//! pixels sit `cell * 1.35` apart and are drawn `cell * 1.15` wide so
//! neighbours overlap into solid strokes.

use glam::Vec2;

use super::instance::{InstanceData, Scene};
use crate::color::Color3;

const STEP_FACTOR: f32 = 1.35;
const PIXEL_FACTOR: f32 = 1.15;
const ADVANCE_FACTOR: f32 = 6.6;

/// Row-major 3x5 bitmaps, top row first
static DIGITS: [[u8; 15]; 10] = [
    [1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0],
    [1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1],
    [1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1],
];

/// Lit (column, row) cells of a digit; empty for anything outside 0-9
pub fn digit_cells(digit: u32) -> impl Iterator<Item = (usize, usize)> {
    let pattern = DIGITS.get(digit as usize);
    (0..15usize).filter_map(move |i| match pattern {
        Some(p) if p[i] == 1 => Some((i % 3, i / 3)),
        _ => None,
    })
}

/// Draw one digit centred on `center`
pub fn draw_digit(scene: &mut Scene, digit: u32, center: Vec2, cell: f32, color: Color3) {
    let step = cell * STEP_FACTOR;
    let top_left = center + Vec2::new(-step, step * 2.0);
    let pixel = Vec2::splat(cell * PIXEL_FACTOR);

    for (col, row) in digit_cells(digit) {
        let pos = top_left + Vec2::new(col as f32 * step, -(row as f32) * step);
        scene.quad(InstanceData::rect(pos, pixel, color));
    }
}

/// Draw a decimal number centred on `anchor`
pub fn draw_score(scene: &mut Scene, value: u32, anchor: Vec2, cell: f32, color: Color3) {
    let digits: Vec<u32> = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let advance = cell * ADVANCE_FACTOR;
    let start_x = anchor.x - (digits.len() as f32 - 1.0) * advance * 0.5;
    for (i, &d) in digits.iter().enumerate() {
        let center = Vec2::new(start_x + i as f32 * advance, anchor.y);
        draw_digit(scene, d, center, cell, color);
    }
}
