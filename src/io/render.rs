//! Board encoding and ASCII rendering
//!
//! Two collaborator surfaces over the solver's output. The encoding is the
//! stable wire form consumed by external tooling: for each filled slot in
//! visiting order, the tile id digit followed by its six oriented border
//! digits. The renderer stamps a small per-hex template onto a character
//! canvas at fixed flower-layout offsets, which handles any partially filled
//! board without per-fill-count template data.

use crate::spatial::board::{Arrangement, Board, Placed, SLOT_COUNT, Slot};
use crate::spatial::tile::EDGE_COUNT;
use std::io::Write;
use std::time::Duration;

/// One hexagonal cell; letters a-f mark the edge digits clockwise from the
/// top, i marks the tile id
const HEX_TEMPLATE: [&str; HEX_ROWS] = [
    "   ______   ",
    "  /  a   \\  ",
    " / f  i b \\ ",
    " \\ e    c / ",
    "  \\__d___/  ",
];

const HEX_ROWS: usize = 5;
const HEX_COLS: usize = 12;

/// Canvas origin of each slot's cell, indexed by visiting order
const SLOT_OFFSETS: [(usize, usize); SLOT_COUNT] = [
    (5, 13),  // center
    (0, 13),  // north
    (2, 26),  // northeast
    (7, 26),  // southeast
    (10, 13), // south
    (7, 0),   // southwest
    (2, 0),   // northwest
];

const CANVAS_ROWS: usize = 15;
const CANVAS_COLS: usize = 38;

/// ANSI sequence clearing the terminal and homing the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Encode an arrangement as a flat digit string
///
/// For each slot in visiting order: the tile id digit, then the six oriented
/// border digits. The format is reproduced bit-for-bit across runs for the
/// same arrangement.
pub fn encode(arrangement: &Arrangement) -> String {
    let mut encoded = String::with_capacity(SLOT_COUNT * (EDGE_COUNT + 1));
    for (_, placed) in arrangement.placements() {
        encoded.push(digit(placed.tile as u8));
        for value in placed.oriented().borders() {
            encoded.push(digit(value));
        }
    }
    encoded
}

/// Render a board (possibly partially filled) as ASCII art
pub fn render_board(board: &Board) -> String {
    render_placements(board.placements())
}

/// Render a complete arrangement as ASCII art
pub fn render_arrangement(arrangement: &Arrangement) -> String {
    render_placements(
        arrangement
            .placements()
            .iter()
            .map(|(slot, placed)| (*slot, placed)),
    )
}

/// Clear the terminal, draw the board, and hold the frame on screen
// Frame output is the animation's user-facing surface
#[allow(clippy::print_stdout)]
pub fn show_frame(board: &Board, hold: Duration) {
    print!("{CLEAR_SCREEN}{}", render_board(board));
    let _ = std::io::stdout().flush();
    std::thread::sleep(hold);
}

fn render_placements<'a, I>(placements: I) -> String
where
    I: IntoIterator<Item = (Slot, &'a Placed)>,
{
    let mut canvas = vec![vec![' '; CANVAS_COLS]; CANVAS_ROWS];

    for (slot, placed) in placements {
        let Some(&(row_origin, col_origin)) = SLOT_OFFSETS.get(slot.index()) else {
            continue;
        };
        stamp(&mut canvas, row_origin, col_origin, placed);
    }

    let mut rendered = String::with_capacity(CANVAS_ROWS * (CANVAS_COLS + 1));
    for row in &canvas {
        let line: String = row.iter().collect();
        rendered.push_str(line.trim_end());
        rendered.push('\n');
    }
    rendered
}

/// Copy one cell onto the canvas, substituting placeholder letters with the
/// placement's digits
fn stamp(canvas: &mut [Vec<char>], row_origin: usize, col_origin: usize, placed: &Placed) {
    for (row_index, template_row) in HEX_TEMPLATE.iter().enumerate() {
        for (col_index, template_char) in template_row.chars().enumerate().take(HEX_COLS) {
            let substituted = match template_char {
                'a'..='f' => digit(placed.border((template_char as u8 - b'a') as usize)),
                'i' => digit(placed.tile as u8),
                other => other,
            };

            if let Some(cell) = canvas
                .get_mut(row_origin + row_index)
                .and_then(|row| row.get_mut(col_origin + col_index))
            {
                *cell = substituted;
            }
        }
    }
}

const fn digit(value: u8) -> char {
    (b'0' + (value % 10)) as char
}
