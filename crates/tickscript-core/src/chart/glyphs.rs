//! 5x7 bitmap glyphs for tick and axis labels.

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Horizontal advance per character, including one column of spacing.
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

type Glyph = [&'static str; GLYPH_HEIGHT];

const ZERO: Glyph = [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."];
const ONE: Glyph = ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."];
const TWO: Glyph = [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"];
const THREE: Glyph = ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."];
const FOUR: Glyph = ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."];
const FIVE: Glyph = ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."];
const SIX: Glyph = ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."];
const SEVEN: Glyph = ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."];
const EIGHT: Glyph = [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."];
const NINE: Glyph = [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."];
const MINUS: Glyph = [".....", ".....", ".....", "#####", ".....", ".....", "....."];
const DOT: Glyph = [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."];
const PERCENT: Glyph = ["##...", "##..#", "...#.", "..#..", ".#...", "#..##", "...##"];
const OPEN_PAREN: Glyph = ["...#.", "..#..", ".#...", ".#...", ".#...", "..#..", "...#."];
const CLOSE_PAREN: Glyph = [".#...", "..#..", "...#.", "...#.", "...#.", "..#..", ".#..."];
const UPPER_C: Glyph = [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."];
const LOWER_A: Glyph = [".....", ".....", ".###.", "....#", ".####", "#...#", ".####"];
const LOWER_E: Glyph = [".....", ".....", ".###.", "#...#", "#####", "#....", ".###."];
const LOWER_G: Glyph = [".....", ".####", "#...#", "#...#", ".####", "....#", ".###."];
const LOWER_H: Glyph = ["#....", "#....", "#.##.", "##..#", "#...#", "#...#", "#...#"];
const LOWER_N: Glyph = [".....", ".....", "#.##.", "##..#", "#...#", "#...#", "#...#"];

/// Bitmap rows for `ch`; `None` renders as blank space.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let glyph = match ch {
        '0' => &ZERO,
        '1' => &ONE,
        '2' => &TWO,
        '3' => &THREE,
        '4' => &FOUR,
        '5' => &FIVE,
        '6' => &SIX,
        '7' => &SEVEN,
        '8' => &EIGHT,
        '9' => &NINE,
        '-' => &MINUS,
        '.' => &DOT,
        '%' => &PERCENT,
        '(' => &OPEN_PAREN,
        ')' => &CLOSE_PAREN,
        'C' => &UPPER_C,
        'a' => &LOWER_A,
        'e' => &LOWER_E,
        'g' => &LOWER_G,
        'h' => &LOWER_H,
        'n' => &LOWER_N,
        _ => return None,
    };
    Some(glyph)
}

/// Set pixels of `text` as `(column, row)` offsets from the text origin at scale 1.
pub fn text_pixels(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    text.chars().enumerate().flat_map(|(position, ch)| {
        glyph(ch)
            .into_iter()
            .flat_map(move |rows| {
                rows.iter().enumerate().flat_map(move |(row, bits)| {
                    bits.bytes()
                        .enumerate()
                        .filter(|(_, bit)| *bit == b'#')
                        .map(move |(column, _)| (position * GLYPH_ADVANCE + column, row))
                })
            })
    })
}

pub fn text_width(text: &str) -> usize {
    text.chars().count() * GLYPH_ADVANCE
}
