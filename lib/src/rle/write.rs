//! Writing a grid as an RLE pattern.

use crate::{cells::LifeState, grid::Grid, rules::Life};

/// Lines of run tokens are wrapped before they exceed this width.
const LINE_WIDTH: usize = 70;

/// Writes the whole grid as an RLE pattern with the given rule.
///
/// Trailing dead cells of a row are omitted, and consecutive empty rows
/// are merged into a single `$` token.
pub fn write(grid: &Grid<LifeState>, rule: &Life) -> String {
    let mut output = RleOutput {
        output: format!(
            "x = {}, y = {}, rule = {}\n",
            grid.width(),
            grid.height(),
            rule
        ),
        line_len: 0,
    };

    let mut rows_to_advance = 0;
    for row in grid.rows() {
        let last_alive = match row.iter().rposition(|&s| s == LifeState::Alive) {
            Some(i) => i,
            None => {
                rows_to_advance += 1;
                continue;
            }
        };

        if rows_to_advance > 0 {
            output.push(rows_to_advance, '$');
        }
        rows_to_advance = 1;

        let mut cells = row[..=last_alive].iter().peekable();
        while let Some(&state) = cells.next() {
            let mut len = 1;
            while cells.next_if(|&&s| s == state).is_some() {
                len += 1;
            }
            let tag = match state {
                LifeState::Dead => 'b',
                LifeState::Alive => 'o',
            };
            output.push(len, tag);
        }
    }

    output.output.push_str("!\n");
    output.output
}

/// The output, with the length of its last line.
struct RleOutput {
    output: String,
    line_len: usize,
}

impl RleOutput {
    fn push(&mut self, len: usize, tag: char) {
        let token = if len == 1 {
            tag.to_string()
        } else {
            format!("{}{}", len, tag)
        };

        if self.line_len + token.len() > LINE_WIDTH {
            self.output.push('\n');
            self.line_len = 0;
        }

        self.output.push_str(&token);
        self.line_len += token.len();
    }
}
