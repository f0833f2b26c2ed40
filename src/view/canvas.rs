use std::io::{self, Write};

use crate::{pos, Pos};

/// Character buffer the size of the screen, drawn in one go.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    height: usize,
}

impl Canvas {
    /// canvas covering the terminal, the last line is kept for the status.
    pub fn from_screen() -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(width as usize, height.saturating_sub(1) as usize))
    }

    pub fn new(width: usize, height: usize) -> Self {
        let lines = (0..height).map(|_| vec![' '; width]).collect();
        Self { lines, height }
    }

    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for (row, line) in self.lines.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                if let Some(char) = f(pos!(row as i32, col as i32)) {
                    *slot = char;
                }
            }
        }
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clears the screen and writes every line followed by `status`.
    ///
    /// Lines are placed with explicit cursor moves, raw mode does not return the carriage on `\n`.
    pub fn display(&self, out: &mut impl Write, status: &str) -> io::Result<()> {
        let clear = termion::clear::All;
        write!(out, "{clear}")?;
        for (index, line) in self.lines.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            let line: String = line.iter().collect();
            write!(out, "{goto}{line}")?;
        }
        let goto = termion::cursor::Goto(1, self.height as u16 + 1);
        write!(out, "{goto}{status}")?;
        out.flush()
    }
}
