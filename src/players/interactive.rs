//! Console move source: prompts a human for a column and re-asks until the
//! answer names a column with room.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use super::MoveSource;
use crate::board::Board;
use crate::core::SourceError;

/// Asks a person for a column, one line per attempt.
///
/// Unparsable, out-of-range and full-column answers are rejected here with a
/// message, so only playable columns reach the board. Several seats can
/// share one reader (hot-seat play on a single console).
pub struct InteractiveMoveSource<R, W> {
    name: String,
    input: Rc<RefCell<R>>,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveMoveSource<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self::sharing(name, Rc::new(RefCell::new(input)), output)
    }

    /// Read from a reader other seats also use.
    pub fn sharing(name: impl Into<String>, input: Rc<RefCell<R>>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Give back the writer, e.g. to inspect captured prompts.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, SourceError> {
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Err(SourceError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSource for InteractiveMoveSource<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_column(&mut self, board: &Board<'_>) -> Result<usize, SourceError> {
        let cols = board.cols();
        loop {
            write!(
                self.output,
                "{}, which column do you want to drop a token into: ",
                self.name
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(col) if col >= cols => {
                    writeln!(self.output, "Column must be between 0 and {}.", cols - 1)?;
                }
                Ok(col) if board.is_column_full(col) => {
                    writeln!(self.output, "Column {col} is full.")?;
                }
                Ok(col) => return Ok(col),
                Err(_) => {
                    writeln!(self.output, "Please enter a column number.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, PlayerId};
    use crate::tokens::TokenRegistry;
    use std::io::Cursor;

    #[test]
    fn test_reads_a_column() {
        let registry = TokenRegistry::new();
        let board = Board::new(BoardConfig::new(6, 7).unwrap(), &registry);
        let mut source = InteractiveMoveSource::new("alice", Cursor::new("3\n"), Vec::new());

        assert_eq!(source.choose_column(&board).unwrap(), 3);
        let out = String::from_utf8(source.into_output()).unwrap();
        assert!(out.starts_with("alice, which column"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut registry = TokenRegistry::new();
        let a = registry.register(PlayerId::new(0), "a").unwrap();
        let mut board = Board::new(BoardConfig::new(4, 4).unwrap(), &registry);
        for _ in 0..4 {
            board.apply_move(0, a).unwrap();
        }

        let input = Cursor::new("left\n9\n0\n 2 \n");
        let mut source = InteractiveMoveSource::new("bob", input, Vec::new());

        assert_eq!(source.choose_column(&board).unwrap(), 2);
        let out = String::from_utf8(source.into_output()).unwrap();
        assert!(out.contains("Please enter a column number."));
        assert!(out.contains("Column must be between 0 and 3."));
        assert!(out.contains("Column 0 is full."));
    }

    #[test]
    fn test_seats_share_one_reader() {
        let registry = TokenRegistry::new();
        let board = Board::new(BoardConfig::new(4, 4).unwrap(), &registry);
        let input = Rc::new(RefCell::new(Cursor::new("1\n2\n")));
        let mut first = InteractiveMoveSource::sharing("a", Rc::clone(&input), Vec::new());
        let mut second = InteractiveMoveSource::sharing("b", input, Vec::new());

        assert_eq!(first.choose_column(&board).unwrap(), 1);
        assert_eq!(second.choose_column(&board).unwrap(), 2);
    }

    #[test]
    fn test_eof_closes_input() {
        let registry = TokenRegistry::new();
        let board = Board::new(BoardConfig::new(4, 4).unwrap(), &registry);
        let mut source = InteractiveMoveSource::new("carol", Cursor::new(""), Vec::new());

        assert!(matches!(
            source.choose_column(&board),
            Err(SourceError::InputClosed)
        ));
    }
}
