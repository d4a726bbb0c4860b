//! Chunk-to-line reassembly
//!
//! Every chunk is split on its own. There is no carry-over between chunks, so
//! a line that straddles a read boundary comes out as two lines, each stamped
//! when its half arrived. Partial lines are never held back.

/// The line separator
pub const NEWLINE: u8 = b'\n';

/// Iterator over the lines of a single chunk
///
/// Every line except possibly the last keeps its trailing newline. A chunk
/// ending in a newline does not produce a trailing empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let end = match self.rest.iter().position(|&b| b == NEWLINE) {
            Some(pos) => pos + 1,
            None => self.rest.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

impl std::iter::FusedIterator for Lines<'_> {}

/// Split a chunk into lines without copying
pub fn split_lines(chunk: &[u8]) -> Lines<'_> {
    Lines { rest: chunk }
}

/// Whether a line carries its own terminator
pub fn is_terminated(line: &[u8]) -> bool {
    line.last() == Some(&NEWLINE)
}
