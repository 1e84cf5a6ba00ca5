mod header;
mod tally;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::parsers::{is_new_tally, read_array, Numeric};
use crate::Mctal;

/// Internal reader for the mctal file
///
/// The whole file is held as lines and every step takes the index of the line
/// to start from, returning what it parsed with the index of the next unread
/// line. Every field depends on counts declared before it, so the cursor is
/// threaded through strictly in file order.
pub(crate) struct Reader<'a> {
    lines: Vec<&'a str>,
}

// ! Internal API
impl<'a> Reader<'a> {
    /// Create a new reader over the full file content
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    /// Parse the mcnp mctal file
    pub(crate) fn read(&self) -> Result<Mctal> {
        let (header, mut n) = self.parse_header(0)?;

        let mut tallies = Vec::with_capacity(header.tally_numbers.len());
        for &id in &header.tally_numbers {
            let (tally, next) = self.parse_tally(n, id)?;
            tallies.push(tally);
            n = next;
        }

        self.check_trailing(n)?;
        debug!("Read {} tallies", tallies.len());

        Ok(Mctal { header, tallies })
    }

    /// Line at index `n`, or an error naming what was expected there
    fn line(&self, n: usize, expected: &str) -> Result<&'a str> {
        self.lines
            .get(n)
            .copied()
            .ok_or_else(|| Error::UnexpectedEof {
                line: n + 1,
                expected: expected.to_string(),
            })
    }

    /// Numeric block starting at line `n`
    fn array<T: Numeric>(&self, n: usize) -> Result<(Vec<T>, usize)> {
        read_array(&self.lines, n)
    }

    /// Index of the first line from `n` that is not empty
    fn skip_empty(&self, mut n: usize) -> usize {
        while self.lines.get(n).is_some_and(|l| l.is_empty()) {
            n += 1;
        }
        n
    }

    // Only declared tallies are read, anything else left over is ignored
    fn check_trailing(&self, n: usize) -> Result<()> {
        let rest = &self.lines[n.min(self.lines.len())..];

        if let Some(i) = rest.iter().position(|l| is_new_tally(l)) {
            return Err(Error::format(
                n + i,
                "end of declared tallies",
                rest[i],
            ));
        }

        let remaining = rest.iter().filter(|l| !l.trim().is_empty()).count();
        if remaining > 0 {
            warn!("Ignoring {remaining} lines after the last declared tally");
        }

        Ok(())
    }
}
