/// Forward-only line/column tracker.
///
/// The splitter only ever asks for positions at or after the last one it
/// asked for, so counting resumes where the previous call stopped and the
/// whole input is walked at most once.
#[derive(Debug, Clone, Copy)]
pub(super) struct Locator {
    offset: usize,
    line: usize,
    column: usize,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Locator {
    /// Returns the 1-based line and column of byte offset `target`.
    pub(super) fn advance_to(&mut self, input: &str, target: usize) -> (usize, usize) {
        debug_assert!(target >= self.offset, "locator moved backwards");
        for ch in input[self.offset..target].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;
        (self.line, self.column)
    }
}
