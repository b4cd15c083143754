#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sqlsplit::{Splitter, SplitterOptions, UnterminatedPolicy};

/// Delimiter-heavy alphabet. Uniform bytes almost never form `$tag$`, `E'`
/// or `*/`, so most of the input is drawn from here.
static FRAGMENTS: &[&str] = &[
    "'", "''", "\"", "\"\"", "E'", "e'", "\\", "--", "\n", "\r\n", "/*", "*/", "(", ")", "[",
    "]", ";", "$", "$$", "$a$", " ", "\u{3000}", "é", "x",
];

#[derive(Debug, Arbitrary)]
enum Piece {
    Fragment(u8),
    Text(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    strict: bool,
    pieces: Vec<Piece>,
}

impl Input {
    fn render(&self) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Fragment(i) => out.push_str(FRAGMENTS[usize::from(*i) % FRAGMENTS.len()]),
                Piece::Text(s) => out.push_str(s),
            }
        }
        out
    }
}

fuzz_target!(|input: Input| {
    let src = input.render();
    let options = SplitterOptions {
        unterminated: if input.strict {
            UnterminatedPolicy::Reject
        } else {
            UnterminatedPolicy::Absorb
        },
    };

    let mut cursor = 0;
    let mut failed = false;
    for stmt in Splitter::with_options(&src, options) {
        assert!(!failed, "statement after error");
        let stmt = match stmt {
            Ok(stmt) => stmt,
            Err(_) => {
                failed = true;
                continue;
            }
        };
        assert!(stmt.start >= cursor && stmt.end > stmt.start);
        assert!(src[cursor..stmt.start].trim().is_empty());
        assert_eq!(&src[stmt.span()], stmt.text);
        assert_eq!(sqlsplit::split(stmt.text), [stmt.text]);
        cursor = stmt.end;
    }
    if !failed {
        assert!(src[cursor..].trim().is_empty());
    }
});
