use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::Noise, quickcheck_tests};
use crate::{Splitter, SplitterOptions, UnterminatedPolicy, split};

/// Property: statements are ordered, do not overlap, borrow exactly their
/// span, and everything between them is whitespace.
#[test]
fn spans_cover_all_non_whitespace() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(noise: Noise) -> bool {
        let src = noise.0.as_str();
        let mut cursor = 0;
        for stmt in Splitter::new(src) {
            let stmt = stmt.unwrap();
            if stmt.start < cursor || stmt.end < stmt.start {
                return false;
            }
            if !src[cursor..stmt.start].trim().is_empty() {
                return false;
            }
            if &src[stmt.span()] != stmt.text || stmt.text.trim().is_empty() {
                return false;
            }
            cursor = stmt.end;
        }
        src[cursor..].trim().is_empty()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Noise) -> bool);
}

/// Property: splitting a statement the splitter produced gives back that
/// statement alone.
#[test]
fn resplitting_a_statement_is_identity() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(noise: Noise) -> bool {
        split(&noise.0)
            .into_iter()
            .all(|stmt| split(stmt) == [stmt])
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Noise) -> bool);
}

/// Property: the rejecting policy agrees with the absorbing one up to the
/// point where it reports an error, and the absorbing policy emits exactly one
/// more statement in that case.
#[test]
fn reject_agrees_with_absorb() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(noise: Noise) -> bool {
        let src = noise.0.as_str();
        let absorbed: Vec<_> = Splitter::new(src).map(Result::unwrap).collect();
        let rejected: Vec<_> = Splitter::with_options(
            src,
            SplitterOptions {
                unterminated: UnterminatedPolicy::Reject,
            },
        )
        .collect();

        let failed = rejected.last().is_some_and(Result::is_err);
        let accepted: Vec<_> = rejected.iter().filter_map(|r| r.as_ref().ok()).collect();
        if rejected.iter().filter(|r| r.is_err()).count() > usize::from(failed) {
            return false;
        }
        let expected_len = accepted.len() + usize::from(failed);
        absorbed.len() == expected_len
            && accepted.iter().zip(&absorbed).all(|(a, b)| *a == b)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Noise) -> bool);
}
