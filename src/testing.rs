//! Assertion helpers shared by the tests.

use {crate::rewrite::rewrite, expect_test::Expect};

/// Asserts that rewriting `input` succeeds with the `expected` output.
///
/// # Panics
///
/// If the rewrite fails or produces something else.
#[track_caller]
pub fn assert_rewrites(expected: Expect, input: &str) {
    match rewrite(input) {
        Ok(output) => expected.assert_eq(&output),
        Err(err) => panic!("rewriting {input:?} failed: {err}"),
    }
}

/// Asserts that rewriting `input` fails, with an error that displays as
/// `expected`.
///
/// # Panics
///
/// If the rewrite succeeds or fails differently.
#[track_caller]
pub fn assert_rewrite_fails(expected: Expect, input: &str) {
    match rewrite(input) {
        Ok(output) => panic!("rewriting {input:?} unexpectedly produced {output:?}"),
        Err(err) => expected.assert_eq(&err.to_string()),
    }
}
