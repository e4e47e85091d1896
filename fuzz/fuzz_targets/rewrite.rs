#![no_main]
use libfuzzer_sys::fuzz_target;

use bigcalc::{build_tree, insert_precedence_brackets, is_valid_expression, strip_whitespace};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let stripped = strip_whitespace(s);
        let rewritten = insert_precedence_brackets(&stripped);
        let _ = build_tree(&rewritten);
        if is_valid_expression(&stripped) {
            assert_eq!(insert_precedence_brackets(&rewritten), rewritten);
        }
    }
});
