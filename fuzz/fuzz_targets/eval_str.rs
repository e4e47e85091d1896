#![no_main]
use libfuzzer_sys::fuzz_target;

use bigcalc::{eval, CalcError};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Err(CalcError::MalformedExpression(e)) = eval(s) {
            panic!("validated expression {s} turned out malformed at {e}");
        }
    }
});
