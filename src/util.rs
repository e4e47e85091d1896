/// Removes all whitespace, i.e., also whitespace between digits such that `"1 2"` becomes `"12"`.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Index of the `)` that closes the `(` at `open_idx`.
pub fn matching_close(text: &[u8], open_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.iter().enumerate().skip(open_idx) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => (),
        }
    }
    None
}

/// Index of the `(` that opens the `)` at `close_idx`.
pub fn matching_open(text: &[u8], close_idx: usize) -> Option<usize> {
    let mut depth = 0usize;
    for i in (0..=close_idx).rev() {
        match text[i] {
            b')' => depth += 1,
            b'(' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => (),
        }
    }
    None
}

/// A `-` is a sign rather than a subtraction if nothing or an opening bracket precedes it.
pub fn is_unary_minus(text: &[u8], idx: usize) -> bool {
    text[idx] == b'-' && (idx == 0 || text[idx - 1] == b'(')
}
