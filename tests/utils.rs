use rand::Rng;

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

fn random_operand<R: Rng>(rng: &mut R, depth: usize, signed: bool) -> String {
    let sign = if signed && rng.gen_bool(0.2) { "-" } else { "" };
    if depth > 0 && rng.gen_bool(0.3) {
        format!("{sign}({})", random_expression(rng, depth - 1))
    } else {
        format!("{sign}{}", rng.gen_range(0..50))
    }
}

/// Creates a random valid expression. Signs only appear where the grammar allows them, i.e.,
/// at the beginning of the expression or directly after an opening bracket.
pub fn random_expression<R: Rng>(rng: &mut R, depth: usize) -> String {
    let n_operands = rng.gen_range(1..=4);
    let mut expr = random_operand(rng, depth, true);
    for _ in 1..n_operands {
        let op = OPERATORS[rng.gen_range(0..OPERATORS.len())];
        let space = if rng.gen_bool(0.1) { " " } else { "" };
        expr.push_str(space);
        expr.push(op);
        expr.push_str(space);
        expr.push_str(&random_operand(rng, depth, false));
    }
    expr
}

/// Inserts, deletes, or replaces a single character at a random position.
pub fn mutate<R: Rng>(rng: &mut R, expr: &str) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '+', '-', '*', '/', '(', ')', ' ', 'x', '.', 'ä',
    ];
    let mut chars = expr.chars().collect::<Vec<_>>();
    let idx = rng.gen_range(0..=chars.len());
    let c = ALPHABET[rng.gen_range(0..ALPHABET.len())];
    match rng.gen_range(0..3) {
        0 => chars.insert(idx, c),
        1 if idx < chars.len() => {
            chars.remove(idx);
        }
        _ if idx < chars.len() => chars[idx] = c,
        _ => chars.push(c),
    }
    chars.into_iter().collect()
}
