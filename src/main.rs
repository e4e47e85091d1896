use bigcalc::{BigInt, CalcResult, Expr};
use lazy_static::lazy_static;
use num::{Signed, Zero};
use regex::Regex;
use rustyline::{error::ReadlineError, DefaultEditor, Result};

const PROMPT: &str = "bigcalc> ";
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];
const TREE_COMMAND: &str = ":tree";

/// Replaces `ans` by the last result. Negative results are bracketed such that
/// `ans*2` stays a valid expression.
fn substitute_ans(line: &str, ans: &BigInt) -> String {
    lazy_static! {
        static ref RE_ANS: Regex = Regex::new(r"\bans\b").unwrap();
    }
    let replacement = if ans.is_negative() {
        format!("({ans})")
    } else {
        ans.to_string()
    };
    RE_ANS.replace_all(line, replacement.as_str()).into_owned()
}

fn describe_tree(text: &str) -> CalcResult<String> {
    let expr = Expr::parse(text)?;
    Ok(format!(
        "Tree: {expr} (depth {}, {} nodes)",
        expr.depth(),
        expr.n_nodes()
    ))
}

/// Ctrl-D and Ctrl-C end the session quietly, anything else is worth a message.
fn is_regular_exit(e: &ReadlineError) -> bool {
    matches!(e, ReadlineError::Eof | ReadlineError::Interrupted)
}

fn main() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut ans = BigInt::zero();
    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(e) => {
                if !is_regular_exit(&e) {
                    eprintln!("Error: {e}");
                }
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rl.add_history_entry(line).ok();
        if EXIT_COMMANDS.contains(&line) {
            break;
        }
        let line = substitute_ans(line, &ans);
        if let Some(text) = line.strip_prefix(TREE_COMMAND) {
            match describe_tree(text) {
                Ok(description) => println!("{description}"),
                Err(e) => eprintln!("Error: {e}"),
            }
            continue;
        }
        match bigcalc::eval(&line) {
            Ok(result) => {
                println!("Result: {result}");
                ans = result;
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    Ok(())
}
