use std::{
    io,
    io::{stderr, stdin, stdout, BufRead, Write},
};

use crate::{error::Error, eval::Interpreter, parser::Parser, rpn::RpnPrinter};

pub const PROMPT: &str = "> ";

/// What to do with each parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Evaluate,
    Rpn,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Evaluate
    }
}

pub fn start(mode: Mode) -> io::Result<()> {
    let stdin = stdin();

    run(stdin.lock(), &mut stdout(), &mut stderr(), mode)
}

/// Reads lines from `input` until EOF. Results go to `out`, errors go to
/// `err` and do not stop the loop.
pub fn run<R, W, E>(mut input: R, out: &mut W, err: &mut E, mode: Mode) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut buffer = String::new();

    loop {
        write!(out, "{}", PROMPT)?;

        out.flush()?;

        if input.read_line(&mut buffer)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        if !buffer.trim().is_empty() {
            match run_line(buffer.trim_end(), mode, out) {
                Ok(()) => {}
                Err(Error::Io(e)) => return Err(e),
                Err(e) => writeln!(err, "{}", e)?,
            }
        }

        buffer.clear();
    }
}

/// Parses one expression from `line` and writes either its value or its RPN
/// rendering to `out`.
pub fn run_line<W: Write>(line: &str, mode: Mode, out: &mut W) -> Result<(), Error> {
    let expr = Parser::parse_expression_str(line)?;
    tracing::debug!(?mode, "parsed expression");

    match mode {
        Mode::Evaluate => Interpreter::new().interpret(&expr, out),
        Mode::Rpn => {
            writeln!(out, "{}", RpnPrinter.print(&expr))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::{run, run_line, Mode, PROMPT};
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn session(input: &str, mode: Mode) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();

        run(Cursor::new(input), &mut out, &mut err, mode).unwrap();

        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn evaluates_each_line() {
        let (out, err) = session("1 + 2\n\n\"a\" + 1\n", Mode::Evaluate);

        assert_eq!(
            out,
            format!("{p}3\n{p}{p}a1\n{p}\n", p = PROMPT),
        );
        assert_eq!(err, "");
    }

    #[test]
    fn reports_errors_and_continues() {
        let (out, err) = session("1 / 0\n(1\n2 * 2\n", Mode::Evaluate);

        assert_eq!(out, format!("{p}{p}{p}4\n{p}\n", p = PROMPT));
        assert_eq!(
            err,
            "Division by zero error\n[line 1]\n[line 1] Error at end: Expect ')' after expression.\n"
        );
    }

    #[test]
    fn rpn_mode() {
        let (out, _) = session("(1 + 2) * 3\n", Mode::Rpn);

        assert_eq!(out, format!("{p}1 2 + Group 3 *\n{p}\n", p = PROMPT));
    }

    #[test]
    fn run_line_modes() {
        let mut out = Vec::new();
        run_line("true ? 1 : 1 / 0", Mode::Evaluate, &mut out).unwrap();
        run_line("true ? 1 : 1 / 0", Mode::Rpn, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1\ntrue 1 1 0 / ternary\n");

        let mut out = Vec::new();
        let error = run_line("-\"x\"", Mode::Evaluate, &mut out).unwrap_err();
        assert!(matches!(error, Error::Runtime(_)));
        assert_eq!(error.exit_code(), 70);
    }
}
