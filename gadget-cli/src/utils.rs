use gadget::error::{BoxError, ErrorContext as _};
use std::io::BufRead;

/// Call `f` for every argument, or for every line of `input` if there are no arguments.
pub fn for_each_input(
    args: &[String],
    input: impl BufRead,
    mut f: impl FnMut(&str) -> Result<(), BoxError>,
) -> Result<(), BoxError> {
    if !args.is_empty() {
        return args.iter().try_for_each(|arg| f(arg));
    }

    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("read input line #{}", i + 1))?;
        f(&line)?;
    }
    Ok(())
}
