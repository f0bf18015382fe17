//! gadget shorten and unshorten commands

use crate::utils::for_each_input;
use clap::Args;
use gadget::{
    error::{BoxError, ErrorContext as _},
    ua::{shorten, unshorten},
};
use std::io::{self, Write};

#[derive(Debug, Args)]
/// shorten User-Agent headers, reversible with `gadget unshorten`
pub struct CliCommandShorten {
    /// the User-Agent headers to shorten
    ///
    /// (read from stdin, one per line, if omitted)
    user_agents: Vec<String>,
}

#[derive(Debug, Args)]
/// restore User-Agent headers shortened with `gadget shorten`
pub struct CliCommandUnshorten {
    /// the shortened User-Agent headers
    ///
    /// (read from stdin, one per line, if omitted)
    shortened: Vec<String>,
}

/// run the gadget shorten command
pub fn run_shorten(cfg: &CliCommandShorten) -> Result<(), BoxError> {
    transform_stdio(&cfg.user_agents, |s| shorten(s).into_owned())
}

/// run the gadget unshorten command
pub fn run_unshorten(cfg: &CliCommandUnshorten) -> Result<(), BoxError> {
    transform_stdio(&cfg.shortened, |s| unshorten(s).into_owned())
}

fn transform_stdio(args: &[String], transform: impl Fn(&str) -> String) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();
    transform_lines(args, io::stdin().lock(), &mut stdout, transform)?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn transform_lines(
    args: &[String],
    input: impl io::BufRead,
    w: &mut impl Write,
    transform: impl Fn(&str) -> String,
) -> Result<(), BoxError> {
    for_each_input(args, input, |line| {
        writeln!(w, "{}", transform(line)).context("write output line")?;
        Ok(())
    })
}
