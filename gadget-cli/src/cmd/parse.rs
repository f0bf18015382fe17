//! gadget parse command

use crate::utils::for_each_input;
use clap::Args;
use gadget::{
    error::{BoxError, ErrorContext as _},
    ua::{UserAgent, unshorten},
};
use std::io::{self, Write};

#[derive(Debug, Args)]
/// classify User-Agent headers into browser and operating system
pub struct CliCommandParse {
    /// the User-Agent headers to classify
    ///
    /// (read from stdin, one per line, if omitted)
    user_agents: Vec<String>,

    #[arg(long, short = 'j')]
    /// print one JSON object per User-Agent instead of "<browser> on <os>"
    json: bool,

    #[arg(long, short = 's')]
    /// the User-Agent headers are shortened (see `gadget shorten`)
    short: bool,
}

/// run the gadget parse command
pub fn run(cfg: &CliCommandParse) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();
    for_each_input(&cfg.user_agents, io::stdin().lock(), |input| {
        write_user_agent(&mut stdout, cfg, input)
    })?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_user_agent(
    w: &mut impl Write,
    cfg: &CliCommandParse,
    input: &str,
) -> Result<(), BoxError> {
    let ua = if cfg.short {
        UserAgent::new(&unshorten(input))
    } else {
        UserAgent::new(input)
    };
    tracing::debug!(user_agent.header = %input, "classified user agent: {ua}");

    if cfg.json {
        serde_json::to_writer(&mut *w, &ua).context("write user agent as json")?;
        writeln!(w).context("write newline")?;
    } else {
        writeln!(w, "{ua}").context("write user agent")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str, json: bool, short: bool) -> String {
        let cfg = CliCommandParse {
            user_agents: Vec::new(),
            json,
            short,
        };
        let mut out = Vec::new();
        write_user_agent(&mut out, &cfg, input).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_user_agent() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:73.0) Gecko/20100101 Firefox/73.0";
        assert_eq!(parse(ua, false, false), "Firefox 73 on Windows 10\n");
        assert_eq!(
            parse(ua, true, false),
            "{\"browser_name\":\"Firefox\",\"browser_version\":\"73\",\"os_name\":\"Windows\",\"os_version\":\"10\"}\n"
        );
        assert_eq!(parse("nothing", false, false), "\n");
        assert_eq!(parse("", true, false), "{}\n");
    }

    #[test]
    fn test_write_user_agent_short() {
        let short = "~Z (~I; Intel Mac OS X 10_15_3) ~a605.1.15 ~G ~v13.0.5 ~s605.1.15";
        assert_eq!(parse(short, false, true), "Safari 13.0 on macOS 10.15\n");
        // not decoded: the Mozilla prefix is missing
        assert_eq!(parse(short, false, false), "macOS 10.15\n");
    }
}
