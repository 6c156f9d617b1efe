use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

/// Check arithmetic expressions for lexical and syntax errors without evaluating them
#[derive(clap::Parser, Debug, Clone, Default)]
#[clap(styles = CARGO_STYLING, version)]
pub struct Cli {
    /// Expressions to check; opens a prompt when none are given
    #[arg(value_name = "EXPRESSION")]
    pub expressions: Vec<String>,

    /// Do not print diagnostics
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Check every non-empty line read from stdin
    #[arg(long, default_value_t = false, conflicts_with = "expressions")]
    pub stdin: bool,

    /// Maximum amount of errors to report per expression
    #[arg(long, value_name = "max-errors", default_value_t = 4)]
    pub max_errors: usize,

    /// Print the recognized tokens of every expression
    #[arg(short, long, default_value_t = false)]
    pub tokens: bool,
}

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["xval"]).unwrap();
        assert!(cli.expressions.is_empty());
        assert!(!cli.quiet && !cli.stdin && !cli.tokens);
        assert_eq!(cli.max_errors, 4);
    }

    #[test]
    fn expressions_and_flags() {
        let cli = Cli::try_parse_from(["xval", "-q", "--max-errors", "2", "a+b", "(c)"]).unwrap();
        assert_eq!(cli.expressions, ["a+b", "(c)"]);
        assert!(cli.quiet);
        assert_eq!(cli.max_errors, 2);
    }

    #[test]
    fn stdin_conflicts_with_expressions() {
        assert!(Cli::try_parse_from(["xval", "--stdin", "a+b"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }
}
