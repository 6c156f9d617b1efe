use std::io::{BufRead, Write};

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing::debug;
use xvalc::CheckError;
use xvalc::lexer::LexErrorExt;
use xvalc::token::TokenList;

use crate::cli::Cli;
use crate::editor::{Editor, EditorRead};
use crate::report::Report;

enum Input {
    Args(Vec<String>),
    Stdin,
    Repl,
}

pub struct Driver {
    input:       Input,
    max_errors:  usize,
    quiet:       bool,
    show_tokens: bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(<Cli as clap::Parser>::parse())
    }

    #[must_use]
    fn from_config(cfg: Cli) -> Self {
        let input = if cfg.stdin {
            Input::Stdin
        } else if cfg.expressions.is_empty() {
            Input::Repl
        } else {
            Input::Args(cfg.expressions)
        };
        Self {
            input,
            max_errors: cfg.max_errors,
            quiet: cfg.quiet,
            show_tokens: cfg.tokens,
        }
    }

    /// Checks every expression of the configured input; `Ok(true)` when all are valid.
    pub fn run(&self) -> std::io::Result<bool> {
        let stdout = std::io::stdout();
        let stderr = StandardStream::stderr(ColorChoice::Auto);
        let (mut out, mut err) = (stdout.lock(), stderr.lock());

        match &self.input {
            Input::Args(expressions) => self.check_all(expressions, &mut out, &mut err),
            Input::Stdin => self.check_lines(std::io::stdin().lock(), &mut out, &mut err),
            Input::Repl => self.repl(&mut out, &mut err).map(|()| true),
        }
    }

    fn check_all(
        &self,
        expressions: &[String],
        out: &mut dyn Write,
        err: &mut dyn WriteColor,
    ) -> std::io::Result<bool> {
        let mut valid = true;
        for (i, expr) in expressions.iter().enumerate() {
            valid &= self.check(&format!("<arg {}>", i + 1), expr, out, err)?;
        }
        Ok(valid)
    }

    /// Checks every non-blank line of `reader`.
    fn check_lines(
        &self,
        reader: impl BufRead,
        out: &mut dyn Write,
        err: &mut dyn WriteColor,
    ) -> std::io::Result<bool> {
        let mut valid = true;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            valid &= self.check(&format!("<stdin>:{}", i + 1), &line, out, err)?;
        }
        Ok(valid)
    }

    fn repl(&self, out: &mut dyn Write, err: &mut dyn WriteColor) -> std::io::Result<()> {
        let mut editor = Editor::default();
        loop {
            let signal = editor.read()?;
            let input = match signal {
                EditorRead::Read(input) => input,
                EditorRead::Break => break,
                EditorRead::Continue => continue,
            };

            self.check("<repl>", &input, out, err)?;
        }

        Ok(())
    }

    /// Checks one expression, printing the verdict to `out` and its diagnostics to `err`.
    fn check(
        &self,
        name: &str,
        source: &str,
        out: &mut dyn Write,
        err: &mut dyn WriteColor,
    ) -> std::io::Result<bool> {
        debug!(name, "checking expression");

        match xvalc::check(source) {
            Ok(tokens) => {
                writeln!(out, "expression is valid: '{source}'")?;
                if self.show_tokens {
                    writeln!(out, "recognized tokens: {}", TokenList(&tokens))?;
                }
                Ok(true)
            }
            Err(CheckError::Lex(e)) => {
                let note = format!(
                    "unsupported lexeme at position {}: '{}'",
                    e.offset(),
                    e.lexeme()
                );
                self.report(err, name, source, &[e], &note);
                Ok(false)
            }
            Err(CheckError::Syntax { tokens, errors }) => {
                let note = format!("recognized tokens: {}", TokenList(&tokens));
                self.report(err, name, source, errors.as_slice(), &note);
                Ok(false)
            }
        }
    }

    fn report<E: Report>(
        &self,
        writer: &mut dyn WriteColor,
        name: &str,
        source: &str,
        errors: &[E],
        note: &str,
    ) {
        if self.quiet {
            return;
        }
        let file = SimpleFile::new(name, source);
        let config = codespan_reporting::term::Config::default();

        let mut displayed = 0;
        for e in errors.iter().take(self.max_errors) {
            let report = e.diagnose(source);
            let _ = term::emit(writer, &config, &file, &report);
            displayed += 1;
        }

        let note = Diagnostic::note().with_message(note);
        let _ = term::emit(writer, &config, &file, &note);

        let message = format!(
            "invalid expression '{source}' due to {} previous {} ({displayed} emitted)",
            errors.len(),
            if errors.len() > 1 { "errors" } else { "error" },
        );
        let error = Diagnostic::error().with_message(message);

        let _ = term::emit(writer, &config, &file, &error);
    }
}
