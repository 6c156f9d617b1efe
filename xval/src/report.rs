use std::error::Error;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use xvalspan::Spand;

pub trait Report {
    /// Builds the diagnostic for an error found in `source`.
    fn diagnose(&self, source: &str) -> Diagnostic<()>;
}

impl<T: Error> Report for Spand<T> {
    fn diagnose(&self, source: &str) -> Diagnostic<()> {
        let diagnostic = Diagnostic::error().with_message(self.kind().to_string());

        // spans past the end of the source (an empty expression) get no label
        match self.span.byte_range(source) {
            Some(range) => diagnostic
                .with_label(Label::primary((), range).with_message(self.span.to_string())),
            None => diagnostic,
        }
    }
}
