//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`report`] helper that assembles the standard report shape.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Assembles the report shape shared by every error kind: a message, one label per span, and
/// an optional help note. Labels with empty text still highlight their span.
pub fn report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            labels
                .into_iter()
                .zip(spans)
                .map(|(label_str, span)| {
                    let mut label = Label::new((src_id, span.clone())).with_color(EXPR);

                    if !label_str.is_empty() {
                        label = label.with_message(label_str);
                    }

                    label
                })
                .collect::<Vec<_>>(),
        );

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;

    #[derive(Debug)]
    struct OutOfRange;

    impl ErrorKind for OutOfRange {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            report(
                src_id,
                spans,
                "value out of range".to_string(),
                vec!["this value".to_string()],
                Some("try a smaller value".to_string()),
            )
        }
    }

    /// Renders the report for the given kind to plain text.
    fn render(kind: &dyn ErrorKind, src: &str, spans: &[Range<usize>]) -> String {
        let mut buf = Vec::new();
        kind.build_report("input", spans)
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(&buf)).unwrap()
    }

    #[test]
    fn report_contains_message_label_and_help() {
        let text = render(&OutOfRange, "9999", &[0..4]);
        assert!(text.contains("value out of range"));
        assert!(text.contains("this value"));
        assert!(text.contains("try a smaller value"));
    }

    #[test]
    fn report_without_spans_still_renders() {
        let text = render(&OutOfRange, "", &[]);
        assert!(text.contains("value out of range"));
    }
}
