use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{Palette, single_line};
use crate::presentation::view_models::{
    AnnotationDetailViewModel, DisplayOptions, ParagraphViewModel, QuestionViewModel, SegmentKind,
};

// --------------------------------------------------------
// Question View (viewer panel)
// --------------------------------------------------------

pub struct QuestionView<'a> {
    data: &'a QuestionViewModel,
    options: DisplayOptions,
}

impl<'a> QuestionView<'a> {
    pub fn new(data: &'a QuestionViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let counts = format!(
            "Err: {}  Ppl: {}  {}",
            data.annotation_count,
            data.annotator_count,
            data.annotators.join(", ")
        );

        if self.options.enable_color {
            writeln!(f, "{} {}", format!("[{}]", data.group).dimmed(), data.id.cyan().bold())?;
            writeln!(f, "{}", data.question.bold())?;
            writeln!(f, "{}", counts.trim_end().dimmed())?;
        } else {
            writeln!(f, "[{}] {}", data.group, data.id)?;
            writeln!(f, "{}", data.question)?;
            writeln!(f, "{}", counts.trim_end())?;
        }
        Ok(())
    }

    fn render_paragraph(&self, f: &mut fmt::Formatter, paragraph: &ParagraphViewModel) -> fmt::Result {
        for segment in &paragraph.segments {
            match (segment.kind, self.options.enable_color) {
                (SegmentKind::Plain, _) => write!(f, "{}", segment.text)?,
                (SegmentKind::Highlight, true) => {
                    let palette = Palette::for_label(segment.error_type.as_deref().unwrap_or(""));
                    write!(f, "{}", palette.paint_span(&segment.text))?
                }
                (SegmentKind::Highlight, false) => write!(f, "[{}]", segment.text)?,
            }
        }
        writeln!(f)
    }

    fn render_highlights(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        if data.highlights.is_empty() {
            return Ok(());
        }

        let id_width = data
            .highlights
            .iter()
            .map(|h| h.unique_id.chars().count())
            .max()
            .unwrap_or(0);
        let type_width = data
            .highlights
            .iter()
            .map(|h| h.error_type.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f)?;
        writeln!(f, "Highlights:")?;
        for highlight in &data.highlights {
            let quoted = format!("\"{}\"", single_line(&highlight.quoted_text));
            if self.options.enable_color {
                let label = format!("{:<type_width$}", highlight.error_type);
                writeln!(
                    f,
                    "  {:<id_width$}  {}  {}",
                    highlight.unique_id,
                    Palette::for_label(&highlight.error_type).paint(&label),
                    quoted
                )?;
            } else {
                writeln!(
                    f,
                    "  {:<id_width$}  {:<type_width$}  {}",
                    highlight.unique_id, highlight.error_type, quoted
                )?;
            }
        }
        Ok(())
    }

    fn render_hidden(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let lines = [
            ("Hidden by overlap", &data.discarded),
            ("Unusable offsets", &data.rejected),
            ("Question text differs for", &data.conflicts),
        ];

        for (label, ids) in lines {
            if ids.is_empty() {
                continue;
            }
            let line = format!("{}: {}", label, ids.join(", "));
            if self.options.enable_color {
                writeln!(f, "{}", line.dimmed())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for QuestionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;

        for paragraph in &self.data.paragraphs {
            writeln!(f)?;
            self.render_paragraph(f, paragraph)?;
        }

        self.render_highlights(f)?;
        self.render_hidden(f)?;

        if let Some(detail) = &self.data.selected {
            writeln!(f)?;
            write!(f, "{}", AnnotationDetailView::new(detail, self.options))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Annotation Detail View
// --------------------------------------------------------

pub struct AnnotationDetailView<'a> {
    data: &'a AnnotationDetailViewModel,
    options: DisplayOptions,
}

impl<'a> AnnotationDetailView<'a> {
    pub fn new(data: &'a AnnotationDetailViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    /// Label/value rows in display order; optional fields only when present.
    pub fn rows(data: &AnnotationDetailViewModel) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Type", data.error_type.clone()),
            ("Annotator", data.annotator_id.clone()),
            ("Text", format!("\"{}\"", data.quoted_text)),
        ];
        if let Some(explanation) = &data.explanation {
            rows.push(("Explanation", explanation.clone()));
        }
        if let Some(criticality) = &data.criticality {
            rows.push(("Criticality", criticality.clone()));
        }
        rows.push(("ID", data.record_id.clone()));
        if let Some(suggestion) = &data.suggestion {
            rows.push(("Suggestion", suggestion.clone()));
        }
        rows
    }
}

impl<'a> fmt::Display for AnnotationDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let title = format!("── {} ──", self.data.unique_id);
        if self.options.enable_color {
            writeln!(f, "{}", title.bold())?;
        } else {
            writeln!(f, "{}", title)?;
        }

        for (label, value) in Self::rows(self.data) {
            let label = format!("{}:", label);
            if self.options.enable_color && label == "Type:" {
                let palette = Palette::for_label(&value);
                writeln!(f, "  {:<13}{}", label, palette.paint(&value))?;
            } else {
                writeln!(f, "  {:<13}{}", label, value)?;
            }
        }

        if !self.data.highlighted {
            writeln!(f, "  (not highlighted: overlapped or out of range)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{HighlightEntryViewModel, SegmentViewModel};

    fn plain(text: &str) -> SegmentViewModel {
        SegmentViewModel {
            kind: SegmentKind::Plain,
            text: text.to_string(),
            unique_id: None,
            error_type: None,
        }
    }

    fn highlight(text: &str, unique_id: &str, error_type: &str) -> SegmentViewModel {
        SegmentViewModel {
            kind: SegmentKind::Highlight,
            text: text.to_string(),
            unique_id: Some(unique_id.to_string()),
            error_type: Some(error_type.to_string()),
        }
    }

    fn detail() -> AnnotationDetailViewModel {
        AnnotationDetailViewModel {
            unique_id: "annotator_c-1".to_string(),
            record_id: "1".to_string(),
            annotator_id: "annotator_c".to_string(),
            error_type: "Cultural Error".to_string(),
            quoted_text: "Sushi".to_string(),
            start: 9,
            end: 14,
            explanation: Some("Not a Christmas Eve dish.".to_string()),
            criticality: None,
            suggestion: Some("Würstchen".to_string()),
            highlighted: true,
        }
    }

    fn question() -> QuestionViewModel {
        QuestionViewModel {
            id: "de-003".to_string(),
            group: "de".to_string(),
            question: "Wie feiert man Weihnachten?".to_string(),
            answer: "Man isst Sushi.".to_string(),
            annotation_count: 2,
            annotator_count: 1,
            annotators: vec!["annotator_c".to_string()],
            conflicts: vec![],
            paragraphs: vec![ParagraphViewModel {
                index: 0,
                start: 0,
                end: 15,
                segments: vec![
                    plain("Man isst "),
                    highlight("Sushi", "annotator_c-1", "Cultural Error"),
                    plain("."),
                ],
            }],
            highlights: vec![HighlightEntryViewModel {
                unique_id: "annotator_c-1".to_string(),
                error_type: "Cultural Error".to_string(),
                annotator_id: "annotator_c".to_string(),
                quoted_text: "Sushi".to_string(),
            }],
            discarded: vec!["annotator_c-2".to_string()],
            rejected: vec![],
            selected: None,
            options: DisplayOptions::default(),
        }
    }

    #[test]
    fn test_plain_question_view() {
        let data = question();
        let text = QuestionView::new(&data, DisplayOptions::default()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[de] de-003");
        assert_eq!(lines[1], "Wie feiert man Weihnachten?");
        assert_eq!(lines[2], "Err: 2  Ppl: 1  annotator_c");
        assert_eq!(lines[4], "Man isst [Sushi].");
        assert_eq!(lines[7], "  annotator_c-1  Cultural Error  \"Sushi\"");
        assert_eq!(lines[8], "Hidden by overlap: annotator_c-2");
    }

    #[test]
    fn test_detail_rows_skip_missing_fields() {
        let rows = AnnotationDetailView::rows(&detail());
        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Type", "Annotator", "Text", "Explanation", "ID", "Suggestion"]
        );
    }

    #[test]
    fn test_selected_detail_is_appended() {
        let mut data = question();
        data.selected = Some(detail());

        let text = QuestionView::new(&data, DisplayOptions::default()).to_string();
        assert!(text.contains("── annotator_c-1 ──"));
        assert!(text.contains("  Suggestion:  Würstchen"));
        assert!(!text.contains("not highlighted"));
    }
}
