use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{counted, fit, single_line};
use crate::presentation::presenters::EMPTY_STATE_MESSAGE;
use crate::presentation::view_models::{DisplayOptions, QuestionListViewModel};

const MIN_QUESTION_WIDTH: usize = 12;

pub struct QuestionListView<'a> {
    data: &'a QuestionListViewModel,
    options: DisplayOptions,
}

impl<'a> QuestionListView<'a> {
    pub fn new(data: &'a QuestionListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn id_width(&self) -> usize {
        self.data
            .entries()
            .map(|e| e.id.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn render_skipped(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let skipped = &self.data.skipped;
        if skipped.is_empty() {
            return Ok(());
        }

        let mut parts = Vec::new();
        if skipped.entries > 0 {
            parts.push(counted(skipped.entries, "malformed entry", "malformed entries"));
        }
        if skipped.records > 0 {
            parts.push(counted(skipped.records, "malformed record", "malformed records"));
        }
        if skipped.rejected_entries > 0 {
            parts.push(counted(
                skipped.rejected_entries,
                "conflicting entry",
                "conflicting entries",
            ));
        }

        let line = format!("Skipped {}", parts.join(", "));
        writeln!(f)?;
        if self.options.enable_color {
            writeln!(f, "{}", line.dimmed())
        } else {
            writeln!(f, "{}", line)
        }
    }
}

impl<'a> fmt::Display for QuestionListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.is_empty() {
            return writeln!(f, "{}", EMPTY_STATE_MESSAGE);
        }

        let id_width = self.id_width();

        for group in &self.data.groups {
            let header = format!(
                "{}  {} · Err {}",
                group.key,
                counted(group.questions.len(), "question", "questions"),
                group.annotation_count
            );
            if self.options.enable_color {
                writeln!(f, "{}", header.bold())?;
            } else {
                writeln!(f, "{}", header)?;
            }

            for entry in &group.questions {
                let counts = format!(
                    "Err: {}  Ppl: {}",
                    entry.annotation_count, entry.annotator_count
                );
                let marker = if entry.has_conflicts { " !" } else { "" };

                // "  <id>  <question>  <counts><marker>"
                let fixed = 2 + id_width + 2 + 2 + counts.len() + marker.len();
                let question_width = self
                    .options
                    .width
                    .map(|w| w.saturating_sub(fixed).max(MIN_QUESTION_WIDTH));
                let question = fit(&single_line(&entry.question), question_width);

                if self.options.enable_color {
                    writeln!(
                        f,
                        "  {:<id_width$}  {}  {}{}",
                        entry.id.cyan(),
                        question,
                        counts.dimmed(),
                        marker.yellow(),
                    )?;
                } else {
                    writeln!(
                        f,
                        "  {:<id_width$}  {}  {}{}",
                        entry.id, question, counts, marker,
                    )?;
                }
            }
        }

        self.render_skipped(f)
    }
}
