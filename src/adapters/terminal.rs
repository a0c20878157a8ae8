use crate::core::render::{ScheduleItem, View};
use crate::domain::ports::Surface;
use chrono::Datelike;
use std::fmt::Write as _;
use std::io::Write;

/// 將每個畫面以純文字輸出
pub struct TerminalSurface<W: Write> {
    out: W,
    year: i32,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            year: chrono::Local::now().year(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn present(&mut self, view: &View) {
        let text = format_view(view, self.year);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

pub fn format_view(view: &View, year: i32) -> String {
    let mut text = String::new();
    let lock = if view.controls_enabled { "" } else { " 🔒" };

    let _ = writeln!(text, "──────── Study Planner ────────");
    let _ = writeln!(
        text,
        "Subject: {} | Preparation days: {} | Target score: {}{}",
        view.fields.subject,
        blank_as_dash(&view.fields.preparation_days),
        blank_as_dash(&view.fields.target_score),
        lock
    );

    if let Some(message) = &view.error {
        let _ = writeln!(text, "❌ {}", message);
    }
    if let Some(message) = &view.placeholder {
        let _ = writeln!(text, "{}", message);
    }
    if let Some(message) = &view.busy {
        let _ = writeln!(text, "⏳ {}", message);
    }
    if let Some(items) = &view.schedule {
        for item in items {
            match item {
                ScheduleItem::Day { heading, topics } => {
                    let _ = writeln!(text, "{}", heading);
                    for (i, topic) in topics.iter().enumerate() {
                        let _ = writeln!(text, "  {}. {}", i + 1, topic);
                    }
                }
                ScheduleItem::Empty(message) => {
                    let _ = writeln!(text, "{}", message);
                }
            }
        }
    }

    let _ = writeln!(text, "© {} Study Planner", year);
    text
}

fn blank_as_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
