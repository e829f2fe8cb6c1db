//! Output formatting for progress reports.
//!
//! Formatters return strings so callers (and tests) decide where they go.

use clap::ValueEnum;
use seatrack_lib::output::format_with_separators;
use seatrack_lib::{format_timestamp, ProgressRenderMode, RouteProgress, SegmentProgress};

use crate::terminal::{progress_bar, ColorPalette};

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Multi-line human readable report.
    #[default]
    Text,
    /// Single status line.
    Compact,
    /// Pretty-printed JSON.
    Json,
    /// Colored report with leg tags and a progress bar (`progress` only;
    /// other commands fall back to text).
    Enhanced,
}

impl OutputFormat {
    /// Render a progress report in this format.
    ///
    /// `palette` only affects [`OutputFormat::Enhanced`].
    pub fn render_progress(
        self,
        progress: &RouteProgress,
        palette: ColorPalette,
    ) -> serde_json::Result<String> {
        Ok(match self {
            OutputFormat::Text => progress.render(ProgressRenderMode::PlainText),
            OutputFormat::Compact => progress.render(ProgressRenderMode::Compact),
            OutputFormat::Json => to_json(progress)?,
            OutputFormat::Enhanced => EnhancedRenderer::new(palette).render(progress),
        })
    }
}

/// Pretty JSON followed by a newline.
pub fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Renderer for the enhanced format with colored leg tags.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn render(&self, progress: &RouteProgress) -> String {
        let p = &self.palette;
        let mut out = String::new();

        out.push_str(&format!(
            "{}{}{} {}{}{} {:.0}%\n",
            p.white_bold,
            progress.current_location,
            p.reset,
            p.green,
            progress_bar(progress.percent_complete, 20),
            p.reset,
            progress.percent_complete
        ));

        for seg in &progress.segments {
            let (tag_color, tag_text) = self.segment_tag(seg, progress);
            out.push_str(&format!(
                "{}{}{} {} {}→{} {} {}({} nm, {} d){}\n",
                tag_color,
                tag_text,
                p.reset,
                seg.from,
                p.gray,
                p.reset,
                seg.to,
                p.gray,
                format_with_separators(seg.distance),
                seg.days,
                p.reset
            ));
        }

        out.push_str(&format!(
            "{}───────────────────────────────────────{}\n",
            p.gray, p.reset
        ));
        out.push_str(&format!(
            "  {}Total:{}     {} nm, arriving {}\n",
            p.cyan,
            p.reset,
            format_with_separators(progress.total_distance),
            format_timestamp(progress.total_eta)
        ));
        let eta = progress
            .remaining_eta
            .map(format_timestamp)
            .unwrap_or_else(|| "arrived".to_string());
        out.push_str(&format!(
            "  {}Remaining:{} {} nm, ETA {}\n",
            p.cyan,
            p.reset,
            format_with_separators(progress.remaining_distance),
            eta
        ));
        out
    }

    fn segment_tag(&self, seg: &SegmentProgress, progress: &RouteProgress) -> (&str, &str) {
        let p = &self.palette;
        if seg.completed {
            (p.tag_done, " DONE ")
        } else if progress.current_index == Some(seg.index) {
            (p.tag_sailing, " SAIL ")
        } else {
            (p.tag_ahead, " NEXT ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use seatrack_lib::{EtaEngine, Route};

    fn progress_at(location: &str) -> RouteProgress {
        let route = Route::new(["Mumbai", "Singapore", "Colombo"]).unwrap();
        let t = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        EtaEngine::default()
            .compute_progress_at(&route, location, t, t)
            .unwrap()
    }

    #[test]
    fn enhanced_tags_each_leg() {
        let renderer = EnhancedRenderer::new(ColorPalette::plain());
        let text = renderer.render(&progress_at("Singapore"));

        assert!(text.starts_with("Singapore [##########----------] 50%"));
        assert!(text.contains(" DONE  Mumbai → Singapore (1,800 nm, 4.2 d)"));
        assert!(text.contains(" SAIL  Singapore → Colombo (1,200 nm, 2.8 d)"));
    }

    #[test]
    fn enhanced_reports_arrival() {
        let renderer = EnhancedRenderer::new(ColorPalette::plain());
        let text = renderer.render(&progress_at("Colombo"));
        assert!(text.contains("ETA arrived"));
        assert!(!text.contains(" SAIL "));
    }

    #[test]
    fn json_output_ends_with_newline() {
        let json = OutputFormat::Json
            .render_progress(&progress_at("Mumbai"), ColorPalette::plain())
            .unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.contains("\"percent_complete\": 0.0"));
    }

    #[test]
    fn enhanced_uses_the_given_palette() {
        let progress = progress_at("Singapore");
        let plain = OutputFormat::Enhanced
            .render_progress(&progress, ColorPalette::plain())
            .unwrap();
        let colored = OutputFormat::Enhanced
            .render_progress(&progress, ColorPalette::colored())
            .unwrap();

        assert!(!plain.contains("\x1b["));
        assert!(colored.contains("\x1b[1;7;33m SAIL \x1b[0m"));
    }
}
