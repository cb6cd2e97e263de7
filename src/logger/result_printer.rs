use terminal_size::{terminal_size, Width};
use crate::config::constants::DEMO_NOTICE;
use crate::enums::category_strength::CategoryStrength;
use crate::enums::result_source::ResultSource;
use crate::enums::tier::Tier;
use crate::services::score_classifier::ScoreClassifier;
use crate::structs::result_view::{ResultView, RoadmapView};

const DEFAULT_WIDTH: usize = 72;
const MAX_WIDTH: usize = 100;

/// Renders result screens as terminal text.
pub struct ResultPrinter {
    color: bool,
    width: usize,
}

impl ResultPrinter {

    pub fn new(color: bool) -> Self {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_WIDTH)
            .clamp(40, MAX_WIDTH);
        Self::with_width(color, width)
    }

    pub fn with_width(color: bool, width: usize) -> Self {
        Self { color, width }
    }

    pub fn print_view(&self, view: &ResultView) {
        println!("{}", self.render_view(view));
    }

    pub fn render_view(&self, view: &ResultView) -> String {
        let rule = "━".repeat(self.width);
        let mut out = Vec::new();

        if view.source == ResultSource::Demo {
            out.push(self.paint("1;33", &format!("⚠️  {}", DEMO_NOTICE)));
            out.push(String::new());
        }

        out.push(self.paint("1", &format!("📦 {}", view.title)));
        out.push(rule.clone());

        // Score card
        let tier_color = Self::tier_ansi(view.tier.tier);
        let mut badge_line = format!("🏅 {}", view.tier.badge);
        if let Some(verdict) = &view.verdict {
            badge_line.push_str(&format!("   [{}]", verdict.to_uppercase()));
        }
        out.push(badge_line);
        out.push(format!(
            "{} / 100  {}",
            self.paint(&format!("1;{}", tier_color), &view.score.to_string()),
            self.paint(tier_color, &format!("({})", view.tier.label)),
        ));
        out.push(self.paint(tier_color, &Self::bar(view.score as f64 / 100.0, self.width.saturating_sub(2))));
        out.push(Self::scale_legend());

        // Breakdown
        if let Some(indicators) = &view.breakdown {
            out.push(String::new());
            out.push(self.paint("1", "🧠 Signal Breakdown"));
            let label_width = indicators.iter().map(|i| i.category.chars().count()).max().unwrap_or(0);
            for indicator in indicators {
                let marks = format!("{:>3} / {:<2}", indicator.points, indicator.max);
                out.push(format!(
                    "  {:<width$}  {}  {}",
                    indicator.category,
                    self.paint(Self::strength_ansi(indicator.strength), &marks),
                    self.paint(Self::strength_ansi(indicator.strength), &Self::bar(indicator.fill(), 10)),
                    width = label_width,
                ));
            }
        }

        // Summary
        out.push(String::new());
        out.push(self.paint("1;34", "📝 Summary"));
        for line in Self::wrap(&view.summary, self.width.saturating_sub(2)) {
            out.push(format!("  {}", line));
        }

        // Roadmap
        out.push(String::new());
        out.push(self.paint("1;32", "🗺️  Personalized Roadmap"));
        match &view.roadmap {
            RoadmapView::Steps { steps } => {
                for (i, step) in steps.iter().enumerate() {
                    out.push(format!("  [ ] {}. {}", i + 1, step));
                }
            }
            RoadmapView::NothingToImprove { message } => {
                out.push(format!("  {}", self.paint("3", message)));
            }
        }

        out.push(rule);
        out.push(format!("📄 Report: {}", view.report_url));
        out.join("\n")
    }

    fn scale_legend() -> String {
        Tier::ALL
            .iter()
            .map(|tier| format!("{} ({})", ScoreClassifier::presentation(*tier).label, tier.score_band()))
            .collect::<Vec<_>>()
            .join("  ·  ")
    }

    fn bar(fill: f64, width: usize) -> String {
        let filled = ((fill.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }

    fn wrap(text: &str, width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn tier_ansi(tier: Tier) -> &'static str {
        match ScoreClassifier::presentation(tier).color {
            "purple" => "35",
            "blue" => "34",
            _ => "33",
        }
    }

    fn strength_ansi(strength: CategoryStrength) -> &'static str {
        match strength.color_token() {
            "green" => "32",
            "yellow" => "33",
            _ => "31",
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}
