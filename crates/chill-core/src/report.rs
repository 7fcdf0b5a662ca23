//! Rendered break outcomes.

use serde::Serialize;

/// Point-in-time reading of both gauges, rounded for logs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeSnapshot {
    pub stress_level: f64,
    pub boss_alert_level: u8,
}

/// Outcome of one executed break routine.
///
/// Carries the report text parts plus before/after snapshots so the caller
/// can log observability data without re-reading the engine.
#[derive(Debug, Clone)]
pub struct BreakReport {
    pub tool: &'static str,
    pub headline: &'static str,
    pub detail_lines: Vec<String>,
    pub boss_noticed: bool,
    /// Stress rounded to the nearest integer for the report text.
    pub stress_level: u8,
    pub boss_alert_level: u8,
    pub before: GaugeSnapshot,
    pub after: GaugeSnapshot,
}

impl BreakReport {
    /// Round a raw stress value the way the report text displays it.
    pub fn stress_display(value: f64) -> u8 {
        (value + 0.5).floor() as u8
    }

    /// Render the protocol text.
    ///
    /// The format is stable for automated checks: a delimiter-separated
    /// summary line, then `Stress Level: <n>` and `Boss Alert Level: <n>`.
    /// Colons inside summary parts are sanitized so the rendered text
    /// contains exactly three `:` characters.
    pub fn render(&self) -> String {
        let mut summary_parts: Vec<String> = Vec::with_capacity(self.detail_lines.len() + 2);
        summary_parts.push(self.headline.to_string());
        summary_parts.extend(self.detail_lines.iter().cloned());
        summary_parts.push(self.alert_note());

        let summary = summary_parts
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.replace(':', " -"))
            .collect::<Vec<_>>()
            .join(" | ");

        format!(
            "Break Summary: {}\nStress Level: {}\nBoss Alert Level: {}",
            summary, self.stress_level, self.boss_alert_level
        )
    }

    fn alert_note(&self) -> String {
        if self.boss_noticed {
            "Boss Alert raised ⚠️ the boss just clocked this break".to_string()
        } else if self.boss_alert_level == 0 {
            "Boss Alert clear ✅ the alert meter is resting at 0".to_string()
        } else {
            format!(
                "Boss Alert steady 🟡 holding at level {}",
                self.boss_alert_level
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(noticed: bool, alert: u8) -> BreakReport {
        BreakReport {
            tool: "take_a_break",
            headline: "Stretched circuits and hydrated.",
            detail_lines: vec!["Vibe Check: 🧘 mini mindfulness session logged.".to_string()],
            boss_noticed: noticed,
            stress_level: 27,
            boss_alert_level: alert,
            before: GaugeSnapshot {
                stress_level: 35.0,
                boss_alert_level: alert,
            },
            after: GaugeSnapshot {
                stress_level: 27.0,
                boss_alert_level: alert,
            },
        }
    }

    #[test]
    fn test_stress_display_rounds_half_up() {
        assert_eq!(BreakReport::stress_display(11.5), 12);
        assert_eq!(BreakReport::stress_display(11.49), 11);
        assert_eq!(BreakReport::stress_display(0.0), 0);
        assert_eq!(BreakReport::stress_display(100.0), 100);
    }

    #[test]
    fn test_render_has_three_lines() {
        let text = sample_report(false, 0).render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Break Summary: "));
        assert!(lines[1].starts_with("Stress Level: "));
        assert!(lines[2].starts_with("Boss Alert Level: "));
    }

    #[test]
    fn test_render_sanitizes_colons() {
        // Detail lines carry their own labels with colons; after rendering
        // only the three stable label lines may contain one.
        let text = sample_report(false, 0).render();
        assert_eq!(text.matches(':').count(), 3);
    }

    #[test]
    fn test_numeric_lines_parse() {
        let text = sample_report(false, 2).render();
        let stress: u8 = text
            .lines()
            .find_map(|line| line.strip_prefix("Stress Level: "))
            .and_then(|value| value.parse().ok())
            .expect("stress line present and numeric");
        let alert: u8 = text
            .lines()
            .find_map(|line| line.strip_prefix("Boss Alert Level: "))
            .and_then(|value| value.parse().ok())
            .expect("alert line present and numeric");

        assert_eq!(stress, 27);
        assert_eq!(alert, 2);
    }

    #[test]
    fn test_alert_note_wording() {
        assert!(sample_report(true, 3).render().contains("Boss Alert raised"));
        assert!(sample_report(false, 0).render().contains("Boss Alert clear"));
        assert!(sample_report(false, 2)
            .render()
            .contains("holding at level 2"));
    }
}
