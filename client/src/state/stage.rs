//! Stage state: what the page shows around the animation engine.
//!
//! DESIGN
//! ======
//! The core decides, this state records. [`crate::host::SignalHost`] writes
//! here whenever the controller asks the host for something, and components
//! render from it. Keeping it a plain struct behind one `RwSignal` means the
//! presentation rules below are testable without a browser.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use overlay::ScenarioId;
use overlay::degraded::{Arrangement, DegradedLayout};
use overlay::host::{ClosedView, StatusTone};
use overlay::session::DebugReport;

/// What occupies the stage above the engine mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Surface {
    /// Nothing drawn over the engine (loading, playing, or cleared).
    #[default]
    Engine,
    /// Static fallback artwork with buttons.
    Degraded(DegradedLayout),
    /// Terminal "closed" card.
    Closed(ClosedView),
}

/// One visible status-line message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageState {
    pub surface: Surface,
    pub status: Option<StatusLine>,
    pub debug: Option<DebugReport>,
    pub active_scenario: ScenarioId,
}

impl StageState {
    #[must_use]
    pub fn new(active_scenario: ScenarioId) -> Self {
        Self { active_scenario, ..Self::default() }
    }
}

/// CSS class for a status tone.
pub fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Info => "status status-info",
        StatusTone::Warning => "status status-warning",
        StatusTone::Error => "status status-error",
    }
}

/// CSS class for the degraded view's button row.
pub fn arrangement_class(arrangement: Arrangement) -> &'static str {
    match arrangement {
        Arrangement::Centered => "degraded degraded-centered",
        Arrangement::SpaceBetween => "degraded degraded-split",
    }
}

/// `background-image` declaration for the degraded artwork.
pub fn background_style(url: &str) -> String {
    format!("background-image: url('{}')", url.replace('\'', "%27"))
}

fn found(yes: bool) -> String {
    if yes { "✅找到".to_owned() } else { "❌未找到".to_owned() }
}

/// Labelled rows of the diagnostic overlay.
pub fn debug_rows(report: &DebugReport) -> Vec<(&'static str, String)> {
    vec![
        ("🎭 当前场景", report.scenario.clone()),
        ("🖼️ Content图片", report.content_url.clone()),
        ("🔲 Button_bg图片", report.button_bg_url.clone()),
        ("📝 Button_text文本", report.button_label.clone()),
        ("🟢 More按钮", found(report.more_found)),
        ("🔴 Close按钮", found(report.close_found)),
        ("📍 交互元素数", report.interactive_items.to_string()),
        ("🎮 播放器交互", if report.engine_interactive { "✅启用" } else { "❌禁用" }.to_owned()),
    ]
}

/// Button label for a scenario in the chrome bar.
pub fn scenario_label(id: &ScenarioId, display_name: &str) -> String {
    if id.is_default() { format!("{display_name}场景") } else { format!("{display_name} 场景") }
}
