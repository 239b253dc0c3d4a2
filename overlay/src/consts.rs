//! Shared constants for the overlay crate.

// ── Scene graph node names ──────────────────────────────────────

/// Interactive hotspot that opens the benefits site.
pub const NODE_MORE: &str = "more";

/// Interactive hotspot that closes the overlay.
pub const NODE_CLOSE: &str = "close";

/// Sprite node holding the main celebration artwork.
pub const NODE_CONTENT: &str = "content";

/// Sprite node behind the call-to-action label.
pub const NODE_BUTTON_BG: &str = "button_bg";

/// Text node carrying the call-to-action label.
pub const NODE_BUTTON_TEXT: &str = "button_text";

// ── Assets ──────────────────────────────────────────────────────

/// Directory of the authored scene. The trailing space is part of the name.
pub const SCENE_DIR: &str = "./Purchase_Success /";

/// Scene description file inside [`SCENE_DIR`].
pub const SCENE_FILE: &str = "content.json";

/// Static artwork used by the degraded view, relative to [`SCENE_DIR`].
pub const DEGRADED_BACKGROUND_FILE: &str = "downgrade/content.png";

// ── Host element ids ────────────────────────────────────────────

pub const CONTAINER_ID: &str = "effectsContainer";
pub const STATUS_ID: &str = "loadingText";
pub const DEBUG_OVERLAY_ID: &str = "debugOverlay";
pub const DEBUG_INFO_ID: &str = "debugInfo";

// ── Navigation ──────────────────────────────────────────────────

/// Destination of the "more" action on both surfaces.
pub const MORE_URL: &str = "https://www.shuyouyinli.com/";

/// Window features for external navigation: no opener, no referrer.
pub const EXTERNAL_WINDOW_FEATURES: &str = "noopener,noreferrer";

// ── Timing ──────────────────────────────────────────────────────

/// How long error and degrade notices stay visible.
pub const STATUS_HIDE_MS: u64 = 3_000;

/// How long the diagnostic overlay stays visible.
pub const DEBUG_HIDE_MS: u64 = 8_000;

// ── User-facing text ────────────────────────────────────────────

pub const MSG_DEGRADED: &str = "已切换到静态模式，交互功能依然可用";
pub const MSG_NAVIGATION_FAILED: &str = "跳转失败，请手动访问 www.shuyouyinli.com";
pub const LABEL_MORE: &str = "查看更多权益";
pub const LABEL_CLOSE: &str = "关闭";
pub const CLOSED_MARK: &str = "✓";
pub const CLOSED_TITLE: &str = "动画已关闭";
pub const CLOSED_SUBTITLE: &str = "感谢您的体验";
pub const LABEL_REPLAY: &str = "重新播放动画";

/// Loading notice for a scenario, e.g. `正在加载VIP场景动画...`.
#[must_use]
pub fn loading_message(display_name: &str) -> String {
    format!("正在加载{display_name}场景动画...")
}
