//! Icon glyph component for Bubble Tea applications.
//!
//! A stateless wrapper that renders a glyph through a lipgloss style. The
//! glyph is either a literal string or a render callback, and an optional
//! label names the icon for assistive surfaces (help lines, screen-reader
//! bridges).
//!
//! # Basic Usage
//!
//! ```rust
//! use glimmer_widgets::icon::{new, with_glyph, with_label, CHECK};
//!
//! let done = new(&[with_glyph(CHECK.clone()), with_label("done")]);
//! assert_eq!(done.label(), Some("done"));
//! assert!(!done.view().is_empty());
//! ```
//!
//! # Render Callbacks
//!
//! ```rust
//! use glimmer_widgets::icon::{new, with_glyph, Glyph};
//! use std::sync::Arc;
//!
//! let spinner_frame = new(&[with_glyph(Glyph::Render(Arc::new(|| "◐".to_string())))]);
//! let view = spinner_frame.view();
//! assert!(view.contains('◐'));
//! ```

use lipgloss_extras::lipgloss::Style;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// The drawable content of an icon: a literal string or a render callback.
#[derive(Clone)]
pub enum Glyph {
    /// A fixed glyph string.
    Literal(String),
    /// A callback producing the glyph at render time.
    Render(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Glyph {
    fn render(&self) -> String {
        match self {
            Glyph::Literal(s) => s.clone(),
            Glyph::Render(f) => f(),
        }
    }
}

/// A check mark.
pub static CHECK: Lazy<Glyph> = Lazy::new(|| Glyph::Literal("✓".to_string()));
/// A cross / failure mark.
pub static CROSS: Lazy<Glyph> = Lazy::new(|| Glyph::Literal("✗".to_string()));
/// An information marker.
pub static INFO: Lazy<Glyph> = Lazy::new(|| Glyph::Literal("ℹ".to_string()));
/// A warning marker.
pub static WARNING: Lazy<Glyph> = Lazy::new(|| Glyph::Literal("⚠".to_string()));
/// A plain bullet.
pub static DOT: Lazy<Glyph> = Lazy::new(|| Glyph::Literal("•".to_string()));

/// Configuration options for the icon.
pub enum IconOption {
    /// Sets the glyph.
    WithGlyph(Glyph),
    /// Sets the lipgloss style the glyph renders through.
    WithStyle(Style),
    /// Sets the label naming the icon.
    WithLabel(String),
}

impl IconOption {
    fn apply(&self, m: &mut Model) {
        match self {
            IconOption::WithGlyph(glyph) => m.glyph = glyph.clone(),
            IconOption::WithStyle(style) => m.style = style.clone(),
            IconOption::WithLabel(label) => m.label = Some(label.clone()),
        }
    }
}

/// Sets the glyph.
pub fn with_glyph(glyph: Glyph) -> IconOption {
    IconOption::WithGlyph(glyph)
}

/// Sets the lipgloss style the glyph renders through.
pub fn with_style(style: Style) -> IconOption {
    IconOption::WithStyle(style)
}

/// Sets the label naming the icon.
pub fn with_label(label: &str) -> IconOption {
    IconOption::WithLabel(label.to_string())
}

/// The icon model. Pure passthrough: no state, no messages.
#[derive(Clone)]
pub struct Model {
    /// The drawable content.
    pub glyph: Glyph,
    /// Style applied to the rendered glyph.
    pub style: Style,
    label: Option<String>,
}

/// Creates a new icon. Defaults to a plain bullet with no style or label.
pub fn new(opts: &[IconOption]) -> Model {
    let mut m = Model {
        glyph: DOT.clone(),
        style: Style::new(),
        label: None,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// The label naming the icon, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Renders the glyph through the configured style.
    pub fn view(&self) -> String {
        self.style.render(&self.glyph.render())
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
