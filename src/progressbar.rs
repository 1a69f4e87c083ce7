//! Linear progress bar component for Bubble Tea applications.
//!
//! This module maps numeric domain values to normalized visual percentages
//! and composes them into single, dual (primary over secondary) and
//! multi-series bar renderings. The math layer is a set of pure functions
//! over [`Range`] and optional sample values; the widget layer paints the
//! resulting [`BarDescriptor`]s onto a fixed-width track with lipgloss.
//!
//! # Basic Usage
//!
//! ```rust
//! use glimmer_widgets::progressbar::{new, with_value, with_width};
//!
//! // A single bar at 40% of the default 0..100 range.
//! let bar = new(&[with_value(40.0), with_width(30)]);
//! let view = bar.view();
//! assert!(!view.is_empty());
//! ```
//!
//! # Dual Bars
//!
//! A secondary value renders underneath the primary bar, for
//! buffered/played style visuals:
//!
//! ```rust
//! use glimmer_widgets::progressbar::{new, with_secondary_value, with_value};
//!
//! let download = new(&[with_value(35.0), with_secondary_value(70.0)]);
//! let bars = download.bars();
//! assert_eq!(bars.len(), 2); // secondary first, primary on top
//! ```
//!
//! # Multi-Series Bars
//!
//! Multiple independently colored segments render as overlaid bars. The
//! first entry of the input order paints last, i.e. on top:
//!
//! ```rust
//! use glimmer_widgets::progressbar::{new, with_multi_values, SeriesEntry};
//!
//! let usage = new(&[with_multi_values(vec![
//!     SeriesEntry::new(30.0, "#FF7575"),
//!     SeriesEntry::new(70.0, "#6161FF"),
//! ])]);
//! assert_eq!(usage.label_percent(), 30.0); // label follows the first entry
//! ```

use lipgloss_extras::lipgloss::{self, Color, Style};

const DEFAULT_WIDTH: i32 = 40;

const PRIMARY_COLOR: &str = "#7571F9";
const POSITIVE_COLOR: &str = "#00C875";
const NEGATIVE_COLOR: &str = "#E2445C";
const NEUTRAL_COLOR: &str = "#A8A8A8";

/// The numeric domain a progress value is normalized against.
///
/// `max` is conceptually greater than `min`; a degenerate range with
/// `max == min` is tolerated and normalizes every value to 0 rather than
/// dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// The starting value of the range.
    pub min: f64,
    /// The ending value of the range.
    pub max: f64,
}

impl Range {
    /// Creates a range from `min` to `max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

/// Normalizes a sample value to a percentage of the range.
///
/// A missing sample (`None`, meaning "no progress yet") maps to 0 before any
/// arithmetic runs, which keeps it distinguishable from an explicit 0 value.
/// A degenerate range (`max == min`) also yields 0 rather than NaN or
/// infinity. The result is NOT clamped to `[0, 100]`: values outside the
/// range pass through arithmetically, and visual-overflow handling belongs
/// to the rendering layer.
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::progressbar::{percentage, Range};
///
/// let range = Range::default(); // 0..100
/// assert_eq!(percentage(None, range), 0.0);
/// assert_eq!(percentage(Some(0.0), range), 0.0);
/// assert_eq!(percentage(Some(100.0), range), 100.0);
///
/// // Out-of-range values pass through unclamped.
/// assert_eq!(percentage(Some(150.0), range), 150.0);
///
/// // Degenerate ranges are defined, not an error.
/// assert_eq!(percentage(Some(7.0), Range::new(3.0, 3.0)), 0.0);
/// ```
pub fn percentage(value: Option<f64>, range: Range) -> f64 {
    let value = match value {
        Some(v) => v,
        None => return 0.0,
    };
    if range.max == range.min {
        return 0.0;
    }
    (value - range.min) / (range.max - range.min) * 100.0
}

/// Visual treatment of a bar's filled portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    /// The standard fill color. This is the default.
    #[default]
    Primary,
    /// Fill color signalling success.
    Positive,
    /// Fill color signalling failure.
    Negative,
    /// Flat fill with no semantic color of its own; used for multi-series
    /// segments (which carry their own color) and the neutral secondary bar.
    None,
}

impl std::fmt::Display for BarStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BarStyle::Primary => "primary",
                BarStyle::Positive => "positive",
                BarStyle::Negative => "negative",
                BarStyle::None => "none",
            }
        )
    }
}

/// One segment of a multi-series bar: a value and the color it paints with.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    /// The segment's progress value, normalized against the model's range.
    pub value: f64,
    /// The segment's fill color (hex or named color string).
    pub color: String,
}

impl SeriesEntry {
    /// Creates a series entry from a value and a color.
    pub fn new(value: f64, color: &str) -> Self {
        Self {
            value,
            color: color.to_string(),
        }
    }
}

/// One visual bar, ready for a track renderer.
///
/// Descriptors are produced by [`single_series`] and [`multi_series`] in
/// paint order: later descriptors in a sequence are painted later and
/// therefore show on top wherever bars overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDescriptor {
    /// The bar's progress value; `None` means no progress yet.
    pub value: Option<f64>,
    /// The range the value is normalized against.
    pub range: Range,
    /// The bar's visual treatment.
    pub style: BarStyle,
    /// Explicit fill color, overriding the style's default color.
    pub color: Option<String>,
    /// Whether the host renderer should animate this bar. Carried through
    /// verbatim; this module renders statically.
    pub animated: bool,
}

impl BarDescriptor {
    /// The bar's normalized percentage, per [`percentage`] (unclamped).
    pub fn percent(&self) -> f64 {
        percentage(self.value, self.range)
    }

    fn fill_color(&self) -> &str {
        if let Some(color) = &self.color {
            return color;
        }
        match self.style {
            BarStyle::Primary => PRIMARY_COLOR,
            BarStyle::Positive => POSITIVE_COLOR,
            BarStyle::Negative => NEGATIVE_COLOR,
            BarStyle::None => NEUTRAL_COLOR,
        }
    }
}

/// Composes the two descriptors of a single-series bar.
///
/// The returned order is fixed: the secondary bar comes first (painted
/// underneath) and the primary bar second (painted on top). The secondary
/// bar always renders with the neutral [`BarStyle::None`] treatment
/// regardless of the requested style; only the primary bar carries `style`.
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::progressbar::{single_series, BarStyle, Range};
///
/// let [secondary, primary] =
///     single_series(Some(70.0), Some(30.0), Range::default(), BarStyle::Primary, true);
/// assert_eq!(secondary.value, Some(30.0));
/// assert_eq!(secondary.style, BarStyle::None);
/// assert_eq!(primary.value, Some(70.0));
/// assert_eq!(primary.style, BarStyle::Primary);
/// ```
pub fn single_series(
    value: Option<f64>,
    value_secondary: Option<f64>,
    range: Range,
    style: BarStyle,
    animated: bool,
) -> [BarDescriptor; 2] {
    [
        BarDescriptor {
            value: value_secondary,
            range,
            style: BarStyle::None,
            color: None,
            animated,
        },
        BarDescriptor {
            value,
            range,
            style,
            color: None,
            animated,
        },
    ]
}

/// Composes multi-series descriptors in paint order.
///
/// One descriptor is produced per entry, in REVERSED order relative to the
/// input: the first logical entry ends up last in the returned sequence and
/// therefore paints on top. Every descriptor uses [`BarStyle::None`] with
/// the entry's own color.
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::progressbar::{multi_series, Range, SeriesEntry};
///
/// let entries = vec![
///     SeriesEntry::new(10.0, "#111111"),
///     SeriesEntry::new(20.0, "#222222"),
/// ];
/// let bars = multi_series(&entries, Range::default(), false);
/// assert_eq!(bars[0].value, Some(20.0)); // last logical entry paints first
/// assert_eq!(bars[1].value, Some(10.0)); // first logical entry paints on top
/// ```
pub fn multi_series(entries: &[SeriesEntry], range: Range, animated: bool) -> Vec<BarDescriptor> {
    entries
        .iter()
        .rev()
        .map(|entry| BarDescriptor {
            value: Some(entry.value),
            range,
            style: BarStyle::None,
            color: Some(entry.color.clone()),
            animated,
        })
        .collect()
}

/// What a progress bar displays: one value (with optional secondary) or a
/// series of independently colored segments.
///
/// The two shapes are mutually exclusive by construction; under
/// [`Mode::Multi`] there is no single value, secondary value or style to
/// ignore.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// A primary value with an optional secondary value underneath.
    Single {
        /// The bar's current value; `None` means no progress yet.
        value: Option<f64>,
        /// The secondary value rendered underneath the primary bar.
        value_secondary: Option<f64>,
        /// Visual treatment of the primary bar.
        style: BarStyle,
    },
    /// Multiple independently colored segments, painted first-on-top.
    Multi {
        /// The segments in logical order.
        entries: Vec<SeriesEntry>,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Single {
            value: None,
            value_secondary: None,
            style: BarStyle::Primary,
        }
    }
}

impl Mode {
    /// Produces this mode's bar descriptors in paint order.
    pub fn descriptors(&self, range: Range, animated: bool) -> Vec<BarDescriptor> {
        match self {
            Mode::Single {
                value,
                value_secondary,
                style,
            } => single_series(*value, *value_secondary, range, *style, animated).to_vec(),
            Mode::Multi { entries } => multi_series(entries, range, animated),
        }
    }

    /// The percentage shown by the optional label.
    ///
    /// Under [`Mode::Multi`] the label follows the FIRST entry of the
    /// logical input order (0 when the series is empty); under
    /// [`Mode::Single`] it follows the primary value. Unclamped, per
    /// [`percentage`].
    pub fn label_percent(&self, range: Range) -> f64 {
        match self {
            Mode::Single { value, .. } => percentage(*value, range),
            Mode::Multi { entries } => {
                percentage(entries.first().map(|entry| entry.value), range)
            }
        }
    }
}

/// Configuration options for the progress bar model.
pub enum ProgressBarOption {
    /// Sets the primary value. Ignored under multi mode.
    WithValue(f64),
    /// Sets the secondary value rendered underneath the primary bar.
    /// Ignored under multi mode.
    WithSecondaryValue(f64),
    /// Sets the primary bar's visual treatment. Ignored under multi mode.
    WithStyle(BarStyle),
    /// Switches the bar to multi-series mode with the given segments.
    /// Any single-mode value, secondary value or style is discarded.
    WithMultiValues(Vec<SeriesEntry>),
    /// Sets the range values are normalized against.
    WithRange(f64, f64),
    /// Sets the total width of the bar in characters, including the
    /// percentage label if shown.
    WithWidth(i32),
    /// Customizes the characters used for filled and empty track cells.
    WithFillCharacters(char, char),
    /// Marks the bar as non-animated for host renderers.
    WithoutAnimation,
    /// Shows the numeric percentage label next to the track.
    WithPercentageLabel,
}

impl ProgressBarOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressBarOption::WithValue(v) => {
                if let Mode::Single { value, .. } = &mut m.mode {
                    *value = Some(*v);
                }
            }
            ProgressBarOption::WithSecondaryValue(v) => {
                if let Mode::Single {
                    value_secondary, ..
                } = &mut m.mode
                {
                    *value_secondary = Some(*v);
                }
            }
            ProgressBarOption::WithStyle(s) => {
                if let Mode::Single { style, .. } = &mut m.mode {
                    *style = *s;
                }
            }
            ProgressBarOption::WithMultiValues(entries) => {
                m.mode = Mode::Multi {
                    entries: entries.clone(),
                };
            }
            ProgressBarOption::WithRange(min, max) => {
                m.range = Range::new(*min, *max);
            }
            ProgressBarOption::WithWidth(width) => {
                m.width = *width;
            }
            ProgressBarOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressBarOption::WithoutAnimation => {
                m.animated = false;
            }
            ProgressBarOption::WithPercentageLabel => {
                m.show_percentage = true;
            }
        }
    }
}

/// Sets the primary value. Ignored under multi mode.
pub fn with_value(value: f64) -> ProgressBarOption {
    ProgressBarOption::WithValue(value)
}

/// Sets the secondary value, rendered underneath the primary bar.
/// Ignored under multi mode.
pub fn with_secondary_value(value: f64) -> ProgressBarOption {
    ProgressBarOption::WithSecondaryValue(value)
}

/// Sets the primary bar's visual treatment. Ignored under multi mode.
pub fn with_style(style: BarStyle) -> ProgressBarOption {
    ProgressBarOption::WithStyle(style)
}

/// Switches the bar to multi-series mode.
///
/// The single-mode `value`, `value_secondary` and `style` configuration does
/// not apply in this mode.
pub fn with_multi_values(entries: Vec<SeriesEntry>) -> ProgressBarOption {
    ProgressBarOption::WithMultiValues(entries)
}

/// Sets the range values are normalized against (default 0 to 100).
pub fn with_range(min: f64, max: f64) -> ProgressBarOption {
    ProgressBarOption::WithRange(min, max)
}

/// Sets the total width of the bar in characters.
pub fn with_width(width: i32) -> ProgressBarOption {
    ProgressBarOption::WithWidth(width)
}

/// Customizes the characters for filled and empty track cells
/// (defaults: '█' and '░').
pub fn with_fill_characters(full: char, empty: char) -> ProgressBarOption {
    ProgressBarOption::WithFillCharacters(full, empty)
}

/// Marks the bar as non-animated for host renderers.
pub fn without_animation() -> ProgressBarOption {
    ProgressBarOption::WithoutAnimation
}

/// Shows the numeric percentage label next to the track.
pub fn with_percentage_label() -> ProgressBarOption {
    ProgressBarOption::WithPercentageLabel
}

/// The progress bar model.
///
/// Holds the display mode, the normalization range and the track's visual
/// configuration. The math surface ([`Model::bars`],
/// [`Model::label_percent`]) is pure and unclamped; only [`Model::view`]
/// applies visual clamping, when fitting fill widths to the track.
#[derive(Debug, Clone)]
pub struct Model {
    /// What the bar displays: a single value or a multi-series.
    pub mode: Mode,
    /// The range values are normalized against.
    pub range: Range,
    /// Forwarded on every descriptor for hosts that animate.
    pub animated: bool,
    /// Whether the numeric percentage label is rendered.
    pub show_percentage: bool,
    /// Total width of the bar, including the label if shown.
    pub width: i32,
    /// Character for filled track cells.
    pub full: char,
    /// Character for empty track cells.
    pub empty: char,
    /// Color of the empty portion of the track.
    pub empty_color: String,
    /// Lipgloss style applied to the percentage label.
    pub percentage_style: Style,
}

/// Creates a new progress bar with the given options.
///
/// # Default Configuration
///
/// - **Mode**: single, no value yet, primary style
/// - **Range**: 0 to 100
/// - **Animated**: true
/// - **Label**: hidden
/// - **Width**: 40 characters
/// - **Fill characters**: '█' (filled) and '░' (empty)
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::progressbar::{
///     new, with_percentage_label, with_range, with_style, with_value, BarStyle,
/// };
///
/// let upload = new(&[
///     with_range(0.0, 512.0),
///     with_value(256.0),
///     with_style(BarStyle::Positive),
///     with_percentage_label(),
/// ]);
/// assert_eq!(upload.label_percent(), 50.0);
/// ```
pub fn new(opts: &[ProgressBarOption]) -> Model {
    let mut m = Model {
        mode: Mode::default(),
        range: Range::default(),
        animated: true,
        show_percentage: false,
        width: DEFAULT_WIDTH,
        full: '█',
        empty: '░',
        empty_color: "#606060".to_string(),
        percentage_style: Style::new(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Produces the bar descriptors for the current mode, in paint order.
    ///
    /// Single mode always yields exactly two descriptors (secondary first,
    /// primary on top); multi mode yields one per entry, reversed so the
    /// first logical entry paints on top.
    pub fn bars(&self) -> Vec<BarDescriptor> {
        self.mode.descriptors(self.range, self.animated)
    }

    /// The percentage shown by the label, unclamped.
    pub fn label_percent(&self) -> f64 {
        self.mode.label_percent(self.range)
    }

    /// Renders the bar.
    ///
    /// Descriptors are painted onto the track in sequence order, so later
    /// descriptors overwrite earlier ones on overlapping cells. Fill widths
    /// are clamped to the track at this layer only; the underlying
    /// percentages stay pass-through.
    pub fn view(&self) -> String {
        let percent_view = self.percentage_view();
        let percent_width = lipgloss::width_visible(&percent_view) as i32;
        let track_view = self.track_view(percent_width);

        format!("{}{}", track_view, percent_view)
    }

    fn track_view(&self, text_width: i32) -> String {
        let tw = std::cmp::max(0, self.width - text_width); // track width

        // One fill color per cell; descriptors paint over each other in
        // sequence order, which is what makes the multi-series paint order
        // observable.
        let mut cells: Vec<Option<String>> = vec![None; tw as usize];
        for bar in self.bars() {
            let fw = std::cmp::max(
                0,
                std::cmp::min(tw, ((tw as f64) * bar.percent() / 100.0).round() as i32),
            );
            let color = bar.fill_color().to_string();
            for cell in cells.iter_mut().take(fw as usize) {
                *cell = Some(color.clone());
            }
        }

        let empty_styled = Style::new()
            .foreground(Color::from(self.empty_color.as_str()))
            .render(&self.empty.to_string());

        let mut result = String::new();
        for cell in &cells {
            match cell {
                Some(color) => {
                    let styled = Style::new()
                        .foreground(Color::from(color.as_str()))
                        .render(&self.full.to_string());
                    result.push_str(&styled);
                }
                None => result.push_str(&empty_styled),
            }
        }

        result
    }

    fn percentage_view(&self) -> String {
        if !self.show_percentage {
            return String::new();
        }

        // Display clamping only; the label value itself is pass-through.
        let percent = self.label_percent().clamp(0.0, 100.0);
        let percentage = format!(" {:3.0}%", percent);
        self.percentage_style.render(&percentage)
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss::{self, Color, Style};

    #[test]
    fn test_percentage_none_is_zero_for_all_ranges() {
        assert_eq!(percentage(None, Range::default()), 0.0);
        assert_eq!(percentage(None, Range::new(-5.0, 5.0)), 0.0);
        assert_eq!(percentage(None, Range::new(3.0, 3.0)), 0.0);
    }

    #[test]
    fn test_percentage_endpoints() {
        let range = Range::new(20.0, 220.0);
        assert_eq!(percentage(Some(20.0), range), 0.0);
        assert_eq!(percentage(Some(220.0), range), 100.0);
        assert_eq!(percentage(Some(120.0), range), 50.0);
    }

    #[test]
    fn test_percentage_degenerate_range_never_divides() {
        let range = Range::new(0.0, 0.0);
        assert_eq!(percentage(Some(0.0), range), 0.0);
        assert_eq!(percentage(Some(42.0), range), 0.0);
        assert_eq!(percentage(Some(-42.0), range), 0.0);
    }

    #[test]
    fn test_percentage_is_not_clamped() {
        let range = Range::default();
        assert_eq!(percentage(Some(150.0), range), 150.0);
        assert_eq!(percentage(Some(-50.0), range), -50.0);
    }

    #[test]
    fn test_explicit_zero_is_not_the_null_shortcut() {
        // An explicit 0 goes through the arithmetic; only value == min
        // lands on 0%.
        let range = Range::new(-10.0, 10.0);
        assert_eq!(percentage(Some(0.0), range), 50.0);
        assert_eq!(percentage(None, range), 0.0);
    }

    #[test]
    fn test_single_series_order_and_styles() {
        let [secondary, primary] = single_series(
            Some(70.0),
            Some(30.0),
            Range::default(),
            BarStyle::Primary,
            true,
        );

        assert_eq!(secondary.value, Some(30.0));
        assert_eq!(secondary.style, BarStyle::None);
        assert!(secondary.animated);

        assert_eq!(primary.value, Some(70.0));
        assert_eq!(primary.style, BarStyle::Primary);
        assert!(primary.animated);
    }

    #[test]
    fn test_single_series_secondary_is_neutral_for_any_style() {
        for style in [BarStyle::Positive, BarStyle::Negative, BarStyle::None] {
            let [secondary, primary] =
                single_series(Some(1.0), Some(1.0), Range::default(), style, false);
            assert_eq!(secondary.style, BarStyle::None);
            assert_eq!(primary.style, style);
        }
    }

    #[test]
    fn test_multi_series_reverses_input_order() {
        let entries = vec![
            SeriesEntry::new(10.0, "#111111"),
            SeriesEntry::new(20.0, "#222222"),
        ];
        let bars = multi_series(&entries, Range::default(), true);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].value, Some(20.0));
        assert_eq!(bars[0].color.as_deref(), Some("#222222"));
        assert_eq!(bars[1].value, Some(10.0));
        assert_eq!(bars[1].color.as_deref(), Some("#111111"));
        assert!(bars.iter().all(|b| b.style == BarStyle::None));
    }

    #[test]
    fn test_label_percent_uses_first_logical_entry() {
        let mode = Mode::Multi {
            entries: vec![
                SeriesEntry::new(10.0, "#111111"),
                SeriesEntry::new(20.0, "#222222"),
            ],
        };
        assert_eq!(mode.label_percent(Range::default()), 10.0);
    }

    #[test]
    fn test_label_percent_empty_multi_is_zero() {
        let mode = Mode::Multi { entries: vec![] };
        assert_eq!(mode.label_percent(Range::default()), 0.0);
    }

    #[test]
    fn test_single_mode_options_ignored_under_multi() {
        let bar = new(&[
            with_multi_values(vec![SeriesEntry::new(25.0, "#123456")]),
            with_value(99.0),
            with_secondary_value(98.0),
            with_style(BarStyle::Negative),
        ]);

        match &bar.mode {
            Mode::Multi { entries } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].value, 25.0);
            }
            Mode::Single { .. } => panic!("expected multi mode"),
        }
    }

    #[test]
    fn test_animated_flag_is_forwarded() {
        let on = new(&[with_value(10.0)]);
        assert!(on.bars().iter().all(|b| b.animated));

        let off = new(&[with_value(10.0), without_animation()]);
        assert!(off.bars().iter().all(|b| !b.animated));
    }

    #[test]
    fn test_defaults() {
        let bar = Model::default();
        assert_eq!(bar.range, Range::default());
        assert_eq!(bar.width, DEFAULT_WIDTH);
        assert!(bar.animated);
        assert!(!bar.show_percentage);
        assert_eq!(bar.full, '█');
        assert_eq!(bar.empty, '░');
        assert_eq!(bar.mode, Mode::default());
    }

    #[test]
    fn test_view_fill_counts() {
        let bar = new(&[with_value(50.0), with_width(10)]);
        let clean = lipgloss::strip_ansi(&bar.view());

        assert_eq!(clean.chars().filter(|&c| c == '█').count(), 5);
        assert_eq!(clean.chars().filter(|&c| c == '░').count(), 5);
    }

    #[test]
    fn test_view_clamps_overflow_to_track() {
        let over = new(&[with_value(150.0), with_width(10)]);
        let clean = lipgloss::strip_ansi(&over.view());
        assert_eq!(clean.chars().filter(|&c| c == '█').count(), 10);

        let under = new(&[with_value(-50.0), with_width(10)]);
        let clean = lipgloss::strip_ansi(&under.view());
        assert_eq!(clean.chars().filter(|&c| c == '░').count(), 10);
    }

    #[test]
    fn test_view_no_value_renders_empty_track() {
        let bar = new(&[with_width(8)]);
        let clean = lipgloss::strip_ansi(&bar.view());
        assert!(clean.chars().all(|c| c == '░'));
    }

    #[test]
    fn test_view_paints_later_descriptors_on_top() {
        // Second logical entry fills the track, first logical entry covers
        // half of it; the first entry must win on the overlap.
        let bar = new(&[
            with_width(4),
            with_multi_values(vec![
                SeriesEntry::new(50.0, "#111111"),
                SeriesEntry::new(100.0, "#222222"),
            ]),
        ]);

        let top = Style::new()
            .foreground(Color::from("#111111"))
            .render("█");
        let under = Style::new()
            .foreground(Color::from("#222222"))
            .render("█");
        let expected = format!("{top}{top}{under}{under}");

        assert_eq!(bar.view(), expected);
    }

    #[test]
    fn test_view_percentage_label() {
        let bar = new(&[with_value(75.0), with_width(20), with_percentage_label()]);
        let clean = lipgloss::strip_ansi(&bar.view());

        assert!(clean.contains('%'));
        assert!(clean.contains("75"));
        // Label width counts against the total width.
        assert_eq!(lipgloss::width_visible(&bar.view()), 20);
    }

    #[test]
    fn test_view_label_display_is_clamped_but_value_is_not() {
        let bar = new(&[with_value(150.0), with_percentage_label()]);
        assert_eq!(bar.label_percent(), 150.0);

        let clean = lipgloss::strip_ansi(&bar.view());
        assert!(clean.contains("100%"));
    }

    #[test]
    fn test_bar_style_display() {
        assert_eq!(BarStyle::Primary.to_string(), "primary");
        assert_eq!(BarStyle::None.to_string(), "none");
    }
}
