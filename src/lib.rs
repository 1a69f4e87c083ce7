#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/glimmer-widgets/")]

//! # glimmer-widgets
//!
//! A small collection of presentational components and view-state helpers
//! for building terminal applications with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs): a debounced
//! input model, a linear progress bar family, and an icon glyph wrapper.
//!
//! ## Overview
//!
//! Components follow the Elm Architecture pattern used across the
//! bubbletea-rs ecosystem. Stateful components expose `update()` for
//! message handling and `view()` for rendering; purely visual pieces are
//! plain models with a `view()` and no messages. Configuration uses the
//! option pattern: `new(&[with_width(50), ...])`.
//!
//! ## Components
//!
//! - **`debounce`**: a value-synchronization model for rate-limited input.
//!   Edits echo immediately, commits fire after a quiet period, clears
//!   commit instantly, and externally pushed values reconcile without
//!   clobbering in-progress edits.
//! - **`progressbar`**: pure percentage math plus single, dual
//!   (primary/secondary) and multi-series bar composition and rendering.
//! - **`icon`**: a stateless glyph wrapper with predefined glyph constants.
//!
//! ## Quick Start
//!
//! ```rust
//! use glimmer_widgets::prelude::*;
//! use std::time::Duration;
//!
//! let mut search = debounce_new(
//!     Box::new(|q: &str| { let _ = q; }),
//!     &[debounce_delay(Duration::from_millis(300))],
//! );
//! search.focus();
//!
//! let bar = progressbar_new(&[progress_value(40.0)]);
//! assert!(!bar.view().is_empty());
//! ```
//!
//! ## Focus Management
//!
//! Input components implement the [`Component`] trait for standardized
//! focus handling:
//!
//! ```rust
//! use glimmer_widgets::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = debounce_new(Box::new(|_| {}), &[]);
//! handle_focus(&mut input);
//! ```

pub mod debounce;
pub mod icon;
pub mod progressbar;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Focused components process keyboard input and should indicate their
/// active state; blurred components ignore keys. `focus()` may return a
/// command for initialization work (starting a timer, forcing a redraw).
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use debounce::{
    new as debounce_new, with_delay, with_initial_value, with_trim, CommitFunc, CommitMsg,
    Model as DebouncedInput,
};
pub use icon::{
    new as icon_new, with_glyph, with_label, Glyph, Model as Icon, CHECK, CROSS, DOT, INFO,
    WARNING,
};
pub use progressbar::{
    multi_series, new as progressbar_new, percentage, single_series, with_multi_values,
    with_percentage_label, with_range, with_secondary_value, with_value, with_width, BarDescriptor,
    BarStyle, Mode, Model as ProgressBar, Range, SeriesEntry,
};

/// Prelude module for convenient imports.
///
/// Re-exports the component types, constructors and the most commonly used
/// options with disambiguated names, so everything is available through a
/// single `use` statement:
///
/// ```rust
/// use glimmer_widgets::prelude::*;
///
/// let bar = progressbar_new(&[progress_value(75.0), progress_width(30)]);
/// let _ = bar.view();
/// ```
pub mod prelude {
    pub use crate::debounce::{
        new as debounce_new, with_delay as debounce_delay,
        with_initial_value as debounce_initial_value, with_trim as debounce_trim, CommitFunc,
        CommitMsg, Model as DebouncedInput,
    };
    pub use crate::icon::{
        new as icon_new, with_glyph as icon_glyph, with_label as icon_label,
        with_style as icon_style, Glyph, Model as Icon,
    };
    pub use crate::progressbar::{
        multi_series, new as progressbar_new, percentage, single_series,
        with_multi_values as progress_multi_values,
        with_percentage_label as progress_percentage_label, with_range as progress_range,
        with_secondary_value as progress_secondary_value, with_style as progress_style,
        with_value as progress_value, with_width as progress_width, BarDescriptor, BarStyle, Mode,
        Model as ProgressBar, Range, SeriesEntry,
    };
    pub use crate::Component;
}
