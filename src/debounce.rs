//! Debounced value-synchronization component for Bubble Tea applications.
//!
//! This module reconciles an externally controlled value with locally
//! edited, rate-limited user input. The model owns the live input text and
//! decides when to notify its owner of a committed value: edits update the
//! visible value immediately, while the commit callback fires only after a
//! configurable quiet period, collapsing rapid successive changes into a
//! single commit carrying the most recent value (trailing-edge debounce).
//!
//! # Basic Usage
//!
//! ```rust
//! use glimmer_widgets::debounce::{new, with_delay, with_trim};
//! use std::time::Duration;
//!
//! // Commits fire synchronously when no delay is configured.
//! let mut input = new(Box::new(|v: &str| println!("committed: {v}")), &[]);
//! input.on_input("hello");
//! assert_eq!(input.value(), "hello");
//!
//! // With a delay, commits wait for a quiet period.
//! let mut search = new(
//!     Box::new(|_q: &str| { /* run the query */ }),
//!     &[with_delay(Duration::from_millis(300)), with_trim()],
//! );
//! let _cmd = search.on_input("  rust  ");
//! assert_eq!(search.value(), "rust");
//! ```
//!
//! # External Resets
//!
//! A host that owns the canonical value (for example after upstream
//! validation or normalization) calls [`Model::observe_external_value`] once
//! per render cycle. The model overwrites the local edit only when the
//! external value actually changed since the previous observation, so
//! repeated cycles with the same external value never clobber an in-progress
//! edit:
//!
//! ```rust
//! use glimmer_widgets::debounce::new;
//!
//! let mut input = new(Box::new(|_| {}), &[]);
//! input.on_input("draft");
//!
//! input.observe_external_value(""); // unchanged external value: no-op
//! assert_eq!(input.value(), "draft");
//!
//! input.observe_external_value("final"); // actual change: external wins
//! assert_eq!(input.value(), "final");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use glimmer_widgets::debounce::{new, with_delay, Model};
//! use glimmer_widgets::Component;
//! use std::time::Duration;
//!
//! struct App {
//!     search: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut search = new(
//!             Box::new(|_q: &str| { /* kick off the search */ }),
//!             &[with_delay(Duration::from_millis(250))],
//!         );
//!         search.focus();
//!         (Self { search }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forward both key input and elapsed debounce windows.
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("search: {}", self.search.value())
//!     }
//! }
//! ```

use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for debounce instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Callback invoked with each committed value.
///
/// The callback is assumed non-throwing and has no error channel.
/// `Send` is required so models holding it satisfy the bubbletea-rs `Model`
/// bounds transitively.
pub type CommitFunc = Box<dyn Fn(&str) + Send>;

/// Message sent when a debounce window elapses.
///
/// Each edit that starts a new window bumps the model's internal sequence
/// tag, so a `CommitMsg` scheduled by a superseded window no longer matches
/// and is discarded by [`Model::update`]. This is what makes the debounce
/// trailing-edge: only the window started by the last edit before quiescence
/// survives long enough to commit.
///
/// Instances are created internally by the commands returned from
/// [`Model::on_input`]; application code only needs to forward them to
/// `update()`.
#[derive(Debug, Clone)]
pub struct CommitMsg {
    /// Identifier of the model instance this message targets.
    id: i64,
    /// Sequence tag of the debounce window that scheduled this message.
    tag: i64,
}

/// Configuration options for the debounced input model.
///
/// Options are applied in order by [`new`], following the option pattern
/// used across this crate.
pub enum DebounceOption {
    /// Sets the quiet period that must elapse after the last edit before the
    /// commit callback fires. A zero delay (the default) makes every edit
    /// commit synchronously.
    WithDelay(Duration),
    /// Trims leading and trailing whitespace from edited values before they
    /// are stored or committed.
    WithTrim,
    /// Sets the initial value. The initial value also seeds the shadow copy
    /// used by [`Model::observe_external_value`].
    WithInitialValue(String),
}

impl DebounceOption {
    fn apply(&self, m: &mut Model) {
        match self {
            DebounceOption::WithDelay(delay) => {
                m.delay = *delay;
            }
            DebounceOption::WithTrim => {
                m.trim = true;
            }
            DebounceOption::WithInitialValue(value) => {
                m.value = value.clone();
            }
        }
    }
}

/// Sets the debounce delay.
///
/// With a zero delay the commit callback fires synchronously on every edit;
/// with a positive delay it fires once per quiet period, carrying the most
/// recent value.
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::debounce::{new, with_delay};
/// use std::time::Duration;
///
/// let input = new(Box::new(|_| {}), &[with_delay(Duration::from_millis(300))]);
/// ```
pub fn with_delay(delay: Duration) -> DebounceOption {
    DebounceOption::WithDelay(delay)
}

/// Enables whitespace trimming of edited values.
///
/// Both the stored value and the value passed to the commit callback are the
/// trimmed form.
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::debounce::{new, with_trim};
///
/// let mut input = new(Box::new(|_| {}), &[with_trim()]);
/// input.on_input("  hi  ");
/// assert_eq!(input.value(), "hi");
/// ```
pub fn with_trim() -> DebounceOption {
    DebounceOption::WithTrim
}

/// Sets the initial value of the input.
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::debounce::{new, with_initial_value};
///
/// let input = new(Box::new(|_| {}), &[with_initial_value("draft")]);
/// assert_eq!(input.value(), "draft");
/// ```
pub fn with_initial_value(value: &str) -> DebounceOption {
    DebounceOption::WithInitialValue(value.to_string())
}

/// Debounced input model.
///
/// The model keeps three pieces of state: the live, user-editable value
/// (mutated on every edit and on external resets), a shadow copy of the
/// previously observed external value (used only to detect that the external
/// value actually changed), and the identity of the currently pending
/// debounce window.
///
/// At most one debounce window is live per instance: every edit that starts
/// a new window supersedes the previous one, so the last edit before
/// quiescence always wins and no stale commit can fire. Dropping the model
/// orphans any in-flight [`CommitMsg`], so no commit fires after the owner
/// is gone.
pub struct Model {
    /// The live input text.
    value: String,
    /// Previously observed external value; `None` until first seeded.
    last_external: Option<String>,
    /// Quiet period before a commit fires. Zero means synchronous commits.
    pub delay: Duration,
    /// Whether edited values are whitespace-trimmed.
    pub trim: bool,
    /// Invoked with each committed value.
    on_commit: CommitFunc,
    /// Whether key messages are processed.
    focus: bool,
    /// Identifier separating this instance's messages from other instances'.
    id: i64,
    /// Sequence tag of the current debounce window.
    tag: i64,
}

/// Creates a new debounced input model.
///
/// `on_commit` is invoked with every committed value: synchronously on each
/// edit when no delay is configured, once per quiet period otherwise, and
/// immediately with `""` on [`Model::clear`].
///
/// # Examples
///
/// ```rust
/// use glimmer_widgets::debounce::{new, with_delay, with_initial_value};
/// use std::time::Duration;
///
/// let input = new(
///     Box::new(|v: &str| println!("-> {v}")),
///     &[
///         with_delay(Duration::from_millis(200)),
///         with_initial_value("hello"),
///     ],
/// );
/// assert_eq!(input.value(), "hello");
/// ```
pub fn new(on_commit: CommitFunc, opts: &[DebounceOption]) -> Model {
    let mut m = Model {
        value: String::new(),
        last_external: None,
        delay: Duration::ZERO,
        trim: false,
        on_commit,
        focus: false,
        id: next_id(),
        tag: 0,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    if m.trim {
        m.value = m.value.trim().to_string();
    }
    m.last_external = Some(m.value.clone());

    m
}

impl Model {
    /// Returns the unique identifier of this instance.
    ///
    /// Used to route [`CommitMsg`]s when several debounced inputs coexist in
    /// one application.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the current value for rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glimmer_widgets::debounce::new;
    ///
    /// let mut input = new(Box::new(|_| {}), &[]);
    /// input.on_input("abc");
    /// assert_eq!(input.value(), "abc");
    /// ```
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets the value directly, without committing.
    ///
    /// This is the escape hatch for hosts that need to adjust the visible
    /// value outside the edit/commit pipeline. The trim policy still
    /// applies. To commit as part of the change, use [`Model::on_input`].
    pub fn set_value(&mut self, s: &str) {
        self.value = if self.trim { s.trim() } else { s }.to_string();
    }

    /// Processes one edit of the input value.
    ///
    /// The stored value is updated immediately, so the visible input never
    /// lags behind the user. With a zero delay the commit callback fires
    /// synchronously and `None` is returned. With a positive delay the
    /// previous debounce window (if any) is superseded and a command
    /// scheduling a [`CommitMsg`] after the quiet period is returned; the
    /// host must hand that command to the bubbletea runtime and route the
    /// resulting message back through [`Model::update`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glimmer_widgets::debounce::{new, with_delay};
    /// use std::time::Duration;
    ///
    /// let mut input = new(Box::new(|_| {}), &[with_delay(Duration::from_millis(100))]);
    ///
    /// let cmd = input.on_input("a");
    /// assert!(cmd.is_some()); // debounce window scheduled
    /// assert_eq!(input.value(), "a");
    /// ```
    pub fn on_input(&mut self, raw: &str) -> Option<Cmd> {
        let next = if self.trim { raw.trim() } else { raw };
        self.value = next.to_string();

        if self.delay.is_zero() {
            (self.on_commit)(&self.value);
            return None;
        }

        // Superseding the tag cancels any window that has not fired yet.
        self.tag += 1;
        Some(self.commit_tick())
    }

    /// Empties the value and commits `""` immediately.
    ///
    /// Clearing bypasses the debounce entirely: the commit fires
    /// synchronously, and any pending debounce window is cancelled so no
    /// stray commit with a stale value can fire afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glimmer_widgets::debounce::new;
    ///
    /// let mut input = new(Box::new(|_| {}), &[]);
    /// input.on_input("abc");
    /// input.clear();
    /// assert_eq!(input.value(), "");
    /// ```
    pub fn clear(&mut self) {
        self.value.clear();
        self.tag += 1;
        (self.on_commit)("");
    }

    /// Reconciles with the externally controlled value.
    ///
    /// Call once per render cycle with the host's canonical value. The local
    /// value is overwritten only when `v` differs from the previously
    /// observed external value AND from the current local value: an actual
    /// external change wins over an in-progress edit, but repeated
    /// observations of the same external value are no-ops. The shadow copy
    /// of the previous observation is what breaks the overwrite loop that
    /// comparing against the local value directly would cause.
    pub fn observe_external_value(&mut self, v: &str) {
        if self.last_external.as_deref() == Some(v) {
            return;
        }
        if v != self.value {
            self.value = v.to_string();
        }
        self.last_external = Some(v.to_string());
    }

    /// Processes messages for this input.
    ///
    /// Handles two message kinds:
    ///
    /// - [`CommitMsg`]: commits the current value, provided the message
    ///   carries this instance's id and the tag of the still-pending window.
    ///   Messages from superseded windows or other instances are discarded.
    /// - [`KeyMsg`] (focused models only): printable characters append to
    ///   the value and Backspace removes the last character, both running
    ///   through the same edit path as [`Model::on_input`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    /// use glimmer_widgets::debounce::new;
    /// use glimmer_widgets::Component;
    ///
    /// let mut input = new(Box::new(|_| {}), &[]);
    /// input.focus();
    ///
    /// let key = KeyMsg { key: KeyCode::Char('x'), modifiers: KeyModifiers::NONE };
    /// input.update(Box::new(key));
    /// assert_eq!(input.value(), "x");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(commit) = msg.downcast_ref::<CommitMsg>() {
            if commit.id != self.id || commit.tag != self.tag {
                return None;
            }
            (self.on_commit)(&self.value);
            return None;
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match key_msg.key {
                KeyCode::Char(ch)
                    if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                        && !key_msg.modifiers.contains(KeyModifiers::ALT) =>
                {
                    let mut next = self.value.clone();
                    next.push(ch);
                    return self.on_input(&next);
                }
                KeyCode::Backspace => {
                    let mut next = self.value.clone();
                    next.pop();
                    return self.on_input(&next);
                }
                _ => {}
            }
        }

        None
    }

    fn commit_tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.delay, move |_| Box::new(CommitMsg { id, tag }) as Msg)
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording() -> (CommitFunc, Arc<Mutex<Vec<String>>>) {
        let commits: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&commits);
        let f: CommitFunc = Box::new(move |v: &str| sink.lock().unwrap().push(v.to_string()));
        (f, commits)
    }

    #[test]
    fn test_zero_delay_commits_every_edit() {
        let (f, commits) = recording();
        let mut input = new(f, &[]);

        assert!(input.on_input("a").is_none());
        assert!(input.on_input("ab").is_none());
        assert!(input.on_input("abc").is_none());

        assert_eq!(*commits.lock().unwrap(), vec!["a", "ab", "abc"]);
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_debounce_coalesces_rapid_edits() {
        let (f, commits) = recording();
        let mut input = new(f, &[with_delay(Duration::from_millis(50))]);

        // Rapid edits: each starts a new window; none commits yet.
        assert!(input.on_input("a").is_some());
        assert!(input.on_input("ab").is_some());
        assert!(input.on_input("abc").is_some());
        assert!(commits.lock().unwrap().is_empty());

        // Only the last window's message still matches the tag.
        let stale = CommitMsg {
            id: input.id,
            tag: input.tag - 1,
        };
        assert!(input.update(Box::new(stale)).is_none());
        assert!(commits.lock().unwrap().is_empty());

        let live = CommitMsg {
            id: input.id,
            tag: input.tag,
        };
        input.update(Box::new(live));
        assert_eq!(*commits.lock().unwrap(), vec!["abc"]);
    }

    #[test]
    fn test_commit_msg_for_other_instance_ignored() {
        let (f, commits) = recording();
        let mut input = new(f, &[with_delay(Duration::from_millis(50))]);
        input.on_input("abc");

        let foreign = CommitMsg {
            id: input.id + 999,
            tag: input.tag,
        };
        input.update(Box::new(foreign));
        assert!(commits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clear_commits_empty_and_cancels_pending() {
        let (f, commits) = recording();
        let mut input = new(f, &[with_delay(Duration::from_millis(50))]);

        input.on_input("abc");
        let pending = CommitMsg {
            id: input.id,
            tag: input.tag,
        };

        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(*commits.lock().unwrap(), vec![""]);

        // The window pending at clear() time must not fire afterwards.
        input.update(Box::new(pending));
        assert_eq!(*commits.lock().unwrap(), vec![""]);
    }

    #[test]
    fn test_trim_applies_to_stored_and_committed_value() {
        let (f, commits) = recording();
        let mut input = new(f, &[with_trim()]);

        input.on_input("  hi  ");
        assert_eq!(input.value(), "hi");
        assert_eq!(*commits.lock().unwrap(), vec!["hi"]);
    }

    #[test]
    fn test_observe_external_value_overwrites_once_per_change() {
        let (f, commits) = recording();
        let mut input = new(f, &[]);
        input.on_input("x");
        commits.lock().unwrap().clear();

        // Same external value as the local edit: never clobbers.
        input.observe_external_value("x");
        input.observe_external_value("x");
        assert_eq!(input.value(), "x");

        // An actual change overwrites exactly once.
        input.observe_external_value("y");
        assert_eq!(input.value(), "y");

        // Re-observing the same value after a local edit is a no-op.
        input.on_input("draft");
        input.observe_external_value("y");
        assert_eq!(input.value(), "draft");

        // Observation never fires commits on its own.
        assert_eq!(*commits.lock().unwrap(), vec!["draft"]);
    }

    #[test]
    fn test_unchanged_external_value_keeps_in_progress_edit() {
        let (f, _commits) = recording();
        let mut input = new(f, &[with_initial_value("seed")]);

        input.on_input("edit");
        input.observe_external_value("seed");
        assert_eq!(input.value(), "edit");
    }

    #[test]
    fn test_set_value_does_not_commit() {
        let (f, commits) = recording();
        let mut input = new(f, &[with_trim()]);

        input.set_value("  quiet  ");
        assert_eq!(input.value(), "quiet");
        assert!(commits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_initial_value_seeds_shadow_copy() {
        let (f, _commits) = recording();
        let mut input = new(f, &[with_initial_value("seed")]);

        assert_eq!(input.value(), "seed");

        // Observing the initial value back is not a change.
        input.on_input("typing");
        input.observe_external_value("seed");
        assert_eq!(input.value(), "typing");
    }

    #[test]
    fn test_key_editing_when_focused() {
        let (f, commits) = recording();
        let mut input = new(f, &[]);
        input.focus();

        for ch in ['h', 'i'] {
            input.update(Box::new(KeyMsg {
                key: KeyCode::Char(ch),
                modifiers: KeyModifiers::NONE,
            }));
        }
        assert_eq!(input.value(), "hi");

        input.update(Box::new(KeyMsg {
            key: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(input.value(), "h");

        assert_eq!(*commits.lock().unwrap(), vec!["h", "hi", "h"]);
    }

    #[test]
    fn test_keys_ignored_when_blurred() {
        let (f, commits) = recording();
        let mut input = new(f, &[]);

        input.update(Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(input.value(), "");
        assert!(commits.lock().unwrap().is_empty());
    }

    #[test]
    fn test_control_chars_not_inserted() {
        let (f, _commits) = recording();
        let mut input = new(f, &[]);
        input.focus();

        input.update(Box::new(KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_unique_ids() {
        let (f1, _) = recording();
        let (f2, _) = recording();
        let a = new(f1, &[]);
        let b = new(f2, &[]);
        assert_ne!(a.id(), b.id());
    }
}
