//! Copy-to-clipboard behavior with a timed "Copied!" confirmation
//!
//! The behavior is written against four small seams so it can run on top of
//! the real DOM (see `dom`) or on in-memory fakes in tests:
//!
//! * [`CopyTarget`] - the bound element (attribute read, class toggles, label lookup)
//! * [`LabelNode`] - the descendant whose text is swapped
//! * [`ClipboardWriter`] - the asynchronous clipboard write
//! * [`RevertScheduler`] - a one-shot timer whose handle cancels on drop
//!
//! Per element there is at most one pending revert. A confirmation that
//! arrives while another is showing cancels the old timer and restarts the
//! window, carrying over the label text captured before the first copy.
//! Clipboard completions are tagged with a request token and a completion
//! older than the last applied one is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::future::{self, LocalBoxFuture};

use crate::config::{CopyOptions, CONTENT_ATTRIBUTE, REVERT_DELAY_MS};
use crate::error::CopyError;

pub trait LabelNode {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

pub trait CopyTarget: Clone + 'static {
    type Label: LabelNode + 'static;

    fn attribute(&self, name: &str) -> Option<String>;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn find_label(&self, selector: &str) -> Option<Self::Label>;
}

pub trait ClipboardWriter: 'static {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CopyError>>;
}

pub trait RevertScheduler: 'static {
    /// Dropping the handle must cancel the callback if it has not run yet
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// What a single click ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No content to copy
    Skipped,
    /// Copied and confirmation shown; `restarted` when it replaced a pending one
    Copied { restarted: bool },
    /// Copied, but a newer click already showed its confirmation
    Stale,
    /// Clipboard write failed, nothing on the page changed
    Failed(CopyError),
    /// The behavior was torn down before the write completed
    Detached,
}

struct PendingRevert<L, H> {
    _timer: H,
    /// Label and the text it showed before the first copy
    label: Option<(L, String)>,
}

struct CopyState<L, H> {
    issued: u64,
    applied: u64,
    pending: Option<PendingRevert<L, H>>,
    torn_down: bool,
}

struct Inner<T: CopyTarget, C, S: RevertScheduler> {
    target: T,
    clipboard: C,
    scheduler: S,
    options: CopyOptions,
    state: RefCell<CopyState<T::Label, S::Handle>>,
}

/// Copy behavior bound to one element. Cloning shares the same state.
pub struct CopyBehavior<T: CopyTarget, C: ClipboardWriter, S: RevertScheduler> {
    inner: Rc<Inner<T, C, S>>,
}

impl<T: CopyTarget, C: ClipboardWriter, S: RevertScheduler> Clone for CopyBehavior<T, C, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: CopyTarget, C: ClipboardWriter, S: RevertScheduler> CopyBehavior<T, C, S> {
    pub fn new(target: T, clipboard: C, scheduler: S, options: CopyOptions) -> Self {
        Self {
            inner: Rc::new(Inner {
                target,
                clipboard,
                scheduler,
                options,
                state: RefCell::new(CopyState {
                    issued: 0,
                    applied: 0,
                    pending: None,
                    torn_down: false,
                }),
            }),
        }
    }

    pub fn target(&self) -> &T {
        &self.inner.target
    }

    /// True while the confirmation is showing
    pub fn is_copied(&self) -> bool {
        self.inner.state.borrow().pending.is_some()
    }

    /// Content to copy, read fresh from the element
    pub fn content(&self) -> Result<String, CopyError> {
        match self.inner.target.attribute(CONTENT_ATTRIBUTE) {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(CopyError::MissingContent),
        }
    }

    /// Handle a click on the bound element.
    ///
    /// The attribute is read and the clipboard write is started before this
    /// returns; the returned future resolves once the write settles and the
    /// confirmation (if any) has been applied. Dropping the future without
    /// polling it discards the confirmation but not the write.
    pub fn click(&self) -> LocalBoxFuture<'static, CopyOutcome> {
        let content = match self.content() {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Copy skipped: {}", e);
                return Box::pin(future::ready(CopyOutcome::Skipped));
            }
        };

        let token = {
            let mut state = self.inner.state.borrow_mut();
            if state.torn_down {
                return Box::pin(future::ready(CopyOutcome::Detached));
            }
            state.issued += 1;
            state.issued
        };

        let write = self.inner.clipboard.write_text(&content);
        let inner = Rc::downgrade(&self.inner);

        Box::pin(async move {
            let result = write.await;

            let Some(inner) = inner.upgrade() else {
                return CopyOutcome::Detached;
            };

            match result {
                Ok(()) => Inner::confirm(&inner, token),
                Err(e) => {
                    log::warn!("Copy failed: {}", e);
                    CopyOutcome::Failed(e)
                }
            }
        })
    }

    /// Cancel the pending revert, restore the label right away and ignore
    /// any clipboard write still in flight. Safe to call more than once.
    pub fn teardown(&self) {
        let pending = {
            let mut state = self.inner.state.borrow_mut();
            state.torn_down = true;
            state.pending.take()
        };

        if let Some(pending) = pending {
            self.inner.restore(pending);
        }
    }
}

impl<T: CopyTarget, C: ClipboardWriter, S: RevertScheduler> Inner<T, C, S> {
    fn confirm(this: &Rc<Self>, token: u64) -> CopyOutcome {
        let mut state = this.state.borrow_mut();

        if state.torn_down {
            return CopyOutcome::Detached;
        }
        if token <= state.applied {
            log::debug!("Ignoring stale copy completion {} (applied {})", token, state.applied);
            return CopyOutcome::Stale;
        }
        state.applied = token;

        let restarted = state.pending.is_some();
        let label = match state.pending.take() {
            // Dropping the old timer cancels it; the label already shows the
            // confirmation so keep the text captured by the first copy
            Some(PendingRevert { label, .. }) => label,
            None => this
                .target
                .find_label(&this.options.label_selector)
                .map(|node| {
                    let original = node.text();
                    (node, original)
                }),
        };

        this.target.add_class(&this.options.marker_class);
        match &label {
            Some((node, _)) => node.set_text(&this.options.copied_text),
            None => log::debug!("No label matching '{}', showing class only", this.options.label_selector),
        }

        let weak: Weak<Self> = Rc::downgrade(this);
        let timer = this.scheduler.schedule(
            REVERT_DELAY_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.revert();
                }
            }),
        );

        state.pending = Some(PendingRevert {
            _timer: timer,
            label,
        });

        log::info!("Copied to clipboard");
        CopyOutcome::Copied { restarted }
    }

    fn revert(&self) {
        let pending = self.state.borrow_mut().pending.take();
        if let Some(pending) = pending {
            self.restore(pending);
        }
    }

    fn restore(&self, pending: PendingRevert<T::Label, S::Handle>) {
        self.target.remove_class(&self.options.marker_class);
        if let Some((node, original)) = pending.label {
            node.set_text(&original);
        }
    }
}
