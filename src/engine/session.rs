//! Reader session: the playback state machine
//!
//! `Idle -> Running <-> Paused`, and `Running -> Completed` once the offset
//! reaches the end of the text. A selection failure moves the session to
//! `Failed`, after which every control is a no-op. Each step selects from
//! the start of the text through the current offset, advances by one
//! character, and schedules the next step after the current delay.
//!
//! Everything runs on one logical thread. The session state lives in an
//! `Rc<RefCell<_>>`; scheduled steps hold only a `Weak` to it plus the
//! generation they were scheduled under, so a step that fires after a pause
//! or after the session is dropped does nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::engine::control::ControlAction;
use crate::engine::scheduler::Scheduler;
use crate::engine::selection::{SelectionDirective, SelectionSink};
use crate::errors::{PacerError, PacerResult};
use crate::models::{PacerConfig, PlaybackState};
use crate::text::{ContentNode, TextIndex};

type Completion = Box<dyn FnOnce()>;

struct SessionState<N, Sel, Sch: Scheduler> {
    index: TextIndex<N>,
    config: PacerConfig,
    offset: usize,
    delay: u32,
    state: PlaybackState,
    /// Bumped on every start and pause; steps from older generations are stale
    generation: u64,
    pending: Option<Sch::Handle>,
    selection: Sel,
    scheduler: Sch,
    on_complete: Option<Completion>,
    last_error: Option<PacerError>,
}

impl<N, Sel, Sch> SessionState<N, Sel, Sch>
where
    N: ContentNode,
    Sel: SelectionSink<N>,
    Sch: Scheduler,
{
    fn select_through_offset(&mut self) -> PacerResult<()> {
        let Some(pos) = self.index.locate(self.offset) else {
            return Ok(());
        };
        let fragments = self.index.fragments();
        let directive = SelectionDirective {
            start: fragments[0].node().clone(),
            end: fragments[pos.fragment].node().clone(),
            end_offset: pos.offset,
        };
        self.selection.apply(&directive)
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn halt(&mut self, err: PacerError) {
        log::error!("Playback halted at offset {}: {}", self.offset, err);
        self.cancel_pending();
        self.generation += 1;
        self.state = PlaybackState::Failed;
        self.last_error = Some(err);
    }
}

/// A reading session over one content container
///
/// Owns the text index, the playback state and the collaborators used to
/// render selections and schedule steps.
pub struct Pacer<N, Sel, Sch: Scheduler> {
    inner: Rc<RefCell<SessionState<N, Sel, Sch>>>,
}

impl<N, Sel, Sch> Pacer<N, Sel, Sch>
where
    N: ContentNode + 'static,
    Sel: SelectionSink<N> + 'static,
    Sch: Scheduler + 'static,
{
    /// Index the text under `root` and prepare an idle session
    pub fn new(root: &N, config: PacerConfig, selection: Sel, scheduler: Sch) -> PacerResult<Self> {
        let config = config.validate()?;
        let index = TextIndex::build(root);

        log::info!(
            "Pacer created: {} characters in {} fragments, delay {}ms",
            index.total_length(),
            index.fragments().len(),
            config.delay
        );

        Ok(Self {
            inner: Rc::new(RefCell::new(SessionState {
                index,
                delay: config.delay,
                config,
                offset: 0,
                state: PlaybackState::Idle,
                generation: 0,
                pending: None,
                selection,
                scheduler,
                on_complete: None,
                last_error: None,
            })),
        })
    }

    /// Register the callback fired once when the end of the text is reached
    pub fn with_on_complete(self, on_complete: impl FnOnce() + 'static) -> Self {
        self.inner.borrow_mut().on_complete = Some(Box::new(on_complete));
        self
    }

    /// Begin or resume playback
    ///
    /// The first step runs immediately. Does nothing when already running,
    /// when completed or failed, or when there is no text. Errors only if
    /// the host selection API fails on that first step.
    pub fn start(&self) -> PacerResult<()> {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_start() || inner.index.is_empty() {
                log::debug!("start() ignored in state {}", inner.state);
                return Ok(());
            }
            inner.state = PlaybackState::Running;
            inner.generation += 1;
            log::info!("Playback started at offset {}", inner.offset);
            inner.generation
        };

        run_step(&self.inner, generation)
    }

    /// Stop at the current offset, leaving the last selection in place
    pub fn pause(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state != PlaybackState::Running {
            return;
        }
        inner.cancel_pending();
        inner.generation += 1;
        inner.state = PlaybackState::Paused;
        log::info!("Playback paused at offset {}", inner.offset);
    }

    /// Shorten the delay by one step; applies from the next scheduled step
    pub fn increase_speed(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.accepts_speed_change() {
            return;
        }
        inner.delay = inner.config.faster(inner.delay);
        log::debug!("Delay now {}ms", inner.delay);
    }

    /// Lengthen the delay by one step; applies from the next scheduled step
    pub fn decrease_speed(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.accepts_speed_change() {
            return;
        }
        inner.delay = inner.config.slower(inner.delay);
        log::debug!("Delay now {}ms", inner.delay);
    }

    pub fn dispatch(&self, action: ControlAction) -> PacerResult<()> {
        match action {
            ControlAction::Start => self.start()?,
            ControlAction::Pause => self.pause(),
            ControlAction::Faster => self.increase_speed(),
            ControlAction::Slower => self.decrease_speed(),
        }
        Ok(())
    }

    pub fn state(&self) -> PlaybackState {
        self.inner.borrow().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == PlaybackState::Running
    }

    pub fn current_offset(&self) -> usize {
        self.inner.borrow().offset
    }

    pub fn total_length(&self) -> usize {
        self.inner.borrow().index.total_length()
    }

    pub fn fragment_count(&self) -> usize {
        self.inner.borrow().index.fragments().len()
    }

    /// Current step interval in milliseconds
    pub fn delay(&self) -> u32 {
        self.inner.borrow().delay
    }

    pub fn config(&self) -> PacerConfig {
        self.inner.borrow().config
    }

    /// Fraction of the text already passed, `1.0` when there is none
    pub fn progress(&self) -> f64 {
        let inner = self.inner.borrow();
        let total = inner.index.total_length();
        if total == 0 {
            return 1.0;
        }
        (inner.offset.min(total) as f64) / (total as f64)
    }

    /// The selection failure that ended playback, if any
    ///
    /// A failure inside a timer step has no caller to return to; this is
    /// where it is reported.
    pub fn last_error(&self) -> Option<PacerError> {
        self.inner.borrow().last_error.clone()
    }
}

impl<N, Sel, Sch: Scheduler> Drop for Pacer<N, Sel, Sch> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            if let Some(handle) = inner.pending.take() {
                inner.scheduler.cancel(handle);
            }
        }
    }
}

fn run_step<N, Sel, Sch>(cell: &Rc<RefCell<SessionState<N, Sel, Sch>>>, generation: u64) -> PacerResult<()>
where
    N: ContentNode + 'static,
    Sel: SelectionSink<N> + 'static,
    Sch: Scheduler + 'static,
{
    let completion = {
        let mut guard = cell.borrow_mut();
        let inner = &mut *guard;
        if inner.state != PlaybackState::Running || inner.generation != generation {
            return Ok(());
        }
        inner.pending = None;

        if let Err(err) = inner.select_through_offset() {
            inner.halt(err.clone());
            return Err(err);
        }

        let total = inner.index.total_length();
        if inner.offset < total {
            inner.offset += 1;
            log::debug!("Step -> offset {}/{}, next in {}ms", inner.offset, total, inner.delay);

            let weak = Rc::downgrade(cell);
            let handle = inner
                .scheduler
                .schedule(inner.delay, Box::new(move || fire_step(&weak, generation)));
            inner.pending = Some(handle);
            None
        } else {
            inner.state = PlaybackState::Completed;
            log::info!("Playback completed after {} characters", total);
            inner.on_complete.take()
        }
    };

    // Invoked with the state released so the callback may query the session
    if let Some(on_complete) = completion {
        on_complete();
    }
    Ok(())
}

fn fire_step<N, Sel, Sch>(weak: &Weak<RefCell<SessionState<N, Sel, Sch>>>, generation: u64)
where
    N: ContentNode + 'static,
    Sel: SelectionSink<N> + 'static,
    Sch: Scheduler + 'static,
{
    let Some(cell) = weak.upgrade() else {
        return;
    };
    if let Err(err) = run_step(&cell, generation) {
        log::error!("Scheduled step failed: {}", err);
    }
}
