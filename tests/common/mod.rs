//! Test doubles for driving a pacer without a browser

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pacer_wasm::engine::{Scheduler, SelectionDirective, SelectionSink, Task};
use pacer_wasm::errors::{PacerError, PacerResult};
use pacer_wasm::text::TreeNode;

/// Records every directive instead of rendering it
#[derive(Clone, Default)]
pub struct RecordingSelection {
    directives: Rc<RefCell<Vec<SelectionDirective<TreeNode>>>>,
    refuse: Rc<Cell<bool>>,
}

impl RecordingSelection {
    pub fn directives(&self) -> Vec<SelectionDirective<TreeNode>> {
        self.directives.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.directives.borrow().len()
    }

    pub fn last(&self) -> Option<SelectionDirective<TreeNode>> {
        self.directives.borrow().last().cloned()
    }

    /// Make every following `apply` fail
    pub fn refuse(&self) {
        self.refuse.set(true);
    }

    /// Let `apply` succeed again
    pub fn accept(&self) {
        self.refuse.set(false);
    }
}

impl SelectionSink<TreeNode> for RecordingSelection {
    fn apply(&mut self, directive: &SelectionDirective<TreeNode>) -> PacerResult<()> {
        if self.refuse.get() {
            return Err(PacerError::Selection("refused".to_string()));
        }
        self.directives.borrow_mut().push(directive.clone());
        Ok(())
    }
}

struct Scheduled {
    id: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    pending: Vec<Scheduled>,
    delays: Vec<u32>,
    cancelled: usize,
}

/// Holds scheduled tasks until the test fires them
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Delay of every `schedule` call so far, in order
    pub fn delays(&self) -> Vec<u32> {
        self.queue.borrow().delays.clone()
    }

    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }

    /// Remove the oldest pending task without running it
    pub fn take_next(&self) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        if queue.pending.is_empty() {
            return None;
        }
        Some(queue.pending.remove(0).task)
    }

    /// Run the oldest pending task; false when nothing is pending
    pub fn fire_next(&self) -> bool {
        match self.take_next() {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Fire until the queue drains, returning how many tasks ran
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while self.fire_next() {
            fired += 1;
            assert!(fired < 10_000, "scheduler never drained");
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, delay_ms: u32, task: Task) -> u64 {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.delays.push(delay_ms);
        queue.pending.push(Scheduled { id, task });
        id
    }

    fn cancel(&mut self, handle: u64) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|s| s.id != handle);
        if queue.pending.len() != before {
            queue.cancelled += 1;
        }
    }
}

pub fn flat(parts: &[&str]) -> TreeNode {
    TreeNode::element(parts.iter().map(|p| TreeNode::text(p)).collect())
}
