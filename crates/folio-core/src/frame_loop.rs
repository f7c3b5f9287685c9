//! Per-frame task runner.
//!
//! A host (the GUI update loop, or a headless simulation) calls
//! [`FrameLoop::run_frame`] once per rendered frame. Each started task runs
//! exactly once per frame until it is stopped through its [`LoopHandle`].
//! Stopping is immediate: a stopped task is dropped and never runs again.

use tracing::debug;

/// Handle returned by [`FrameLoop::start`], used to stop the task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopHandle(u64);

type FrameTask = Box<dyn FnMut()>;

struct Slot {
    handle: LoopHandle,
    task: FrameTask,
}

#[derive(Default)]
pub struct FrameLoop {
    slots: Vec<Slot>,
    next_id: u64,
    frames_run: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run on every subsequent frame.
    pub fn start(&mut self, task: impl FnMut() + 'static) -> LoopHandle {
        let handle = LoopHandle(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            handle,
            task: Box::new(task),
        });
        debug!(task = handle.0, "Frame task started");
        handle
    }

    /// Stop the task behind `handle`. Returns `false` if it was not running.
    pub fn stop(&mut self, handle: LoopHandle) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.handle != handle);
        let stopped = self.slots.len() != before;
        if stopped {
            debug!(task = handle.0, "Frame task stopped");
        }
        stopped
    }

    pub fn is_running(&self, handle: LoopHandle) -> bool {
        self.slots.iter().any(|slot| slot.handle == handle)
    }

    pub fn active_tasks(&self) -> usize {
        self.slots.len()
    }

    /// Number of frames run since creation.
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Run every live task once, in start order. Returns how many ran.
    pub fn run_frame(&mut self) -> usize {
        self.frames_run += 1;
        for slot in &mut self.slots {
            (slot.task)();
        }
        self.slots.len()
    }

    /// Stop every task.
    pub fn clear(&mut self) {
        if !self.slots.is_empty() {
            debug!(count = self.slots.len(), "Stopping all frame tasks");
        }
        self.slots.clear();
    }
}

impl std::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("active_tasks", &self.slots.len())
            .field("frames_run", &self.frames_run)
            .finish()
    }
}
