//! Single-threaded task queue driven by the frame clock.
//!
//! Tasks are plain values; whoever ticks the scheduler decides what a fired
//! task means. Every scheduled task gets a [`TaskHandle`] that can cancel it.

use bevy::prelude::*;
use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledTask {
    SpawnEnemy,
    HideMessage,
}

#[derive(Debug)]
struct Entry {
    handle: TaskHandle,
    timer: Timer,
    task: ScheduledTask,
}

#[derive(Resource, Debug, Default)]
pub struct TaskScheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TaskScheduler {
    /// Fires `task` once after `delay`.
    pub fn once(&mut self, delay: Duration, task: ScheduledTask) -> TaskHandle {
        self.push(Timer::new(delay, TimerMode::Once), task)
    }

    /// Fires `task` every `period` until cancelled.
    pub fn repeating(&mut self, period: Duration, task: ScheduledTask) -> TaskHandle {
        self.push(Timer::new(period.max(MIN_PERIOD), TimerMode::Repeating), task)
    }

    /// Returns false when the handle already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances every timer by `delta` and returns the tasks that came due, in
    /// scheduling order. A repeating task that elapsed several periods in one
    /// tick is returned once per period.
    pub fn tick(&mut self, delta: Duration) -> Vec<(TaskHandle, ScheduledTask)> {
        let mut due = Vec::new();
        for entry in &mut self.entries {
            entry.timer.tick(delta);
            let fired = match entry.timer.mode() {
                TimerMode::Once => u32::from(entry.timer.just_finished()),
                TimerMode::Repeating => entry.timer.times_finished_this_tick(),
            };
            for _ in 0..fired {
                due.push((entry.handle, entry.task));
            }
        }
        self.entries
            .retain(|e| !(e.timer.mode() == TimerMode::Once && e.timer.finished()));
        due
    }

    fn push(&mut self, timer: Timer, task: ScheduledTask) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            timer,
            task,
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(due: Vec<(TaskHandle, ScheduledTask)>) -> Vec<ScheduledTask> {
        due.into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn one_shot_fires_once_then_disappears() {
        let mut s = TaskScheduler::default();
        let h = s.once(Duration::from_millis(1500), ScheduledTask::HideMessage);
        assert!(s.tick(Duration::from_millis(1000)).is_empty());
        assert!(s.is_pending(h));
        assert_eq!(tasks(s.tick(Duration::from_millis(600))), vec![ScheduledTask::HideMessage]);
        assert!(!s.is_pending(h));
        assert!(s.tick(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn repeating_fires_every_period_including_catch_up() {
        let mut s = TaskScheduler::default();
        s.repeating(Duration::from_secs(3), ScheduledTask::SpawnEnemy);
        assert!(s.tick(Duration::from_millis(2999)).is_empty());
        assert_eq!(s.tick(Duration::from_millis(1)).len(), 1);
        assert_eq!(s.tick(Duration::from_secs(6)).len(), 2);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut s = TaskScheduler::default();
        let spawn = s.repeating(Duration::from_secs(1), ScheduledTask::SpawnEnemy);
        let hide = s.once(Duration::from_secs(1), ScheduledTask::HideMessage);
        assert!(s.cancel(spawn));
        assert!(!s.cancel(spawn));
        assert_eq!(
            s.tick(Duration::from_secs(5)),
            vec![(hide, ScheduledTask::HideMessage)]
        );
        assert!(s.is_empty());
    }
}
