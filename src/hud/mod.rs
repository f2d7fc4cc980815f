//! Heads-up display model.
//!
//! Gameplay talks to the HUD only through [`HudSink`]. The [`Hud`] system
//! param implements it on top of [`HudState`], which presentation layers
//! (Bevy UI natively, page elements on the web) mirror every frame it changes.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use std::time::Duration;

use crate::core::scheduler::{ScheduledTask, TaskHandle, TaskScheduler};

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

pub trait HudSink {
    fn set_atom_count(&mut self, count: u32);
    /// Shows `text` and hides it after `duration`; a newer message replaces
    /// the text and restarts the countdown.
    fn show_message(&mut self, text: &str, duration: Duration);
    fn set_create_enabled(&mut self, enabled: bool);
}

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct HudState {
    pub atom_count: u32,
    pub create_enabled: bool,
    pub message: String,
    pub message_visible: bool,
    hide_task: Option<TaskHandle>,
}

impl HudState {
    pub fn hide_message(&mut self) {
        self.message_visible = false;
        self.hide_task = None;
    }

    pub fn hide_task(&self) -> Option<TaskHandle> {
        self.hide_task
    }

    pub fn count_label(&self) -> String {
        format!("Atoms collected: {}", self.atom_count)
    }
}

#[derive(SystemParam)]
pub struct Hud<'w> {
    state: ResMut<'w, HudState>,
    scheduler: ResMut<'w, TaskScheduler>,
}

impl Hud<'_> {
    pub fn state(&self) -> &HudState {
        &self.state
    }

    /// The HUD shares the scene's task queue; other scene timers go through here too.
    pub fn scheduler_mut(&mut self) -> &mut TaskScheduler {
        &mut self.scheduler
    }
}

impl HudSink for Hud<'_> {
    fn set_atom_count(&mut self, count: u32) {
        self.state.atom_count = count;
    }

    fn show_message(&mut self, text: &str, duration: Duration) {
        if let Some(previous) = self.state.hide_task.take() {
            self.scheduler.cancel(previous);
        }
        self.state.message = text.to_owned();
        self.state.message_visible = true;
        self.state.hide_task = Some(self.scheduler.once(duration, ScheduledTask::HideMessage));
    }

    fn set_create_enabled(&mut self, enabled: bool) {
        self.state.create_enabled = enabled;
    }
}
