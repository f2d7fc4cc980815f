use bevy::prelude::*;
use std::time::Duration;

use crate::core::config::MoleculeConfig;
use crate::core::events::CreateMoleculeRequested;
use crate::hud::{Hud, HudSink};

const LOG_TARGET: &str = "molecule";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTimings {
    pub collected: Duration,
    pub created: Duration,
    pub missing: Duration,
}

impl MessageTimings {
    pub fn from_config(cfg: &MoleculeConfig) -> Self {
        Self {
            collected: Duration::from_secs_f32(cfg.collected_message_secs.max(0.0)),
            created: Duration::from_secs_f32(cfg.created_message_secs.max(0.0)),
            missing: Duration::from_secs_f32(cfg.missing_message_secs.max(0.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoleculeOutcome {
    Created { remaining: u32 },
    NeedMoreAtoms { missing: u32 },
}

/// Collected-atom counter. The count only drops by whole molecules, so it can
/// never go below zero.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MoleculeLedger {
    atoms_collected: u32,
    atoms_needed: u32,
    molecules_created: u32,
    timings: MessageTimings,
}

impl Default for MoleculeLedger {
    fn default() -> Self {
        Self::from_config(&MoleculeConfig::default())
    }
}

impl MoleculeLedger {
    pub fn new(atoms_needed: u32, timings: MessageTimings) -> Self {
        Self {
            atoms_collected: 0,
            atoms_needed,
            molecules_created: 0,
            timings,
        }
    }

    pub fn from_config(cfg: &MoleculeConfig) -> Self {
        Self::new(cfg.atoms_needed, MessageTimings::from_config(cfg))
    }

    pub fn atoms_collected(&self) -> u32 {
        self.atoms_collected
    }

    pub fn atoms_needed(&self) -> u32 {
        self.atoms_needed
    }

    pub fn molecules_created(&self) -> u32 {
        self.molecules_created
    }

    pub fn can_create(&self) -> bool {
        self.atoms_collected >= self.atoms_needed
    }

    /// Pushes the initial counter and a disabled trigger to the HUD.
    pub fn reset_hud(&self, hud: &mut impl HudSink) {
        hud.set_atom_count(self.atoms_collected);
        hud.set_create_enabled(false);
    }

    /// Returns the new total.
    pub fn collect_atom(&mut self, hud: &mut impl HudSink) -> u32 {
        self.atoms_collected = self.atoms_collected.saturating_add(1);
        hud.set_atom_count(self.atoms_collected);
        hud.show_message(
            &format!("Atom collected! Atoms: {}", self.atoms_collected),
            self.timings.collected,
        );
        if self.can_create() {
            hud.set_create_enabled(true);
        }
        self.atoms_collected
    }

    /// On failure the trigger keeps whatever state it had.
    pub fn create_molecule(&mut self, hud: &mut impl HudSink) -> MoleculeOutcome {
        if self.can_create() {
            self.atoms_collected -= self.atoms_needed;
            self.molecules_created += 1;
            hud.set_atom_count(self.atoms_collected);
            // still enabled when enough atoms remain for another molecule
            hud.set_create_enabled(self.can_create());
            hud.show_message("H₂O molecule created!", self.timings.created);
            MoleculeOutcome::Created {
                remaining: self.atoms_collected,
            }
        } else {
            hud.show_message("You need more atoms!", self.timings.missing);
            MoleculeOutcome::NeedMoreAtoms {
                missing: self.atoms_needed - self.atoms_collected,
            }
        }
    }
}

/// `C` or `Enter` asks for a molecule even while the button is disabled.
pub fn request_molecule_from_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<CreateMoleculeRequested>,
) {
    if keys.any_just_pressed([KeyCode::KeyC, KeyCode::Enter, KeyCode::NumpadEnter]) {
        requests.write(CreateMoleculeRequested);
    }
}

pub fn handle_molecule_requests(
    mut requests: EventReader<CreateMoleculeRequested>,
    mut ledger: ResMut<MoleculeLedger>,
    mut hud: Hud,
) {
    for _ in requests.read() {
        match ledger.create_molecule(&mut hud) {
            MoleculeOutcome::Created { remaining } => info!(
                target: LOG_TARGET,
                "molecule #{} created, {remaining} atoms left",
                ledger.molecules_created()
            ),
            MoleculeOutcome::NeedMoreAtoms { missing } => {
                debug!(target: LOG_TARGET, "molecule refused, {missing} atoms short")
            }
        }
    }
}
