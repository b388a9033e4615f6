use bevy::prelude::*;

/// Ordering of the one-off scene setup that runs once entities are spawned.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildPaths,
    BindPlayers,
    ActivateMode,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostStartup,
            (
                StartupStage::BuildPaths,
                StartupStage::BindPlayers,
                StartupStage::ActivateMode,
            )
                .chain(),
        );
    }
}
