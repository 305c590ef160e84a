//! Warren Engine - main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warren_engine::adapters::{world_file, ConsoleUi, InMemoryWorld, LoggingAdmin};
use warren_engine::app::GameLoop;
use warren_engine::ports::{AdminPort, MonsterRepo, PlayerRepo, RoomRepo, UiPort};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warren_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Warren engine");

    // Load configuration
    let world_path =
        std::env::var("WORLD_FILE").unwrap_or_else(|_| "crates/engine/worlds/sample.json".into());
    let player_name = std::env::var("PLAYER_NAME").unwrap_or_else(|_| "Wren".into());

    // A missing or broken world file is not fatal: the loop boots into
    // admin mode and the authoring tools take it from there.
    let world = match world_file::load_path(&world_path) {
        Ok(world) => {
            tracing::info!(path = %world_path, "world loaded");
            world
        }
        Err(error) => {
            tracing::warn!(path = %world_path, %error, "starting with an empty world");
            InMemoryWorld::new()
        }
    };
    let world = Arc::new(world);

    let rooms: Arc<dyn RoomRepo> = world.clone();
    let players: Arc<dyn PlayerRepo> = world.clone();
    let monsters: Arc<dyn MonsterRepo> = world;
    let ui: Arc<dyn UiPort> = Arc::new(ConsoleUi::new());
    let admin: Arc<dyn AdminPort> = Arc::new(LoggingAdmin);

    let mut game = GameLoop::new(rooms, players, monsters, ui, admin, player_name);
    game.bootstrap().await;
    game.run().await;

    Ok(())
}
