use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use crossy_road::simulation::{
    parse_move_script, AsciiSurface, FixedTimestep, Game, GameConfig, GameWorld,
};

#[derive(Parser)]
#[command(name = "crossy_road")]
#[command(about = "Chicken-crosses-the-road game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of frames to run in headless mode
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Time between frames in milliseconds
    #[arg(long, default_value = "16.0")]
    frame_ms: f64,

    /// Seed for reproducible lane generation
    #[arg(long)]
    seed: Option<u64>,

    /// Scripted moves for headless mode, e.g. "fffl" or "forward,left"
    #[arg(long)]
    moves: Option<String>,

    /// Frames between scripted moves (0 queues them all up front)
    #[arg(long, default_value = "15")]
    move_every: u64,

    /// Number of columns on the board
    #[arg(long, default_value = "17")]
    columns: usize,

    /// Duration of one step in milliseconds
    #[arg(long, default_value = "200.0")]
    step_time: f64,

    /// Lanes kept generated ahead of the player
    #[arg(long, default_value = "9")]
    lookahead: usize,

    /// Hold the game over state instead of restarting immediately
    #[arg(long)]
    pause_on_game_over: bool,

    /// Print the board every N frames in headless mode (0 disables)
    #[arg(long, default_value = "60")]
    print_every: u64,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            columns: self.columns,
            step_time_ms: self.step_time,
            lookahead_lanes: self.lookahead,
            pause_on_game_over: self.pause_on_game_over,
            ..GameConfig::default()
        }
    }

    fn build_world(&self) -> Result<GameWorld> {
        let config = self.game_config();
        match self.seed {
            Some(seed) => GameWorld::new_with_seed(config, seed),
            None => GameWorld::new(config),
        }
        .context("Invalid game configuration")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(cli.build_world()?);
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_headless(&cli)
}

/// Run a game in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    let world = cli.build_world()?;
    let moves = match cli.moves.as_deref() {
        Some(script) => parse_move_script(script)?,
        None => Vec::new(),
    };

    info!("Running crossy road in headless mode...");
    info!(
        "Frames: {}, frame time: {}ms, scripted moves: {}",
        cli.frames,
        cli.frame_ms,
        moves.len()
    );

    let timing = FixedTimestep::new(cli.frame_ms).with_frame_limit(cli.frames);
    let mut game = Game::initialize(world, AsciiSurface::new(cli.print_every), timing)?;

    let input = game.input_sender();
    let mut script = moves.into_iter();
    if cli.move_every == 0 {
        for direction in script.by_ref() {
            input.send(direction).context("Input channel closed")?;
        }
    }

    let mut frame = 0u64;
    loop {
        if cli.move_every > 0 && frame % cli.move_every == 0 {
            if let Some(direction) = script.next() {
                input.send(direction).context("Input channel closed")?;
            }
        }

        let Some(report) = game.run_frame()? else {
            break;
        };
        if let Some(collision) = report.collision {
            info!(
                "Hit on lane {} at frame {}, final score {}",
                collision.lane, frame, collision.final_score
            );
        }
        frame += 1;
    }

    println!("=== Final State ===");
    game.world().print_summary();
    game.world().draw_map();

    let summary = game.summary();
    game.cleanup();

    info!("=== SESSION COMPLETE ===");
    info!("Frames run: {}", summary.frames);
    info!("Final score: {}", summary.final_score);
    info!("Best score: {}", summary.best_score);
    info!("Games played: {}", summary.games_played);
    info!("Collisions: {}", summary.collisions);
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(world: GameWorld) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Crossy Road UI...");
    println!();
    println!("Controls:");
    println!("  Arrow keys  - Move the chicken");
    println!("  Swipe       - Move the chicken (touch screens)");
    println!("  R           - Restart after a game over");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,crossy_road=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Crossy Road".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(crossy_road::ui::GameWorldResource(world))
        .add_plugins(crossy_road::ui::CrossyRoadUIPlugin)
        .run();
}
