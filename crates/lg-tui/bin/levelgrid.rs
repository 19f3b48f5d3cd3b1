//! levelgrid: generate and explore grid-partitioned dungeon floors
//!
//! Main entry point for the viewer.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use lg_core::{LevelConfig, LevelRng, generate_level};
use lg_tui::{App, Theme};

/// Grid-partitioned dungeon floor generator
#[derive(Parser, Debug)]
#[command(name = "levelgrid")]
#[command(author, version, about = "Generate and explore dungeon floors", long_about = None)]
struct Args {
    /// Seed for the first floor (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with a level configuration
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Floor width in tiles
    #[arg(long = "width")]
    width: Option<i32>,

    /// Floor height in tiles
    #[arg(long = "height")]
    height: Option<i32>,

    /// Room grid columns
    #[arg(long = "grid-x")]
    grid_x: Option<i32>,

    /// Room grid rows
    #[arg(long = "grid-y")]
    grid_y: Option<i32>,

    /// Room density
    #[arg(long = "density")]
    density: Option<i32>,

    /// Print the floor as ASCII and exit
    #[arg(long = "print", conflicts_with = "json")]
    print: bool,

    /// Print the floor as JSON and exit
    #[arg(long = "json")]
    json: bool,

    /// Write logs to this file while the viewer is open
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn interactive(&self) -> bool {
        !self.print && !self.json
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = load_config(&args)?;
    let seed = args.seed.unwrap_or_else(|| LevelRng::from_entropy().seed());
    info!(seed, "starting");

    if !args.interactive() {
        let level = generate_level(&config, &mut LevelRng::new(seed))
            .with_context(|| format!("failed to generate a floor from seed {seed}"))?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&level)?);
        } else {
            println!("seed {seed}");
            print!("{}", level.render_ascii());
        }
        return Ok(());
    }

    let app = App::new(config, seed, Theme::default())
        .with_context(|| format!("failed to generate a floor from seed {seed}"))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

/// Logs go to stderr when printing, and to `--log-file` (or nowhere) while
/// the alternate screen is up.
fn init_tracing(args: &Args) -> anyhow::Result<()> {
    let env_filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if !args.interactive() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    }
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<LevelConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => LevelConfig::default(),
    };

    if let Some(width) = args.width {
        config.floor_width = width;
    }
    if let Some(height) = args.height {
        config.floor_height = height;
    }
    if let Some(grid_x) = args.grid_x {
        config.room_grid_x = grid_x;
    }
    if let Some(grid_y) = args.grid_y {
        config.room_grid_y = grid_y;
    }
    if let Some(density) = args.density {
        config.room_density = density;
    }

    config.validate().context("invalid level configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<LevelConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
