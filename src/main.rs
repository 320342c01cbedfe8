//! Snooker Aim entry point
//!
//! Sets up a session from the command line and prints the shot report.

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use snooker_aim::session::BallSelection;
use snooker_aim::{Config, Point, Session, ShotReport};

#[derive(Parser)]
#[command(
    name = "snooker-aim",
    version,
    about = "Snooker cut-angle aiming aid",
    long_about = "Compute the cut angle, ghost ball, contact point and aiming \
                  reference for a cue ball, object ball and pocket."
)]
struct Cli {
    /// Configuration JSON (standard snooker table when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start from a preset scenario.
    #[arg(long, value_name = "ID")]
    scenario: Option<String>,

    /// Object ball selection: all, red, yellow, green, brown, blue, pink, black.
    #[arg(long, value_name = "COLOR", value_parser = parse_selection)]
    color: Option<BallSelection>,

    /// Cue ball position in mm.
    #[arg(long, value_name = "X,Y")]
    cue: Option<Point>,

    /// Object ball position in mm. Unlocks the object ball.
    #[arg(long, value_name = "X,Y")]
    object: Option<Point>,

    /// Target pocket id.
    #[arg(long, value_name = "ID")]
    pocket: Option<String>,

    /// Seed for random red placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_selection(s: &str) -> Result<BallSelection, String> {
    BallSelection::from_key(s).ok_or_else(|| format!("unknown ball '{}'", s))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::debug!("Red placement seed {}", seed);

    let mut session = Session::new(Rc::new(config), seed)?;

    if let Some(id) = &cli.scenario {
        if !session.load_scenario(id) {
            return Err(format!("unknown scenario '{}'", id).into());
        }
    }
    if let Some(selection) = cli.color {
        session.set_selected_colored_balls(selection);
    }
    if let Some(cue) = cli.cue {
        session.set_cue_ball_position(cue.x, cue.y);
    }
    if let Some(object) = cli.object {
        if session.object_ball().locked {
            session.toggle_object_ball_lock();
        }
        session.set_object_ball_position(object.x, object.y);
    }
    if let Some(id) = &cli.pocket {
        session.config().require_pocket(id)?;
        session.set_selected_pocket(id);
    }

    let report = ShotReport::compute(&session)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
