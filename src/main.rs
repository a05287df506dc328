//! Court Ball entry point
//!
//! Headless runner: fires the start gesture, runs a fixed number of ticks and
//! prints one JSON render frame per tick.

use std::path::PathBuf;

use court_ball::render;
use court_ball::settings::Settings;
use court_ball::sim::{SimState, TickInput, start_gesture, tick};

/// Command line options
#[derive(Debug)]
struct Options {
    settings: Option<PathBuf>,
    ticks: u64,
    restart_at: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            settings: None,
            // 1.5 s at 60 Hz
            ticks: 90,
            restart_at: None,
        }
    }
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--settings" => opts.settings = Some(PathBuf::from(value()?)),
            "--ticks" => {
                opts.ticks = value()?
                    .parse()
                    .map_err(|e| format!("bad --ticks: {e}"))?
            }
            "--restart-at" => {
                opts.restart_at = Some(
                    value()?
                        .parse()
                        .map_err(|e| format!("bad --restart-at: {e}"))?,
                )
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

fn main() {
    env_logger::init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: court-ball [--settings PATH] [--ticks N] [--restart-at N]");
            std::process::exit(2);
        }
    };

    let settings = Settings::load(opts.settings.as_deref());
    if let Err(e) = settings.validate() {
        // Degenerate settings still run; they just behave oddly
        log::warn!("{e}");
    }

    log::info!(
        "Court Ball starting: {} ticks at {} Hz nominal, angle mode {}",
        opts.ticks,
        settings.tick_rate,
        settings.angle_mode.as_str()
    );

    let mut state = SimState::new(&settings.launch);
    start_gesture(&mut state, &settings);

    for n in 0..opts.ticks {
        let input = TickInput {
            restart: opts.restart_at == Some(n),
            ..Default::default()
        };
        tick(&mut state, &input, &settings);

        match serde_json::to_string(&render::frame(&state)) {
            Ok(line) => println!("{line}"),
            Err(e) => log::error!("Failed to encode frame: {e}"),
        }
    }

    log::info!(
        "Finished at ({:.3}, {:.3}) after {} ticks",
        state.ball.pos.x,
        state.ball.pos.y,
        state.time_ticks
    );
}
