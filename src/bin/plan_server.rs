use stage_light_planner::server::{handle_line, PlannerConfig, ServerState};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // stdout carries protocol frames, logs go to stderr
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let config = PlannerConfig::from_env()?;
    log::info!("Starting plan server (max beam alpha {})", config.max_beam_alpha);

    let mut state = ServerState::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&mut state, &line);
        if let Some(error) = &response.error {
            log::warn!("Request failed ({}): {}", error.code, error.message);
        }

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}
