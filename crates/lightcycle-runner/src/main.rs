use lightcycle_core::config::GameConfig;
use lightcycle_core::frontend::HeadlessFrontend;
use lightcycle_core::pilot::pilot_by_name;
use lightcycle_core::player::default_players;
use lightcycle_core::{Game, PlayerFactory};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GameConfig::load();
    tracing::info!(?config, "starting match");

    let headless = config.headless;
    let tick_rate = config.tick_rate;
    let max_ticks = config.max_ticks;

    // Pilots attach inside the factory so every respawned pair gets fresh
    // ones. An unknown name leaves the seat human-controlled.
    let base = default_players(&config);
    let names = [config.pilot_one.clone(), config.pilot_two.clone()];
    let spawn: PlayerFactory = Box::new(move || {
        let mut players = base();
        for (seat, name) in names.iter().enumerate() {
            if let Some(name) = name {
                match pilot_by_name(name) {
                    Some(pilot) => players[seat].pilot = Some(pilot),
                    None => tracing::warn!(%name, seat, "unknown pilot name"),
                }
            }
        }
        players
    });

    let mut game = Game::with_factory(config, spawn);

    let mut frontend = HeadlessFrontend::new();
    if let Some(budget) = max_ticks {
        frontend = frontend.with_tick_budget(budget);
    }
    if !headless {
        frontend = frontend.paced(tick_rate);
    }

    game.run(&mut frontend);

    let [p1, p2] = game.scores();
    tracing::info!(p1, p2, "match finished");
}
