use rusty_discs::args::types::{Args, Command, args_checks};
use rusty_discs::controller::profile;
use rusty_discs::db::SqliteStore;
use rusty_discs::hdcp::display::display_index;
use rusty_discs::model::RoundResult;
use rusty_discs::view::report;

fn main() {
    let args = args_checks();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SqliteStore::open(&args.db_name)?;

    if let Some(scripts) = &args.db_startup_script {
        for file in scripts.split(';') {
            let sql = std::fs::read_to_string(file)?;
            store.run_startup_script(&sql)?;
        }
    }

    match args.command {
        Command::Record {
            player,
            course,
            score,
            par,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let round = RoundResult::new(score, par, course, date);
            let updated = profile::record_round(&mut store, &player, &round)?;
            println!(
                "{player}: {} rounds on record, HDCP {}",
                updated.stats.total_rounds,
                display_index(updated.stats.handicap, &updated.window)
            );
        }
        Command::Report { player } => {
            let data = profile::report(&store, &player)?;
            print!("{}", report::render_report(&data));
        }
        Command::Matchup { player_a, player_b } => {
            let data = profile::matchup(&store, &player_a, &player_b)?;
            println!("{}", report::render_matchup(&data));
        }
        Command::Import { file } => {
            let imported = profile::import_rounds(&mut store, &file)?;
            println!("imported {imported} rounds");
        }
        Command::Reset { player } => {
            profile::reset(&mut store, &player)?;
            println!("cleared round history and stats for {player}");
        }
        Command::Players => {
            let listings = store.list_players()?;
            print!("{}", report::render_players(&listings));
        }
    }

    Ok(())
}
