use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::AppError;
use crate::model::{PlayerProfile, ProfileStats, RecentWindow, RoundResult, WINDOW_CAPACITY};

pub const TABLES_AND_CREATE_SQL: &[(&str, &str)] = &[
    ("player", include_str!("sql/schema/sqlite/00_player.sql")),
    ("round", include_str!("sql/schema/sqlite/01_round.sql")),
];

/// Thin profile store. The full round history stays in the `round` table;
/// the handicap window is just the newest `WINDOW_CAPACITY` rows of it.
/// Cached stats on the `player` row are rewritten in the same transaction
/// as every round insert, and cleared in the same transaction as a reset.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// # Errors
    ///
    /// Will return `Err` if the database cannot be opened or the schema
    /// bootstrap fails.
    pub fn open(db_name: &str) -> Result<Self, AppError> {
        let conn = if db_name == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(db_name)?
        };
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn ensure_schema(&self) -> Result<(), AppError> {
        for (_table, create_sql) in TABLES_AND_CREATE_SQL {
            self.conn.execute_batch(create_sql)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the script fails to execute.
    pub fn run_startup_script(&self, script: &str) -> Result<(), AppError> {
        self.conn.execute_batch(script)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the database query fails or a stored date
    /// does not parse.
    pub fn load_profile(&self, name: &str) -> Result<Option<PlayerProfile>, AppError> {
        let stats = self
            .conn
            .query_row(
                "SELECT hdcp, total_rounds, best_score, avg_score FROM player WHERE name = ?1",
                params![name],
                |row| {
                    Ok(ProfileStats {
                        handicap: row.get(0)?,
                        total_rounds: row.get(1)?,
                        best_score: row.get(2)?,
                        avg_score: row.get(3)?,
                    })
                },
            )
            .optional()?;

        let Some(stats) = stats else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(
            "SELECT course, score, par, played_on FROM round
             WHERE player_name = ?1
             ORDER BY round_id DESC
             LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![name, WINDOW_CAPACITY as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<i64>>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut rounds = Vec::new();
        for row in rows {
            let (course, score, par, played_on) = row?;
            let date = parse_stored_date(&played_on)?;
            rounds.push(RoundResult {
                score,
                par,
                course,
                date,
            });
        }

        Ok(Some(PlayerProfile {
            name: name.to_string(),
            window: RecentWindow::from_rounds(rounds),
            stats,
        }))
    }

    /// Inserts the round and rewrites the player's cached stats in one
    /// transaction, then returns the updated profile.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement in the transaction fails.
    pub fn record_round(
        &mut self,
        name: &str,
        round: &RoundResult,
    ) -> Result<PlayerProfile, AppError> {
        let mut profile = self
            .load_profile(name)?
            .unwrap_or_else(|| PlayerProfile::new(name));
        profile.apply_round(round.clone());

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO player (name, hdcp, total_rounds, best_score, avg_score)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(name) DO UPDATE SET
                 hdcp = excluded.hdcp,
                 total_rounds = excluded.total_rounds,
                 best_score = excluded.best_score,
                 avg_score = excluded.avg_score",
            params![
                name,
                profile.stats.handicap,
                profile.stats.total_rounds,
                profile.stats.best_score,
                profile.stats.avg_score,
            ],
        )?;
        tx.execute(
            "INSERT INTO round (player_name, course, score, par, played_on)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                name,
                round.course,
                round.score,
                round.par,
                round.date.to_string(),
            ],
        )?;
        tx.commit()?;

        Ok(profile)
    }

    /// All-or-nothing history wipe: rounds and cached stats go in the same
    /// transaction, so a reader can never see a cleared window with a
    /// stale index.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the player is unknown or a statement fails.
    pub fn reset_player(&mut self, name: &str) -> Result<(), AppError> {
        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE player SET hdcp = NULL, total_rounds = 0,
                 best_score = NULL, avg_score = NULL
             WHERE name = ?1",
            params![name],
        )?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("player '{name}'")));
        }
        tx.execute("DELETE FROM round WHERE player_name = ?1", params![name])?;
        tx.commit()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn list_players(&self) -> Result<Vec<PlayerListing>, AppError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, hdcp, total_rounds FROM player ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            Ok(PlayerListing {
                name: row.get(0)?,
                handicap: row.get(1)?,
                total_rounds: row.get(2)?,
            })
        })?;

        let mut listings = Vec::new();
        for row in rows {
            listings.push(row?);
        }
        Ok(listings)
    }
}

#[derive(Debug, Clone)]
pub struct PlayerListing {
    pub name: String,
    pub handicap: Option<f64>,
    pub total_rounds: i64,
}

fn parse_stored_date(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| AppError::Parse(format!("bad stored date '{text}': {e}")))
}
