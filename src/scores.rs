//! Persistent high-score table for the arcade mode.
//!
//! Scores live in `saves/high_scores.json` as a plain JSON array of integers.
//! The table keeps at most [`HIGH_SCORE_CAP`] entries, sorted descending with
//! duplicates collapsed.  A missing or unreadable file yields an empty table;
//! corruption never aborts the game.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;

use crate::constants::HIGH_SCORE_CAP;

/// UI request to wipe the persisted table back to five zero entries.
#[derive(Message, Debug, Clone, Copy)]
pub struct HighScoreResetRequest;

/// The in-memory high-score table, mirrored to disk on every change.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<u32>,
}

impl HighScoreTable {
    pub fn new(entries: Vec<u32>) -> Self {
        let mut table = Self { entries };
        table.normalize();
        table
    }

    /// Entries sorted descending, at most [`HIGH_SCORE_CAP`] of them.
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Record a finished session's score.  Returns `true` if the table
    /// changed (the score was new and ranked inside the cap).
    pub fn submit(&mut self, score: u32) -> bool {
        if self.entries.contains(&score) {
            return false;
        }
        let before = self.entries.clone();
        self.entries.push(score);
        self.normalize();
        self.entries != before
    }

    /// Replace the table with [`HIGH_SCORE_CAP`] zero entries.
    ///
    /// Zeros are a deliberate exception to deduplication: the reset state is
    /// a full table of placeholder rows, not a single entry.
    pub fn reset(&mut self) {
        self.entries = vec![0; HIGH_SCORE_CAP];
    }

    fn normalize(&mut self) {
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.dedup();
        self.entries.truncate(HIGH_SCORE_CAP);
    }
}

pub struct ScoresPlugin;

impl Plugin for ScoresPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_table())
            .add_message::<HighScoreResetRequest>()
            .add_systems(Update, handle_reset_requests_system);
    }
}

fn scores_path() -> PathBuf {
    PathBuf::from("saves").join("high_scores.json")
}

/// Decode a JSON score array, dropping anything malformed.
fn parse_table(contents: &str) -> Option<HighScoreTable> {
    serde_json::from_str::<Vec<u32>>(contents)
        .ok()
        .map(HighScoreTable::new)
}

/// Load the persisted table; missing or corrupt files yield an empty table.
pub fn load_table() -> HighScoreTable {
    let path = scores_path();
    match fs::read_to_string(&path) {
        Ok(contents) => match parse_table(&contents) {
            Some(table) => table,
            None => {
                warn!("{} is corrupt; starting with an empty table", path.display());
                HighScoreTable::default()
            }
        },
        Err(_) => HighScoreTable::default(),
    }
}

/// Write the table to disk as a JSON integer array.
pub fn persist_table(table: &HighScoreTable) -> Result<(), String> {
    fs::create_dir_all("saves").map_err(|err| format!("failed to create save dir: {err}"))?;

    let serialized = serde_json::to_string(table.entries())
        .map_err(|err| format!("failed to serialize high scores: {err}"))?;

    let path = scores_path();
    fs::write(&path, serialized)
        .map_err(|err| format!("failed to write {}: {err}", path.display()))
}

pub fn handle_reset_requests_system(
    mut requests: MessageReader<HighScoreResetRequest>,
    mut table: ResMut<HighScoreTable>,
) {
    for _ in requests.read() {
        table.reset();
        match persist_table(&table) {
            Ok(()) => info!("high-score table reset"),
            Err(err) => error!("failed to persist high-score reset: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_keeps_entries_sorted_descending() {
        let mut table = HighScoreTable::default();
        table.submit(40);
        table.submit(120);
        table.submit(75);
        assert_eq!(table.entries(), &[120, 75, 40]);
    }

    #[test]
    fn submit_ignores_duplicates() {
        let mut table = HighScoreTable::new(vec![120, 75, 40]);
        assert!(!table.submit(75));
        assert_eq!(table.entries(), &[120, 75, 40]);
    }

    #[test]
    fn submit_truncates_at_cap() {
        let mut table = HighScoreTable::new(vec![50, 40, 30, 20, 10]);
        assert!(table.submit(60));
        assert_eq!(table.entries(), &[60, 50, 40, 30, 20]);
        assert!(!table.submit(5));
        assert_eq!(table.entries().len(), HIGH_SCORE_CAP);
    }

    #[test]
    fn submit_below_a_full_table_changes_nothing() {
        let mut table = HighScoreTable::new(vec![50, 40, 30, 20, 10]);
        assert!(!table.submit(5));
        assert_eq!(table.entries(), &[50, 40, 30, 20, 10]);
    }

    #[test]
    fn reset_yields_five_zeros() {
        let mut table = HighScoreTable::new(vec![120, 75, 40]);
        table.reset();
        assert_eq!(table.entries(), &[0; 5]);
    }

    #[test]
    fn new_normalizes_arbitrary_input() {
        let table = HighScoreTable::new(vec![10, 99, 10, 3, 99, 50, 42, 7]);
        assert_eq!(table.entries(), &[99, 50, 42, 10, 7]);
    }

    #[test]
    fn parse_tolerates_garbage() {
        assert!(parse_table("not json").is_none());
        assert!(parse_table("{\"scores\": []}").is_none());
        assert_eq!(
            parse_table("[30, 10, 20]"),
            Some(HighScoreTable::new(vec![30, 20, 10]))
        );
    }

    #[test]
    fn round_trips_through_json() {
        let table = HighScoreTable::new(vec![120, 75, 40]);
        let json = serde_json::to_string(table.entries()).unwrap();
        assert_eq!(parse_table(&json), Some(table));
    }
}
