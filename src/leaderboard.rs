//! Local leaderboard
//!
//! Persisted to LocalStorage as a plain JSON array of entries, kept sorted
//! descending by score and capped at the top 10.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// Name stored when the player submits a blank one
pub const ANONYMOUS: &str = "Anonymous";

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// The leaderboard. Serializes transparently as a JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "otter_river_leaderboard";

    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a score, keeping descending order and the size cap.
    ///
    /// A blank or whitespace-only name is stored as [`ANONYMOUS`]. New entries
    /// land after existing ones with the same score. Returns the 1-indexed
    /// rank achieved, or None if the entry fell straight off the end.
    pub fn submit(&mut self, name: &str, score: u32) -> Option<usize> {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() { ANONYMOUS } else { trimmed };

        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            pos,
            LeaderboardEntry {
                name: name.to_owned(),
                score,
            },
        );
        self.entries.truncate(MAX_ENTRIES);

        (pos < MAX_ENTRIES).then_some(pos + 1)
    }

    /// The top `n` entries (fewer if the board is short)
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..self.entries.len().min(n)]
    }

    /// "name: score" lines for the start preview and the game-over panel
    pub fn render_top(&self, n: usize) -> Vec<String> {
        self.top(n)
            .iter()
            .map(|e| format!("{}: {}", e.name, e.score))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a stored board; anything malformed is an empty board
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Serialize for storage. Falls back to an empty array string, which
    /// round-trips to an empty board.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let board = Self::from_json(&json);
                log::info!("Loaded {} leaderboard entries", board.entries.len());
                return board;
            }
        }

        log::info!("No leaderboard found, starting fresh");
        Self::new()
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Leaderboard saved ({} entries)", self.entries.len());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keeps_descending_order() {
        let mut board = Leaderboard::new();
        board.submit("a", 5);
        board.submit("b", 20);
        board.submit("c", 10);

        let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![20, 10, 5]);
    }

    #[test]
    fn test_eleven_submissions_keep_the_top_ten() {
        let mut board = Leaderboard::new();
        for score in 1..=11 {
            board.submit("player", score);
        }

        assert_eq!(board.entries.len(), MAX_ENTRIES);
        let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);

        // The lowest score no longer ranks
        assert_eq!(board.submit("late", 0), None);
        assert_eq!(board.entries.len(), MAX_ENTRIES);
    }

    #[test]
    fn test_blank_names_become_anonymous() {
        let mut board = Leaderboard::new();
        board.submit("", 3);
        board.submit("   ", 7);
        assert_eq!(board.entries[0].name, ANONYMOUS);
        assert_eq!(board.entries[1].name, ANONYMOUS);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let mut board = Leaderboard::new();
        board.submit("first", 10);
        board.submit("second", 10);
        assert_eq!(board.entries[0].name, "first");
        assert_eq!(board.entries[1].name, "second");
    }

    #[test]
    fn test_rank_is_one_indexed() {
        let mut board = Leaderboard::new();
        assert_eq!(board.submit("a", 5), Some(1));
        assert_eq!(board.submit("b", 20), Some(1));
        assert_eq!(board.submit("c", 1), Some(3));
    }

    #[test]
    fn test_render_top_formatting() {
        let mut board = Leaderboard::new();
        board.submit("otter", 12);
        board.submit("", 30);

        let lines = board.render_top(5);
        assert_eq!(lines, vec!["Anonymous: 30", "otter: 12"]);
        assert_eq!(board.render_top(1).len(), 1);
    }

    #[test]
    fn test_storage_shape_is_a_json_array() {
        let mut board = Leaderboard::new();
        board.submit("otter", 12);

        let json = board.to_json();
        assert!(json.starts_with('['), "got {json}");
        assert_eq!(json, r#"[{"name":"otter","score":12}]"#);

        let back = Leaderboard::from_json(&json);
        assert_eq!(back.entries, board.entries);
    }

    #[test]
    fn test_malformed_storage_reads_as_empty() {
        assert!(Leaderboard::from_json("").is_empty());
        assert!(Leaderboard::from_json("not json").is_empty());
        assert!(Leaderboard::from_json(r#"{"name":"x"}"#).is_empty());
    }
}
