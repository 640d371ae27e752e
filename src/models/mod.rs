mod game;

pub use game::{normalize_title, Game, GENRE_COLUMNS, GENRE_COUNT};
