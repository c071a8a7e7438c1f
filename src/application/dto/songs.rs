use crate::domain::song::Song;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongDto {
    pub id: i64,
    pub title: String,
    pub reference: String,
}

impl From<Song> for SongDto {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            title: song.title,
            reference: song.reference,
        }
    }
}
