// src/domain/song/entity.rs

/// A song known to the catalogue. `reference` is the external identifier of
/// the underlying audio source and is unique across the catalogue.
#[derive(Debug, Clone)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub reference: String,
}

#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub reference: String,
}
