use crate::library::TrackId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("no track with id {0}")]
    NotFound(TrackId),
    #[error("position {position} is outside the track list (len {len})")]
    PositionOutOfRange { position: usize, len: usize },
}
