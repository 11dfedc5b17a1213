pub mod snapshot;

pub use snapshot::{
    ColumnSnapshot, GameSnapshot, SubmissionSnapshot, TileSnapshot, UPCOMING_PREVIEW_LEN,
};
