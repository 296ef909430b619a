pub mod photo;
pub mod video;

pub use photo::{CuratedResult, Photo, PhotoSize, PhotoSource, SearchResult};
pub use video::{PopularVideo, Video, VideoFile, VideoPicture, VideoSearchResult, VideoUser};
