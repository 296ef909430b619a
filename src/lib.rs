pub mod pexels;

pub use pexels::{
    Client, CuratedResult, Error, PHOTO_API, Photo, PhotoSize, PhotoSource, PopularVideo, Result,
    SearchResult, VIDEO_API, Video, VideoFile, VideoPicture, VideoSearchResult, VideoUser,
};
