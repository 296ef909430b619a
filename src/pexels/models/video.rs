use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearchResult {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u32,
    pub url: String,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularVideo {
    pub page: u32,
    pub per_page: u32,
    pub total_results: u32,
    pub url: String,
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub image: String,
    /// Shape is not documented by the API, kept as raw JSON.
    pub full_res: Option<Value>,
    pub duration: f64,
    pub user: VideoUser,
    pub video_files: Vec<VideoFile>,
    pub video_pictures: Vec<VideoPicture>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoUser {
    pub id: u64,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoFile {
    pub id: u64,
    pub quality: Option<String>,
    pub file_type: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    pub nr: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIDEO: &str = r#"{
        "id": 2499611,
        "width": 1080,
        "height": 1920,
        "url": "https://www.pexels.com/video/2499611/",
        "image": "https://images.pexels.com/videos/2499611/free-video-2499611.jpg?fit=crop&w=1200&h=630&auto=compress&cs=tinysrgb",
        "full_res": null,
        "tags": [],
        "duration": 22,
        "user": {
            "id": 680589,
            "name": "Joey Farina",
            "url": "https://www.pexels.com/@joey"
        },
        "video_files": [
            {
                "id": 125004,
                "quality": "hd",
                "file_type": "video/mp4",
                "width": 1080,
                "height": 1920,
                "fps": 23.976,
                "link": "https://player.vimeo.com/external/342571552.hd.mp4?s=6aa6f164de3812abadff3dde86d19f7a074a8a66&profile_id=175&oauth2_token_id=57447761"
            },
            {
                "id": 125008,
                "quality": null,
                "file_type": "video/mp4",
                "width": null,
                "height": null,
                "link": "https://player.vimeo.com/external/342571552.m3u8?s=53433233e4176eead03ddd6fea04d9082b23c7ab&oauth2_token_id=57447761"
            }
        ],
        "video_pictures": [
            {
                "id": 308178,
                "picture": "https://static-videos.pexels.com/videos/2499611/pictures/preview-0.jpg",
                "nr": 0
            },
            {
                "id": 308179,
                "picture": "https://static-videos.pexels.com/videos/2499611/pictures/preview-1.jpg",
                "nr": 1
            }
        ]
    }"#;

    #[test]
    fn decodes_video() {
        let video: Video = serde_json::from_str(VIDEO).unwrap();

        assert_eq!(video.id, 2499611);
        assert_eq!(video.duration, 22.0);
        assert_eq!(video.full_res, None);
        assert_eq!(video.user.name, "Joey Farina");
        assert_eq!(video.video_files.len(), 2);
        assert_eq!(video.video_files[0].quality.as_deref(), Some("hd"));
        assert_eq!(video.video_files[1].width, None);
        assert_eq!(video.video_pictures[1].nr, 1);
    }

    #[test]
    fn full_res_accepts_any_shape() {
        let video: Video =
            serde_json::from_str(r#"{"id": 1, "full_res": {"w": 3840, "h": 2160}}"#).unwrap();

        assert_eq!(video.full_res, Some(serde_json::json!({"w": 3840, "h": 2160})));
    }

    #[test]
    fn reencoding_keeps_known_fields() {
        let video: Video = serde_json::from_str(VIDEO).unwrap();

        let encoded = serde_json::to_value(&video).unwrap();
        assert_eq!(encoded["video_files"][0]["file_type"], "video/mp4");
        assert_eq!(encoded["video_pictures"][0]["picture"], video.video_pictures[0].picture.as_str());

        let decoded: Video = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, video);
    }

    #[test]
    fn decodes_popular_page() {
        let body = format!(
            r#"{{"page": 7, "per_page": 1, "total_results": 1000, "url": "https://api-videos.pexels.com/popular-videos", "videos": [{VIDEO}]}}"#
        );
        let result: PopularVideo = serde_json::from_str(&body).unwrap();

        assert_eq!(result.page, 7);
        assert_eq!(result.videos.len(), 1);
        assert_eq!(result.next_page, None);
    }
}
