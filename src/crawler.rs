use async_trait::async_trait;

use crate::video::{Video, VideoKind};

/// A source that looks up metadata for videos
///
/// Each method fills in whatever the source knows about `video` and leaves
/// the rest untouched. Nothing is returned; an implementation that needs to
/// report failures has to do so through its own channel.
#[async_trait]
pub trait Crawler: Send + Sync {
    /// Look up a movie
    async fn find_movie(&self, video: &mut Video);

    /// Look up a TV series
    async fn find_series(&self, video: &mut Video);

    /// Look up an anime
    async fn find_anime(&self, video: &mut Video);

    /// Look up `video` according to its kind
    async fn find(&self, video: &mut Video) {
        match video.kind {
            VideoKind::Movie => self.find_movie(video).await,
            VideoKind::Series => self.find_series(video).await,
            VideoKind::Anime => self.find_anime(video).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticCrawler;

    #[async_trait]
    impl Crawler for StaticCrawler {
        async fn find_movie(&self, video: &mut Video) {
            video.year = Some(1982);
            video.set_metadata("source", "movie");
        }

        async fn find_series(&self, video: &mut Video) {
            video.set_metadata("source", "series");
        }

        async fn find_anime(&self, video: &mut Video) {
            video.original_title = Some("AKIRA".to_string());
            video.set_metadata("source", "anime");
        }
    }

    #[tokio::test]
    async fn test_find_dispatches_on_kind() {
        let crawler = StaticCrawler;

        let mut movie = Video::movie("Blade Runner");
        crawler.find(&mut movie).await;
        assert_eq!(movie.year, Some(1982));
        assert_eq!(movie.metadata["source"], "movie");

        let mut series = Video::series("Dark").episode(2, 1);
        crawler.find(&mut series).await;
        assert_eq!(series.metadata["source"], "series");
        assert_eq!(series.year, None);

        let mut anime = Video::anime("Akira");
        crawler.find(&mut anime).await;
        assert_eq!(anime.original_title.as_deref(), Some("AKIRA"));
    }

    #[tokio::test]
    async fn test_crawlers_as_trait_objects() {
        let crawlers: Vec<Box<dyn Crawler>> =
            vec![Box::new(StaticCrawler), Box::new(StaticCrawler)];
        let mut video = Video::movie("Alien");
        for crawler in &crawlers {
            crawler.find_movie(&mut video).await;
        }
        assert_eq!(video.metadata.len(), 1);
    }
}
