use std::time::Duration;

use serde::Deserialize;
use subrobot::{Client, Crawler, Video};

#[derive(Debug, Deserialize)]
struct Slideshow {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SlideshowEnvelope {
    slideshow: Slideshow,
}

/// Crawler that only tags what it was asked for
struct EchoCrawler;

#[subrobot::async_trait]
impl Crawler for EchoCrawler {
    async fn find_movie(&self, video: &mut Video) {
        video.set_metadata("looked_up", "movie");
    }

    async fn find_series(&self, video: &mut Video) {
        video.set_metadata("looked_up", "series");
    }

    async fn find_anime(&self, video: &mut Video) {
        video.set_metadata("looked_up", "anime");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("subrobot-demo/0.1")
        .build()?;

    println!("=== GET + JSON ===");
    let envelope: SlideshowEnvelope = client
        .get("https://httpbin.org/json")
        .invoke()
        .await
        .json()
        .await?;
    println!("Title: {}", envelope.slideshow.title);

    println!("\n=== POST form, body to stdout ===");
    let mut stdout = tokio::io::stdout();
    let written = client
        .post_form("https://httpbin.org/post", [("q", "alien"), ("year", "1979")])
        .invoke()
        .await
        .write_to(&mut stdout)
        .await?;
    println!("\n{} bytes", written);

    println!("\n=== Status policy ===");
    match client.get("https://httpbin.org/status/404").invoke().await.discard().await {
        Ok(()) => println!("Unexpected success"),
        Err(e) => println!("Expected error: {}", e),
    }

    println!("\n=== Crawler ===");
    let mut video = Video::series("Dark").episode(1, 1);
    EchoCrawler.find(&mut video).await;
    println!("{:?}", video.metadata);

    Ok(())
}
