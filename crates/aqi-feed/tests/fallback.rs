// File: crates/aqi-feed/tests/fallback.rs
// Purpose: An unreachable feed degrades to generator output tagged `Source::Synthetic`.

use std::sync::Arc;
use std::time::Duration;

use aqi_core::{calculate_aqi, CityTable, Generator, PollutantReading, SeasonPolicy};
use aqi_feed::{Feed, FeedClient, Source};
use chrono::Local;

fn unreachable_feed() -> Feed {
    // Port 9 (discard) is closed on test hosts, so connects are refused quickly.
    let client = FeedClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
    Feed::new(Some(client), Arc::new(CityTable::builtin().unwrap()), SeasonPolicy::default())
}

#[tokio::test]
async fn forecast_falls_back_to_generator() {
    let feed = unreachable_feed();
    let got = feed.forecast("Delhi").await;
    assert_eq!(got.source, Source::Synthetic);

    let table = CityTable::builtin().unwrap();
    let want = Generator::new(&table).forecast(168, "Delhi");
    assert_eq!(got.data, want);
    assert_eq!(got.data[0].aqi, 235);
}

#[tokio::test]
async fn hourly_fallback_is_seeded_from_the_forecast_day() {
    let feed = unreachable_feed();
    let forecast = feed.forecast("Mumbai").await.into_inner();
    let day = forecast[2].date;
    let got = feed.hourly("Mumbai", day, &forecast).await;
    assert_eq!(got.source, Source::Synthetic);
    assert_eq!(got.data.len(), 24);

    let table = CityTable::builtin().unwrap();
    assert_eq!(got.data, Generator::new(&table).hourly(forecast[2].aqi, "Mumbai"));
}

#[tokio::test]
async fn city_list_covers_every_city() {
    let got = unreachable_feed().city_readings().await;
    assert_eq!(got.source, Source::Synthetic);
    assert_eq!(got.data.len(), 25);
    assert!(got.data.iter().all(|r| r.source == "Synthetic"));
}

#[tokio::test]
async fn calculator_falls_back_to_local_formula() {
    let reading = PollutantReading { pm25: 35.4, ..Default::default() };
    let got = unreachable_feed().calculate(&reading).await;
    assert_eq!(got.source, Source::Synthetic);
    assert_eq!(got.data, calculate_aqi(&reading));
    assert_eq!(got.data.aqi, 100);
}

#[tokio::test]
async fn offline_feed_never_touches_the_network() {
    let feed = Feed::offline(Arc::new(CityTable::builtin().unwrap()), SeasonPolicy::default());
    assert!(feed.is_offline());
    let got = feed.forecast("Nowhere").await;
    assert_eq!(got.source, Source::Synthetic);
    // unknown city degrades to the default profile
    assert_eq!(got.data[0].aqi, 235);
    assert_eq!(got.data[0].date, Local::now().date_naive());
}
