// File: crates/aqi-core/tests/series_properties.rs
// Purpose: Shape, bounds and scenario checks for the generated series across every city.

use aqi_core::{CityTable, Generator, Quality};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generator(table: &CityTable) -> Generator<'_> {
    Generator::new(table).with_today(NaiveDate::from_ymd_opt(2024, 12, 14).unwrap())
}

#[test]
fn delhi_forecast_scenario() {
    let table = CityTable::builtin().unwrap();
    let g = generator(&table);
    let f = g.forecast(168, "Delhi");
    // round(168 × 1.4 × 1.0)
    assert_eq!(f[0].aqi, 235);
    assert_eq!(f[0].quality, Quality::VeryUnhealthy);
    assert_eq!(f[0].day_name, "Saturday");
    assert_eq!(f[0].pollutants.pm25, (235.0f64 * 0.6).floor() as u32);
    // round(168 × 1.4 × 0.83) = round(195.216)
    assert_eq!(f[3].aqi, 195);
    assert_eq!(f[6].date, NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
}

#[test]
fn forecast_shape_and_bounds_for_all_cities() {
    let table = CityTable::builtin().unwrap();
    let g = generator(&table);
    for city in table.iter() {
        for base in [0, 10, city.base_aqi, 500] {
            let f = g.forecast(base, &city.name);
            assert_eq!(f.len(), 7);
            assert!(f.iter().all(|d| (25..=300).contains(&d.aqi)), "{} base {}", city.name, base);
            assert!(f.windows(2).all(|w| w[0].date < w[1].date));
            let today = (base as f64 * g.seasonal_factor(&city.name) + 0.5).floor().clamp(25.0, 300.0) as u32;
            assert_eq!(f[0].aqi, today);
            assert!(f.iter().all(|d| (30..=90).contains(&d.humidity)));
        }
    }
}

#[test]
fn hourly_shape_and_bounds_for_all_cities() {
    let table = CityTable::builtin().unwrap();
    let g = generator(&table);
    for city in table.iter() {
        let h = g.hourly(city.base_aqi * 2, &city.name);
        assert_eq!(h.len(), 24);
        let labels: Vec<String> = (0..24).map(|i| format!("{i:02}:00")).collect();
        assert_eq!(h.iter().map(|p| p.hour.clone()).collect::<Vec<_>>(), labels);
        assert!(h.iter().all(|p| (20..=300).contains(&p.aqi)));
        assert!(h.iter().all(|p| p.quality == Quality::from_aqi(p.aqi as f64)));
    }
}

#[test]
fn hourly_peaks_at_evening_rush() {
    let table = CityTable::builtin().unwrap();
    let g = generator(&table);
    let h = g.hourly(100, "Mumbai");
    let peak = h.iter().max_by_key(|p| p.aqi).unwrap();
    assert_eq!(peak.hour, "19:00");
    let trough = h.iter().min_by_key(|p| p.aqi).unwrap();
    assert_eq!(trough.hour, "02:00");
}

#[test]
fn historical_varies_between_draws_but_keeps_dates() {
    let table = CityTable::builtin().unwrap();
    let g = generator(&table);
    let a = g.historical(150, "Patna", &mut StdRng::seed_from_u64(1));
    let b = g.historical(150, "Patna", &mut StdRng::seed_from_u64(2));
    assert_eq!(a.len(), 31);
    assert_eq!(b.len(), 31);
    assert_eq!(
        a.iter().map(|p| p.date).collect::<Vec<_>>(),
        b.iter().map(|p| p.date).collect::<Vec<_>>()
    );
    assert_ne!(
        a.iter().map(|p| p.aqi).collect::<Vec<_>>(),
        b.iter().map(|p| p.aqi).collect::<Vec<_>>()
    );
    assert!(a.windows(2).all(|w| w[0].date < w[1].date));
    assert!(a.iter().chain(b.iter()).all(|p| (20..=300).contains(&p.aqi)));
}
