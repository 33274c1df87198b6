// File: crates/aqi-dashboard/src/export.rs
// Summary: CSV export of a plotted series and output file naming.

use std::io::Write;
use std::path::{Path, PathBuf};

use aqi_core::{Metric, Sample};

/// One row per record: label, every metric (blank when absent), quality.
pub fn write_series<S: Sample, W: Write>(series: &[S], out: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["label"];
    header.extend(Metric::ALL.iter().map(|m| m.field()));
    header.push("quality");
    wtr.write_record(&header)?;

    for s in series {
        let mut rec = Vec::with_capacity(header.len());
        rec.push(s.label());
        rec.extend(Metric::ALL.iter().map(|&m| s.value(m).map(|v| v.to_string()).unwrap_or_default()));
        rec.push(s.quality().to_string());
        wtr.write_record(&rec)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Output file name like <dir>/<city>_<view>_<suffix>.<ext>, lower-cased.
pub fn out_name(dir: &Path, city: &str, view: &str, suffix: &str, ext: &str) -> PathBuf {
    let stem = format!("{city}_{view}_{suffix}").to_lowercase().replace(' ', "-");
    dir.join(format!("{stem}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::{CityTable, Generator};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn forecast_csv_has_every_metric() {
        let t = CityTable::builtin().unwrap();
        let f = Generator::new(&t).forecast(168, "Delhi");
        let mut buf = Vec::new();
        write_series(&f, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("label,aqi,pm25,pm10,o3,no2,so2,co,temperature,humidity,quality"));
        assert_eq!(lines.count(), 7);
    }

    #[test]
    fn history_csv_leaves_pollutants_blank() {
        let t = CityTable::builtin().unwrap();
        let g = Generator::new(&t).with_today(NaiveDate::from_ymd_opt(2024, 12, 14).unwrap());
        let h = g.historical(100, "Pune", &mut StdRng::seed_from_u64(3));
        let mut buf = Vec::new();
        write_series(&h, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.starts_with(&format!("Dec 14,{},,,,,,,,,", h[30].aqi)), "{last}");
    }

    #[test]
    fn names_are_lowercase() {
        let p = out_name(Path::new("target/out"), "Delhi", "7day", "aqi", "png");
        assert_eq!(p, PathBuf::from("target/out/delhi_7day_aqi.png"));
    }
}
