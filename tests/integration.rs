use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use qtty::Seconds;
use suntimes::{
    BlockName, CivilDateTime, Clock, FixedClock, JulianDate, ScanConfig, SunTimeResult, SunTimes,
    SunTimesError, SunTimesOptions, TwilightBand, TT,
};

fn brooklyn() -> SunTimes {
    let options = SunTimesOptions::new(40.6676, -73.9851)
        .date(Utc.with_ymd_and_hms(1982, 5, 3, 0, 0, 0).unwrap())
        .timezone("America/New_York");
    SunTimes::new(options).expect("valid options")
}

fn local(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("rfc3339")
}

/// Assert that both ends of `block` are within `tolerance` seconds of the
/// given local wall-clock times on 1982-05-02 (EDT).
fn assert_block_near(block: &SunTimeResult, from: &str, to: &str, tolerance: i64) {
    let expect = |hms: &str| local(&format!("1982-05-02T{hms}-04:00"));
    let from_err = (local(&block.from) - expect(from)).num_seconds().abs();
    let to_err = (local(&block.to) - expect(to)).num_seconds().abs();
    assert!(
        from_err <= tolerance && to_err <= tolerance,
        "{block:?} vs {from}..{to}"
    );
}

#[test]
fn brooklyn_1982_twilight_sequence() {
    let times = brooklyn();
    let names: Vec<String> = times
        .time_blocks()
        .iter()
        .map(|b| b.name.to_string())
        .collect();
    assert_eq!(
        names,
        [
            "from_midnight_morning",
            "astronomical_morning",
            "nautical_morning",
            "civil_morning",
            "sun_morning",
            "goldenhour_morning",
            "day",
            "goldenhour_evening",
            "sun_evening",
            "civil_evening",
            "nautical_evening",
            "astronomical_evening",
            "to_midnight_evening",
        ]
    );
    assert_eq!(times.total_seconds(), 86_400);
}

#[test]
fn brooklyn_1982_matches_reference_times() {
    let times = brooklyn();
    let tol = 10;

    assert_block_near(&times.astronomical_dawn().unwrap(), "04:08:28", "04:47:44", tol);
    assert_block_near(&times.nautical_dawn().unwrap(), "04:47:44", "05:24:00", tol);
    assert_block_near(&times.civil_dawn().unwrap(), "05:24:00", "05:35:39", tol);
    assert_block_near(&times.sunrise().unwrap(), "05:35:39", "05:59:00", tol);
    assert_block_near(&times.golden_hour_am().unwrap(), "05:59:00", "06:31:38", tol);
    assert_block_near(&times.day().unwrap(), "06:31:38", "19:14:47", tol);
    assert_block_near(&times.golden_hour_pm().unwrap(), "19:14:47", "19:47:31", tol);
    assert_block_near(&times.sunset().unwrap(), "19:47:31", "20:10:56", tol);
    assert_block_near(&times.civil_dusk().unwrap(), "20:10:56", "20:22:38", tol);
    assert_block_near(&times.nautical_dusk().unwrap(), "20:22:38", "20:59:05", tol);
    assert_block_near(&times.astronomical_dusk().unwrap(), "20:59:05", "21:38:36", tol);

    let sunrise = times.sunrise().unwrap().seconds;
    let sunset = times.sunset().unwrap().seconds;
    let dusk = times.astronomical_dusk().unwrap().seconds;
    assert!((sunrise - 1401).abs() <= tol, "{sunrise}");
    assert!((sunset - 1405).abs() <= tol, "{sunset}");
    assert!((dusk - 2371).abs() <= tol, "{dusk}");
}

#[test]
fn brooklyn_1982_edges_are_local_midnight() {
    let times = brooklyn();
    let first = times.midnight_to_astronomical_dawn().unwrap();
    let last = times.astronomical_dusk_to_midnight().unwrap();
    assert_eq!(first.from, "1982-05-02T00:00:00-04:00");
    assert_eq!(last.to, "1982-05-03T00:00:00-04:00");
    assert_eq!(
        times.window().start,
        Utc.with_ymd_and_hms(1982, 5, 2, 4, 0, 0).unwrap()
    );
}

#[test]
fn brooklyn_1982_solar_noon() {
    let times = brooklyn();
    let noon = times.solar_noon().expect("the sun transits");
    assert!(noon.ends_with("-04:00"), "{noon}");
    let error = (local(&noon) - local("1982-05-02T12:52:48-04:00"))
        .num_seconds()
        .abs();
    assert!(error <= 10, "{noon}");
}

#[test]
fn fractional_step_keeps_whole_day_total() {
    let options = SunTimesOptions::new(40.6676, -73.9851)
        .date(Utc.with_ymd_and_hms(1982, 5, 3, 0, 0, 0).unwrap())
        .timezone("America/New_York")
        .scan(ScanConfig::default().with_step(Seconds::new(0.7)));
    let times = SunTimes::new(options).unwrap();
    assert_eq!(times.time_blocks().len(), 13);
    assert_eq!(times.total_seconds(), 86_400);
    assert!(times.sunrise().is_some());
    assert!(times.sunset().is_some());
}

#[test]
fn solar_noon_falls_on_the_local_date_far_from_the_meridian() {
    // Kiritimati keeps UTC+14 at 157°W, ten hours ahead of its solar time.
    let options = SunTimesOptions::new(1.87, -157.4)
        .date(Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap())
        .timezone("Pacific/Kiritimati")
        .scan(ScanConfig::default().with_step(Seconds::new(60.0)));
    let times = SunTimes::new(options).unwrap();
    assert_eq!(
        times.window().start,
        Utc.with_ymd_and_hms(2024, 6, 20, 10, 0, 0).unwrap()
    );
    let noon = times.solar_noon_utc().expect("the sun transits");
    assert!(times.window().contains(noon), "{noon}");
    let local = times.solar_noon().unwrap();
    assert!(local.starts_with("2024-06-21T12:3"), "{local}");
    assert_eq!(times.block_at(noon).map(|b| b.name), Some(BlockName::Day));
}

#[test]
fn blocks_tile_the_window() {
    let times = brooklyn();
    let blocks = times.time_blocks();
    assert_eq!(blocks.first().unwrap().interval.start, times.window().start);
    assert_eq!(blocks.last().unwrap().interval.end, times.window().end);
    for pair in blocks.windows(2) {
        assert_eq!(pair[0].interval.end, pair[1].interval.start);
        assert_ne!(pair[0].band, pair[1].band);
    }
}

#[test]
fn identical_inputs_give_identical_blocks() {
    assert_eq!(brooklyn().time_blocks(), brooklyn().time_blocks());
}

fn svalbard(date: DateTime<Utc>) -> SunTimes {
    let clock = FixedClock::new(date);
    let options = SunTimesOptions::new(78.22, 15.65)
        .scan(ScanConfig::default().with_step(Seconds::new(10.0)));
    SunTimes::with_clock(options, &clock).unwrap()
}

#[test]
fn midnight_sun_has_no_sunrise() {
    let times = svalbard(Utc.with_ymd_and_hms(2021, 6, 21, 12, 0, 0).unwrap());
    assert_eq!(times.time_blocks().len(), 1);
    assert_eq!(times.time_blocks()[0].name, BlockName::Day);
    assert_eq!(times.day().unwrap().seconds, 86_400);
    assert_eq!(times.day().unwrap().from, "2021-06-21T00:00:00Z");
    assert!(times.sunrise().is_none());
    assert!(times.sunset().is_none());
    assert!(times.midnight_to_astronomical_dawn().is_none());
    assert!(times.solar_noon().is_some());
}

#[test]
fn polar_night_never_gets_brighter_than_nautical() {
    let times = svalbard(Utc.with_ymd_and_hms(2021, 12, 21, 12, 0, 0).unwrap());
    let bands: Vec<TwilightBand> = times.bands().iter().map(|i| i.band).collect();
    assert_eq!(
        bands,
        [
            TwilightBand::Night,
            TwilightBand::Astronomical,
            TwilightBand::Nautical,
            TwilightBand::Astronomical,
            TwilightBand::Night,
        ]
    );
    assert!(times.midnight_to_astronomical_dawn().is_some());
    assert!(times.nautical_dawn().is_some());
    assert!(times.civil_dawn().is_none());
    assert!(times.sunrise().is_none());
    assert!(times.day().is_none());
    assert!(times.astronomical_dusk_to_midnight().is_some());
    assert_eq!(times.total_seconds(), 86_400);
}

#[test]
fn unknown_timezone_is_an_error() {
    let options = SunTimesOptions::new(0.0, 0.0).timezone("Not/AZone");
    assert_eq!(
        SunTimes::new(options).map(|_| ()),
        Err(SunTimesError::UnknownTimeZone("Not/AZone".into()))
    );
}

#[test]
fn default_date_comes_from_the_clock() {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2010, 3, 20, 18, 0, 0).unwrap());
    let options = SunTimesOptions::new(0.0, 0.0)
        .scan(ScanConfig::default().with_step(Seconds::new(60.0)));
    let a = SunTimes::with_clock(options.clone(), &clock).unwrap();
    let b = SunTimes::with_clock(options, &clock).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.instant(), clock.now());
    assert_eq!(
        a.window().start,
        Utc.with_ymd_and_hms(2010, 3, 20, 0, 0, 0).unwrap()
    );
}

#[test]
fn utc_roundtrip_j2000_is_exact() {
    let datetime = DateTime::from_timestamp(946_728_000, 0).unwrap();
    let jd = JulianDate::from_utc(datetime);
    assert_eq!(jd.value(), 2_451_545.0);
    assert_eq!(jd.julian_centuries().value(), 0.0);
    assert_eq!(jd.to_utc(), Some(datetime));
}

#[test]
fn terrestrial_time_leads_civil_time() {
    let jd = JulianDate::new(2_445_091.5);
    let tt = jd.to::<TT>();
    let lead = (tt.value() - jd.value()) * 86_400.0;
    assert!((lead - 52.5).abs() < 0.5, "{lead}");
    assert!((tt.to::<suntimes::JD>().value() - jd.value()).abs() < 1e-9);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn civil_julian_roundtrip(
        year in 1i32..3000,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
        millisecond in 0u32..1000,
    ) {
        prop_assume!(!(year == 1582 && month == 10 && (5..=14).contains(&day)));
        let civil = CivilDateTime::new(year, month, day, hour, minute, second, millisecond).unwrap();
        let jd = civil.to_julian_day().unwrap();
        prop_assert_eq!(CivilDateTime::from_julian_day(jd), civil);
    }

    #[test]
    fn utc_julian_roundtrip_within_f64_resolution(secs in -2_000_000_000i64..4_000_000_000i64) {
        // One ulp of a Julian Day near 2.4e6 is about 40 µs.
        let datetime = DateTime::from_timestamp(secs, 0).unwrap();
        let back = JulianDate::from_utc(datetime).to_utc().unwrap();
        prop_assert!((back - datetime).num_microseconds().unwrap().abs() < 100);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn any_day_sums_to_86400_seconds(
        lat in -89.0f64..89.0,
        lon in -180.0f64..180.0,
        days in 0i64..36_500,
    ) {
        let date = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap() + Duration::days(days);
        let options = SunTimesOptions::new(lat, lon)
            .date(date)
            .scan(ScanConfig::default().with_step(Seconds::new(300.0)));
        let times = SunTimes::new(options).unwrap();
        prop_assert_eq!(times.total_seconds(), 86_400);
        prop_assert_eq!(times.time_blocks().first().unwrap().interval.start, times.window().start);
        prop_assert_eq!(times.time_blocks().last().unwrap().interval.end, times.window().end);
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_result_and_options() {
    let times = brooklyn();
    let sunrise = times.sunrise().unwrap();
    let json = serde_json::to_string(&sunrise).unwrap();
    assert!(json.contains("\"from\""));
    assert!(json.contains("\"seconds\""));
    let back: SunTimeResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sunrise);

    let options = SunTimesOptions::new(40.6676, -73.9851).timezone("America/New_York");
    let json = serde_json::to_string(&options).unwrap();
    let back: SunTimesOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}
