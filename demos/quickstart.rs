use chrono::Utc;
use suntimes::{delta_t, JulianDate, JulianEphemerisDay, SunTimes, SunTimesOptions, UnixTime, TT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let latitude: f64 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(40.6676);
    let longitude: f64 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(-73.9851);
    let timezone = args.next().unwrap_or_else(|| "America/New_York".to_string());

    let now = Utc::now();
    let jd = JulianDate::from_utc(now);
    let civil = jd.to_civil();
    println!("{jd}");
    let jde: JulianEphemerisDay = jd.to::<TT>();
    println!("JDE: {jde}");
    println!("{}", jd.to::<UnixTime>());
    println!("Julian years since J2000: {}", jd.julian_years());
    println!("ΔT: {}", delta_t(civil.year(), civil.month()));

    let times = SunTimes::new(
        SunTimesOptions::new(latitude, longitude)
            .date(now)
            .timezone(timezone),
    )?;

    for block in times.time_blocks() {
        println!(
            "{:<24} {} .. {} ({} s)",
            block.name.to_string(),
            times.format(block.interval.start),
            times.format(block.interval.end),
            block.seconds
        );
    }
    match times.solar_noon() {
        Some(noon) => println!("solar noon: {noon}"),
        None => println!("solar noon: n/a"),
    }
    Ok(())
}
