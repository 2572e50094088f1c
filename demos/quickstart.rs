use astronomical::{AstroError, Alarms, Settings};
use chrono::Utc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_default()?;
    let location = &settings.location;
    let now = Utc::now();

    println!("{location}");
    println!("{}", location.snapshot(now)?);
    println!("{}", Alarms::calculate(&settings.sleep, location, now)?);

    println!("Time:");
    println!("- UTC: {}", now.format("%I:%M%p"));
    match location.nac_time(now) {
        Ok(nac) => println!("- NAC: {nac}"),
        Err(AstroError::NoRiseOrSet { .. }) => println!("- NAC: undefined without sunrise"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
