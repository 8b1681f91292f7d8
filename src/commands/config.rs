use anyhow::Result;
use booking_core::config::BookingConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = BookingConfig::config_path()?;
    let config = BookingConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    match config.data_path() {
        Some(path) => println!("  Data:    {}", path.display()),
        None => println!("  Data:    {}", "(built-in demo data)".dimmed()),
    }

    println!();
    println!("{}", "Calendar".bold());
    println!("  Default view:       {}", config.default_view);
    println!("  Default resources:  {}", config.default_resources.join(", "));
    println!("  Day view scale:     {}px/h", config.day_hour_height);
    println!("  Week view scale:    {}px/h", config.week_hour_height);
    println!("  Minimum height:     {}px", config.min_appointment_height);

    Ok(())
}
