use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{CALORIE_INTAKE, Unit};
use crate::ui::messages::header;
use crate::utils::pad_right;

/// Print the home screen tiles with the unit each one is logged in.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalogue = cfg.catalogue();
    let width = catalogue
        .exercises()
        .iter()
        .map(|e| e.chars().count())
        .chain(std::iter::once(CALORIE_INTAKE.len()))
        .max()
        .unwrap_or(0);

    header("Exercises");
    for (n, name) in catalogue.tiles() {
        println!("{:>4}  {}  {}", n, pad_right(name, width), Unit::for_kind(name).as_str());
    }
    println!(
        "{:>4}  {}  {}",
        "+",
        pad_right(CALORIE_INTAKE, width),
        Unit::Calories.as_str()
    );
    Ok(())
}
