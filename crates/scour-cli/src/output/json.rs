use scour_core::error::ScourError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ScourError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
