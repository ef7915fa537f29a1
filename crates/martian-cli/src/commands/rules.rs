use crate::display;

pub fn run() -> Result<(), String> {
    display::print_rules();
    Ok(())
}
