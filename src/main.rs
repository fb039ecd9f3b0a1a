//! fittracker main entrypoint.

use fittracker::run;
use fittracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
