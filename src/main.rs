//! rPunchCalc main entrypoint.

use rpunchcalc::run;
use rpunchcalc::ui::messages::error;
use rpunchcalc::utils::logging::setup_tracing;

fn main() {
    setup_tracing();
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
