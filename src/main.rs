//! rtempo main entrypoint.

use rtempo::run;
use rtempo::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
