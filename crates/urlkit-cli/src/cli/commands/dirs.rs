//! `urlkit dirs` – show platform directories and the working directory.

use urlkit_core::ops;

pub fn run_dirs() {
    println!("{:<12} {}", "executable", ops::executable());
    println!("{:<12} {}", "documents", ops::documents());
    println!("{:<12} {}", "temp", ops::temp());
    println!("{:<12} {}", "resources", ops::resources());
    println!("{:<12} {}", "cwd", ops::cwd());
}
