//! Human-readable output.
//!
//! The report goes to stdout; errors and warnings go to stderr.

mod render;
mod style;

use std::net::IpAddr;

use crate::error_handling::LookupError;
use crate::models::ResolvedResult;

// Re-export public API
pub use render::{
    render_banner, render_dns_warning, render_error, render_failure, render_report, render_target,
};
pub use style::{Palette, Style};

pub fn print_banner(palette: &Palette) {
    println!("{}", render_banner(palette));
}

pub fn print_target(target: Option<IpAddr>, palette: &Palette) {
    println!("{}", render_target(target, palette));
}

pub fn print_report(result: &ResolvedResult, palette: &Palette) {
    print!("{}", render_report(result, palette));
}

pub fn print_dns_warning(palette: &Palette) {
    eprintln!("{}", render_dns_warning(palette));
}

pub fn print_error(error: &LookupError, palette: &Palette) {
    eprintln!("{}", render_error(error, palette));
}
