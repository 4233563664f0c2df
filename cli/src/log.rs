use colored::Colorize;

const DIVIDER: &str = "---------------------------------------------------------------";

pub fn print_title(title: &str) {
    println!();
    println!("{}", title.bold().blue());
}

pub fn print_divider() {
    println!("{}", DIVIDER.bright_black());
}

pub fn print_section_header(header: &str) {
    println!();
    println!("{}", format!("=== {header} ===").bold().white());
}

pub fn print_message(message: &str) {
    println!("{message}");
}

pub fn print_info(message: &str) {
    println!("{}", message.cyan());
}

pub fn print_success(message: &str) {
    println!("{}", message.bright_green());
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.bright_red());
}
