use colored::Colorize;

const BANNER: &str = r#"
  ▄▄▄▄    ▒█████   ██▓ ██▓    ▓█████  ██▀███   ▄████▄   ▄▄▄       ██▓███    ██████
  ▓█████▄ ▒██▒  ██▒▓██▒▓██▒    ▓█   ▀ ▓██ ▒ ██▒▒██▀ ▀█  ▒████▄    ▓██░  ██▒▒██    ▒
  ▒██▒ ▄██▒██░  ██▒▒██▒▒██░    ▒███   ▓██ ░▄█ ▒▒▓█    ▄ ▒██  ▀█▄  ▓██░ ██▓▒░ ▓██▄
  ▒██░█▀  ▒██   ██░░██░▒██░    ▒▓█  ▄ ▒██▀▀█▄  ▒▓▓▄ ▄██▒░██▄▄▄▄██ ▒██▄█▓▒ ▒  ▒   ██▒
  ░▓█  ▀█▓░ ████▓▒░░██░░██████▒░▒████▒░██▓ ▒██▒▒ ▓███▀ ░ ▓█   ▓██▒▒██▒ ░  ░▒██████▒▒
  ░▒▓███▀▒░ ▒░▒░▒░ ░▓  ░ ▒░▓  ░░░ ▒░ ░░ ▒▓ ░▒▓░░ ░▒ ▒  ░ ▒▒   ▓▒█░▒▓▒░ ░  ░▒ ▒▓▒ ▒ ░
  ▒░▒   ░   ░ ▒ ▒░  ▒ ░░ ░ ▒  ░ ░ ░  ░  ░▒ ░ ▒░  ░  ▒     ▒   ▒▒ ░░▒ ░     ░ ░▒  ░ ░
   ░    ░ ░ ░ ░ ▒   ▒ ░  ░ ░      ░     ░░   ░ ░          ░   ▒   ░░       ░  ░  ░
   ░          ░ ░   ░      ░  ░   ░  ░   ░     ░ ░            ░  ░               ░
        ░                                      ░
"#;

pub fn banner() {
    println!("{}", BANNER.red().bold());
}

/// A step that is about to start.
pub fn step(message: &str) {
    println!();
    println!("{} {}", "->".blue(), message.bold());
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}

pub fn footer() {
    println!();
    println!(
        "{} {}",
        "boilercaps".red().bold(),
        "https://github.com/SBigz/Boilercaps".dimmed()
    );
}
