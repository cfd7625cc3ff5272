// Terminal output for usersctl: status lines on stderr, user tables on stdout

use user_service::User;

/// Right-aligned cyan verb then a message, e.g. `     Serving user directory on [::1]:50061`
pub fn status(verb: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", verb, message);
}

/// Green checkmark line after a create, update or delete went through
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Red `error:` line; callers exit with status 1 afterwards
pub fn error(message: &str) {
    eprintln!("\x1b[1;31merror:\x1b[0m {}", message);
}

pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}

/// One user per line on stdout: id, name, email
pub fn user_row(user: &User) {
    println!("{:>6}  {:<24}  {}", user.id, user.name, user.email);
}

/// Column header matching `user_row`
pub fn user_header() {
    println!("\x1b[1m{:>6}  {:<24}  {}\x1b[0m", "ID", "NAME", "EMAIL");
}
