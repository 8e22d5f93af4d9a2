//! Print a fresh auth token and the `.env` line that enables it.

use pocket_ledger_core::auth_token::{generate_auth_token, AUTH_TOKEN_ENV};

fn main() {
    let token = generate_auth_token();

    println!();
    println!("Generated auth token:");
    println!("\x1b[32m{token}\x1b[0m");
    println!();
    println!("Add this line to your .env file:");
    println!("\x1b[36m{AUTH_TOKEN_ENV}={token}\x1b[0m");
    println!();
}
