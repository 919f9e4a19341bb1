//! End-to-end walkthrough of the warden authority API:
//! register, two-factor login, role upgrade, record append and gated reads.
//!
//! Run with `RUST_LOG=warden=debug` to see the authority's tracing output.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use warden::{Authority, user::Role};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Username to register (ASCII letters, at least 4)
    #[arg(long, default_value = "Alice")]
    username: String,

    /// Password (at least 8 characters with a letter, a digit, and a special)
    #[arg(long, default_value = "Passw0rd!")]
    password: String,

    /// Device ID for two-factor login (exactly 4 digits)
    #[arg(long, default_value = "1234")]
    device_id: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let authority = Authority::new();
    tracing::debug!("authority initialized");

    authority.register(&cli.username, &cli.password, &cli.device_id)?;
    println!("registered user {}", cli.username);

    let status = authority.login(&cli.username, &cli.password, &cli.device_id)?;
    println!("login result: {status:?}");

    authority.assign_role(&cli.username, Role::Admin)?;
    println!("role is now {}", authority.get_role(&cli.username)?);

    authority.add_data(&cli.username, vec![1, 2, 3])?;
    authority.add_data(&cli.username, vec![4, 5])?;

    for index in 0..authority.record_count(&cli.username)? {
        let record = authority.get_data(&cli.username, index)?;
        println!("record[{index}] = {}", serde_json::to_string(&record)?);
    }

    // Rejections are ordinary error values, not panics
    if let Err(err) = authority.assign_role(&cli.username, Role::User) {
        println!("downgrade rejected: {err}");
    }
    if let Err(err) = authority.get_data(&cli.username, 99) {
        println!("out-of-range read rejected: {err}");
    }

    Ok(())
}
