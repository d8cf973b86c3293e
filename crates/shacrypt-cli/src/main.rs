// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `shacrypt`: print a `$6$` hash for a password read from the terminal or stdin.

use std::io::{self, BufRead, Read};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::warn;
use rpassword::prompt_password;
use shacrypt::{
    DEFAULT_ROUNDS, MIN_ROUNDS, Rounds, RoundsPolicy, ShaCryptParams, SystemEntropySource,
    hash_password_with,
};
use shacrypt_util::fast_zeroize_vec;

#[cfg(test)]
mod tests;

/// Longest password accepted on stdin, terminator included.
const MAX_SECRET_LINE: usize = 4096;

/// Command-line options.
#[derive(Parser, Debug)]
#[command(
    name = "shacrypt",
    version,
    about = "Hash a password with SHA-512 crypt ($6$) for /etc/shadow, chpasswd -e or usermod -p."
)]
struct Cli {
    /// Round count; the `rounds=` clause is omitted when this is 5000.
    #[arg(short, long, env = "SHACRYPT_ROUNDS", default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Explicit salt (truncated to 16 bytes); generated when omitted.
    #[arg(short, long)]
    salt: Option<String>,

    /// Clamp the round count into 1000..=999999999 as glibc does.
    #[arg(long)]
    clamp_rounds: bool,

    /// Read the password as a single line from stdin instead of prompting.
    #[arg(long)]
    stdin: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> Result<ShaCryptParams> {
        let rounds = Rounds::new(self.rounds)?;
        let policy = if self.clamp_rounds {
            RoundsPolicy::Clamped
        } else {
            RoundsPolicy::AsGiven
        };

        if policy == RoundsPolicy::AsGiven && self.rounds < MIN_ROUNDS {
            warn!(
                "{} rounds is below the glibc minimum of {MIN_ROUNDS}; use --clamp-rounds to match crypt(3)",
                self.rounds
            );
        }

        Ok(ShaCryptParams::new()
            .with_rounds(rounds)
            .with_rounds_policy(policy))
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = cli.params()?;
    let mut secret = if cli.stdin {
        read_secret_line(&mut io::stdin().lock())?
    } else {
        prompt_secret()?
    };

    let hashed = hash_password_with(
        &secret,
        cli.salt.as_deref().map(str::as_bytes),
        &params,
        &SystemEntropySource {},
    );
    fast_zeroize_vec(&mut secret);

    println!("{}", hashed?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

/// Reads one line of raw bytes and strips its terminator (`\n` or `\r\n`).
///
/// The buffer is allocated once at [`MAX_SECRET_LINE`] and never grows, so
/// wiping it on every exit path leaves no stray copy behind.
fn read_secret_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::with_capacity(MAX_SECRET_LINE);
    let read = reader
        .take(MAX_SECRET_LINE as u64)
        .read_until(b'\n', &mut line);

    let read = match read {
        Ok(read) => read,
        Err(err) => {
            fast_zeroize_vec(&mut line);
            return Err(err).context("failed to read password from stdin");
        }
    };

    if read == 0 {
        bail!("no password on stdin");
    }

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    } else if read == MAX_SECRET_LINE {
        fast_zeroize_vec(&mut line);
        bail!("password on stdin exceeds {MAX_SECRET_LINE} bytes");
    }

    Ok(line)
}

/// Prompts twice on the terminal and rejects a mismatch.
fn prompt_secret() -> Result<Vec<u8>> {
    let first = prompt_password("Password: ").context("failed to read password")?;
    let second = prompt_password("Retype password: ").context("failed to read password")?;

    confirm_secret(first, second)
}

fn confirm_secret(first: String, second: String) -> Result<Vec<u8>> {
    let mut first = first.into_bytes();
    let mut second = second.into_bytes();
    let matched = first == second;

    fast_zeroize_vec(&mut second);

    if !matched {
        fast_zeroize_vec(&mut first);
        bail!("passwords do not match");
    }

    Ok(first)
}
