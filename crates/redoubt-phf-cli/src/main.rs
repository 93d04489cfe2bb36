// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `tigerphs`: a thin CLI wrapper over [`redoubt_phf`]'s Extended API.
//!
//! Flags mirror the original `tigerphs` C binary one-for-one: `-h` is
//! reclaimed for `hashSize` (not clap's default help shortcut), so `--help`
//! is the only way to print usage.

use clap::Parser;
use redoubt_phf::{DEFAULT_BLOCK_SIZE, DEFAULT_MULTIPLIES, DEFAULT_SUB_BLOCK_SIZE};
use std::process::ExitCode;

/// Memory-hard password hashing (TigerKDF/TwoCats family).
#[derive(Parser, Debug)]
#[command(name = "tigerphs", disable_help_flag = true)]
struct Args {
    /// The output derived key length in bytes.
    #[arg(short = 'h', long = "hash-size", default_value_t = redoubt_phf::DEFAULT_HASH_SIZE)]
    hash_size: u32,

    /// The password to hash.
    #[arg(short = 'p', long, default_value = "password")]
    password: String,

    /// The salt, in hexadecimal (even number of digits). Defaults to the
    /// raw bytes `"salt"` when omitted, matching the original CLI's
    /// un-hex-decoded default.
    #[arg(short = 's', long)]
    salt: Option<String>,

    /// The amount of memory to use, as a garlic level (memory = 2^memCost KiB).
    #[arg(short = 'm', long = "mem-cost", default_value_t = 10)]
    mem_cost: u8,

    /// The time cost: below 8 sets multiplication depth directly, at or
    /// above 8 fixes depth at 8 and scales repetitions.
    #[arg(short = 't', long = "time-cost", default_value_t = redoubt_phf::DEFAULT_TIME_COST)]
    time_cost: u8,

    /// The number of multiplies per 32 bytes of hashing.
    #[arg(short = 'M', long = "multiplies", default_value_t = DEFAULT_MULTIPLIES)]
    multiplies: u8,

    /// Parallelism: the number of worker threads.
    #[arg(short = 'P', long, default_value_t = redoubt_phf::DEFAULT_PARALLELISM)]
    parallelism: u8,

    /// Print this help and exit.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn parse_hex_salt(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err("hex salt string must have an even number of digits".to_string());
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("hex salt string must contain only hex digits".to_string());
    }
    Ok(redoubt_util::hex_to_bytes(hex))
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let salt = match &args.salt {
        Some(hex) => parse_hex_salt(hex)?,
        None => b"salt".to_vec(),
    };

    println!(
        "memCost:{} timeCost:{} multiplies:{} parallelism:{} password:{} salt:{}",
        args.mem_cost,
        args.time_cost,
        args.multiplies,
        args.parallelism,
        args.password,
        args.salt.as_deref().unwrap_or("salt"),
    );

    let mut hash = vec![0u8; args.hash_size as usize];
    let mut password = args.password.into_bytes();

    if !redoubt_phf::hash_password_extended(
        &mut hash,
        &mut password,
        &salt,
        &mut [],
        args.mem_cost,
        args.mem_cost,
        args.time_cost,
        args.multiplies,
        args.parallelism,
        DEFAULT_BLOCK_SIZE,
        DEFAULT_SUB_BLOCK_SIZE,
        true,
        false,
    ) {
        return Err("key stretching failed: invalid parameters or allocation failure".to_string());
    }

    println!("hash = {}", hex_string(&hash));
    Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
