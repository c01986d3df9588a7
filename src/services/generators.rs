//! Random generators: UUIDs, passwords and integers.

use crate::domain::errors::ToolError;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

pub const MAX_UUIDS: usize = 100;
pub const MAX_RANDOM_COUNT: usize = 100;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 256;

pub fn uuids(count: usize) -> Result<Vec<String>, ToolError> {
    if count == 0 || count > MAX_UUIDS {
        return Err(ToolError::InvalidArgument(format!(
            "count must be between 1 and {}",
            MAX_UUIDS
        )));
    }
    Ok((0..count).map(|_| uuid::Uuid::new_v4().to_string()).collect())
}

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";
const AMBIGUOUS: &[u8] = b"0O1lI";

#[derive(Debug, Clone, Copy)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

fn classes(opts: &PasswordOptions) -> Vec<Vec<u8>> {
    [
        (opts.lowercase, LOWER),
        (opts.uppercase, UPPER),
        (opts.digits, DIGITS),
        (opts.symbols, SYMBOLS),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, set)| {
        set.iter()
            .copied()
            .filter(|c| !(opts.exclude_ambiguous && AMBIGUOUS.contains(c)))
            .collect()
    })
    .collect()
}

/// Every selected character class appears at least once.
pub fn password(opts: &PasswordOptions) -> Result<String, ToolError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&opts.length) {
        return Err(ToolError::InvalidArgument(format!(
            "length must be between {} and {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        )));
    }
    let sets = classes(opts);
    if sets.is_empty() {
        return Err(ToolError::InvalidArgument(
            "select at least one character class".to_string(),
        ));
    }

    let mut rng = rand::rng();
    let pool: Vec<u8> = sets.concat();
    let mut chars: Vec<u8> = sets
        .iter()
        .filter_map(|set| set.choose(&mut rng).copied())
        .collect();
    while chars.len() < opts.length {
        if let Some(c) = pool.choose(&mut rng) {
            chars.push(*c);
        }
    }
    chars.shuffle(&mut rng);
    Ok(chars.into_iter().map(char::from).collect())
}

pub fn random_integers(min: i64, max: i64, count: usize) -> Result<Vec<i64>, ToolError> {
    if min > max {
        return Err(ToolError::InvalidArgument(format!(
            "min ({}) must not exceed max ({})",
            min, max
        )));
    }
    if count == 0 || count > MAX_RANDOM_COUNT {
        return Err(ToolError::InvalidArgument(format!(
            "count must be between 1 and {}",
            MAX_RANDOM_COUNT
        )));
    }
    let mut rng = rand::rng();
    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}
