pub mod directory;
pub mod server;

use std::env::var;
use std::str::FromStr;

use anyhow::{Context, Error, Result};

pub fn port_from_env() -> Result<u16> {
    parse_var("PORT", 3001)
}

pub fn request_limit_from_env() -> Result<usize> {
    parse_var("REQUEST_LIMIT", 64)
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    Error: From<T::Err>,
{
    parse_or(var(name).ok().as_deref(), default)
        .with_context(|| format!("Environment variable {} invalid", name))
}

fn parse_or<T>(val: Option<&str>, default: T) -> Result<T>
where
    T: FromStr,
    Error: From<T::Err>,
{
    let val = match val {
        Some(val) => val.parse()?,
        None => default,
    };

    Ok(val)
}
