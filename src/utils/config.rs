/******************************************************************************
   Author: Taggy Contributors
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads `env_var` and parses it, falling back to `default` when the variable
/// is unset or does not parse
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {env_var}={val}: {e:?}, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Reads `env_var` and parses it, returning `None` when it is unset, empty or
/// unparsable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let val = env::var(env_var).ok()?;
    if val.trim().is_empty() {
        return None;
    }
    match val.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {env_var}={val}: {e:?}");
            None
        }
    }
}

/// Reads a boolean flag, accepting `1/0`, `true/false`, `yes/no` and `on/off`
pub fn get_env_flag(env_var: &str) -> Option<bool> {
    let val = env::var(env_var).ok()?;
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        "" => None,
        other => {
            warn!("Ignoring {env_var}={other}: not a boolean");
            None
        }
    }
}
