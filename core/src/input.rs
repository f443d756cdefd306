/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use git_url_parse::GitUrl;

use super::consts::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("field '{0}' must not be empty")]
    Empty(&'static str),
    #[error("project name must be at most {MAX_PROJECT_NAME_LEN} characters")]
    NameTooLong,
    #[error("project name must not contain control characters")]
    NameInvalidCharacters,
    #[error("invalid repository URL")]
    InvalidRepositoryUrl,
}

pub fn check_project_name(name: &str) -> Result<(), InputError> {
    if name.trim().is_empty() {
        return Err(InputError::Empty("title"));
    }

    if name.len() > MAX_PROJECT_NAME_LEN {
        return Err(InputError::NameTooLong);
    }

    if name.chars().any(char::is_control) {
        return Err(InputError::NameInvalidCharacters);
    }

    Ok(())
}

/// Normalizes a github link to its canonical URL form.
pub fn check_github_url(url: &str) -> Result<String, InputError> {
    let parsed = GitUrl::parse_to_url(url).map_err(|_| InputError::InvalidRepositoryUrl)?;

    Ok(parsed.to_string())
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(path: &str) -> std::io::Result<String> {
    let secret = std::fs::read_to_string(path)?;

    Ok(secret.trim().to_string())
}
