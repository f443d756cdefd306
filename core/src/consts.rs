/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDateTime};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub static NULL_TIME: LazyLock<NaiveDateTime> =
    LazyLock::new(|| DateTime::from_timestamp(0, 0).unwrap().naive_utc());

pub const MAX_PROJECT_NAME_LEN: usize = 120;

/// API keys are handed out with this prefix so the auth middleware can tell
/// them apart from JWTs.
pub const API_KEY_PREFIX: &str = "SHOW";
