/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Test modules for entity package

pub mod enum_tests;
