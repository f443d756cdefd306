/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Test modules for core package

pub mod types_tests;
