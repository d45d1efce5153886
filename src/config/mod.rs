// ABOUTME: Configuration module for the gamification core
// ABOUTME: Environment-based settings and reward tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 YouMatter Wellness

//! Configuration management

pub mod environment;

pub use environment::{CoreConfig, Environment, RewardConfig};
