// Copyright 2025 ULDE Team

pub mod env;
pub mod error_utils;
pub mod rayon;
pub mod tracing;
