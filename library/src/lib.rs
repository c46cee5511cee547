//! Hearth Unified Launcher
//!
//! Command-line front end over the platform registry: resolves platform
//! names, runs platform loaders over attached media and starts emulator
//! backends.

pub mod commands;
