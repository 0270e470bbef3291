// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction layer for camera profile queries
//!
//! Resolution selection never talks to hardware directly. It goes through a
//! [`camera::ProfileProvider`], which answers three questions about a camera:
//! which quality tiers it can record at, what the profile for a tier looks
//! like, and which still capture sizes it offers.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            ResolutionSelector               │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │           ProfileProvider Trait             │
//! │  ┌──────────────────┐  ┌────────────────┐   │
//! │  │  Static (JSON)   │  │     V4L2       │   │
//! │  └──────────────────┘  └────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`camera`]: Provider trait, shared types and concrete providers

pub mod camera;
