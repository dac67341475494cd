//! Input adapters for the renderer.
//!
//! This module contains adapters that receive input from outside the
//! process and translate it into validated settings.

pub mod cli;
