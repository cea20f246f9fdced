//! IO layer: the interfaces that expose backend functionality to the UI.

pub mod rest;
