//! Integration tests using the `TestMap` harness.
//!
//! These spin up a headless Bevy App with `ChoroplethPlugin` and drive it
//! through input arrival, attribute changes and pointer events.

mod attribute_change_tests;
