#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_fixture_visible, assert_papi_colors};
pub use helpers::*;
pub use test_app::{RecordedEvents, TestApp, TestAppBuilder};
