mod fixtures;
mod test_app;

// Re-export
pub use assertions::{
    assert_attitude_normalized, assert_position_eq, assert_spatial_valid, assert_vec3_eq,
};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
