#![allow(dead_code)]

pub mod logging;

use env_utils::InMemoryEnv;

pub use logging::init_test_logging;

/// Store holding a single `foo` variable.
pub fn foo(value: &str) -> InMemoryEnv {
    InMemoryEnv::new().with("foo", value)
}

/// Store with the variables a small service would read.
pub fn service_env() -> InMemoryEnv {
    [
        ("SVC_PORT", "8080"),
        ("SVC_DEBUG", "TRUE"),
        ("SVC_RATIO", "0.75"),
        ("SVC_PRICE", "19.99"),
        ("SVC_HOSTS", "a.example,b.example,c.example"),
        ("SVC_LIMITS", "{\"burst\": 10, \"sustained\": 2}"),
        ("SVC_LAUNCH", "23-11-2016"),
        ("SVC_DEPLOYED_AT", "2024-01-15T10:30:00+05:00"),
    ]
    .into_iter()
    .collect()
}
