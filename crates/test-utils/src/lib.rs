pub mod claims;
pub mod wallet;

pub use mintcart_constants::test_utils as test_constants;

/// Install a tracing subscriber that honors `RUST_LOG` and writes through
/// the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
