#![allow(dead_code)]

use std::sync::OnceLock;

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn byte(value: u64) -> tslock_gate::Byte {
    tslock_gate::Byte::new(value).expect("test vector fits in 8 bits")
}
