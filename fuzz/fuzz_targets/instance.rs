#![no_main]

use libfuzzer_sys::fuzz_target;
use linesep::{PointRegistry, Separator, SeparatorConfig};

// Raw coordinates, including NaNs, infinities and negative numbers. Loading
// may reject them, but it must never panic, and neither may separating
// whatever it accepts.
fuzz_target!(|input: (u8, Vec<(f64, f64)>)| {
    let (declared, coords) = input;
    let config = SeparatorConfig {
        max_points: 64,
        ..SeparatorConfig::default()
    };
    if let Ok(registry) = PointRegistry::load(usize::from(declared), &coords, &config) {
        let n = registry.len();
        let separation = Separator::new(registry, &config).run();
        assert!(separation.lines().len() < n.max(1));
        assert_eq!(separation.remaining() % 2, 0);
    }
});
