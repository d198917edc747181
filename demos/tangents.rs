//! Prints point and tangent of one curve of each kind at `t = pi/4`.
//!
//! Usage:
//! ```text
//! cargo run --example tangents
//! RUST_LOG=curves=debug cargo run --example tangents
//! ```

use std::f64::consts::FRAC_PI_4;

use curves::{Circle, CurveStore, Ellipse, Helix, ParametricCurve};
use tracing::info;

fn main() -> curves::Result<()> {
    // Default: WARN for everything, INFO for curves and this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tangents=info".parse().unwrap_or_default())
        .add_directive("curves=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = CurveStore::new();
    let circle = store.insert(Circle::new(2.0));
    store.insert(Ellipse::new(3.0, 1.0));
    store.insert(Helix::new(1.0, 2.0));

    for (id, curve) in store.iter() {
        let p = curve.evaluate(FRAC_PI_4);
        let d = curve.derivative(FRAC_PI_4);
        info!(
            ?id,
            kind = %curve.kind(),
            point = ?(p.x, p.y, p.z),
            derivative = ?(d.x, d.y, d.z),
            "evaluated at pi/4"
        );
    }

    info!(radius = store.circle(circle)?.radius(), "first circle");
    info!(total = store.total_radii_sum(), "radii sum");
    println!("{}", curves::name());
    Ok(())
}
