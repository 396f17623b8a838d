//! Polyspace C-space demo: expands two obstacle/robot pairs and prints the
//! resulting polygon, bounding circles, and containment edge order.
//!
//! Usage:
//! ```text
//! cargo run --example cspace
//! RUST_LOG=polyspace=trace cargo run --example cspace   # merge steps
//! ```

use polyspace::operations::containment::FastPolygon;
use polyspace::operations::cspace::ExpandCSpace;
use polyspace::{Polygon, Result};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polyspace and this demo.
    // Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cspace=info".parse().unwrap_or_default())
        .add_directive("polyspace=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let square_robot = Polygon::from_xy(
        &[(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)],
        Some((0.0, 0.0)),
    )?;
    let square_obstacle =
        Polygon::from_xy(&[(-6.0, 3.0), (-6.0, 6.0), (-3.0, 6.0), (-3.0, 3.0)], None)?;
    run("square", &square_obstacle, &square_robot)?;

    let wide_robot = Polygon::from_xy(
        &[(-55.9, -27.1), (-55.9, 27.1), (22.1, 27.1), (22.1, -27.1)],
        Some((0.0, 0.0)),
    )?;
    let tilted_obstacle = Polygon::from_xy(
        &[
            (-162.156_311, 135.594_849),
            (-179.011_23, 177.167_496),
            (-138.097_122, 193.755_432),
            (-121.242_203, 152.182_785),
        ],
        None,
    )?;
    run("tilted", &tilted_obstacle, &wide_robot)
}

fn run(name: &str, obstacle: &Polygon, robot: &Polygon) -> Result<()> {
    let cspace = ExpandCSpace::new(obstacle, robot).execute()?;
    for (i, v) in cspace.vertices().iter().enumerate() {
        info!(scenario = name, i, x = v.x, y = v.y, "c-space vertex");
    }

    let fast = FastPolygon::new(cspace)?;
    let outer = fast.circumscribed();
    let inner = fast.inscribed();
    info!(
        scenario = name,
        cx = outer.center().x,
        cy = outer.center().y,
        r_out = outer.radius(),
        r_in = inner.radius(),
        order = ?fast.edge_order(),
        "bounding circles and edge order"
    );
    Ok(())
}
