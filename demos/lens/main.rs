//! Lens demo: builds a lens from CLI parameters and reports the mesh a host
//! would receive.
//!
//! Usage:
//! ```text
//! cargo run --example lens                                   # default biconvex lens
//! cargo run --example lens -- 5 -5 2 1 3                     # r1 r2 semi-diameter thickness segments
//! cargo run --example lens -- --radius1 5 --semi-diameter 0  # named overrides, 0 = auto
//! ```

use lensgen::math::Point3;
use lensgen::mesh::{Edge, Face, MeshSink, Shading};
use lensgen::operations::creation::{LensParameters, MakeLens};
use lensgen::Result;
use tracing::info;

/// Sink standing in for a scene graph: logs what it is given.
struct LogSink;

impl MeshSink for LogSink {
    fn commit(
        &mut self,
        vertices: &[Point3],
        edges: &[Edge],
        faces: &[Face],
        shading: Shading,
    ) -> Result<()> {
        info!(
            vertices = vertices.len(),
            edges = edges.len(),
            faces = faces.len(),
            ?shading,
            "mesh committed"
        );
        Ok(())
    }
}

/// Parse CLI arguments into lens parameters.
///
/// Positional values fill `radius1 radius2 semi_diameter thickness segments`
/// in order; `--name value` pairs override a single field.
fn parse_args() -> LensParameters {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut params = LensParameters::default()
        .with_radius1(5.0)
        .with_radius2(-5.0)
        .with_semi_diameter(2.0)
        .with_thickness(1.0)
        .with_segments(3);

    let mut positional = 0;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let (field, value) = match arg.strip_prefix("--") {
            Some(name) => (name.replace('-', "_"), iter.next()),
            None => {
                let field = ["radius1", "radius2", "semi_diameter", "thickness", "segments"]
                    .get(positional)
                    .map_or_else(String::new, |f| (*f).to_string());
                positional += 1;
                (field, Some(arg))
            }
        };
        let Some(value) = value else {
            eprintln!("[lens] missing value for {field}");
            continue;
        };
        if !apply(&mut params, &field, value) {
            eprintln!("[lens] ignoring {field} = {value}");
        }
    }
    params
}

fn apply(params: &mut LensParameters, field: &str, value: &str) -> bool {
    if field == "segments" {
        return value.parse().map(|v| params.segments = v).is_ok();
    }
    let Ok(v) = value.parse::<f64>() else {
        return false;
    };
    match field {
        "radius1" => params.radius1 = v,
        "radius2" => params.radius2 = v,
        "semi_diameter" => params.semi_diameter = v,
        "thickness" => params.thickness = v,
        _ => return false,
    }
    true
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and lensgen.
    // Override with RUST_LOG env var (e.g. RUST_LOG=lensgen=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lens=info".parse().unwrap_or_default())
        .add_directive("lensgen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = parse_args();
    info!(?params, "building lens");

    let mesh = MakeLens::new(params).execute()?;
    if let Some(aabb) = mesh.bounding_box() {
        info!(min = ?aabb.min, max = ?aabb.max, "bounding box");
    }
    mesh.commit_to(&mut LogSink)
}
