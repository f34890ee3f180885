//! CLI command implementations.

use std::time::Instant;

use glam::Vec3;
use sartor_collision::BodyCollider;
use sartor_engine::{Piece, Simulation};
use sartor_io::{validate_input, DrapeInput, RunSummary};
use sartor_record::{FrameBuffer, TracingSink};

/// Run a draping simulation from an input file.
pub fn simulate(
    input_path: &str,
    output_path: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Sartor Simulation");
    println!("─────────────────");
    println!("Input: {input_path}");
    println!();

    let content = std::fs::read_to_string(input_path)?;
    let input: DrapeInput = serde_json::from_str(&content)?;

    run(input, output_path, verbose)
}

/// Run a procedural scenario.
pub fn scenario(
    name: &str,
    steps: Option<u32>,
    output_path: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = crate::scenarios::ScenarioKind::from_name(name).ok_or_else(|| {
        format!("Unknown scenario: '{name}'. Available: ground_drop, sphere_drape, body_drape")
    })?;

    let mut input = crate::scenarios::build(kind);
    if let Some(steps) = steps {
        input.params.steps = steps;
    }

    println!("Sartor Scenario Runner");
    println!("══════════════════════");
    println!();
    println!(
        "Running: {} ({} piece(s), {} steps)",
        kind.name(),
        input.pieces.len(),
        input.params.steps,
    );
    println!();

    run(input, output_path, verbose)
}

/// Validate, assemble, step, and dump frames.
fn run(
    input: DrapeInput,
    output_path: &str,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    validate_input(&input)?;

    let config = input.params.config.clone();

    // Authored garment coordinates to world metres, then placement.
    let unit = 1.0 / config.unit_scale;
    let mut pieces = Vec::with_capacity(input.pieces.len());
    for piece_input in &input.pieces {
        let mut mesh = piece_input.mesh.clone();
        mesh.scale_vertices(unit);
        mesh.offset_vertices(Vec3::from_array(piece_input.offset));
        pieces.push(Piece::new(&piece_input.name, &mesh, &config)?);
    }

    let mut sim = Simulation::new(config, pieces)?;

    if let Some(ref body_mesh) = input.body {
        let mut body = body_mesh.clone();
        body.scale_vertices(input.params.body_scale);
        sim.add_collider(Box::new(BodyCollider::new(&body)?));
    }

    if verbose {
        sim.add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    }

    let start = Instant::now();
    sim.step(input.params.steps)?;
    let wall_time_seconds = start.elapsed().as_secs_f64();

    let summary = RunSummary {
        steps: input.params.steps,
        frames: sim.frame_count(),
        wall_time_seconds,
        final_kinetic_energy: sim.kinetic_energy(),
        pieces: sim.piece_names().iter().map(|s| s.to_string()).collect(),
    };

    let bytes = sim.into_frames().to_bytes()?;
    std::fs::write(output_path, &bytes)?;

    println!("  Steps:        {}", summary.steps);
    println!("  Frames:       {}", summary.frames);
    println!("  Wall time:    {:.3}s", summary.wall_time_seconds);
    println!("  Final KE:     {:.6e}", summary.final_kinetic_energy);
    println!();
    println!("Frames written to: {output_path}");

    Ok(())
}

/// Inspect a recorded frame dump.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Sartor Frame Inspector");
    println!("──────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let frames = FrameBuffer::from_bytes(&data)
        .map_err(|e| format!("Failed to read frame dump: {e}"))?;

    println!("Frames:       {}", frames.frame_count());

    let Some(last) = frames.last() else {
        println!("(empty dump)");
        return Ok(());
    };

    for (name, positions) in &last.positions {
        let n = positions.len() / 3;
        println!();
        println!("Piece:        {name}");
        println!("Vertices:     {n}");

        // Y range at the final frame.
        let min_y = positions
            .iter()
            .skip(1)
            .step_by(3)
            .fold(f32::INFINITY, |a, &b| a.min(b));
        let max_y = positions
            .iter()
            .skip(1)
            .step_by(3)
            .fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        println!("Y range:      [{min_y:.4}, {max_y:.4}]");
    }

    Ok(())
}

/// Validate a drape input or standalone mesh file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Sartor Validator");
    println!("────────────────");
    println!();

    let content = std::fs::read_to_string(path)?;

    if let Ok(input) = serde_json::from_str::<DrapeInput>(&content) {
        println!("Validating drape input: {path}");
        match validate_input(&input) {
            Ok(()) => println!("✅ Input is valid ({} piece(s)).", input.pieces.len()),
            Err(e) => println!("❌ Input validation failed: {e}"),
        }
        return Ok(());
    }

    println!("Validating mesh: {path}");
    let mesh: sartor_mesh::TriangleMesh = serde_json::from_str(&content)?;
    match mesh.validate() {
        Ok(()) => println!(
            "✅ Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        ),
        Err(e) => println!("❌ Mesh validation failed: {e}"),
    }

    Ok(())
}
