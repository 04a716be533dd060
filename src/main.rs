// Copyright 2020 TwoCookingMice

use rendermath::shapes::triangle_mesh::TriangleMesh;

use std::env;

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <mesh.obj> [--per-vertex] [--limit N]", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut per_vertex = false;
    let mut limit: Option<usize> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--per-vertex" => {
                per_vertex = true;
            }
            "--limit" => {
                i += 1;
                limit = args.get(i).and_then(|v| v.parse::<usize>().ok());
            }
            other => {
                log::warn!("Ignoring unknown argument: {}.", other);
            }
        }
        i += 1;
    }

    let mesh = match TriangleMesh::from_obj(input_path) {
        Ok(mesh) => mesh,
        Err(err) => {
            eprintln!("failed to load {}: {}", input_path, err);
            std::process::exit(1);
        }
    };

    let (label, tangents) = if per_vertex {
        ("vertex", mesh.vertex_tangents())
    } else {
        ("face", mesh.face_tangents())
    };

    let count = limit.unwrap_or(tangents.len()).min(tangents.len());
    for (idx, t) in tangents.iter().take(count).enumerate() {
        println!("{} {}: {:.6} {:.6} {:.6}", label, idx, t.x, t.y, t.z);
    }
}
