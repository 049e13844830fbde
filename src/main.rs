//! Flipbook CLI - Replay scripted editing sessions from JSON.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use flipbook::{LineGeometry, Session};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <session.json> [output.json]", args[0]);
        eprintln!();
        eprintln!("Replay a scripted flipbook editing session.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  session.json  Starting animation, config and input timeline");
        eprintln!("  output.json   Where to write the resulting animation (optional)");
        eprintln!();
        eprintln!("An example session is printed with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_session();
        return;
    }

    let session_path = PathBuf::from(&args[1]);
    let output_path = args.get(2).map(PathBuf::from);

    let session = Session::load(&session_path).unwrap_or_else(|e| {
        eprintln!("Error loading session: {}", e);
        std::process::exit(1);
    });

    println!("Flipbook Session");
    println!("================");
    println!("Frames: {}", session.animation.len());
    println!("Steps: {}", session.steps.len());
    println!("Distance threshold: {}", session.config.distance_threshold);
    println!(
        "Playback: {} ({} ms)",
        if session.playback.playing { "playing" } else { "paused" },
        session.playback.frame_interval_ms
    );
    println!();

    let start = Instant::now();
    let outcome = session.run().unwrap_or_else(|e| {
        eprintln!("Error replaying session: {}", e);
        std::process::exit(1);
    });
    let elapsed = start.elapsed();

    println!("Result:");
    println!("  Current frame: {}", outcome.current_frame);
    println!("  Events emitted: {}", outcome.events.len());
    let mut geometry = LineGeometry::default();
    for (i, frame) in outcome.animation.frames().iter().enumerate() {
        geometry.fill(frame).unwrap_or_else(|e| {
            eprintln!("Error building geometry for frame {}: {}", i, e);
            std::process::exit(1);
        });
        println!(
            "  Frame {}: {} strokes, {} points, {} segments",
            i,
            frame.len(),
            frame.point_count(),
            geometry.segment_count()
        );
    }
    println!("Time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = output_path {
        let json = serde_json::to_string(&outcome.animation).unwrap_or_else(|e| {
            eprintln!("Error serializing animation: {}", e);
            std::process::exit(1);
        });
        fs::write(&path, json).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        });
        println!("Wrote {}", path.display());
    }
}

fn print_example_session() {
    match serde_json::to_string_pretty(&Session::example()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing example: {}", e);
            std::process::exit(1);
        }
    }
}
