use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use macroquad::math::{Vec2, vec2};
use plotters::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use slingshot_rust::core::config::GameConfig;
use slingshot_rust::core::flight::{ShotReport, simulate_shot};
use slingshot_rust::core::scene::{Scene, SceneObject};

const DEFAULT_MAX_TICKS: usize = 2_000;

#[derive(Debug, PartialEq)]
struct Options {
    drag: Vec2,
    max_ticks: usize,
    config_path: Option<PathBuf>,
    plot_path: Option<PathBuf>,
}

fn parse_f32(value: &str, label: &str) -> Result<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| anyhow!("Invalid {label}: '{value}'. Expected a finite number."))
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(format!("shot-{}.png", Local::now().format("%Y%m%d-%H%M%S")))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut positional = Vec::new();
    let mut max_ticks = DEFAULT_MAX_TICKS;
    let mut config_path = None;
    let mut plot_path = None;

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = iter.next().context("--ticks needs a value")?;
                max_ticks = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid tick count: '{value}'."))?;
            }
            "--config" => {
                let value = iter.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(value));
            }
            "--plot" => {
                let explicit = iter.next_if(|next| next.ends_with(".png"));
                plot_path = Some(explicit.map_or_else(default_plot_path, PathBuf::from));
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let [drag_x, drag_y] = positional.as_slice() else {
        bail!("Expected exactly 2 arguments: <drag_x> <drag_y>.");
    };

    Ok(Options {
        drag: vec2(parse_f32(drag_x, "drag_x")?, parse_f32(drag_y, "drag_y")?),
        max_ticks,
        config_path,
        plot_path,
    })
}

fn to_px(p: Vec2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn draw_object<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    object: &SceneObject,
    color: RGBColor,
) -> Result<()> {
    let top_left = object.position();
    area.draw(&Rectangle::new(
        [to_px(top_left), to_px(top_left + object.size())],
        color.mix(0.6).filled(),
    ))
    .map_err(|e| anyhow!("Could not draw scene object: {e}"))?;

    let hitbox = object.collision_rect();
    area.draw(&Rectangle::new(
        [
            to_px(vec2(hitbox.x, hitbox.y)),
            to_px(vec2(hitbox.x + hitbox.w, hitbox.y + hitbox.h)),
        ],
        color.stroke_width(2),
    ))
    .map_err(|e| anyhow!("Could not draw hitbox: {e}"))?;
    Ok(())
}

/// One pixel per scene unit, y pointing down, so scene coordinates go
/// straight to the bitmap.
fn plot_shot(path: &Path, scene: &Scene, report: &ShotReport) -> Result<()> {
    let size = (
        scene.canvas_width.ceil() as u32,
        scene.canvas_height.ceil() as u32,
    );
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&RGBColor(214, 236, 250))
        .map_err(|e| anyhow!("Could not clear plot: {e}"))?;

    draw_object(&root, &scene.sun, RGBColor(250, 204, 21))?;
    draw_object(&root, &scene.barn, RGBColor(185, 28, 28))?;
    draw_object(&root, &scene.grass1, RGBColor(22, 163, 74))?;
    draw_object(&root, &scene.grass2, RGBColor(22, 163, 74))?;
    draw_object(&root, &scene.pig, RGBColor(134, 239, 172))?;

    let half = scene.bird_size() / 2.0;
    let centers: Vec<(i32, i32)> = std::iter::once(scene.start_position())
        .chain(report.path.iter().copied())
        .map(|p| to_px(p + half))
        .collect();
    root.draw(&PathElement::new(centers.clone(), RED.stroke_width(2)))
        .map_err(|e| anyhow!("Could not draw flight path: {e}"))?;
    for center in centers {
        root.draw(&Circle::new(center, 2, RED.filled()))
            .map_err(|e| anyhow!("Could not draw flight path: {e}"))?;
    }

    root.present()
        .map_err(|e| anyhow!("Could not write {}: {e}", path.display()))?;
    Ok(())
}

fn print_report(report: &ShotReport) {
    let outcome = report.outcome.map_or("still flying", |o| o.label());
    println!(
        "Launch velocity: ({:.2}, {:.2}) per tick",
        report.launch_velocity.x, report.launch_velocity.y
    );
    println!("Outcome: {outcome}");
    println!("Ticks: {}", report.ticks);
    println!("Bounces: {}", report.bounces);
    if let Some(last) = report.path.last() {
        println!("Last position: ({:.2}, {:.2})", last.x, last.y);
    }
    println!(
        "Final velocity: ({:.2}, {:.2})",
        report.final_velocity.x, report.final_velocity.y
    );
    for message in &report.messages {
        println!("Message: {message}");
    }
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} <drag_x> <drag_y> [--ticks N] [--config PATH] [--plot [PATH.png]]");
    println!();
    println!("The drag vector is anchor minus release point, in scene units:");
    println!("positive x throws right, negative y throws up.");
    println!();
    println!("Examples:");
    println!("  {program} 100 -120");
    println!("  {program} 150 -90 --plot shot.png");
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(args.first().map_or("slingshot_rust", String::as_str));
        return Ok(());
    }

    let options = parse_args(&args)?;
    let config = match &options.config_path {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::load_or_default(GameConfig::default_path()),
    };

    let report = simulate_shot(&config, options.drag, options.max_ticks);
    print_report(&report);

    if let Some(path) = &options.plot_path {
        plot_shot(path, &config.scene, &report)?;
        info!("Wrote flight plot to {}", path.display());
        println!("Plot: {}", path.display());
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("slingshot_rust=warn")),
        )
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}
