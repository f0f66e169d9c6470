//! De Casteljau visualizer CLI
//!
//! Builds a construction from control points given on the command line and
//! writes it out as an SVG document, a JSON list of draw commands, or a
//! plain dump of every interpolation level.
//!
//! # Usage
//!
//! ```bash
//! # Quadratic construction at t = 0.3, saved as SVG
//! casteljau --points "200,60" --t 0.3 --svg curve.svg
//!
//! # Classic cubic with the native overlay, draw commands on stdout
//! casteljau --cubic --points "150,80 450,80" --t 0.6 --native --json
//!
//! # Print the reduction levels
//! casteljau --points "0,1 10,12" --start 0,0 --end 15,1 --t 0.25 --levels
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use casteljau_editor::{ControlModel, Editor, EditorOptions};
use casteljau_geometry::{evaluate, evaluate_levels};
use casteljau_math::{dvec2, Point2};
use casteljau_render::{Color, CommandRecorder, SvgSurface};

fn print_usage() {
    eprintln!(
        r#"De Casteljau visualizer CLI

USAGE:
    casteljau [OPTIONS]

OPTIONS:
    --points "x,y x,y ..."   Interior control points, in order
    --cubic                  Four-point variant; the first two points fill the control slots
    --start x,y              Start point (default: left margin, vertically centred)
    --end x,y                End point (default: right margin, vertically centred)
    --t T                    Curve parameter, clamped to [0, 1]
    --trace / --no-trace     Draw or hide the traced curve
    --native                 Draw the native curve overlay
    --config PATH            Load editor options from a TOML file
    --svg PATH               Write the construction as an SVG document
    --json                   Print the draw commands as JSON
    --levels                 Print every interpolation level
    --help                   Show this help message

Without --svg, --json or --levels the point on the curve is printed.
"#
    );
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    points: Vec<Point2>,
    cubic: bool,
    start: Option<Point2>,
    end: Option<Point2>,
    t: Option<f64>,
    trace: Option<bool>,
    native: bool,
    config: Option<PathBuf>,
    svg: Option<PathBuf>,
    json: bool,
    levels: bool,
}

/// Parse arguments after the program name. `Ok(None)` means help was asked for.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .with_context(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--points" => {
                let raw = value("--points")?;
                cli.points = raw
                    .split_whitespace()
                    .map(parse_point)
                    .collect::<Result<_>>()?;
            }
            "--cubic" => cli.cubic = true,
            "--start" => cli.start = Some(parse_point(value("--start")?)?),
            "--end" => cli.end = Some(parse_point(value("--end")?)?),
            "--t" => {
                let raw = value("--t")?;
                let t = raw
                    .parse::<f64>()
                    .with_context(|| format!("Invalid parameter t: {}", raw))?;
                cli.t = Some(t);
            }
            "--trace" => cli.trace = Some(true),
            "--no-trace" => cli.trace = Some(false),
            "--native" => cli.native = true,
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--svg" => cli.svg = Some(PathBuf::from(value("--svg")?)),
            "--json" => cli.json = true,
            "--levels" => cli.levels = true,
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(Some(cli))
}

fn parse_point(raw: &str) -> Result<Point2> {
    let Some((x, y)) = raw.split_once(',') else {
        bail!("Expected a point as x,y, got {:?}", raw);
    };
    let x = x
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid x coordinate in {:?}", raw))?;
    let y = y
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid y coordinate in {:?}", raw))?;
    Ok(dvec2(x, y))
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print_usage();
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {:#}\n", e);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &CliArgs) -> Result<()> {
    let options = match &cli.config {
        Some(path) => EditorOptions::load_from_file(path),
        None => EditorOptions::default(),
    };

    if cli.cubic {
        let mut editor = Editor::cubic(&options);
        if cli.points.len() > 2 {
            log::warn!(
                "Cubic mode takes two control points, ignoring {} more",
                cli.points.len() - 2
            );
        }
        apply(&mut editor, cli);
        let sequence = editor.model().to_sequence().map(|points| points.to_vec());
        output(&mut editor, sequence, cli, &options)
    } else {
        let mut editor = Editor::generalized(&options);
        apply(&mut editor, cli);
        let sequence = Some(editor.control_sequence());
        output(&mut editor, sequence, cli, &options)
    }
}

fn apply<M: ControlModel>(editor: &mut Editor<M>, cli: &CliArgs) {
    for &p in &cli.points {
        editor.add_control_point(p);
    }
    if let Some(start) = cli.start {
        editor.set_start_point(start);
    }
    if let Some(end) = cli.end {
        editor.set_end_point(end);
    }
    if let Some(t) = cli.t {
        editor.set_parameter_t(t);
    }

    let mut mode = editor.display_mode();
    if let Some(trace) = cli.trace {
        mode.show_trace = trace;
    }
    if cli.native {
        mode.show_native_curve = true;
    }
    editor.set_display_mode(mode);
}

/// `sequence` is the full control sequence, or `None` while a cubic is
/// missing control points.
fn output<M: ControlModel>(
    editor: &mut Editor<M>,
    sequence: Option<Vec<Point2>>,
    cli: &CliArgs,
    options: &EditorOptions,
) -> Result<()> {
    let t = editor.parameter_t();

    if let Some(path) = &cli.svg {
        let mut svg = SvgSurface::new(options.canvas_width, options.canvas_height)
            .with_background(Color::WHITE);
        editor.draw(&mut svg)?;
        svg.save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {} elements to {}", svg.element_count(), path.display());
    }

    if cli.json {
        let mut recorder = CommandRecorder::new();
        editor.draw(&mut recorder)?;
        println!("{}", recorder.to_json()?);
    }

    if cli.levels {
        let Some(points) = &sequence else {
            bail!("The cubic needs two control points before it has levels");
        };
        for (depth, level) in evaluate_levels(points, t).iter().enumerate() {
            let coords: Vec<String> = level
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            println!("level {}: {}", depth, coords.join(" "));
        }
    }

    if cli.svg.is_none() && !cli.json && !cli.levels {
        match &sequence {
            Some(points) => {
                let p = evaluate(points, t);
                println!("B({}) = ({}, {})", t, p.x, p.y);
            }
            None => println!("Curve incomplete: place two control points"),
        }
    }
    Ok(())
}
