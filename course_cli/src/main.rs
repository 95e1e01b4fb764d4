//! # Coursework CLI Application
//!
//! Interactive terminal front-end for masonry course layout calculations.
//! Prompts for the full parameter set (with defaults seeded from the last
//! saved snapshot when one exists), runs the forward or inverse solver,
//! and prints a report with a text course diagram and a JSON echo of the
//! result for machine consumption.

use std::io::{self, BufRead, Write};
use std::path::Path;

use course_core::calculations::forward::{self, ForwardInput, ForwardResult};
use course_core::calculations::inverse::{self, InverseInput, InverseResult};
use course_core::calculations::{unit_layout, UnitPiece};
use course_core::catalog::UnitKind;
use course_core::connection::{Axis, Connection};
use course_core::errors::CourseError;
use course_core::snapshot::{self, CalcMode, Parameters, Snapshot};
use course_core::units::LengthUnit;
use log::debug;

const SNAPSHOT_FILE: &str = "coursework.json";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Numbered selection list; out-of-range or empty input keeps the default.
fn prompt_choice(title: &str, options: &[String], default: usize) -> usize {
    println!("{}:", title);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
    let selected = prompt_f64(&format!("Select [{}]: ", default + 1), (default + 1) as f64);
    let index = selected as usize;
    if (1..=options.len()).contains(&index) {
        index - 1
    } else {
        default
    }
}

fn prompt_length_unit(title: &str, default: LengthUnit) -> LengthUnit {
    let labels: Vec<String> = LengthUnit::ALL.iter().map(|u| u.symbol().to_string()).collect();
    let default_index = LengthUnit::ALL.iter().position(|u| *u == default).unwrap_or(0);
    LengthUnit::ALL[prompt_choice(title, &labels, default_index)]
}

fn main() {
    env_logger::init();

    println!("Coursework CLI - Masonry Course Calculator");
    println!("==========================================");
    println!();

    let snapshot_path = Path::new(SNAPSHOT_FILE);
    let mut params = Parameters::default();

    if snapshot_path.exists() && prompt_yes_no("Load saved parameters? [y/N]: ", false) {
        match snapshot::load_snapshot(snapshot_path) {
            Ok(snapshot) => {
                debug!("snapshot restored, saved at {}", snapshot.meta.saved);
                params = snapshot.params;
                println!("Parameters loaded.");
            }
            Err(e) => println!("Could not load saved parameters: {}", e),
        }
    }
    println!();

    // Axis and direction
    let axis_labels: Vec<String> = Axis::ALL
        .iter()
        .map(|a| format!("{} Calculator", a.display_name()))
        .collect();
    let axis_default = Axis::ALL.iter().position(|a| *a == params.axis).unwrap_or(0);
    params.axis = Axis::ALL[prompt_choice("Axis", &axis_labels, axis_default)];
    println!();

    let mode_labels = vec![
        format!("From {}", params.axis.dimension_term()),
        format!("From {}", params.axis.unit_term()),
    ];
    let mode_default = CalcMode::ALL.iter().position(|m| *m == params.mode).unwrap_or(0);
    params.mode = CalcMode::ALL[prompt_choice("Mode", &mode_labels, mode_default)];
    println!();

    // Connection rule for the chosen axis; a stale rule from the other
    // axis falls back to that axis's default.
    if params.connection.axis() != params.axis {
        params.connection = Connection::default_for(params.axis);
    }
    let rules = Connection::all_for(params.axis);
    let rule_labels: Vec<String> = rules
        .iter()
        .map(|c| format!("{:<16} {}", c.code(), c.description()))
        .collect();
    let rule_default = rules.iter().position(|c| *c == params.connection).unwrap_or(0);
    params.connection = rules[prompt_choice("Connection type", &rule_labels, rule_default)];
    println!();

    // Unit selection
    let kind_labels: Vec<String> = UnitKind::ALL
        .iter()
        .map(|k| {
            if k.is_custom() {
                k.display_name().to_string()
            } else {
                format!("{} ({:.0} mm)", k.display_name(), k.size_for(params.axis))
            }
        })
        .collect();
    let kind_default = UnitKind::ALL
        .iter()
        .position(|k| *k == params.unit_kind)
        .unwrap_or(0);
    params.unit_kind = UnitKind::ALL[prompt_choice("Unit type (brick/block)", &kind_labels, kind_default)];

    if params.unit_kind.is_custom() {
        match params.axis {
            Axis::Length => {
                params.unit_length_mm = prompt_f64(
                    &format!("Custom unit length (mm) [{}]: ", params.unit_length_mm),
                    params.unit_length_mm,
                );
            }
            Axis::Height => {
                params.unit_height_mm = prompt_f64(
                    &format!("Custom unit height (mm) [{}]: ", params.unit_height_mm),
                    params.unit_height_mm,
                );
            }
        }
    } else {
        params.unit_length_mm = params.unit_kind.length_mm();
        params.unit_height_mm = params.unit_kind.height_mm();
    }

    params.mortar_joint_mm = prompt_f64(
        &format!("Mortar joint thickness (mm) [{}]: ", params.mortar_joint_mm),
        params.mortar_joint_mm,
    );
    println!();

    params.output_unit = prompt_length_unit("Result display unit", params.output_unit);
    println!();

    match params.mode {
        CalcMode::FromDimension => {
            params.input_unit = prompt_length_unit("Target entry unit", params.input_unit);
            params.target_dimension = prompt_f64(
                &format!(
                    "Target {} ({}) [{}]: ",
                    params.axis.dimension_term().to_lowercase(),
                    params.input_unit,
                    params.target_dimension
                ),
                params.target_dimension,
            );
            println!();

            let input = ForwardInput {
                target_dimension: params.target_dimension,
                input_unit: params.input_unit,
                connection: params.connection,
                spec: params.unit_spec(),
            };

            match forward::calculate(&input) {
                Ok(result) => print_forward_report(&params, &result),
                Err(e) => print_error(&e),
            }
        }
        CalcMode::FromUnits => {
            params.unit_count = prompt_f64(
                &format!(
                    "Number of {} [{}]: ",
                    params.axis.unit_term().to_lowercase(),
                    params.unit_count
                ),
                params.unit_count,
            );
            println!();

            let input = InverseInput {
                unit_count: params.unit_count,
                connection: params.connection,
                spec: params.unit_spec(),
            };

            match inverse::calculate(&input) {
                Ok(result) => print_inverse_report(&params, &result),
                Err(e) => print_error(&e),
            }
        }
    }

    println!();
    if prompt_yes_no("Save these parameters? [y/N]: ", false) {
        match snapshot::save_snapshot(&Snapshot::new(params.clone()), snapshot_path) {
            Ok(()) => {
                debug!("snapshot written to {}", SNAPSHOT_FILE);
                println!("Parameters saved to {}", SNAPSHOT_FILE);
            }
            Err(e) => println!("Could not save parameters: {}", e),
        }
    }
}

fn print_forward_report(params: &Parameters, result: &ForwardResult) {
    println!("═══════════════════════════════════════");
    println!("  COURSE LAYOUT RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Target {}: {} {}",
        params.axis.dimension_term().to_lowercase(),
        params.target_dimension,
        params.input_unit
    );
    println!("  Unit size:    {:.1} mm", params.unit_spec().unit_size_mm);
    println!("  Mortar joint: {:.1} mm", params.mortar_joint_mm);
    println!("  Connection:   {}", params.connection.code());
    println!();
    println!("  {} required:  {}", params.axis.unit_term(), result.units_required);
    println!(
        "  Adjusted {}: {} {}",
        params.axis.dimension_term().to_lowercase(),
        result.adjusted_dimension(params.output_unit),
        params.output_unit
    );
    println!();
    print_diagram(params, result.units_required);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_inverse_report(params: &Parameters, result: &InverseResult) {
    println!("═══════════════════════════════════════");
    println!("  TOTAL DIMENSION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  {}: {}",
        params.axis.unit_term(),
        params.unit_count
    );
    println!("  Unit size:    {:.1} mm", params.unit_spec().unit_size_mm);
    println!("  Mortar joint: {:.1} mm", params.mortar_joint_mm);
    println!("  Connection:   {}", params.connection.code());
    println!();
    println!(
        "  Total {}: {} {}",
        params.axis.dimension_term().to_lowercase(),
        result.total_dimension(params.output_unit),
        params.output_unit
    );
    println!();
    print_diagram(params, params.unit_count);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_error(error: &CourseError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_diagram(params: &Parameters, unit_count: f64) {
    match params.axis {
        Axis::Length => {
            let pieces = unit_layout(unit_count, &params.connection);
            if !pieces.is_empty() {
                println!("  {}", render_course_row(&pieces, params.mortar_joint_mm));
                println!();
            }
        }
        Axis::Height => print_course_stack(unit_count),
    }
}

/// One course seen from the side: full and half units with joints between.
fn render_course_row(pieces: &[UnitPiece], joint_mm: f64) -> String {
    const MAX_PIECES: usize = 16;

    let mut row = String::new();
    for (i, piece) in pieces.iter().take(MAX_PIECES).enumerate() {
        if i > 0 && joint_mm > 0.0 {
            row.push('░');
        }
        row.push_str(match piece {
            UnitPiece::Full => "[██████]",
            UnitPiece::Half => "[██]",
        });
    }
    if pieces.len() > MAX_PIECES {
        row.push_str(&format!(" …+{}", pieces.len() - MAX_PIECES));
    }
    row
}

/// Course stack seen from the side, top course first.
fn print_course_stack(courses: f64) {
    const MAX_COURSES: usize = 12;

    let total = courses.ceil() as usize;
    if total == 0 {
        return;
    }
    for n in (1..=total).rev().take(MAX_COURSES) {
        println!("  Course {:>2}  ██████████", n);
    }
    if total > MAX_COURSES {
        println!("  …{} more below", total - MAX_COURSES);
    }
    println!();
}
