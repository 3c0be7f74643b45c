//! # Rebarcalc CLI Application
//!
//! Prompt-driven terminal front end for rectangular RC beam flexural
//! design. Collects grade names, section dimensions and the design
//! moment, runs `rebar_core`, and prints a human-readable report plus the
//! JSON payload for programmatic use.
//!
//! Pass a path to a `materials.json` as the first argument to use a
//! custom material table instead of the built-in GB 50010 values.

use std::io::{self, BufRead, Write};

use rebar_core::design::{design_section, DesignRequest};
use rebar_core::file_io::load_material_table;
use rebar_core::materials::MaterialTable;
use rebar_core::RowLayout;

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

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Rebarcalc CLI - RC Beam Flexural Design");
    println!("=======================================");
    println!();

    let table: MaterialTable = match std::env::args().nth(1) {
        Some(path) => match load_material_table(&path) {
            Ok(table) => {
                println!("Loaded material table from {}", path);
                table
            }
            Err(e) => {
                eprintln!("Error loading '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => MaterialTable::builtin().clone(),
    };

    println!("Concrete grades: {}", table.concrete_grades().join(", "));
    println!("Rebar grades:    {}", table.rebar_grades().join(", "));
    println!();

    let concrete_grade = prompt_string("Concrete grade [C30]: ", "C30");
    let rebar_grade = prompt_string("Rebar grade [HRB400]: ", "HRB400");
    let width_mm = prompt_f64("Section width b (mm) [250]: ", 250.0);
    let height_mm = prompt_f64("Section height h (mm) [500]: ", 500.0);
    let cover_mm = prompt_f64("Rebar centroid distance a_s (mm) [35]: ", 35.0);
    let moment_kn_m = prompt_f64("Design moment M (kN.m) [150]: ", 150.0);

    let request = DesignRequest {
        concrete_grade,
        rebar_grade,
        width_mm,
        height_mm,
        cover_mm,
        moment_kn_m,
    };

    println!();
    match design_section(&table, &request) {
        Ok(outcome) => {
            println!("═══════════════════════════════════════");
            println!("  SECTION DESIGN RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Section:  {:.0} x {:.0} mm, a_s = {:.0} mm", request.width_mm, request.height_mm, request.cover_mm);
            println!("  Material: {} / {}", request.concrete_grade, request.rebar_grade);
            println!("  Moment:   {:.1} kN.m", request.moment_kn_m);
            println!();
            println!("Requirement:");
            println!("  A_s     = {:.2} mm²{}",
                outcome.required_area_mm2,
                if outcome.required_area_mm2 <= outcome.min_area_mm2 { "  (minimum governs)" } else { "" }
            );
            println!("  A_s,min = {:.2} mm²", outcome.min_area_mm2);
            println!("  xi = {:.4}  (xi_b = {:.4})", outcome.xi, outcome.xi_b);
            println!();
            println!("Feasible arrangements:");
            for option in &outcome.options {
                let row_info = match option.rows {
                    RowLayout::Single => format!("{}", option.bars_per_row),
                    RowLayout::Double => {
                        format!("{} / {}", option.bars_per_row, option.bars_in_second_row())
                    }
                };
                println!(
                    "  d{:<3} x {:<2}  A_p = {:>8.2} mm²  rows: {}  per row: {}",
                    option.diameter_mm,
                    option.bar_count,
                    option.provided_area_mm2,
                    option.rows.row_count(),
                    row_info
                );
            }
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RECOMMENDED: {} x d{} ({} row{}), A_p = {:.2} mm²",
                outcome.economic.bar_count,
                outcome.economic.diameter_mm,
                outcome.economic.rows.row_count(),
                if outcome.economic.rows == RowLayout::Single { "" } else { "s" },
                outcome.economic.provided_area_mm2
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&outcome) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
