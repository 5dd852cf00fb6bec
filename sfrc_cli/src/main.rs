//! # SFRC CLI Application
//!
//! Thin command-line front end over `sfrc_core`.
//!
//! - `sfrc_cli project.json` evaluates every item of a project document
//! - `sfrc_cli` with no argument runs an interactive demo on a reference
//!   section
//!
//! Set `RUST_LOG=debug` to see the engine's branch decisions.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use log::info;

use sfrc_core::calculations::design_check::DesignCheckResult;
use sfrc_core::calculations::moment_curvature::MomentCurvatureResult;
use sfrc_core::calculations::shear::{Reinforcement, ShearContributions, ShearDemand};
use sfrc_core::calculations::CalculationOutput;
use sfrc_core::section::SectionInputs;
use sfrc_core::{compute_moment_curvature, compute_shear_capacity, CalcError, CalcResult, Project};

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

fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Project::from_json(&contents)
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn print_error(e: &CalcError) {
    eprintln!("Error [{}]: {}", e.error_code(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_moment_curvature(mc: &MomentCurvatureResult) {
    println!("Moment-curvature:");
    println!("  {:<10} {:>10} {:>14} {:>8}", "State", "M (kNm)", "phi (1/mm)", "k");
    for (name, point) in [
        ("Cracking", &mc.cracking),
        ("Yielding", &mc.yielding),
        ("Ultimate", &mc.ultimate),
    ] {
        println!(
            "  {:<10} {:>10.3} {:>14.4e} {:>8.4}",
            name, point.moment_knm, point.curvature_per_mm, point.k
        );
    }
    println!(
        "  Governing: yielding {:?}, ultimate {:?}",
        mc.yielding_candidates.governing, mc.ultimate_candidates.governing
    );
}

fn print_shear(shear: &ShearContributions) {
    println!("Shear capacity:");
    let shares = shear.shares();
    for (name, value, pct) in [
        ("Dowel action Vd", shear.vd_kn, shares.map(|s| s.dowel_pct)),
        ("Compression zone Vc", shear.vc_kn, shares.map(|s| s.compression_pct)),
        ("Aggregate interlock Vai", shear.vai_kn, shares.map(|s| s.interlock_pct)),
        ("Fibers VF", shear.vf_kn, shares.map(|s| s.fiber_pct)),
    ] {
        match pct {
            Some(p) => println!("  {:<24} {:>9.3} kN ({:>5.1}%)", name, value, p),
            None => println!("  {:<24} {:>9.3} kN", name, value),
        }
    }
    println!("  {:<24} {:>9.3} kN", "Total VCSDT", shear.vcsdt_kn);
}

fn print_design_check(check: &DesignCheckResult) {
    println!(
        "Demand ({}): Md = {:.3} kNm at x = {:.0} mm, Vd = {:.3} kN",
        check.demand.combination,
        check.demand.moment_knm,
        check.demand.moment_position_mm,
        check.demand.shear_kn
    );
    print_moment_curvature(&check.moment_curvature);
    print_shear(&check.shear);
    println!("Checks:");
    println!("  Flexure: {:.2} {}", check.flexure_unity, status_icon(check.flexure_unity <= 1.0));
    println!("  Shear:   {:.2} {}", check.shear_unity, status_icon(check.shear_unity <= 1.0));
    println!(
        "  RESULT: {} (governs: {})",
        if check.passes() { "PASS" } else { "FAIL" },
        check.governing_condition()
    );
}

fn print_output(output: &CalculationOutput) {
    match output {
        CalculationOutput::MomentCurvature(mc) => print_moment_curvature(mc),
        CalculationOutput::Shear(shear) => print_shear(shear),
        CalculationOutput::DesignCheck(check) => print_design_check(check),
    }
    if let Ok(json) = serde_json::to_string_pretty(output) {
        println!();
        println!("JSON Output:");
        println!("{}", json);
    }
}

fn run_project(path: &Path) -> ExitCode {
    let project = match load_project(path) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };
    info!("loaded {} ({} items)", path.display(), project.item_count());

    println!(
        "Project {} - {} ({})",
        project.meta.job_id, project.meta.client, project.meta.engineer
    );
    println!("Combinations: {}", project.settings.combination_set);

    let mut failed = 0;
    for outcome in project.evaluate_all() {
        println!();
        println!("═══════════════════════════════════════");
        println!("  {} [{}]", outcome.label, outcome.calc_type);
        println!("═══════════════════════════════════════");
        match outcome.result {
            Ok(output) => print_output(&output),
            Err(e) => {
                failed += 1;
                print_error(&e);
            }
        }
    }

    if failed > 0 {
        eprintln!();
        eprintln!("{} item(s) failed", failed);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_demo() -> ExitCode {
    println!("SFRC CLI - Section Moment-Curvature and Shear Capacity");
    println!("======================================================");
    println!();
    println!("Reference section: b=120 mm, d=435 mm, h=500 mm, fc=28 MPa,");
    println!("As=226 mm², fy=400 MPa, Vf=0.5% hooked fibers (lf=35 mm, df=0.55 mm)");
    println!();

    let m_knm = prompt_f64("Enter demand moment M (kNm) [48.16]: ", 48.16);
    let v_kn = prompt_f64("Enter demand shear V (kN) [81.08]: ", 81.08);
    println!();

    let section = SectionInputs {
        fc_mpa: 28.0,
        daggmax_mm: 16.0,
        fy_mpa: 400.0,
        as_mm2: 226.0,
        rhof: 1.0,
        vf: 0.005,
        df_mm: 0.55,
        lf_mm: 35.0,
        b_mm: 120.0,
        d_mm: 435.0,
        h_mm: 500.0,
    };
    let bars = Reinforcement { phibar_mm: 12.0, ns: 2 };
    let demand = ShearDemand { m_knm, v_kn };

    let result = compute_moment_curvature(&section)
        .and_then(|mc| compute_shear_capacity(&section, &bars, &demand).map(|shear| (mc, shear)));

    match result {
        Ok((mc, shear)) => {
            print_moment_curvature(&mc);
            println!();
            print_shear(&shear);
            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&shear) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match std::env::args().nth(1) {
        Some(path) => run_project(Path::new(&path)),
        None => run_demo(),
    }
}
