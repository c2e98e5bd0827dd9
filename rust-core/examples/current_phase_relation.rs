/// Example running the full pipeline on the reference junction
///
/// Builds the particle-hole strip, sweeps its dispersion over phase and momentum,
/// and prints the current-phase relation together with a few spectra near E = 0.
use jj_supercurrent::prelude::*;
use jj_supercurrent::dispersion::closest_phase_index;
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Current-phase relation of a phase-biased strip ===\n");

    // Example 1: Build the junction
    println!("1. Building a width-20 junction:");
    let model = JunctionBuilder::new().with_width(20).build()?;
    println!("   Sites: {}", model.sites().len());
    println!("   Bands per momentum: {}\n", model.num_bands());

    // Example 2: Sweep the dispersion
    println!("2. Sweeping 61 phases x 121 momenta:");
    let params = PhysicalParameters::new(0.4, 0.2, 1.0);
    let phases = linspace(0.0, 2.0 * PI, 61);
    let momenta = linspace(-PI, PI, 121);
    let table = solve(&model, &phases, &momenta, &params)?;

    for target in [0.0, PI / 2.0, PI] {
        let Some(i) = closest_phase_index(&table.phases, target) else {
            continue;
        };
        let k0 = momenta.len() / 2;
        let gap = table.dispersions[i][k0]
            .iter()
            .filter(|e| **e > 0.0)
            .fold(f64::INFINITY, |acc, e| acc.min(*e));
        println!("   phi = {:.2}: lowest positive E at k = 0 is {:.4}", table.phases[i], gap);
    }
    println!();

    // Example 3: Extract the current
    println!("3. Current-phase relation:");
    let cpr = extract(&table)?;
    for (phase, current) in table.phases.iter().zip(cpr.currents.iter()).step_by(6) {
        println!("   phi = {:.3}  I = {:+.4e} A", phase, current);
    }
    println!("   max |I| = {:.4e} A", cpr.critical_current());

    Ok(())
}
