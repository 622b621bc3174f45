//! Basic example: step through the four-market sample by hand
//!
//! Run with: cargo run --example basic

use center_of_gravity_rs::{sample, SimulationRun, SolverConfig};

fn main() {
    println!("=== center-of-gravity-rs example ===\n");

    let points = sample::four_markets();

    println!("Demand points:");
    for p in &points {
        println!(
            "  {:<26} ({:>5.1}, {:>5.1})  weight {:>6.1}",
            p.name(),
            p.coordinate().x,
            p.coordinate().y,
            p.weight()
        );
    }
    println!();

    let config = SolverConfig::new(0.1).with_max_iters(50);
    let mut run = SimulationRun::new(points, config).expect("Initialization failed");

    let initial = run.current();
    let terms = initial.trace().terms();
    println!("Step 0: {}", initial.trace().formula());
    println!(
        "  X = {:.2} / {:.2} = {:.2}",
        terms.numerator_x,
        terms.denominator_x,
        initial.centroid().x
    );
    println!(
        "  Y = {:.2} / {:.2} = {:.2}\n",
        terms.numerator_y,
        terms.denominator_y,
        initial.centroid().y
    );

    while run.can_advance() && run.current_iteration() < run.config().max_iters {
        let s = run.advance().expect("Iteration failed");
        let terms = s.trace().terms();
        println!(
            "Step {}: X = {:.2}/{:.4} = {:.2}, Y = {:.2}/{:.4} = {:.2}, cost = {:.0}",
            s.index(),
            terms.numerator_x,
            terms.denominator_x,
            s.centroid().x,
            terms.numerator_y,
            terms.denominator_y,
            s.centroid().y,
            s.total_cost()
        );
        if let Some(m) = run.last_movement() {
            println!("  moved dx = {:+.3}, dy = {:+.3}", m.dx, m.dy);
        }
    }

    let summary = run.summary();
    println!("\nConverged: {}", summary.converged);
    println!(
        "Recommended site: ({:.1}, {:.1}) with total cost {:.0}",
        summary.location.x, summary.location.y, summary.total_cost
    );

    println!("\n=== Done! ===");
}
