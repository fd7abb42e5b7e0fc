use anyhow::Result;
use log::LevelFilter;

use vctr::prelude::*;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("VCTR_LOG", "error,vctr=info"))
        .init();

    let a = vector![7, 3, 9, 12];
    let b = vector![2, 8, 4, 17];
    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", (&a + &b)?);
    println!("a - b = {}", (&a - &b)?);
    println!("a . b = {}", dot_product(&a, &b)?);
    println!("|a| = {:.4}", a.magnitude());
    println!("a ⟂ b: {}", are_perpendicular(&a, &b)?);

    let direction = vector![3.0, 4.0];
    println!("unit({}) = {}", direction, unit_vector(&direction)?);

    // Large enough to take the parallel path under the default thresholds.
    let big: Vector<f64> = (0..100_000).map(|i| i as f64 * 1e-3).collect();
    let doubled = (&big + &big)?;
    println!(
        "large: {} elements, |big| = {:.3}, |big + big| = {:.3}",
        big.dimensions(),
        big.magnitude(),
        doubled.magnitude()
    );

    let m = Matrix::from_vectors(&[a.clone(), b.clone()])?;
    println!("matrix {:?} = {}", m.shape(), m);

    if let Err(e) = dot_product(&Vector::<i32>::default(), &Vector::default()) {
        println!("empty dot product: {}", e);
    }
    let mut x = vec![0; 2];
    if let Err(e) = solve_combinations(&[a.to_vec()], &b.to_vec(), &mut x, SolveAlgorithm::default()) {
        println!("solve: {}", e);
    }
    Ok(())
}
