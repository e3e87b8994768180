//! Sweep degree and smoothing over a reference dataset and print the fits.
//!
//! Run with: `cargo run --example fit_grid`

use skloess::prelude::*;

fn main() -> Result<(), LoessError> {
    let x = vec![
        0.5578196, 2.0217271, 2.5773252, 3.4140288, 4.3014084, 4.7448394, 5.1073781, 6.5411662,
        6.7216176, 7.2600583, 8.1335874, 9.1224379, 11.9296663, 12.3797674, 13.2728619,
        14.2767453, 15.3731026, 15.6476637, 18.5605355, 18.5866354, 18.7572812,
    ];
    let y = vec![
        18.63654, 103.49646, 150.35391, 190.51031, 208.70115, 213.71135, 228.49353, 233.55387,
        234.55054, 223.89225, 227.68339, 223.91982, 168.01999, 164.95750, 152.61107, 160.78742,
        168.55567, 152.42658, 221.70702, 222.69040, 243.18828,
    ];

    let degrees = [Linear, Quadratic, Cubic];
    let smoothings = [0.3, 0.5, 0.7, 1.0];

    for degree in degrees {
        for smoothing in smoothings {
            let fitted = Loess::new()
                .degree(degree)
                .smoothing(smoothing)
                .build()?
                .fit(&x, &y)?;

            println!("{fitted}");
            println!();
            println!("        X     Y_smooth");
            println!("  --------------------");
            for (&xi, yi) in x.iter().zip(fitted.predict(&x)?) {
                println!("  {xi:>7.2}  {yi:>10.4}");
            }
            println!();
        }
    }

    Ok(())
}
