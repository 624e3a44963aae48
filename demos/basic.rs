//! Feed a handful of 3-d observations through a four-bin histogram and print
//! every summary it can produce.
//!
//! Run with: cargo run --example basic

use flowhist::histogram::{Histogram, Vector};

fn main() {
    let data = [
        [8.0, 1.0, 3.0],
        [13.0, 23.0, 12.0],
        [17.0, 45.0, 44.0],
        [16.0, 23.0, 11.0],
        [15.0, 87.0, 71.0],
    ];

    let mut hist = Histogram::new(4, 3);
    for point in data {
        if let Err(err) = hist.add(point) {
            eprintln!("skipping {:?}: {}", point, err);
        }
    }

    let show = |v: Option<Vector>| v.map(|v| v.to_string()).unwrap_or_default();

    println!("MEAN {}", show(hist.mean()));
    println!("VARIANCE {}", show(hist.variance()));
    println!("QUANTILE {}", show(hist.quantile(0.5)));
    match hist.cdf(&Vector::from([100.0, 100.0, 100.0])) {
        Ok(p) => println!("CDF {}", p),
        Err(err) => eprintln!("CDF failed: {}", err),
    }
    print!("STRING {}", hist);
    println!("COUNT {}", hist.count());
}
