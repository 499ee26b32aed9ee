use std::io::{self, Write};

use int_vector::collections::contiguous::IntVector;
use int_vector::collections::contiguous::vector::fmt::print_vector;

fn main() -> io::Result<()> {
    // RUST_LOG=trace shows every reallocation.
    env_logger::init();

    let mut out = io::stdout().lock();

    writeln!(out, "\n[IntVector]\n")?;

    let mut vec = IntVector::new();
    writeln!(out, "{:?}", vec)?;

    for i in 0..8 {
        vec.push_back(i);
        writeln!(out, "{:?}", vec)?;
    }

    vec.shrink_to_fit();
    writeln!(out, "{:?}", vec)?;

    print_vector(&mut out, &vec)?;
    writeln!(out)?;

    // A single element vector prints nothing.
    print_vector(&mut out, &IntVector::from([5]))?;
    writeln!(out)?;

    writeln!(out, "{}", IntVector::from([1, 2]) < IntVector::from([1, 2, 3]))?;

    vec.clear();
    vec.shrink_to_fit();
    writeln!(out, "{:?}", vec)
}
