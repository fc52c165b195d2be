//! `nplus_isqrt` benchmarks.
#![allow(unused_crate_dependencies)]

mod reference;
mod regime;

criterion::criterion_main! {
    regime::benches,
    reference::benches,
}
