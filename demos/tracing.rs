use lomuto_sort::{partition, sort_with, Driver};

fn setup_global_subscriber() {
    use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

    let fmt_layer = fmt::Layer::default();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(LevelFilter::TRACE)
        .init();
}

fn main() {
    setup_global_subscriber();

    for driver in [Driver::Recursive, Driver::WorkList] {
        let mut v = [5, 2, 9, 1, 5, 6];
        sort_with(&mut v, 0, 5, driver).unwrap();
        println!("{driver:?}: {v:?}");

        let mut v = [9, 7, 5, 3, 1];
        sort_with(&mut v, 0, 4, driver).unwrap();
        println!("{driver:?}: {v:?}");
    }

    let mut v = [3, 3, 3];
    let err = sort_with(&mut v, 2, 3, Driver::Recursive).unwrap_err();
    println!("rejected: {err}");

    let mut v = [5, 2, 9, 1, 5, 6];
    let p = partition(&mut v, 0, 5).unwrap();
    println!("partitioned around index {p}: {v:?}");
}
