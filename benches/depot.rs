//! Benchmark suite for loading and serving the depot
//!
//! Uses the divan benchmarking framework over inputs generated in memory.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Each generated dataset has one customer per parcel. Every tenth customer
//! asks for a parcel that does not exist, and identifiers alternate between
//! discounted (`X`) and regular ones.

use depot_parcels::core::{CustomerQueue, ParcelStore, Worker};
use depot_parcels::io::customer_reader::enqueue_customers;
use depot_parcels::io::parcel_reader::insert_parcels;
use depot_parcels::io::{CustomerReader, EventLog, ParcelReader};
use std::fmt::Write;
use std::io::Cursor;

fn main() {
    divan::main();
}

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn parcel_id(i: usize) -> String {
    if i % 2 == 0 {
        format!("X{}", i)
    } else {
        format!("P{}", i)
    }
}

fn generate_parcels(count: usize) -> String {
    let mut text = String::from("PARCELS\nID Days Weight Dimensions\n");
    for i in 0..count {
        let _ = writeln!(
            text,
            "{} {} {}.{} {}x{}x{}",
            parcel_id(i),
            i % 12,
            i % 20,
            i % 10,
            1 + i % 30,
            1 + i % 20,
            1 + i % 10
        );
    }
    text
}

fn generate_customers(count: usize) -> String {
    let mut text = String::from("Seq Name ParcelID\n");
    for i in 0..count {
        let target = if i % 10 == 9 {
            format!("MISSING{}", i)
        } else {
            parcel_id(i)
        };
        let _ = writeln!(text, "{} Customer Number {} {}", i + 1, i, target);
    }
    text
}

fn load(parcels: &str, customers: &str) -> Worker {
    let log = EventLog::new();
    let mut store = ParcelStore::new(log.clone());
    let mut queue = CustomerQueue::new(log.clone());

    let reader = ParcelReader::from_reader(Cursor::new(parcels)).expect("Invalid parcel header");
    insert_parcels(reader, "bench", &mut store, &log).expect("Parcel load failed");

    let reader =
        CustomerReader::from_reader(Cursor::new(customers), "bench").expect("Empty customers");
    enqueue_customers(reader, "bench", &mut queue, &log).expect("Customer load failed");

    Worker::new(store, queue, log)
}

/// Parse both inputs into a store and queue
#[divan::bench(args = SIZES)]
fn load_inputs(bencher: divan::Bencher, size: usize) {
    let parcels = generate_parcels(size);
    let customers = generate_customers(size);

    bencher.bench(|| load(divan::black_box(&parcels), divan::black_box(&customers)));
}

/// Serve every customer in the queue
#[divan::bench(args = SIZES)]
fn serve_queue(bencher: divan::Bencher, size: usize) {
    let parcels = generate_parcels(size);
    let customers = generate_customers(size);

    bencher
        .with_inputs(|| load(&parcels, &customers))
        .bench_local_values(|mut worker| {
            while !worker.queue().is_empty() {
                let _ = worker.process_next();
            }
            worker
        });
}
