use criterion::{Criterion, criterion_group, criterion_main};
use lib::cell::AtomicCell;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

fn execute(num_readers: u8, num_writers: u8, num_worker_increments: i32, write_fn: fn(&AtomicCell)) {
    let target = Arc::new(AtomicCell::new(0));
    let total_increments = num_writers as i32 * num_worker_increments;

    let writers = init_writers(
        Arc::clone(&target),
        num_writers,
        num_worker_increments,
        write_fn,
    );
    let readers = init_readers(Arc::clone(&target), num_readers, total_increments);
    readers.into_iter().for_each(|handle| {
        let _ = handle.join();
    });
    writers.into_iter().for_each(|handle| {
        let _ = handle.join();
    });
}

fn init_writers(
    target: Arc<AtomicCell>,
    num: u8,
    num_worker_increments: i32,
    write_fn: fn(&AtomicCell),
) -> Vec<JoinHandle<()>> {
    (0..num)
        .map(|_| {
            let target = Arc::clone(&target);
            thread::spawn(move || {
                let mut i = 0;
                while i < num_worker_increments {
                    write_fn(&target);
                    i += 1;
                }
            })
        })
        .collect::<Vec<_>>()
}

fn init_readers(target: Arc<AtomicCell>, num: u8, total_increments: i32) -> Vec<JoinHandle<()>> {
    (0..num)
        .map(|_| {
            let target = Arc::clone(&target);
            thread::spawn(move || {
                while target.read_full_fence() != total_increments {
                    thread::yield_now();
                }
            })
        })
        .collect::<Vec<_>>()
}

fn fetch_add_write(c: &mut Criterion) {
    c.bench_function("Write - Fetch Add", |b| {
        b.iter(|| {
            execute(5, 5, 10000, |cell| {
                cell.increment_and_get();
            })
        });
    });
}

fn compare_exchange_write(c: &mut Criterion) {
    c.bench_function("Write - Compare Exchange", |b| {
        b.iter(|| {
            execute(5, 5, 10000, |cell| {
                loop {
                    let current = cell.read_full_fence();
                    if cell.compare_and_exchange(current.wrapping_add(1), current) {
                        break;
                    }

                    std::hint::spin_loop();
                }
            })
        });
    });
}

criterion_group!(benches, fetch_add_write, compare_exchange_write);
criterion_main!(benches);
