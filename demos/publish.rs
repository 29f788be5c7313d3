use lib::cell::AtomicCell;
use lib::fence::FenceLevel;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const WRITER_WORKERS: i32 = 16;
const READER_WORKERS: i32 = 16;
const TOTAL_WRITES: i32 = 1_000_000;
const WRITES_PER_WORKER: i32 = TOTAL_WRITES / WRITER_WORKERS;

fn main() {
    let cell = Arc::new(AtomicCell::new(0));

    if TOTAL_WRITES % WRITER_WORKERS != 0 {
        panic!("WRITES_PER_WORKER must be integer number");
    }

    let writers = (0..WRITER_WORKERS)
        .map(|idx| {
            let cell = cell.clone();
            thread::spawn(move || {
                let mut i = 0;
                while i < WRITES_PER_WORKER {
                    cell.increment_and_get();
                    i += 1;
                }

                println!("#{} Write Worker finished!", idx);
            })
        })
        .collect::<Vec<_>>();

    let readers = (0..READER_WORKERS)
        .map(|idx| {
            let cell = cell.clone();
            thread::spawn(move || {
                loop {
                    let value = cell.read_full_fence();
                    if value == TOTAL_WRITES {
                        println!("#{} Read Worker finished!. Value: {}", idx, value);
                        break;
                    }

                    thread::sleep(Duration::from_millis(50));
                }
            })
        })
        .collect::<Vec<_>>();

    readers
        .into_iter()
        .for_each(|handle| handle.join().unwrap());
    writers
        .into_iter()
        .for_each(|handle| handle.join().unwrap());

    println!("#{:?} VALUE.", cell.read_full_fence());

    // The directional fences are a declared-but-unavailable part of the
    // surface: they report the missing guarantee instead of degrading.
    match cell.read(FenceLevel::Acquire) {
        Ok(value) => println!("#{} ACQUIRE READ.", value),
        Err(err) => println!("#{} Done!", err),
    }
}
