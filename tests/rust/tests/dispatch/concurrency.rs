//! Concurrent callers never see each other's fields

use logmodule_core::CallSite;
use std::sync::{Arc, Barrier};
use tests::fixtures::recording_dispatcher;

const THREADS: usize = 8;
const CALLS: usize = 200;

#[test]
fn concurrent_threads_see_only_their_own_fields() {
    let (backend, logs) = recording_dispatcher(20);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logs = logs.clone();
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                for i in 0..CALLS {
                    logs.information(
                        &format!("{t}:{i}"),
                        &format!("Worker{t}"),
                        &format!("corr-{t}"),
                        CallSite::new(format!("worker_{t}"), i as u32),
                    )
                    .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let writes = backend.writes();
    assert_eq!(writes.len(), THREADS * CALLS);

    for write in writes {
        let (t, i) = write.message.split_once(':').unwrap();
        let fields = write.fields.unwrap();
        assert_eq!(fields.component_name.trim_start(), format!("Worker{t}"));
        assert_eq!(fields.correlation_id, format!("corr-{t}"));
        assert_eq!(fields.member_name, format!("worker_{t}"));
        assert_eq!(fields.line_number.to_string(), i);
        // Ambient frame is the caller's own, never a neighbour's
        assert_eq!(write.ambient.unwrap(), fields);
        assert_eq!(write.scope_depth, 1);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_tasks_see_only_their_own_fields() {
    let (backend, logs) = recording_dispatcher(20);

    let tasks: Vec<_> = (0..32)
        .map(|t| {
            let logs = logs.clone();
            tokio::spawn(async move {
                for i in 0..20 {
                    logs.debug(
                        &format!("{t}:{i}"),
                        &format!("Task{t}"),
                        &format!("req-{t}"),
                        CallSite::new("handle", i),
                    )
                    .unwrap();
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    let writes = backend.writes();
    assert_eq!(writes.len(), 32 * 20);
    for write in writes {
        let (t, _) = write.message.split_once(':').unwrap();
        let fields = write.fields.unwrap();
        assert_eq!(fields.correlation_id, format!("req-{t}"));
        assert_eq!(fields.component_name.trim_start(), format!("Task{t}"));
        assert_eq!(write.ambient.unwrap(), fields);
    }
}
