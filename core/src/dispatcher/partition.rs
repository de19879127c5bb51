//! Fixed-quota work partitioning

/// Split `total_requests` into one quota per worker
///
/// Every worker gets `total_requests / workers`; the first
/// `total_requests % workers` workers get one more. Quotas always sum to
/// `total_requests`, and no two workers ever share a unit of work. With
/// more workers than requests the trailing workers get a quota of zero.
pub fn partition_quotas(total_requests: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }

    let base = total_requests / workers;
    let extra = total_requests % workers;

    (0..workers)
        .map(|worker_id| base + usize::from(worker_id < extra))
        .collect()
}
