use crate::model::{Batch, WorkItem};

/// Cuts the unresolved sequence into consecutive batches: batch `i` holds
/// items `[i * size, (i + 1) * size)`. A size of zero is treated as one.
pub fn make_batches<'a>(items: &[WorkItem<'a>], batch_size: usize) -> Vec<Batch<'a>> {
    items
        .chunks(batch_size.max(1))
        .enumerate()
        .map(|(id, chunk)| Batch {
            id,
            items: chunk.to_vec(),
        })
        .collect()
}
