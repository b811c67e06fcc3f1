use crate::models::Participant;

/// Chunk sizes tried when packing leftovers, in order
pub const PACKING_SIZES: [usize; 3] = [4, 3, 2];

/// Best-effort grouping of participants no scored team could take.
///
/// Leftovers are ordered by experience, then availability (both descending, stable), and
/// sliced into consecutive chunks of 4, then 3, then 2. No compatibility checks are made.
/// Returns the groups and whoever is left over.
pub fn pack_leftovers(mut leftovers: Vec<Participant>) -> (Vec<Vec<Participant>>, Vec<Participant>) {
    leftovers.sort_by(|a, b| {
        b.experience
            .cmp(&a.experience)
            .then_with(|| b.availability.ordinal().cmp(&a.availability.ordinal()))
    });

    let mut groups: Vec<Vec<Participant>> = Vec::new();
    for size in PACKING_SIZES {
        while leftovers.len() >= size {
            groups.push(leftovers.drain(..size).collect());
            tracing::debug!(size, "Formed additional relaxed team");
        }
        if leftovers.len() < 2 {
            break;
        }
    }

    (groups, leftovers)
}
