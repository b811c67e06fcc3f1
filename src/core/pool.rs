use crate::models::Participant;

/// Working set of participants still available within one matching run.
///
/// Owned by a single run; matched participants are moved out with [`ParticipantPool::take`]
/// and the remaining order is preserved.
#[derive(Debug, Default)]
pub struct ParticipantPool {
    participants: Vec<Participant>,
}

impl ParticipantPool {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Participant> {
        self.participants.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    /// Positions of participants matching `predicate`, in pool order
    pub fn eligible<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&Participant) -> bool,
    {
        self.participants
            .iter()
            .enumerate()
            .filter(|(_, p)| predicate(p))
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the participants at `positions` out of the pool, returned in the order given.
    /// Unknown or repeated positions are ignored.
    pub fn take(&mut self, positions: &[usize]) -> Vec<Participant> {
        let mut slots: Vec<Option<Participant>> =
            std::mem::take(&mut self.participants).into_iter().map(Some).collect();

        let taken = positions
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect();

        self.participants = slots.into_iter().flatten().collect();
        taken
    }

    pub fn into_remaining(self) -> Vec<Participant> {
        self.participants
    }
}

impl From<Vec<Participant>> for ParticipantPool {
    fn from(participants: Vec<Participant>) -> Self {
        Self::new(participants)
    }
}
