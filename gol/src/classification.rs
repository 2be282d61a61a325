use crate::CellId;

/// Why a cell ended up in its next state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fate {
    Underpopulation,
    JustRight,
    Breeding,
    Overpopulation,
}

impl Fate {
    /// Report order used when printing a record.
    pub const ALL: [Fate; 4] = [
        Fate::Underpopulation,
        Fate::JustRight,
        Fate::Overpopulation,
        Fate::Breeding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Fate::Underpopulation => "Underpopulation",
            Fate::JustRight => "Just Right",
            Fate::Breeding => "Breeding",
            Fate::Overpopulation => "Overpopulation",
        }
    }
}

/// The cells classified by a single generation step, each list in row-major
/// order of the grid that was stepped.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub underpopulation: Vec<CellId>,
    pub just_right: Vec<CellId>,
    pub breeding: Vec<CellId>,
    pub overpopulation: Vec<CellId>,
}

impl ClassificationRecord {
    pub fn push(&mut self, fate: Fate, id: CellId) {
        self.list_mut(fate).push(id);
    }

    pub fn get(&self, fate: Fate) -> &[CellId] {
        match fate {
            Fate::Underpopulation => &self.underpopulation,
            Fate::JustRight => &self.just_right,
            Fate::Breeding => &self.breeding,
            Fate::Overpopulation => &self.overpopulation,
        }
    }

    /// The fate recorded for `id`, if any.
    pub fn fate_of(&self, id: CellId) -> Option<Fate> {
        Fate::ALL
            .into_iter()
            .find(|&fate| self.get(fate).contains(&id))
    }

    pub fn is_empty(&self) -> bool {
        Fate::ALL.into_iter().all(|fate| self.get(fate).is_empty())
    }

    fn list_mut(&mut self, fate: Fate) -> &mut Vec<CellId> {
        match fate {
            Fate::Underpopulation => &mut self.underpopulation,
            Fate::JustRight => &mut self.just_right,
            Fate::Breeding => &mut self.breeding,
            Fate::Overpopulation => &mut self.overpopulation,
        }
    }
}
