/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Allocator,
    Projector,
    Contact,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Allocator, TabId::Projector, TabId::Contact];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Allocator => "Budget Allocator",
            TabId::Projector => "ROI Projector",
            TabId::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Allocator => 0,
            TabId::Projector => 1,
            TabId::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Allocator),
            1 => Some(TabId::Projector),
            2 => Some(TabId::Contact),
            _ => None,
        }
    }
}
