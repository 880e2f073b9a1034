//! Shared types for the egui app.

/// Tabs of the authenticated area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Finance overview
    #[default]
    Finance,
    /// Branch managers
    Branches,
    /// Assistant chat
    Assistant,
    /// Owner profile
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Finance, Tab::Branches, Tab::Assistant, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Finance => "📈 Finance",
            Tab::Branches => "👥 Branches",
            Tab::Assistant => "✨ Assistant",
            Tab::Profile => "👤 Profile",
        }
    }
}
