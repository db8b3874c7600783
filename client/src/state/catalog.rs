//! Fixed catalog of reasoning engines plus the sample context documents and
//! recent items shown in the side panel. Nothing here is fetched or stored.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Selectable reasoning engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModelId {
    #[default]
    Claude,
    Gemini,
    Gpt,
}

impl ModelId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Gemini => "gemini",
            Self::Gpt => "gpt",
        }
    }
}

/// Display data for one reasoning engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub id: ModelId,
    pub name: &'static str,
    /// Theme color token.
    pub color: &'static str,
    pub icon: &'static str,
    /// Secondary label shown in the engine menu.
    pub menu_detail: &'static str,
}

pub const MODELS: [ModelDescriptor; 3] = [
    ModelDescriptor {
        id: ModelId::Claude,
        name: "Claude 3.5 Sonnet",
        color: "identra-claude",
        icon: "⚡",
        menu_detail: "Claude 3.5 Sonnet",
    },
    ModelDescriptor {
        id: ModelId::Gemini,
        name: "Gemini 1.5 Pro",
        color: "identra-gemini",
        icon: "✦",
        menu_detail: "Gemini 1.5 Pro",
    },
    ModelDescriptor { id: ModelId::Gpt, name: "GPT-4o", color: "identra-gpt", icon: "◆", menu_detail: "GPT‑4.0 / 4o" },
];

/// Look up the descriptor for an engine. Every [`ModelId`] has one.
#[must_use]
pub fn descriptor(id: ModelId) -> &'static ModelDescriptor {
    match id {
        ModelId::Claude => &MODELS[0],
        ModelId::Gemini => &MODELS[1],
        ModelId::Gpt => &MODELS[2],
    }
}

/// Sample document listed under "Model Context".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextDocument {
    pub id: u32,
    pub name: &'static str,
    pub model: ModelId,
    pub size: &'static str,
}

pub const CONTEXT_DOCUMENTS: [ContextDocument; 3] = [
    ContextDocument { id: 1, name: "Auth_Specs_v2.pdf", model: ModelId::Claude, size: "2.4 MB" },
    ContextDocument { id: 2, name: "Security_Audit_2024", model: ModelId::Gemini, size: "1.8 MB" },
    ContextDocument { id: 3, name: "Client_Meeting_Analysis", model: ModelId::Gpt, size: "892 KB" },
];

/// Sample entry listed under "Recent".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentItem {
    pub title: &'static str,
    pub age: &'static str,
}

pub const RECENT_ITEMS: [RecentItem; 3] = [
    RecentItem { title: "Project Alpha", age: "2h ago" },
    RecentItem { title: "API Integration", age: "1d ago" },
    RecentItem { title: "Q4 Report", age: "3d ago" },
];
